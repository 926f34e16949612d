pub mod args;
pub mod controller;
pub mod error;
pub mod manager;
pub mod model;
pub mod mvu;
pub mod storage;
pub mod view;

pub const HTMX_PATH: &str = "https://cdn.jsdelivr.net/npm/htmx.org@2.0.8/dist/htmx.min.js";
pub const HTMX_INTEGRITY: &str =
    "sha384-/TgkGk7p307TH7EXJDuUlgG3Ce1UVolAOFopFekQkkXihi5u/6OCvVKyz1W+idaz";

pub use error::ScorecardError;
pub use manager::RoundManager;
