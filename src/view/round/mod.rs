pub mod grid;
pub mod players;
pub mod summary;
pub mod template;
pub mod types;

pub use grid::*;
pub use players::*;
pub use summary::*;
pub use template::*;
pub use types::*;
