pub mod host;
pub mod round;
pub mod runtime;

pub use host::Host;
