pub mod round;
pub mod score_input;

pub use round::*;
pub use score_input::*;
