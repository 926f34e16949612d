pub mod index;
pub mod round;
