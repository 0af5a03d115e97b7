pub mod engine;
pub mod round;
