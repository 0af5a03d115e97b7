pub mod format;
pub mod random;
pub mod scenario;
pub mod text;
