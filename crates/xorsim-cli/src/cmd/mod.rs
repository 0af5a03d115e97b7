// crates/xorsim-cli/src/cmd/mod.rs

pub mod check;
pub mod scenario;
pub mod selfcheck;
pub mod solve;
pub mod table;
pub mod trace;
