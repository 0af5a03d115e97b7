pub mod error;
pub mod validate;

pub mod domain;
pub mod table;
pub mod sim;
pub mod stats;
pub mod reference;
pub mod scenario;

pub use crate::domain::ValueDomain;
pub use crate::scenario::scenario::Scenario;
pub use crate::sim::engine::{solve, Extremes, RoundSummary, Simulator};
pub use crate::table::count_table::CountTable;
