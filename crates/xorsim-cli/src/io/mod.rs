pub mod input;
pub mod jsonl;
pub mod scenario_file;
