/// Running totals across every round a simulator has applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    pub rounds: u64,
    pub buckets_scanned: u64,
    pub units_moved: u64,
}
