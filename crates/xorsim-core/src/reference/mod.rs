// crates/xorsim-core/src/reference/mod.rs
//
// Direct element-level rendition of a round: sort, pair from the front,
// rewrite the second of each pair. O(n log n) per round; used to check the
// count-domain simulator, never to answer queries.

use crate::sim::round::XorSource;

pub fn naive_round(values: &mut [u32], mask: u32, source: XorSource) {
    values.sort_unstable();
    for pair in values.chunks_exact_mut(2) {
        pair[1] = match source {
            XorSource::First => pair[0] ^ mask,
            XorSource::Own => pair[1] ^ mask,
        };
    }
}

/// Final multiset after `rounds` rounds, sorted ascending.
pub fn naive_simulate(values: &[u32], mask: u32, rounds: u64, source: XorSource) -> Vec<u32> {
    let mut v = values.to_vec();
    for _ in 0..rounds {
        naive_round(&mut v, mask, source);
    }
    v.sort_unstable();
    v
}

pub fn naive_extremes(values: &[u32], mask: u32, rounds: u64, source: XorSource) -> Option<(u32, u32)> {
    let v = naive_simulate(values, mask, rounds, source);
    Some((*v.first()?, *v.last()?))
}
