// crates/xorsim-core/src/scenario/random.rs
//
// Deterministic small-scenario generator (splitmix64), for cross-checking
// the simulator against the naive reference.

use crate::domain::ValueDomain;
use crate::scenario::scenario::Scenario;
use crate::sim::round::XorSource;

#[derive(Clone, Copy, Debug)]
pub struct Limits {
    pub max_n: usize,
    pub max_bits: u32,
    pub max_rounds: u64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_n: 12,
            max_bits: 4,
            max_rounds: 5,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SplitMix64(u64);

impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9e3779b97f4a7c15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }

    /// Uniform-ish in [0, bound); 0 when bound == 0.
    pub fn below(&mut self, bound: u64) -> u64 {
        if bound == 0 {
            0
        } else {
            self.next_u64() % bound
        }
    }
}

/// One scenario with 1 <= n <= max_n, values and mask below 2^bits.
/// `max_bits` is clamped to `ValueDomain::MAX_BITS`.
pub fn random_scenario(rng: &mut SplitMix64, lim: Limits, source: XorSource) -> Scenario {
    let max_bits = lim.max_bits.min(ValueDomain::MAX_BITS);
    let bits = rng.below((max_bits as u64).saturating_add(1)) as u32;
    let size = 1u64 << bits;
    let n = 1 + rng.below(lim.max_n.max(1) as u64) as usize;
    let rounds = rng.below(lim.max_rounds.saturating_add(1));
    let mask = rng.below(size) as u32;
    let values = (0..n).map(|_| rng.below(size) as u32).collect();

    let mut s = Scenario::new(rounds, mask, values);
    s.xor_source = source;
    s
}
