// crates/xorsim-core/src/scenario/scenario.rs

use crate::domain::ValueDomain;
use crate::error::Result;
use crate::sim::round::XorSource;

/// Everything a run needs: the multiset, the mask, how many rounds, and how
/// the value domain is chosen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scenario {
    /// K: rounds to apply.
    pub rounds: u64,
    /// X: XOR mask.
    pub mask: u32,
    /// a_1 .. a_n
    pub values: Vec<u32>,
    /// Explicit domain size as 2^bits. None derives the smallest covering domain.
    pub domain_bits: Option<u32>,
    pub xor_source: XorSource,
}

impl Scenario {
    pub fn new(rounds: u64, mask: u32, values: Vec<u32>) -> Self {
        Self {
            rounds,
            mask,
            values,
            domain_bits: None,
            xor_source: XorSource::default(),
        }
    }

    #[inline]
    pub fn n(&self) -> usize {
        self.values.len()
    }

    /// Resolved domain. Does not check that values fit; see `validate_scenario`.
    pub fn domain(&self) -> Result<ValueDomain> {
        match self.domain_bits {
            Some(bits) => ValueDomain::with_bits(bits),
            None => ValueDomain::covering_all(&self.values, self.mask),
        }
    }
}
