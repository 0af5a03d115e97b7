// crates/xorsim-core/src/table/count_table.rs

use crate::domain::ValueDomain;
use crate::error::{Result, XorSimError};

/// Multiset over a bounded domain, stored as one count per value.
///
/// Element identities are discarded: only how many elements hold each value
/// is kept. `total()` is fixed at construction and every round preserves it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountTable {
    domain: ValueDomain,
    counts: Vec<u64>,
    total: u64,
}

impl CountTable {
    /// Load a multiset. Out-of-domain values are rejected, never clamped.
    pub fn from_values(domain: ValueDomain, values: &[u32]) -> Result<Self> {
        let mut counts = vec![0u64; domain.size()];
        for &v in values {
            domain.check(v)?;
            counts[v as usize] += 1;
        }
        Ok(Self {
            domain,
            counts,
            total: values.len() as u64,
        })
    }

    pub fn from_counts(domain: ValueDomain, counts: Vec<u64>) -> Result<Self> {
        if counts.len() != domain.size() {
            return Err(XorSimError::Validation(format!(
                "count table length {} does not match domain size {}",
                counts.len(),
                domain.size()
            )));
        }
        let total = counts.iter().sum();
        Ok(Self {
            domain,
            counts,
            total,
        })
    }

    #[inline]
    pub fn domain(&self) -> ValueDomain {
        self.domain
    }

    #[inline]
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Raw mutable access for the round scan. Callers must keep the sum intact.
    #[inline]
    pub(crate) fn counts_mut(&mut self) -> &mut [u64] {
        &mut self.counts
    }

    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Count at `v`; 0 for values outside the domain.
    pub fn get(&self, v: u32) -> u64 {
        self.counts.get(v as usize).copied().unwrap_or(0)
    }

    /// Recomputed sum over all buckets (compare against `total()`).
    pub fn sum(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Non-empty buckets, ascending by value.
    pub fn occupied(&self) -> impl Iterator<Item = (u32, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(v, &c)| (v as u32, c))
    }

    pub fn occupied_len(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    pub fn min_occupied(&self) -> Option<u32> {
        self.counts.iter().position(|&c| c > 0).map(|v| v as u32)
    }

    pub fn max_occupied(&self) -> Option<u32> {
        self.counts.iter().rposition(|&c| c > 0).map(|v| v as u32)
    }

    /// (min, max) occupied values; None for an empty table.
    pub fn extremes(&self) -> Option<(u32, u32)> {
        Some((self.min_occupied()?, self.max_occupied()?))
    }

    /// Expand back into a sorted value list.
    pub fn to_sorted_values(&self) -> Vec<u32> {
        let mut out = Vec::with_capacity(self.total as usize);
        for (v, c) in self.occupied() {
            out.extend(std::iter::repeat(v).take(c as usize));
        }
        out
    }
}
