// crates/xorsim-core/src/domain.rs
//
// Bounded value domain [0, V) with V = 2^bits.
//
// Any v < V and X < V satisfy (v ^ X) < V, so a count table of size V is
// closed under the pair-XOR relabeling and never needs headroom.

use crate::error::{Result, XorSimError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ValueDomain {
    bits: u32,
}

impl ValueDomain {
    /// Largest supported domain: 2^24 buckets (two u64 buffers = 256 MiB).
    pub const MAX_BITS: u32 = 24;

    pub fn with_bits(bits: u32) -> Result<Self> {
        if bits > Self::MAX_BITS {
            return Err(XorSimError::Validation(format!(
                "domain bits {bits} exceeds max {}",
                Self::MAX_BITS
            )));
        }
        Ok(Self { bits })
    }

    /// Smallest power-of-two domain strictly exceeding both `max_value` and `mask`.
    pub fn covering(max_value: u32, mask: u32) -> Result<Self> {
        let top = max_value.max(mask);
        let bits = 32 - top.leading_zeros();
        Self::with_bits(bits)
    }

    /// Smallest domain covering every value in `values` and `mask`.
    pub fn covering_all(values: &[u32], mask: u32) -> Result<Self> {
        let max_value = values.iter().copied().max().unwrap_or(0);
        Self::covering(max_value, mask)
    }

    #[inline]
    pub fn bits(&self) -> u32 {
        self.bits
    }

    #[inline]
    pub fn size(&self) -> usize {
        1usize << self.bits
    }

    #[inline]
    pub fn contains(&self, v: u32) -> bool {
        (v as u64) < (1u64 << self.bits)
    }

    /// Ok(()) if `v` lies in the domain, OutOfDomain otherwise.
    pub fn check(&self, v: u32) -> Result<()> {
        if self.contains(v) {
            Ok(())
        } else {
            Err(XorSimError::OutOfDomain {
                value: v as u64,
                size: self.size(),
            })
        }
    }
}
