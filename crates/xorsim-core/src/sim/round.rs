// crates/xorsim-core/src/sim/round.rs
//
// One round of sort / pair-from-front / XOR-the-second, in the count domain.
//
// Walking buckets in increasing value order visits elements in exactly the
// sorted order. A single parity bit carries whether the next sorted slot is
// the first ("stays") or second ("maps") slot of a pair. Inside a bucket the
// slots alternate, so with count c:
//
//   parity=false: kept = ceil(c/2), mapped = floor(c/2)
//   parity=true:  kept = floor(c/2), mapped = ceil(c/2)
//
// and parity flips iff c is odd. A trailing unpaired element (odd n) is the
// last "kept" slot of the top bucket; no special case.
//
// A mapped unit inside bucket v whose pair partner is also in v lands on
// v ^ X under either XorSource. Only the unit that closes a pair opened by an
// earlier bucket u depends on the rule: First sends it to u ^ X, Own to v ^ X.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum XorSource {
    /// Second of a pair becomes value(first) ^ X.
    #[default]
    First,
    /// Second of a pair becomes value(second) ^ X.
    Own,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BucketSplit {
    pub kept: u64,
    pub mapped: u64,
    pub parity_out: bool,
}

#[inline]
pub fn split_bucket(count: u64, parity: bool) -> BucketSplit {
    let half = count / 2;
    let odd = count & 1 == 1;
    let (kept, mapped) = if parity {
        (half, count - half)
    } else {
        (count - half, half)
    };
    BucketSplit {
        kept,
        mapped,
        parity_out: parity ^ odd,
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoundOutcome {
    /// Second-of-pair slots filled this round (floor(n/2)).
    pub moved: u64,
    /// Parity after the last bucket: true iff the element count is odd.
    pub parity_end: bool,
}

/// Apply one round reading `src`, writing `dst` (cleared first).
///
/// `src` and `dst` must have the same power-of-two length and `mask` must be
/// smaller than it.
pub fn apply_round(src: &[u64], dst: &mut [u64], mask: u32, source: XorSource) -> RoundOutcome {
    debug_assert_eq!(src.len(), dst.len());
    debug_assert!((mask as usize) < src.len().max(1));

    dst.fill(0);

    let mask = mask as usize;
    let mut parity = false;
    // Bucket holding the first element of the currently open pair.
    let mut open = 0usize;
    let mut moved = 0u64;

    for (v, &c) in src.iter().enumerate() {
        if c == 0 {
            continue;
        }
        let s = split_bucket(c, parity);
        log::trace!(
            "bucket v={v} c={c} parity={parity} kept={} mapped={}",
            s.kept,
            s.mapped
        );

        dst[v] += s.kept;
        if parity && source == XorSource::First {
            // mapped >= 1 whenever parity is set on entry
            dst[open ^ mask] += 1;
            dst[v ^ mask] += s.mapped - 1;
        } else {
            dst[v ^ mask] += s.mapped;
        }
        moved += s.mapped;

        parity = s.parity_out;
        if parity {
            open = v;
        }
    }

    RoundOutcome {
        moved,
        parity_end: parity,
    }
}
