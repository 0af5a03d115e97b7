// crates/xorsim-core/tests/brute_equivalence.rs

use proptest::prelude::*;
use xorsim_core::reference::{naive_extremes, naive_simulate};
use xorsim_core::scenario::random::{random_scenario, Limits, SplitMix64};
use xorsim_core::sim::round::XorSource;
use xorsim_core::{solve, Scenario, Simulator};

fn bucket_final(s: &Scenario) -> Vec<u32> {
    let mut sim = Simulator::new(s).unwrap();
    sim.run(s.rounds);
    sim.table().to_sorted_values()
}

#[test]
fn every_four_element_multiset_over_four_values() {
    for source in [XorSource::First, XorSource::Own] {
        for code in 0u32..256 {
            let values: Vec<u32> = (0..4).map(|i| (code >> (2 * i)) & 3).collect();
            for mask in 0u32..4 {
                for rounds in 0u64..=5 {
                    let mut s = Scenario::new(rounds, mask, values.clone());
                    s.xor_source = source;
                    assert_eq!(
                        bucket_final(&s),
                        naive_simulate(&values, mask, rounds, source),
                        "values={values:?} mask={mask} rounds={rounds} source={source:?}"
                    );
                }
            }
        }
    }
}

#[test]
fn random_small_scenarios_match_min_max() {
    let mut rng = SplitMix64::new(0xD1CE_BA5E);
    for case in 0..5_000 {
        let source = if case % 3 == 0 { XorSource::Own } else { XorSource::First };
        let s = random_scenario(&mut rng, Limits::default(), source);
        let e = solve(&s).unwrap();
        let want = naive_extremes(&s.values, s.mask, s.rounds, source).unwrap();
        assert_eq!((e.min, e.max), want, "case {case}: {s:?}");
    }
}

#[test]
fn single_bucket_splits_then_matches_naive() {
    for n in 1u32..=12 {
        let v = 5u32;
        let mask = 10u32;
        let values = vec![v; n as usize];
        let s = Scenario::new(2, mask, values.clone());
        let mut sim = Simulator::new(&s).unwrap();

        sim.step();
        let t = sim.table();
        assert_eq!(t.get(v), ((n + 1) / 2) as u64);
        assert_eq!(t.get(v ^ mask), (n / 2) as u64);

        sim.step();
        assert_eq!(
            sim.table().to_sorted_values(),
            naive_simulate(&values, mask, 2, XorSource::First)
        );
    }
}

proptest! {
    #[test]
    fn bucket_matches_naive(
        bits in 0u32..=4,
        raw in prop::collection::vec(any::<u32>(), 1..=12),
        mask_raw in any::<u32>(),
        rounds in 0u64..=5,
        own in any::<bool>(),
    ) {
        let size = 1u32 << bits;
        let values: Vec<u32> = raw.iter().map(|v| v % size).collect();
        let mask = mask_raw % size;
        let source = if own { XorSource::Own } else { XorSource::First };

        let mut s = Scenario::new(rounds, mask, values.clone());
        s.xor_source = source;

        prop_assert_eq!(bucket_final(&s), naive_simulate(&values, mask, rounds, source));
    }
}
