// crates/xorsim-cli/src/cmd/selfcheck.rs

use clap::Args;
use xorsim_core::reference::naive_simulate;
use xorsim_core::scenario::random::{random_scenario, Limits, SplitMix64};
use xorsim_core::scenario::text;
use xorsim_core::Simulator;

use crate::io::input::XorSourceArg;

#[derive(Args, Debug)]
pub struct SelfcheckArgs {
    /// Number of random scenarios
    #[arg(long, default_value_t = 10_000)]
    pub cases: u64,

    /// Generator seed (decimal or 0x... hex)
    #[arg(long, default_value = "0x243f6a8885a308d3")]
    pub seed: String,

    /// Max elements per scenario
    #[arg(long, default_value_t = 12)]
    pub max_n: usize,

    /// Max domain bits (values and X below 2^bits)
    #[arg(long, default_value_t = 4)]
    pub max_bits: u32,

    /// Max rounds per scenario
    #[arg(long, default_value_t = 5)]
    pub max_rounds: u64,

    /// Which value the second element of a pair is XORed from
    #[arg(long, value_enum, default_value_t = XorSourceArg::First)]
    pub xor_source: XorSourceArg,
}

/// Naive reference cost grows with n * K per case.
const MAX_ROUNDS_LIMIT: u64 = 1_000_000;

pub fn run(a: SelfcheckArgs) -> anyhow::Result<()> {
    if a.max_bits > xorsim_core::ValueDomain::MAX_BITS {
        anyhow::bail!("max_bits must be <= {}", xorsim_core::ValueDomain::MAX_BITS);
    }
    if a.max_rounds > MAX_ROUNDS_LIMIT {
        anyhow::bail!("max_rounds must be <= {MAX_ROUNDS_LIMIT}");
    }

    let seed = parse_u64_any(&a.seed)?;
    let mut rng = SplitMix64::new(seed);
    let lim = Limits {
        max_n: a.max_n,
        max_bits: a.max_bits,
        max_rounds: a.max_rounds,
    };

    for case in 0..a.cases {
        let s = random_scenario(&mut rng, lim, a.xor_source.into());
        let mut sim = Simulator::new(&s)?;
        sim.run(s.rounds);

        let got = sim.table().to_sorted_values();
        let want = naive_simulate(&s.values, s.mask, s.rounds, s.xor_source);
        if got != want {
            eprintln!("failing input:\n{}", text::render(&s));
            anyhow::bail!("case {case}: bucket={got:?} naive={want:?}");
        }
    }

    eprintln!(
        "ok selfcheck: cases={} seed=0x{:016x} xor_source={:?}",
        a.cases, seed, a.xor_source
    );
    Ok(())
}

fn parse_u64_any(s: &str) -> anyhow::Result<u64> {
    let t = s.trim();
    if let Some(hex) = t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
        Ok(u64::from_str_radix(hex, 16)?)
    } else {
        Ok(t.parse::<u64>()?)
    }
}
