// crates/xorsim-cli/src/io/input.rs

use clap::{Args, ValueEnum};
use xorsim_core::sim::round::XorSource;
use xorsim_core::Scenario;

use crate::io::scenario_file;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum XorSourceArg {
    /// Second of a pair becomes value(first) ^ X
    First,
    /// Second of a pair becomes value(second) ^ X
    Own,
}

impl From<XorSourceArg> for XorSource {
    fn from(a: XorSourceArg) -> Self {
        match a {
            XorSourceArg::First => XorSource::First,
            XorSourceArg::Own => XorSource::Own,
        }
    }
}

/// Where a scenario comes from, plus run-only overrides.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Text input path: "n K X a_1 .. a_n". Reads stdin when neither --in nor --scenario is given.
    #[arg(long = "in", conflicts_with = "scenario")]
    pub r#in: Option<String>,

    /// Binary scenario path (.xps)
    #[arg(long)]
    pub scenario: Option<String>,

    // --- run-only overrides (do NOT mutate a scenario on disk) ---
    /// Override K (rounds)
    #[arg(long)]
    pub rounds: Option<u64>,

    /// Explicit value domain 2^bits (default: smallest power of two covering values and X)
    #[arg(long)]
    pub domain_bits: Option<u32>,

    /// Which value the second element of a pair is XORed from
    #[arg(long, value_enum)]
    pub xor_source: Option<XorSourceArg>,
}

pub fn load(args: &InputArgs) -> anyhow::Result<Scenario> {
    let mut s = if let Some(path) = args.scenario.as_deref() {
        scenario_file::load_xps(path)?
    } else if let Some(path) = args.r#in.as_deref() {
        scenario_file::load_text(path)?
    } else {
        scenario_file::load_text_stdin()?
    };

    if let Some(k) = args.rounds {
        s.rounds = k;
    }
    if let Some(bits) = args.domain_bits {
        s.domain_bits = Some(bits);
    }
    if let Some(src) = args.xor_source {
        s.xor_source = src.into();
    }

    log::info!(
        "scenario n={} rounds={} mask={} domain_bits={:?} xor_source={:?}",
        s.n(),
        s.rounds,
        s.mask,
        s.domain_bits,
        s.xor_source
    );
    Ok(s)
}
