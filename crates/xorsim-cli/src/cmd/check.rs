// crates/xorsim-cli/src/cmd/check.rs

use clap::Args;
use xorsim_core::reference::naive_simulate;
use xorsim_core::Simulator;

use crate::io::input::{self, InputArgs};

#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Refuse to run the naive reference above this many element-rounds (n * K).
    #[arg(long, default_value_t = 200_000_000)]
    pub max_work: u64,
}

pub fn run(args: CheckArgs) -> anyhow::Result<()> {
    let scenario = input::load(&args.input)?;

    let work = (scenario.n() as u64).saturating_mul(scenario.rounds);
    if work > args.max_work {
        anyhow::bail!(
            "naive reference would touch {work} element-rounds (limit {}); raise --max-work",
            args.max_work
        );
    }

    let mut sim = Simulator::new(&scenario)?;
    sim.run(scenario.rounds);
    let got = sim.table().to_sorted_values();
    let want = naive_simulate(&scenario.values, scenario.mask, scenario.rounds, scenario.xor_source);

    if got != want {
        let at = got.iter().zip(want.iter()).position(|(a, b)| a != b).unwrap_or(0);
        anyhow::bail!(
            "mismatch after {} rounds at sorted index {at}: bucket={:?} naive={:?}",
            scenario.rounds,
            got.get(at),
            want.get(at)
        );
    }

    let (min, max) = sim.table().extremes().unwrap_or((0, 0));
    eprintln!(
        "ok check: n={} rounds={} mask={} xor_source={:?} min={} max={}",
        scenario.n(),
        sim.round(),
        sim.mask(),
        sim.xor_source(),
        min,
        max
    );
    Ok(())
}
