// crates/xorsim-cli/src/cmd/solve.rs

use clap::Args;
use xorsim_core::Simulator;

use crate::io::input::{self, InputArgs};

use std::time::Instant;

#[derive(Args, Debug)]
pub struct SolveArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Print run counters to stderr
    #[arg(long)]
    pub stats: bool,
}

pub fn run(args: SolveArgs) -> anyhow::Result<()> {
    let scenario = input::load(&args.input)?;

    let t0 = Instant::now();
    let mut sim = Simulator::new(&scenario)?;
    sim.run(scenario.rounds);
    let elapsed = t0.elapsed();

    let e = sim
        .extremes()
        .ok_or_else(|| anyhow::anyhow!("final table is empty"))?;
    println!("{} {}", e.min, e.max);

    if args.stats {
        let st = sim.stats();
        let d = sim.table().domain();
        eprintln!("--- stats ---");
        eprintln!("n               = {}", sim.table().total());
        eprintln!("domain          = 2^{} ({})", d.bits(), d.size());
        eprintln!("rounds          = {}", st.rounds);
        eprintln!("buckets_scanned = {}", st.buckets_scanned);
        eprintln!("units_moved     = {}", st.units_moved);
        eprintln!("occupied        = {}", sim.table().occupied_len());
        eprintln!("elapsed_ms      = {:.3}", elapsed.as_secs_f64() * 1e3);
    }

    Ok(())
}
