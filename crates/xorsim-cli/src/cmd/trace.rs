use clap::Args;
use xorsim_core::Simulator;

use crate::io::input::{self, InputArgs};
use crate::io::jsonl;

#[derive(Args, Debug)]
pub struct TraceArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output file path; if omitted, prints to stdout.
    #[arg(long)]
    pub out: Option<String>,
}

pub fn run(args: TraceArgs) -> anyhow::Result<()> {
    let scenario = input::load(&args.input)?;
    let mut sim = Simulator::new(&scenario)?;
    let rows = sim.run_with_trace(scenario.rounds);
    jsonl::write_summaries(args.out.as_deref(), &rows)?;
    if let Some(p) = args.out.as_deref() {
        eprintln!("ok trace: out={} rounds={}", p, rows.len());
    }
    Ok(())
}
