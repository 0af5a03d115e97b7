use clap::Args;
use xorsim_core::Simulator;

use crate::io::input::{self, InputArgs};
use crate::io::jsonl;

#[derive(Args, Debug)]
pub struct TableArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output file path; if omitted, prints to stdout.
    #[arg(long)]
    pub out: Option<String>,
}

pub fn run(args: TableArgs) -> anyhow::Result<()> {
    let scenario = input::load(&args.input)?;
    let mut sim = Simulator::new(&scenario)?;
    sim.run(scenario.rounds);
    jsonl::write_table(args.out.as_deref(), sim.table())
}
