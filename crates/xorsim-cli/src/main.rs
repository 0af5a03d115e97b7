// crates/xorsim-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "xorsim-cli")]
#[command(about = "Sort / pair / XOR round simulator (count-domain)", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run K rounds and print "min max"
    Solve(cmd::solve::SolveArgs),

    /// Run K rounds and print per-round summaries (JSONL)
    Trace(cmd::trace::TraceArgs),

    /// Run K rounds and print the final non-empty buckets (JSONL)
    Table(cmd::table::TableArgs),

    /// Compare the bucket simulator with the naive sort-and-pair reference
    Check(cmd::check::CheckArgs),

    /// Cross-check many random small scenarios against the naive reference
    Selfcheck(cmd::selfcheck::SelfcheckArgs),

    /// Scenario file tools (.xps)
    Scenario(cmd::scenario::ScenarioArgs),
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Solve(args) => cmd::solve::run(args),
        Commands::Trace(args) => cmd::trace::run(args),
        Commands::Table(args) => cmd::table::run(args),
        Commands::Check(args) => cmd::check::run(args),
        Commands::Selfcheck(args) => cmd::selfcheck::run(args),
        Commands::Scenario(args) => cmd::scenario::run(args),
    }
}
