// crates/xorsim-cli/src/cmd/scenario.rs

use clap::{Args, Subcommand};
use xorsim_core::scenario::format as scenario_format;
use xorsim_core::validate::validate_scenario;

use crate::io::input::{self, InputArgs};
use crate::io::scenario_file;

#[derive(Args)]
pub struct ScenarioArgs {
    #[command(subcommand)]
    pub cmd: ScenarioCmd,
}

#[derive(Subcommand)]
pub enum ScenarioCmd {
    /// Read a text (or .xps) scenario, apply overrides, write .xps
    Pack(PackArgs),

    /// Print scenario fields and id
    Inspect(InspectArgs),
}

#[derive(Args)]
pub struct PackArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output .xps path
    #[arg(long)]
    pub out: String,
}

#[derive(Args)]
pub struct InspectArgs {
    /// Scenario path (.xps)
    #[arg(long)]
    pub scenario: String,
}

pub fn run(args: ScenarioArgs) -> anyhow::Result<()> {
    match args.cmd {
        ScenarioCmd::Pack(a) => cmd_pack(a),
        ScenarioCmd::Inspect(a) => cmd_inspect(a),
    }
}

fn cmd_pack(a: PackArgs) -> anyhow::Result<()> {
    let s = input::load(&a.input)?;
    validate_scenario(&s)?;
    scenario_file::save_xps(&a.out, &s)?;
    println!(
        "ok pack: out={} n={} scenario_id={}",
        a.out,
        s.n(),
        scenario_format::scenario_id_hex(&s)?
    );
    Ok(())
}

fn cmd_inspect(a: InspectArgs) -> anyhow::Result<()> {
    let s = scenario_file::load_xps(&a.scenario)?;
    let id = scenario_format::scenario_id_hex(&s)?;

    println!("scenario_path = {}", a.scenario);
    println!("scenario_id   = {id}");
    println!("n             = {}", s.n());
    println!("rounds        = {}", s.rounds);
    println!("mask          = {}", s.mask);
    println!("xor_source    = {:?}", s.xor_source);
    match s.domain_bits {
        Some(b) => println!("domain_bits   = {} (explicit)", b),
        None => println!("domain_bits   = derived"),
    }
    match s.domain() {
        Ok(d) => println!("domain        = [0, {})", d.size()),
        Err(e) => println!("domain        = invalid ({e})"),
    }
    if let Some(min) = s.values.iter().min() {
        println!("values.min    = {}", min);
    }
    if let Some(max) = s.values.iter().max() {
        println!("values.max    = {}", max);
    }

    if let Err(e) = validate_scenario(&s) {
        eprintln!("WARNING: scenario does not validate: {e}");
    }
    Ok(())
}
