// crates/xorsim-cli/src/io/scenario_file.rs

use anyhow::{Context, Result};
use xorsim_core::scenario::{format as scenario_format, text};
use xorsim_core::Scenario;

/// Load a binary .xps scenario.
pub fn load_xps(path: &str) -> Result<Scenario> {
    let bytes = std::fs::read(path).with_context(|| format!("read scenario {path}"))?;
    let s = scenario_format::decode(&bytes).with_context(|| format!("decode scenario {path}"))?;
    Ok(s)
}

/// Save a Scenario as a .xps file.
pub fn save_xps(path: &str, s: &Scenario) -> Result<()> {
    let bytes = scenario_format::encode(s).with_context(|| format!("encode scenario {path}"))?;
    std::fs::write(path, bytes).with_context(|| format!("write scenario {path}"))?;
    Ok(())
}

/// Load a text scenario ("n K X a_1 .. a_n") from a file.
pub fn load_text(path: &str) -> Result<Scenario> {
    let s = std::fs::read_to_string(path).with_context(|| format!("read input {path}"))?;
    text::parse(&s).with_context(|| format!("parse input {path}"))
}

/// Load a text scenario from stdin.
pub fn load_text_stdin() -> Result<Scenario> {
    let mut s = String::new();
    std::io::Read::read_to_string(&mut std::io::stdin(), &mut s).context("read stdin")?;
    text::parse(&s).context("parse stdin")
}
