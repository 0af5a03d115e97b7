// crates/xorsim-cli/src/io/jsonl.rs

use anyhow::Context;
use std::io::Write;
use xorsim_core::{CountTable, RoundSummary};

/// Format: {"round":R,"min":A,"max":B,"occupied":O,"moved":M}
fn summary_line(s: &RoundSummary) -> String {
    format!(
        "{{\"round\":{},\"min\":{},\"max\":{},\"occupied\":{},\"moved\":{}}}\n",
        s.round, s.min, s.max, s.occupied, s.moved
    )
}

/// Format: {"value":V,"count":C}
fn bucket_line(v: u32, c: u64) -> String {
    format!("{{\"value\":{},\"count\":{}}}\n", v, c)
}

pub fn write_summaries(path: Option<&str>, rows: &[RoundSummary]) -> anyhow::Result<()> {
    let mut s = String::with_capacity(rows.len() * 64);
    for r in rows {
        s.push_str(&summary_line(r));
    }
    emit(path, &s, "write trace jsonl")
}

pub fn write_table(path: Option<&str>, t: &CountTable) -> anyhow::Result<()> {
    let mut s = String::new();
    for (v, c) in t.occupied() {
        s.push_str(&bucket_line(v, c));
    }
    emit(path, &s, "write table jsonl")
}

fn emit(path: Option<&str>, s: &str, what: &str) -> anyhow::Result<()> {
    match path {
        Some(p) => std::fs::write(p, s).with_context(|| format!("{what}: {p}")),
        None => {
            let mut out = std::io::stdout().lock();
            out.write_all(s.as_bytes()).with_context(|| format!("{what}: stdout"))?;
            out.flush().with_context(|| format!("{what}: stdout"))
        }
    }
}
