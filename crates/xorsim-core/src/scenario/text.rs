// crates/xorsim-core/src/scenario/text.rs
//
// Whitespace-separated judge input: n K X a_1 .. a_n

use crate::error::{Result, XorSimError};
use crate::scenario::scenario::Scenario;

pub fn parse(input: &str) -> Result<Scenario> {
    let mut it = input.split_ascii_whitespace();

    let n: u64 = next_num(&mut it, "n")?;
    let rounds: u64 = next_num(&mut it, "K")?;
    let mask: u32 = next_num(&mut it, "X")?;

    let n = usize::try_from(n).map_err(|_| XorSimError::Parse(format!("n too large: {n}")))?;
    let mut values = Vec::with_capacity(n.min(1 << 20));
    for i in 0..n {
        let tok = it
            .next()
            .ok_or_else(|| XorSimError::Parse(format!("expected {n} values, got {i}")))?;
        values.push(parse_tok(tok, "value")?);
    }

    if let Some(extra) = it.next() {
        return Err(XorSimError::Parse(format!(
            "unexpected trailing token after {n} values: {extra:?}"
        )));
    }

    Ok(Scenario::new(rounds, mask, values))
}

/// Render in the same form `parse` reads.
pub fn render(s: &Scenario) -> String {
    let mut out = format!("{} {} {}\n", s.n(), s.rounds, s.mask);
    let mut first = true;
    for v in &s.values {
        if !first {
            out.push(' ');
        }
        out.push_str(&v.to_string());
        first = false;
    }
    out.push('\n');
    out
}

fn next_num<'a, T>(it: &mut impl Iterator<Item = &'a str>, what: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let tok = it
        .next()
        .ok_or_else(|| XorSimError::Parse(format!("missing {what}")))?;
    parse_tok(tok, what)
}

fn parse_tok<T>(tok: &str, what: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    tok.parse::<T>()
        .map_err(|e| XorSimError::Parse(format!("bad {what} {tok:?}: {e}")))
}
