// crates/xorsim-core/src/sim/engine.rs

use crate::error::{Result, XorSimError};
use crate::scenario::scenario::Scenario;
use crate::sim::round::{apply_round, XorSource};
use crate::stats::counters::Counters;
use crate::table::count_table::CountTable;
use crate::validate::validate_scenario;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Extremes {
    pub min: u32,
    pub max: u32,
}

/// State after one applied round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundSummary {
    /// 1-based index of the round just applied.
    pub round: u64,
    pub min: u32,
    pub max: u32,
    pub occupied: usize,
    pub moved: u64,
}

/// Count-domain driver. Two tables of the same domain are kept; each round
/// reads `front`, writes `back`, then swaps them.
pub struct Simulator {
    front: CountTable,
    back: CountTable,
    mask: u32,
    source: XorSource,
    round: u64,
    stats: Counters,
}

impl Simulator {
    pub fn new(scenario: &Scenario) -> Result<Self> {
        validate_scenario(scenario)?;
        let domain = scenario.domain()?;
        let table = CountTable::from_values(domain, &scenario.values)?;
        Self::from_table(table, scenario.mask, scenario.xor_source)
    }

    pub fn from_table(table: CountTable, mask: u32, source: XorSource) -> Result<Self> {
        table.domain().check(mask)?;
        if table.total() == 0 {
            return Err(XorSimError::Validation("count table is empty".into()));
        }
        let back = table.clone();
        Ok(Self {
            front: table,
            back,
            mask,
            source,
            round: 0,
            stats: Counters::default(),
        })
    }

    /// Apply exactly one round.
    pub fn step(&mut self) -> RoundSummary {
        let out = apply_round(
            self.front.counts(),
            self.back.counts_mut(),
            self.mask,
            self.source,
        );
        std::mem::swap(&mut self.front, &mut self.back);

        self.round += 1;
        self.stats.rounds += 1;
        self.stats.buckets_scanned += self.front.counts().len() as u64;
        self.stats.units_moved += out.moved;

        debug_assert_eq!(self.front.sum(), self.front.total());

        let (min, max) = self.front.extremes().unwrap_or((0, 0));
        let summary = RoundSummary {
            round: self.round,
            min,
            max,
            occupied: self.front.occupied_len(),
            moved: out.moved,
        };
        log::debug!(
            "round {} moved={} min={} max={} occupied={}",
            summary.round,
            summary.moved,
            summary.min,
            summary.max,
            summary.occupied
        );
        summary
    }

    /// Apply `rounds` rounds in order.
    pub fn run(&mut self, rounds: u64) {
        for _ in 0..rounds {
            self.step();
        }
    }

    /// Like run, but returns the summary of every round.
    pub fn run_with_trace(&mut self, rounds: u64) -> Vec<RoundSummary> {
        let mut out = Vec::with_capacity(rounds.min(1 << 16) as usize);
        for _ in 0..rounds {
            out.push(self.step());
        }
        out
    }

    #[inline]
    pub fn table(&self) -> &CountTable {
        &self.front
    }

    #[inline]
    pub fn round(&self) -> u64 {
        self.round
    }

    #[inline]
    pub fn mask(&self) -> u32 {
        self.mask
    }

    #[inline]
    pub fn xor_source(&self) -> XorSource {
        self.source
    }

    #[inline]
    pub fn stats(&self) -> Counters {
        self.stats
    }

    pub fn extremes(&self) -> Option<Extremes> {
        self.front
            .extremes()
            .map(|(min, max)| Extremes { min, max })
    }
}

/// Run a scenario to completion and return its extremal values.
pub fn solve(scenario: &Scenario) -> Result<Extremes> {
    let mut sim = Simulator::new(scenario)?;
    sim.run(scenario.rounds);
    sim.extremes()
        .ok_or_else(|| XorSimError::Validation("count table is empty".into()))
}
