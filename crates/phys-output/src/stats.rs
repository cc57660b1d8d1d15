//! Per-step CSV statistics.
//!
//! Creates one file in the configured output directory:
//! - `step_stats.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use phys_engine::SimulationEngine;

use crate::OutputResult;

/// Summary statistics for one simulation step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepStatsRow {
    pub step:           u64,
    pub agents:         u64,
    pub trail_total:    f64,
    pub trail_max:      f32,
    pub trail_mean:     f64,
    pub occupied_cells: u64,
}

impl StepStatsRow {
    /// Snapshot the engine's aggregate state.
    pub fn from_engine(engine: &SimulationEngine) -> Self {
        Self {
            step:           engine.steps,
            agents:         engine.agent_count() as u64,
            trail_total:    engine.field.total(),
            trail_max:      engine.field.max_value(),
            trail_mean:     engine.field.mean_value(),
            occupied_cells: engine.occupancy.occupied_cells() as u64,
        }
    }
}

/// Writes one CSV row of aggregates per recorded step.
pub struct StatsWriter {
    steps:    Writer<File>,
    finished: bool,
}

impl StatsWriter {
    /// Open (or create) `step_stats.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut steps = Writer::from_path(dir.join("step_stats.csv"))?;
        steps.write_record([
            "step",
            "agents",
            "trail_total",
            "trail_max",
            "trail_mean",
            "occupied_cells",
        ])?;

        Ok(Self {
            steps,
            finished: false,
        })
    }

    /// Snapshot `engine` and append it as one row.
    pub fn record(&mut self, engine: &SimulationEngine) -> OutputResult<()> {
        self.write_row(&StepStatsRow::from_engine(engine))
    }

    /// Append one pre-built row.
    pub fn write_row(&mut self, row: &StepStatsRow) -> OutputResult<()> {
        self.steps.write_record(&[
            row.step.to_string(),
            row.agents.to_string(),
            row.trail_total.to_string(),
            row.trail_max.to_string(),
            row.trail_mean.to_string(),
            row.occupied_cells.to_string(),
        ])?;
        Ok(())
    }

    /// Flush and close the underlying file handle.
    ///
    /// Idempotent — safe to call more than once.
    pub fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.steps.flush()?;
        Ok(())
    }
}
