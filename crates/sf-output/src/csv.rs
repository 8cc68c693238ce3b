//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `unit_snapshots.csv`
//! - `station_snapshots.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, StationSnapshotRow, TickSummaryRow, UnitSnapshotRow};

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    units:     Writer<File>,
    stations:  Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut units = Writer::from_path(dir.join("unit_snapshots.csv"))?;
        units.write_record([
            "unit_id", "code", "tick", "lat", "lng", "soc", "soh", "mode", "voltage", "speed",
            "cycles",
        ])?;

        let mut stations = Writer::from_path(dir.join("station_snapshots.csv"))?;
        stations.write_record([
            "station_id",
            "code",
            "tick",
            "load_pct",
            "surge_price",
            "status",
            "thermal",
            "queue_count",
        ])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(["tick", "units_advanced", "stations_recomputed", "events"])?;

        Ok(Self {
            units,
            stations,
            summaries,
            finished: false,
        })
    }
}

/// Unplaced coordinates serialize as empty fields.
fn opt(v: Option<f64>) -> String {
    v.map(|v| v.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_unit_snapshots(&mut self, rows: &[UnitSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.units.write_record(&[
                row.unit_id.clone(),
                row.code.clone(),
                row.tick.to_string(),
                opt(row.lat),
                opt(row.lng),
                row.soc.to_string(),
                row.soh.to_string(),
                row.mode.clone(),
                row.voltage.to_string(),
                row.speed.to_string(),
                row.cycles.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_station_snapshots(&mut self, rows: &[StationSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.stations.write_record(&[
                row.station_id.clone(),
                row.code.clone(),
                row.tick.to_string(),
                row.load_pct.to_string(),
                row.surge_price.to_string(),
                row.status.clone(),
                row.thermal.to_string(),
                row.queue_count.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.units_advanced.to_string(),
            row.stations_recomputed.to_string(),
            row.events.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.units.flush()?;
        self.stations.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
