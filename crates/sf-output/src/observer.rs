//! `SimOutputObserver<W>` — bridges `TickObserver` to an `OutputWriter`.

use sf_core::Tick;
use sf_model::{Station, Unit};
use sf_sim::{TickObserver, TickReport};

use crate::row::{StationSnapshotRow, TickSummaryRow, UnitSnapshotRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`TickObserver`] that records snapshots and tick summaries through any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After the run returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> TickObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, report: &TickReport) {
        let row = TickSummaryRow {
            tick:                tick.0,
            units_advanced:      report.units_advanced as u64,
            stations_recomputed: report.stations_recomputed as u64,
            events:              report.events.len() as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, units: &[Unit], stations: &[Station]) {
        let unit_rows: Vec<UnitSnapshotRow> = units
            .iter()
            .map(|u| UnitSnapshotRow {
                unit_id: u.id.to_string(),
                code:    u.code.clone(),
                tick:    tick.0,
                lat:     u.position.map(|p| p.lat),
                lng:     u.position.map(|p| p.lng),
                soc:     u.soc,
                soh:     u.soh,
                mode:    u.mode.to_string(),
                voltage: u.voltage,
                speed:   u.speed,
                cycles:  u.cycles,
            })
            .collect();
        if !unit_rows.is_empty() {
            let result = self.writer.write_unit_snapshots(&unit_rows);
            self.store_err(result);
        }

        let station_rows: Vec<StationSnapshotRow> = stations
            .iter()
            .map(|s| StationSnapshotRow {
                station_id:  s.id.to_string(),
                code:        s.code.clone(),
                tick:        tick.0,
                load_pct:    s.load_pct,
                surge_price: s.surge_price,
                status:      s.status.to_string(),
                thermal:     s.thermal,
                queue_count: s.queue_count,
            })
            .collect();
        if !station_rows.is_empty() {
            let result = self.writer.write_station_snapshots(&station_rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
