//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, StationSnapshotRow, TickSummaryRow, UnitSnapshotRow};

/// Trait implemented by output backends.
///
/// Errors never surface through the observer directly — they are stored and
/// retrieved with [`SimOutputObserver::take_error`][crate::SimOutputObserver]
/// after the run.
pub trait OutputWriter {
    /// Write a batch of unit snapshots.
    fn write_unit_snapshots(&mut self, rows: &[UnitSnapshotRow]) -> OutputResult<()>;

    /// Write a batch of station snapshots.
    fn write_station_snapshots(&mut self, rows: &[StationSnapshotRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
