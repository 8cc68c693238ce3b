//! Observer trait for progress reporting and data collection.

use sf_core::Tick;
use sf_model::{Station, Unit};

use crate::TickReport;

/// Callbacks invoked by [`Sim`][crate::Sim] at tick boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl TickObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, report: &TickReport) {
///         println!("{tick}: advanced {} units", report.units_advanced);
///     }
/// }
/// ```
pub trait TickObserver {
    /// Called at the very start of each tick, before maintenance.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after a tick commits, with its report.
    fn on_tick_end(&mut self, _tick: Tick, _report: &TickReport) {}

    /// Called at snapshot intervals (every `snapshot_interval_ticks`
    /// committed ticks) with the post-commit fleet state, so output writers
    /// can record it without the sim knowing about any particular format.
    fn on_snapshot(&mut self, _tick: Tick, _units: &[Unit], _stations: &[Station]) {}

    /// Called once after the final tick of a `run_ticks` batch.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`TickObserver`] that does nothing.
pub struct NoopObserver;

impl TickObserver for NoopObserver {}
