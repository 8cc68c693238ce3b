//! `sf-output` — recording fleet state to files.
//!
//! # Crate layout
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`row`]      | Plain data rows shared by all backends                 |
//! | [`writer`]   | The [`OutputWriter`] backend trait                     |
//! | [`csv`]      | [`CsvWriter`] — three CSV files per run                |
//! | [`observer`] | [`SimOutputObserver`] bridging the sim to a writer     |
//!
//! Attach a [`SimOutputObserver`] to [`Sim::run_ticks`][sf_sim::Sim] and
//! every snapshot interval lands in the writer; check
//! [`take_error`][SimOutputObserver::take_error] once the run returns.

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{StationSnapshotRow, TickSummaryRow, UnitSnapshotRow};
pub use writer::OutputWriter;
