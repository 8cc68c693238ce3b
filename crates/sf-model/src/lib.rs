//! `sf-model` — the entity record schema for the swapfleet framework.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`unit`]    | `Unit`, `UnitMode`, `Destination`, `RawUnitRecord`            |
//! | [`station`] | `Station`, `StationStatus`, `RawStationRecord`                |
//! | [`patch`]   | `UnitPatch`, `StationPatch`, `EntityUpdate`                   |
//! | [`error`]   | `ModelError`, `ModelResult<T>`                                |
//!
//! # Boundary validation
//!
//! External data enters as `Raw*Record` structs whose shape mirrors the
//! nullable flat columns of a typical entity table.  `Unit::from_record` /
//! `Station::from_record` are the only way to turn raw data into typed
//! records: they normalize half-set coordinate pairs to unset, clamp
//! percentage fields into [0, 100], and reject blank identities and
//! non-finite coordinates.  Computation downstream never sees a malformed
//! record.

pub mod error;
pub mod patch;
pub mod station;
pub mod unit;


pub use error::{ModelError, ModelResult};
pub use patch::{EntityUpdate, StationPatch, UnitPatch};
pub use station::{RawStationRecord, Station, StationStatus};
pub use unit::{Destination, RawUnitRecord, Unit, UnitMode};
