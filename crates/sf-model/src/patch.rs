//! Per-entity field updates produced by one tick.
//!
//! A patch carries every simulation-owned field for its entity; the store
//! applies a batch of patches as a single all-or-nothing transaction.
//! Fields the tick does not own (`soh`, `temp`, station identity and
//! telemetry) never appear in a patch.

use serde::{Deserialize, Serialize};
use sf_core::{GeoPoint, StationId, UnitId};

use crate::{Destination, Station, StationStatus, Unit, UnitMode};

/// New values for one unit's simulation-owned fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnitPatch {
    pub id: UnitId,
    pub soc: f64,
    pub position: Option<GeoPoint>,
    pub mode: UnitMode,
    pub destination: Option<Destination>,
    pub voltage: f64,
    pub speed: f64,
    pub cycles: u32,
}

impl UnitPatch {
    /// Overwrite the simulation-owned fields of `unit`.
    pub fn apply_to(&self, unit: &mut Unit) {
        unit.soc = self.soc;
        unit.position = self.position;
        unit.mode = self.mode;
        unit.destination = self.destination.clone();
        unit.voltage = self.voltage;
        unit.speed = self.speed;
        unit.cycles = self.cycles;
    }
}

/// New values for one station's computed fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StationPatch {
    pub id: StationId,
    pub load_pct: f64,
    pub surge_price: f64,
    pub status: StationStatus,
    pub thermal: f64,
    pub queue_count: u32,
}

impl StationPatch {
    /// Overwrite the computed fields of `station`.
    pub fn apply_to(&self, station: &mut Station) {
        station.load_pct = self.load_pct;
        station.surge_price = self.surge_price;
        station.status = self.status;
        station.thermal = self.thermal;
        station.queue_count = self.queue_count;
    }
}

/// One element of a commit batch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EntityUpdate {
    Unit(UnitPatch),
    Station(StationPatch),
}
