//! Indexed in-memory backend.

use rustc_hash::FxHashMap;
use sf_core::{StationId, UnitId};
use sf_model::{EntityUpdate, Station, Unit};

use crate::{FleetSnapshot, FleetStore, StoreError, StoreResult};

/// In-memory fleet state with id → slot indexes for O(1) patch application.
///
/// This is the reference backend: single-process simulations and all the
/// workspace tests run against it.
#[derive(Debug, Default)]
pub struct MemoryStore {
    units: Vec<Unit>,
    stations: Vec<Station>,
    unit_slots: FxHashMap<UnitId, usize>,
    station_slots: FxHashMap<StationId, usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store from initial fleet state, rebuilding both indexes.
    pub fn seeded(units: Vec<Unit>, stations: Vec<Station>) -> StoreResult<Self> {
        let mut store = Self::new();
        for station in stations {
            store.insert_station(station)?;
        }
        store.insert_units(units)?;
        Ok(store)
    }

    /// Register one station.  Station creation is a seeding concern, not a
    /// tick concern, so there is no batch form.
    pub fn insert_station(&mut self, station: Station) -> StoreResult<()> {
        if self.station_slots.contains_key(&station.id) {
            return Err(StoreError::DuplicateIdentity {
                kind: "station",
                value: station.id.to_string(),
            });
        }
        if self.stations.iter().any(|s| s.code == station.code) {
            return Err(StoreError::DuplicateIdentity {
                kind: "station",
                value: station.code.clone(),
            });
        }
        self.station_slots.insert(station.id.clone(), self.stations.len());
        self.stations.push(station);
        Ok(())
    }

    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }
}

impl FleetStore for MemoryStore {
    fn snapshot(&self) -> StoreResult<FleetSnapshot> {
        Ok(FleetSnapshot {
            units: self.units.clone(),
            stations: self.stations.clone(),
        })
    }

    fn commit(&mut self, updates: Vec<EntityUpdate>) -> StoreResult<()> {
        // Resolve every target slot before mutating anything, so one unknown
        // id rejects the batch with the state untouched.
        let mut resolved = Vec::with_capacity(updates.len());
        for update in &updates {
            let slot = match update {
                EntityUpdate::Unit(p) => *self
                    .unit_slots
                    .get(&p.id)
                    .ok_or_else(|| StoreError::UnitNotFound(p.id.clone()))?,
                EntityUpdate::Station(p) => *self
                    .station_slots
                    .get(&p.id)
                    .ok_or_else(|| StoreError::StationNotFound(p.id.clone()))?,
            };
            resolved.push(slot);
        }

        for (update, slot) in updates.iter().zip(resolved) {
            match update {
                EntityUpdate::Unit(p) => p.apply_to(&mut self.units[slot]),
                EntityUpdate::Station(p) => p.apply_to(&mut self.stations[slot]),
            }
        }
        Ok(())
    }

    fn insert_units(&mut self, units: Vec<Unit>) -> StoreResult<()> {
        // Same all-or-nothing discipline as commit: validate the whole batch
        // (including intra-batch duplicates) before inserting anything.
        let mut seen_ids: Vec<&UnitId> = Vec::with_capacity(units.len());
        let mut seen_codes: Vec<&str> = Vec::with_capacity(units.len());
        for unit in &units {
            if self.unit_slots.contains_key(&unit.id) || seen_ids.contains(&&unit.id) {
                return Err(StoreError::DuplicateIdentity {
                    kind: "unit",
                    value: unit.id.to_string(),
                });
            }
            if self.units.iter().any(|u| u.code == unit.code)
                || seen_codes.contains(&unit.code.as_str())
            {
                return Err(StoreError::DuplicateIdentity {
                    kind: "unit",
                    value: unit.code.clone(),
                });
            }
            seen_ids.push(&unit.id);
            seen_codes.push(unit.code.as_str());
        }

        for unit in units {
            self.unit_slots.insert(unit.id.clone(), self.units.len());
            self.units.push(unit);
        }
        Ok(())
    }
}
