//! The persistence seam between the tick loop and a backend.

use sf_model::{EntityUpdate, Station, Unit};

use crate::StoreResult;

/// A full, owned copy of the fleet at one instant.
///
/// Snapshots are what the compute phase reads; taking an owned copy up front
/// is what lets the store mutate freely (or fail) without the in-flight tick
/// observing it.
#[derive(Clone, Debug, Default)]
pub struct FleetSnapshot {
    pub units: Vec<Unit>,
    pub stations: Vec<Station>,
}

/// Backend-agnostic fleet persistence.
///
/// Implementations must make [`commit`](FleetStore::commit) atomic: when any
/// patch in the batch cannot be applied, the whole batch is rejected and the
/// stored state is unchanged.
pub trait FleetStore {
    /// Read a consistent snapshot of every unit and station.
    fn snapshot(&self) -> StoreResult<FleetSnapshot>;

    /// Apply a batch of per-entity patches, all-or-nothing.
    fn commit(&mut self, updates: Vec<EntityUpdate>) -> StoreResult<()>;

    /// Register newly created units (fleet maintenance spawns).
    ///
    /// Ids and codes must be unique across the existing fleet; a duplicate
    /// rejects the whole batch.
    fn insert_units(&mut self, units: Vec<Unit>) -> StoreResult<()>;
}
