//! Read-only snapshot state shared by all per-unit computations of one tick.

use sf_model::{Station, Unit};
use sf_spatial::UnitIndex;

/// The pre-tick world snapshot.
///
/// Built once per tick by the orchestrator and shared (immutably) across
/// every unit's steering computation and every station's load recompute, so
/// no computation ever observes a partially-updated peer.
///
/// # Lifetimes
///
/// All borrows live for the duration of one tick's compute phase.  The
/// orchestrator never mutates these slices while a `WorldView` is live.
pub struct WorldView<'a> {
    /// Every unit as of tick start, in snapshot order.
    pub units: &'a [Unit],

    /// Every station as of tick start.
    pub stations: &'a [Station],

    /// Spatial index over the placed units of `units`.
    pub index: &'a UnitIndex,
}

impl<'a> WorldView<'a> {
    #[inline]
    pub fn new(units: &'a [Unit], stations: &'a [Station], index: &'a UnitIndex) -> Self {
        Self { units, stations, index }
    }
}
