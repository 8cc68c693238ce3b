//! `sf-sim` — the tick loop orchestrator.
//!
//! # Crate layout
//!
//! | Module          | Contents                                             |
//! |-----------------|------------------------------------------------------|
//! | [`sim`]         | [`Sim`] — snapshot → compute → atomic commit loop    |
//! | [`maintenance`] | Fleet top-up and the sentinel unit                   |
//! | [`report`]      | [`TickReport`] and its per-tick [`TickEvent`]s       |
//! | [`observer`]    | [`TickObserver`] callbacks for output backends       |
//!
//! A tick is all-or-nothing: every unit and station patch produced by the
//! compute phase lands in one [`FleetStore::commit`][sf_store::FleetStore]
//! batch, and the tick counter advances only when that commit succeeds.  A
//! failed tick leaves the store — and the RNG streams keyed by the unchanged
//! tick number — exactly where they were.

pub mod error;
pub mod maintenance;
pub mod observer;
pub mod report;
pub mod sim;

#[cfg(test)]
mod tests;

pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, TickObserver};
pub use report::{TickEvent, TickReport};
pub use sim::Sim;
