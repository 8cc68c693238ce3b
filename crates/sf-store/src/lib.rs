//! `sf-store` — fleet persistence behind a backend trait.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                |
//! |------------|---------------------------------------------------------|
//! | [`store`]  | [`FleetStore`] trait and the [`FleetSnapshot`] it serves |
//! | [`memory`] | [`MemoryStore`] — indexed in-memory backend             |
//!
//! The tick loop only ever talks to [`FleetStore`]: one full snapshot read at
//! the start of a tick, one atomic batch commit at the end.  A commit either
//! applies every patch or none of them, so a failed tick leaves the fleet
//! exactly as the snapshot saw it.

pub mod error;
pub mod memory;
pub mod store;

#[cfg(test)]
mod tests;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use store::{FleetSnapshot, FleetStore};
