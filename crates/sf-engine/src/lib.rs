//! `sf-engine` — the pure compute kernels of one tick.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`unit`]    | `advance_unit` — drain/move/arrive/charge state machine   |
//! | [`station`] | `recompute_station` — density → load/status/surge/thermal |
//!
//! Both kernels are pure producers: they read the immutable pre-tick
//! [`WorldView`][sf_policy::WorldView] plus one entity, and return a patch
//! describing that entity's next state.  Nothing here touches the store, so
//! the orchestrator is free to evaluate all entities sequentially or on a
//! worker pool — outputs are independent records merged into one commit set.

pub mod station;
pub mod unit;


pub use station::{grade_load, recompute_station};
pub use unit::{UnitStep, advance_unit};
