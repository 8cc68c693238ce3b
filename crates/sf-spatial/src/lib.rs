//! `sf-spatial` — spatial queries over the per-tick snapshot.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`index`]   | `UnitIndex` — R-tree over placed units, radius queries    |
//! | [`nearest`] | `nearest_station` — linear scan with first-wins ties      |
//!
//! The index is rebuilt once per tick from the pre-tick unit snapshot and
//! shared (immutably) by the repulsion sub-force and the station density
//! count, so both read the identical spatial state.

pub mod index;
pub mod nearest;


pub use index::UnitIndex;
pub use nearest::nearest_station;
