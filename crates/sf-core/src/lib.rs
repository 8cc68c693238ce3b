//! `sf-core` — foundational types for the `swapfleet` simulation framework.
//!
//! This crate is a dependency of every other `sf-*` crate.  It intentionally
//! has no `sf-*` dependencies and minimal external ones (only `rand`,
//! `rustc-hash`, and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                             |
//! |-------------|------------------------------------------------------|
//! | [`ids`]     | `UnitId`, `StationId`                                |
//! | [`geo`]     | `GeoPoint`, `GeoVec`, planar distance                |
//! | [`tick`]    | `Tick` counter                                       |
//! | [`rng`]     | `EntityRng` (per entity, per tick), `SimRng` (global) |
//! | [`params`]  | `SimParams`, `ServiceArea`                           |
//! | [`error`]   | `CoreError`, `CoreResult`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                                    |
//! |---------|---------------------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types (needed by `sf-model`) |

pub mod error;
pub mod geo;
pub mod ids;
pub mod params;
pub mod rng;
pub mod tick;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::{GeoPoint, GeoVec};
pub use ids::{StationId, UnitId};
pub use params::{ServiceArea, SimParams};
pub use rng::{EntityRng, SimRng};
pub use tick::Tick;
