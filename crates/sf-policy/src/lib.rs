//! `sf-policy` — the autonomous motion policy for one unit.
//!
//! # Crate layout
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`context`]  | `WorldView<'a>` — read-only pre-tick snapshot         |
//! | [`steering`] | `steering` / `repulsion` force computation            |
//!
//! # Force model
//!
//! The per-tick steering force is composed additively from independent
//! sub-forces:
//!
//! 1. **Repulsion** from every other placed unit strictly inside the
//!    proximity radius — keeps units from stacking.
//! 2. A **priority cascade** where exactly one branch applies:
//!    - low charge → seek the nearest station;
//!    - assigned destination → seek it, *replacing* the repulsion term;
//!    - nearest station surging → weak bias toward a random
//!      baseline-priced station;
//!    - otherwise → nothing.
//!
//! All reads go through [`WorldView`]; the policy mutates nothing and every
//! random draw comes from the caller-supplied per-unit [`EntityRng`], so the
//! result is a pure function of (snapshot, unit, seed, tick).
//!
//! [`EntityRng`]: sf_core::EntityRng

pub mod context;
pub mod steering;


pub use context::WorldView;
pub use steering::{repulsion, steering};
