//! The mobile energy-storage unit record.

use serde::{Deserialize, Serialize};
use sf_core::{GeoPoint, UnitId};

use crate::{ModelError, ModelResult};

// ── UnitMode ──────────────────────────────────────────────────────────────────

/// A unit's operating mode.
///
/// `Faulty` is terminal from the tick's perspective — faulty units are
/// excluded from movement and charge updates entirely.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitMode {
    Active,
    Charging,
    Faulty,
}

impl std::fmt::Display for UnitMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            UnitMode::Active => "active",
            UnitMode::Charging => "charging",
            UnitMode::Faulty => "faulty",
        })
    }
}

// ── Destination ───────────────────────────────────────────────────────────────

/// An assigned routing target the unit is actively steered toward.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub position: GeoPoint,
    /// Optional display name ("Sector 14 Grid"); informational only.
    pub name: Option<String>,
}

// ── Unit ──────────────────────────────────────────────────────────────────────

/// One mobile battery unit.
///
/// The tick engine owns `soc`, `position`, `mode`, `destination`, `voltage`,
/// `speed`, and `cycles`; `soh` and `temp` are slowly-varying telemetry the
/// tick never touches.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    /// Human-readable code (`BAT-017`, `USER-001`); unique like the id.
    pub code: String,
    /// `None` for units that have never been placed.
    pub position: Option<GeoPoint>,
    /// State of charge, percent in [0, 100].
    pub soc: f64,
    /// State of health, percent in [0, 100].
    pub soh: f64,
    /// Pack temperature, °C (informational).
    pub temp: f64,
    pub mode: UnitMode,
    pub destination: Option<Destination>,
    /// Instantaneous voltage, recomputed every tick.
    pub voltage: f64,
    /// Instantaneous speed, recomputed every tick (display units).
    pub speed: f64,
    /// Completed charge cycles.
    pub cycles: u32,
}

impl Unit {
    /// `true` if the unit has a known position.
    #[inline]
    pub fn is_placed(&self) -> bool {
        self.position.is_some()
    }

    /// Build a typed unit from a raw flat record, normalizing and validating
    /// at the boundary (see crate docs).
    pub fn from_record(rec: RawUnitRecord) -> ModelResult<Unit> {
        if rec.id.trim().is_empty() || rec.code.trim().is_empty() {
            return Err(ModelError::BlankIdentity { kind: "unit" });
        }

        let position = pair_to_point("unit", &rec.id, rec.lat, rec.lng)?;
        let target = pair_to_point("unit", &rec.id, rec.target_lat, rec.target_lng)?;
        let destination = target.map(|position| Destination {
            position,
            name: rec.target_name,
        });

        Ok(Unit {
            id: UnitId::new(rec.id),
            code: rec.code,
            position,
            soc: rec.soc.clamp(0.0, 100.0),
            soh: rec.soh.clamp(0.0, 100.0),
            temp: rec.temp,
            mode: rec.status,
            destination,
            voltage: rec.voltage,
            speed: rec.speed,
            cycles: rec.cycles,
        })
    }
}

/// Normalize a nullable coordinate pair: both set → point, anything else →
/// `None`.  Non-finite coordinates are rejected rather than propagated.
pub(crate) fn pair_to_point(
    kind: &'static str,
    id:   &str,
    lat:  Option<f64>,
    lng:  Option<f64>,
) -> ModelResult<Option<GeoPoint>> {
    match (lat, lng) {
        (Some(lat), Some(lng)) => {
            let p = GeoPoint::new(lat, lng);
            if !p.is_finite() {
                return Err(ModelError::NonFinite {
                    kind,
                    id: id.to_owned(),
                    field: "coordinates",
                });
            }
            Ok(Some(p))
        }
        // Half-set pairs are a defensive-invariant violation; treat as unset.
        _ => Ok(None),
    }
}

// ── RawUnitRecord ─────────────────────────────────────────────────────────────

/// The flat, nullable wire shape of a unit row as a store backend sees it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawUnitRecord {
    pub id: String,
    pub code: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub soc: f64,
    pub soh: f64,
    #[serde(default)]
    pub temp: f64,
    pub status: UnitMode,
    #[serde(default)]
    pub target_lat: Option<f64>,
    #[serde(default)]
    pub target_lng: Option<f64>,
    #[serde(default)]
    pub target_name: Option<String>,
    #[serde(default)]
    pub voltage: f64,
    #[serde(default)]
    pub speed: f64,
    #[serde(default)]
    pub cycles: u32,
}
