//! The fixed swap/charge station record.

use serde::{Deserialize, Serialize};
use sf_core::{GeoPoint, StationId};

use crate::{ModelError, ModelResult};

// ── StationStatus ─────────────────────────────────────────────────────────────

/// Congestion status, a pure function of load percentage.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StationStatus {
    Ok,
    Degraded,
    Critical,
}

impl std::fmt::Display for StationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            StationStatus::Ok => "ok",
            StationStatus::Degraded => "degraded",
            StationStatus::Critical => "critical",
        })
    }
}

// ── Station ───────────────────────────────────────────────────────────────────

/// One swap/charge station.
///
/// Position never changes after setup.  The tick engine recomputes
/// `load_pct`, `surge_price`, `status`, `thermal`, and `queue_count` every
/// tick; `swap_rate` and `charger_health` are slowly-varying telemetry it
/// leaves alone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: StationId,
    pub code: String,
    pub name: String,
    pub region: String,
    pub position: GeoPoint,

    /// Swaps per hour capacity (informational).
    pub swap_rate: f64,
    /// Charger hardware health, percent (informational).
    pub charger_health: f64,

    /// Estimated congestion, percent in [0, 100].
    pub load_pct: f64,
    /// Dynamic price multiplier derived from load.
    pub surge_price: f64,
    pub status: StationStatus,
    /// Thermal estimate, °C.
    pub thermal: f64,
    /// Units currently routed to this station.
    pub queue_count: u32,
}

impl Station {
    /// Build a typed station from a raw flat record, validating at the
    /// boundary.  Stations must always carry a finite position.
    pub fn from_record(rec: RawStationRecord) -> ModelResult<Station> {
        if rec.id.trim().is_empty() || rec.code.trim().is_empty() {
            return Err(ModelError::BlankIdentity { kind: "station" });
        }
        let position = GeoPoint::new(rec.lat, rec.lng);
        if !position.is_finite() {
            return Err(ModelError::NonFinite {
                kind: "station",
                id: rec.id,
                field: "coordinates",
            });
        }

        Ok(Station {
            id: StationId::new(rec.id),
            code: rec.code,
            name: rec.name,
            region: rec.region,
            position,
            swap_rate: rec.swap_rate,
            charger_health: rec.charger_health.clamp(0.0, 100.0),
            load_pct: rec.load_pct.clamp(0.0, 100.0),
            surge_price: rec.surge_price,
            status: rec.status,
            thermal: rec.thermal,
            queue_count: rec.queue_count,
        })
    }
}

// ── RawStationRecord ──────────────────────────────────────────────────────────

/// The flat wire shape of a station row as a store backend sees it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawStationRecord {
    pub id: String,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub region: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub swap_rate: f64,
    #[serde(default = "full_health")]
    pub charger_health: f64,
    #[serde(default)]
    pub load_pct: f64,
    #[serde(default = "baseline_surge")]
    pub surge_price: f64,
    pub status: StationStatus,
    #[serde(default)]
    pub thermal: f64,
    #[serde(default)]
    pub queue_count: u32,
}

fn full_health() -> f64 {
    100.0
}

fn baseline_surge() -> f64 {
    1.0
}
