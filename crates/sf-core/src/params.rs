//! Simulation parameters and the operational service area.
//!
//! Every tuning constant the tick engine uses lives in [`SimParams`];
//! `Default` carries the calibrated values.  Applications typically load a
//! `SimParams` from TOML/JSON (the `serde` feature) or take the defaults and
//! override a field or two.

use crate::{CoreError, CoreResult, GeoPoint, GeoVec, SimRng};

// ── ServiceArea ───────────────────────────────────────────────────────────────

/// A fixed axis-aligned lat/lng rectangle bounding the operational area.
///
/// Used both to generate new units and to push stray units back inside.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServiceArea {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lng_min: f64,
    pub lng_max: f64,
}

impl ServiceArea {
    #[inline]
    pub fn contains(&self, p: GeoPoint) -> bool {
        p.lat >= self.lat_min
            && p.lat <= self.lat_max
            && p.lng >= self.lng_min
            && p.lng <= self.lng_max
    }

    /// Correction force pulling a stray point back inside: ±`push` on each
    /// axis that has exited, zero inside the rectangle.
    pub fn correction(&self, p: GeoPoint, push: f64) -> GeoVec {
        let d_lat = if p.lat < self.lat_min {
            push
        } else if p.lat > self.lat_max {
            -push
        } else {
            0.0
        };
        let d_lng = if p.lng < self.lng_min {
            push
        } else if p.lng > self.lng_max {
            -push
        } else {
            0.0
        };
        GeoVec { d_lat, d_lng }
    }

    /// Geometric center of the rectangle.
    #[inline]
    pub fn center(&self) -> GeoPoint {
        GeoPoint {
            lat: (self.lat_min + self.lat_max) * 0.5,
            lng: (self.lng_min + self.lng_max) * 0.5,
        }
    }

    /// A uniformly random point inside the rectangle.
    pub fn random_point(&self, rng: &mut SimRng) -> GeoPoint {
        GeoPoint {
            lat: rng.gen_range(self.lat_min..=self.lat_max),
            lng: rng.gen_range(self.lng_min..=self.lng_max),
        }
    }

    fn is_valid(&self) -> bool {
        self.lat_min < self.lat_max && self.lng_min < self.lng_max
    }
}

impl Default for ServiceArea {
    /// The Gurugram demo corridor.
    fn default() -> Self {
        Self {
            lat_min: 28.38,
            lat_max: 28.52,
            lng_min: 76.97,
            lng_max: 77.13,
        }
    }
}

// ── SimParams ─────────────────────────────────────────────────────────────────

/// Top-level simulation parameters.
///
/// All distance-like values are planar degree units (see [`crate::geo`]);
/// charge values are percent.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimParams {
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Operational boundary for movement and spawning.
    pub area: ServiceArea,

    // ── Fleet maintenance ─────────────────────────────────────────────────
    /// Minimum live fleet size; maintenance tops up below this.
    pub fleet_target: usize,
    /// Code of the always-present point-of-view unit.
    pub sentinel_code: String,

    // ── Charge model ──────────────────────────────────────────────────────
    /// Charge lost per tick while `active` (percent).
    pub drain_rate: f64,
    /// Charge gained per tick while `charging` below `fast_charge_cutoff`.
    pub charge_rate_fast: f64,
    /// Charge gained per tick while `charging` at or above the cutoff.
    pub charge_rate_slow: f64,
    /// Boundary between fast and slow charging (percent).
    pub fast_charge_cutoff: f64,
    /// Below this, an `active` unit switches to `charging`.
    pub charge_enter: f64,
    /// At or above this, a `charging` unit returns to `active`.
    pub charge_exit: f64,
    /// Below this, the motion policy seeks the nearest station.
    pub low_charge: f64,

    // ── Motion model ──────────────────────────────────────────────────────
    /// Base movement step; per-axis jitter is uniform in ±0.75 × this.
    pub movement_step: f64,
    /// Boundary-correction force per exited axis.
    pub boundary_push: f64,
    /// Peers strictly inside this radius exert repulsion.
    pub repulsion_radius: f64,
    pub repulsion_gain: f64,
    /// Gain toward the nearest station when charge is low.
    pub seek_gain: f64,
    /// Gain toward an assigned destination.
    pub destination_gain: f64,
    /// Gain toward a cheaper station under surge pricing.
    pub economy_gain: f64,
    /// Nearest-station surge above this triggers the economic bias.
    pub surge_threshold: f64,
    /// Stations priced at or below this are economic-bias candidates.
    pub surge_baseline: f64,
    /// Within this distance of a destination, the unit has arrived.
    pub arrival_radius: f64,

    // ── Station load model ────────────────────────────────────────────────
    /// Units strictly inside this radius count toward a station's density.
    pub density_radius: f64,
    /// Nearby-unit count that saturates load at 100 %.
    pub saturation_count: usize,
    /// Load above this is `critical`.
    pub load_critical: f64,
    /// Load above this (but not critical) is `degraded`.
    pub load_degraded: f64,
    /// Surge multipliers per status band.
    pub surge_critical: f64,
    pub surge_degraded: f64,
    pub surge_normal: f64,
    /// Thermal estimate: `thermal_base + load % × thermal_per_load + noise`.
    pub thermal_base: f64,
    pub thermal_per_load: f64,

    // ── Derived telemetry ─────────────────────────────────────────────────
    /// Voltage at 0 % and 100 % charge; interpolated linearly while active.
    pub voltage_empty: f64,
    pub voltage_full: f64,
    /// Fixed plateau voltage while charging.
    pub charge_voltage: f64,
    /// Display scaling from per-tick displacement to speed.
    pub speed_scale: f64,

    // ── Observability ─────────────────────────────────────────────────────
    /// Call `TickObserver::on_snapshot` every N successful ticks (0 = never).
    pub snapshot_interval_ticks: u64,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            seed: 42,
            area: ServiceArea::default(),

            fleet_target: 25,
            sentinel_code: "USER-001".to_owned(),

            drain_rate: 0.4,
            charge_rate_fast: 6.0,
            charge_rate_slow: 2.0,
            fast_charge_cutoff: 80.0,
            charge_enter: 10.0,
            charge_exit: 98.0,
            low_charge: 20.0,

            movement_step: 0.006,
            boundary_push: 0.012,
            repulsion_radius: 0.008,
            repulsion_gain: 0.15,
            seek_gain: 0.25,
            destination_gain: 0.18,
            economy_gain: 0.1,
            surge_threshold: 1.25,
            surge_baseline: 1.0,
            arrival_radius: 0.005,

            density_radius: 0.04,
            saturation_count: 15,
            load_critical: 80.0,
            load_degraded: 50.0,
            surge_critical: 2.5,
            surge_degraded: 1.8,
            surge_normal: 1.0,
            thermal_base: 28.0,
            thermal_per_load: 0.25,

            voltage_empty: 48.0,
            voltage_full: 54.0,
            charge_voltage: 54.5,
            speed_scale: 1500.0,

            snapshot_interval_ticks: 1,
        }
    }
}

impl SimParams {
    /// Reject configurations the tick engine cannot run with.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.area.is_valid() {
            return Err(CoreError::Config("service area is empty".into()));
        }
        if self.saturation_count == 0 {
            return Err(CoreError::Config("saturation_count must be nonzero".into()));
        }
        if self.sentinel_code.trim().is_empty() {
            return Err(CoreError::Config("sentinel_code must be non-empty".into()));
        }
        for (name, v) in [
            ("drain_rate", self.drain_rate),
            ("charge_rate_fast", self.charge_rate_fast),
            ("charge_rate_slow", self.charge_rate_slow),
            ("movement_step", self.movement_step),
            ("repulsion_radius", self.repulsion_radius),
            ("density_radius", self.density_radius),
            ("arrival_radius", self.arrival_radius),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(CoreError::Config(format!("{name} must be finite and >= 0")));
            }
        }
        Ok(())
    }
}
