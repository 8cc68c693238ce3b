//! The per-unit state machine.

use sf_core::{EntityRng, GeoPoint, GeoVec, SimParams};
use sf_model::{Destination, Unit, UnitMode, UnitPatch};
use sf_policy::{WorldView, steering};

/// Noise added to the interpolated voltage while active, volts.
const ACTIVE_VOLTAGE_NOISE: f64 = 0.2;
/// Noise added to the plateau voltage while charging, volts.
const CHARGE_VOLTAGE_NOISE: f64 = 0.5;

/// The outcome of advancing one unit by one tick.
pub struct UnitStep {
    /// New values for the unit's simulation-owned fields.
    pub patch: UnitPatch,
    /// Set when the unit reached its assigned destination this tick.
    pub arrived: Option<Destination>,
    /// `active` → `charging` transition happened this tick.
    pub entered_charging: bool,
    /// `charging` → `active` transition happened this tick (cycle counted).
    pub completed_cycle: bool,
}

/// Advance one unit against the pre-tick snapshot.
///
/// Returns `None` for faulty units and units without a position — both are
/// left untouched and excluded from the commit set.
pub fn advance_unit(
    unit:   &Unit,
    view:   &WorldView<'_>,
    params: &SimParams,
    rng:    &mut EntityRng,
) -> Option<UnitStep> {
    let pos = unit.position?;
    match unit.mode {
        UnitMode::Faulty => None,
        UnitMode::Active => Some(advance_active(unit, pos, view, params, rng)),
        UnitMode::Charging => Some(advance_charging(unit, params, rng)),
    }
}

fn advance_active(
    unit:   &Unit,
    pos:    GeoPoint,
    view:   &WorldView<'_>,
    params: &SimParams,
    rng:    &mut EntityRng,
) -> UnitStep {
    let soc = (unit.soc - params.drain_rate).max(0.0);

    // Displacement = policy force + per-axis jitter + boundary correction.
    let force = steering(unit, view, params, rng);
    let half = 0.75 * params.movement_step;
    let jitter = GeoVec::new(rng.jitter(half), rng.jitter(half));
    let boundary = params.area.correction(pos, params.boundary_push);
    let delta = jitter + force + boundary;
    let new_pos = pos.offset(delta);

    let speed = delta.norm() * params.speed_scale;
    let voltage = params.voltage_empty
        + soc / 100.0 * (params.voltage_full - params.voltage_empty)
        + rng.random::<f64>() * ACTIVE_VOLTAGE_NOISE;

    // Arrival is judged against the post-move position.
    let arrived = match &unit.destination {
        Some(dest) if new_pos.distance(dest.position) < params.arrival_radius => {
            Some(dest.clone())
        }
        _ => None,
    };
    let destination = if arrived.is_some() {
        None
    } else {
        unit.destination.clone()
    };

    let entered_charging = soc < params.charge_enter;
    let mode = if entered_charging {
        UnitMode::Charging
    } else {
        UnitMode::Active
    };

    UnitStep {
        patch: UnitPatch {
            id: unit.id.clone(),
            soc: soc.clamp(0.0, 100.0),
            position: Some(new_pos),
            mode,
            destination,
            voltage,
            speed,
            cycles: unit.cycles,
        },
        arrived,
        entered_charging,
        completed_cycle: false,
    }
}

fn advance_charging(unit: &Unit, params: &SimParams, rng: &mut EntityRng) -> UnitStep {
    let rate = if unit.soc < params.fast_charge_cutoff {
        params.charge_rate_fast
    } else {
        params.charge_rate_slow
    };
    let soc = (unit.soc + rate).min(100.0);

    let voltage = params.charge_voltage + rng.random::<f64>() * CHARGE_VOLTAGE_NOISE;

    let completed_cycle = soc >= params.charge_exit;
    let (mode, cycles) = if completed_cycle {
        (UnitMode::Active, unit.cycles + 1)
    } else {
        (UnitMode::Charging, unit.cycles)
    };

    UnitStep {
        patch: UnitPatch {
            id: unit.id.clone(),
            soc: soc.clamp(0.0, 100.0),
            position: unit.position,
            mode,
            destination: unit.destination.clone(),
            voltage,
            speed: 0.0,
            cycles,
        },
        arrived: None,
        entered_charging: false,
        completed_cycle,
    }
}
