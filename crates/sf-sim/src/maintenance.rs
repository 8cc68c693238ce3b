//! Fleet maintenance: top-up spawns and the sentinel unit.
//!
//! Maintenance runs at the start of every tick, before the compute phase, so
//! new units participate in the same tick they appear.  It is the only place
//! units are created; nothing ever deletes them.

use sf_core::{GeoVec, SimParams, SimRng, Tick, UnitId};
use sf_model::{Unit, UnitMode};

use crate::TickEvent;

/// Numbering start for generated `BAT-nnn` codes when none exist yet.
const CODE_FLOOR: u32 = 200;

/// Compute the units needed to bring the fleet up to policy.
///
/// Guarantees on return:
/// - a unit with `params.sentinel_code` exists (spawned here if missing),
/// - the fleet has at least `params.fleet_target` units,
/// - every generated code continues past the highest existing `BAT-nnn`.
///
/// The caller inserts the returned units into the store and extends its
/// working snapshot with them.
pub fn ensure_fleet(
    existing: &[Unit],
    params:   &SimParams,
    tick:     Tick,
    rng:      &mut SimRng,
) -> (Vec<Unit>, Vec<TickEvent>) {
    let mut spawned = Vec::new();
    let mut events = Vec::new();

    if !existing.iter().any(|u| u.code == params.sentinel_code) {
        spawned.push(spawn_sentinel(params, tick, rng));
        events.push(TickEvent::SentinelSpawned {
            code: params.sentinel_code.clone(),
        });
    }

    let live = existing.len() + spawned.len();
    if live < params.fleet_target {
        let shortfall = params.fleet_target - live;
        let mut code = next_code(existing);
        for i in 0..shortfall {
            spawned.push(spawn_stock(params, tick, i, code, rng));
            code += 1;
        }
        events.push(TickEvent::FleetBoosted { added: shortfall });
    }

    (spawned, events)
}

/// The first free `BAT-nnn` number, one past the highest already in use.
fn next_code(existing: &[Unit]) -> u32 {
    existing
        .iter()
        .filter_map(|u| u.code.strip_prefix("BAT-"))
        .filter_map(|n| n.parse::<u32>().ok())
        .max()
        .map_or(CODE_FLOOR, |n| n + 1)
}

/// A stock fleet unit with randomized but serviceable telemetry.
fn spawn_stock(
    params: &SimParams,
    tick:   Tick,
    seq:    usize,
    code:   u32,
    rng:    &mut SimRng,
) -> Unit {
    Unit {
        id: UnitId::new(format!("auto-{}-{seq}", tick.0)),
        code: format!("BAT-{code:03}"),
        position: Some(params.area.random_point(rng)),
        soc: rng.gen_range(30.0..=100.0),
        soh: rng.gen_range(85.0..=100.0),
        temp: rng.gen_range(25.0..=35.0),
        mode: UnitMode::Active,
        destination: None,
        voltage: 52.0,
        speed: 0.0,
        cycles: rng.gen_range(0..50),
    }
}

/// The always-present point-of-view unit, spawned near the area center with
/// a low charge so it immediately exercises the station-seek policy.
fn spawn_sentinel(params: &SimParams, tick: Tick, rng: &mut SimRng) -> Unit {
    let center = params.area.center();
    let position = center.offset(GeoVec::new(
        rng.gen_range(-0.005..=0.005),
        rng.gen_range(-0.005..=0.005),
    ));
    Unit {
        id: UnitId::new(format!("sentinel-{}", tick.0)),
        code: params.sentinel_code.clone(),
        position: Some(position),
        soc: rng.gen_range(12.0..20.0),
        soh: rng.gen_range(95.0..=100.0),
        temp: 28.0,
        mode: UnitMode::Active,
        destination: None,
        voltage: 51.5,
        speed: 0.0,
        cycles: 10,
    }
}
