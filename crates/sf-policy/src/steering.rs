//! Steering-force computation.

use sf_core::{EntityRng, GeoPoint, GeoVec, SimParams};
use sf_model::{Station, Unit};
use sf_spatial::nearest_station;

use crate::WorldView;

/// The full steering force for one active, placed unit.
///
/// Returns [`GeoVec::ZERO`] for units without a position.  When the station
/// set is empty the seek/economy branches are skipped and only repulsion
/// applies — the orchestrator reports that condition separately.
pub fn steering(
    unit:   &Unit,
    view:   &WorldView<'_>,
    params: &SimParams,
    rng:    &mut EntityRng,
) -> GeoVec {
    let Some(pos) = unit.position else {
        return GeoVec::ZERO;
    };

    let mut force = repulsion(unit, pos, view, params);

    if unit.soc < params.low_charge {
        // Critical charge overrides any assigned destination.
        if let Some(station) = nearest_station(pos, view.stations) {
            force += pos.toward(station.position) * params.seek_gain;
        }
    } else if let Some(dest) = &unit.destination {
        // An assigned destination replaces the accumulated repulsion.
        force = pos.toward(dest.position) * params.destination_gain;
    } else if let Some(nearest) = nearest_station(pos, view.stations) {
        if nearest.surge_price > params.surge_threshold {
            force += economy_bias(pos, view.stations, params, rng);
        }
    }

    force
}

/// Sum of repulsion forces from peers strictly inside the proximity radius.
///
/// Each contributing peer pushes along the separating vector scaled by
/// `(radius − distance) × repulsion_gain`; exactly coincident peers
/// contribute a zero vector.
pub fn repulsion(
    unit:   &Unit,
    pos:    GeoPoint,
    view:   &WorldView<'_>,
    params: &SimParams,
) -> GeoVec {
    let mut force = GeoVec::ZERO;
    for idx in view.index.within(pos, params.repulsion_radius) {
        let peer = &view.units[idx];
        if peer.id == unit.id {
            continue;
        }
        let Some(peer_pos) = peer.position else {
            continue;
        };
        let push = (params.repulsion_radius - pos.distance(peer_pos)) * params.repulsion_gain;
        force += peer_pos.toward(pos) * push;
    }
    force
}

/// Weak pull toward a randomly chosen station priced at or below baseline.
///
/// Zero when no such station exists.  The draw comes from the unit's seeded
/// per-tick RNG, so the "random" load-balancing jitter is reproducible.
fn economy_bias(
    pos:      GeoPoint,
    stations: &[Station],
    params:   &SimParams,
    rng:      &mut EntityRng,
) -> GeoVec {
    let cheap: Vec<&Station> = stations
        .iter()
        .filter(|s| s.surge_price <= params.surge_baseline)
        .collect();
    match rng.choose(&cheap) {
        Some(station) => pos.toward(station.position) * params.economy_gain,
        None => GeoVec::ZERO,
    }
}
