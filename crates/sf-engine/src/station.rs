//! The per-station load model.

use sf_core::{EntityRng, SimParams};
use sf_model::{Station, StationPatch, StationStatus};
use sf_policy::WorldView;

/// Noise added to the thermal estimate, °C.
const THERMAL_NOISE: f64 = 2.0;

/// Recompute one station's congestion fields from the pre-tick snapshot.
///
/// Stations are independent of each other within a tick; this function
/// reads only the shared snapshot and may be evaluated for all stations in
/// parallel.
pub fn recompute_station(
    station: &Station,
    view:    &WorldView<'_>,
    params:  &SimParams,
    rng:     &mut EntityRng,
) -> StationPatch {
    // Local density: units of any mode strictly inside the density radius.
    let density = view.index.count_within(station.position, params.density_radius);
    let load_pct = (density as f64 / params.saturation_count as f64 * 100.0).min(100.0);

    // Inbound queue: units routed to exactly this station's coordinates.
    let queue_count = view
        .units
        .iter()
        .filter(|u| {
            u.destination
                .as_ref()
                .is_some_and(|d| d.position == station.position)
        })
        .count() as u32;

    let thermal = params.thermal_base
        + load_pct * params.thermal_per_load
        + rng.random::<f64>() * THERMAL_NOISE;

    let (status, surge_price) = grade_load(load_pct, params);

    StationPatch {
        id: station.id.clone(),
        load_pct,
        surge_price,
        status,
        thermal,
        queue_count,
    }
}

/// Status and surge multiplier as a pure function of load percentage.
pub fn grade_load(load_pct: f64, params: &SimParams) -> (StationStatus, f64) {
    if load_pct > params.load_critical {
        (StationStatus::Critical, params.surge_critical)
    } else if load_pct > params.load_degraded {
        (StationStatus::Degraded, params.surge_degraded)
    } else {
        (StationStatus::Ok, params.surge_normal)
    }
}
