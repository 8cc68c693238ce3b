//! Nearest-station lookup.

use sf_core::GeoPoint;
use sf_model::Station;

/// The station minimizing squared planar distance to `position`.
///
/// Ties are broken by the first station encountered in input order, so the
/// result is deterministic for a given snapshot.  Returns `None` for an
/// empty station slice — callers skip seek-dependent behavior in that case
/// rather than panicking.
pub fn nearest_station<'a>(position: GeoPoint, stations: &'a [Station]) -> Option<&'a Station> {
    let mut best: Option<(&'a Station, f64)> = None;
    for station in stations {
        let d_sq = position.distance_sq(station.position);
        match best {
            Some((_, best_sq)) if d_sq >= best_sq => {}
            _ => best = Some((station, d_sq)),
        }
    }
    best.map(|(s, _)| s)
}
