//! R-tree index over the placed units of one snapshot.

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use sf_core::GeoPoint;
use sf_model::Unit;

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a 2-D `[lat, lng]` point with the unit's
/// index into the snapshot slice.
#[derive(Clone)]
struct UnitEntry {
    point: [f64; 2],
    idx: usize,
}

impl RTreeObject for UnitEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for UnitEntry {
    /// Squared planar distance in lat/lng space — the same metric the rest
    /// of the engine uses.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let d_lat = self.point[0] - point[0];
        let d_lng = self.point[1] - point[1];
        d_lat * d_lat + d_lng * d_lng
    }
}

// ── UnitIndex ─────────────────────────────────────────────────────────────────

/// Spatial index over all placed units in one pre-tick snapshot.
///
/// Units without a position are not indexed; query results are indexes into
/// the snapshot slice the index was built from.  Radius queries are
/// *strict* (`distance < radius`) to match the proximity semantics of the
/// motion policy and load model.
pub struct UnitIndex {
    tree: RTree<UnitEntry>,
    indexed: usize,
}

impl UnitIndex {
    /// Build the index from one snapshot.  O(n log n).
    pub fn build(units: &[Unit]) -> Self {
        let entries: Vec<UnitEntry> = units
            .iter()
            .enumerate()
            .filter_map(|(idx, u)| {
                u.position.map(|p| UnitEntry { point: [p.lat, p.lng], idx })
            })
            .collect();
        let indexed = entries.len();
        Self {
            tree: RTree::bulk_load(entries),
            indexed,
        }
    }

    /// Number of placed (indexed) units.
    pub fn len(&self) -> usize {
        self.indexed
    }

    pub fn is_empty(&self) -> bool {
        self.indexed == 0
    }

    /// Snapshot indexes of all units strictly within `radius` of `center`.
    ///
    /// Includes the querying unit itself when it is placed at `center`;
    /// callers filter their own index out.
    pub fn within<'a>(
        &'a self,
        center: GeoPoint,
        radius: f64,
    ) -> impl Iterator<Item = usize> + 'a {
        let q = [center.lat, center.lng];
        let r2 = radius * radius;
        // locate_within_distance is inclusive; the strict filter drops
        // entries exactly on the radius.
        self.tree
            .locate_within_distance(q, r2)
            .filter(move |e| e.distance_2(&q) < r2)
            .map(|e| e.idx)
    }

    /// Count of units strictly within `radius` of `center`.
    pub fn count_within(&self, center: GeoPoint, radius: f64) -> usize {
        self.within(center, radius).count()
    }
}
