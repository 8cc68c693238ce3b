//! Planar coordinate and force-vector types.
//!
//! Coordinates are raw latitude/longitude degrees treated as a flat plane —
//! no projection correction.  At the service area's scale (tens of km) the
//! distortion is irrelevant, and every gain constant in the motion policy is
//! calibrated against these raw degree distances.

use std::ops::{Add, AddAssign, Mul};

/// A geographic coordinate treated as a point on a flat plane.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Squared planar distance.  Cheaper than [`distance`](Self::distance)
    /// for comparisons; the nearest-station scan uses it exclusively.
    #[inline]
    pub fn distance_sq(self, other: GeoPoint) -> f64 {
        let d_lat = self.lat - other.lat;
        let d_lng = self.lng - other.lng;
        d_lat * d_lat + d_lng * d_lng
    }

    /// Planar Euclidean distance in degree units.
    #[inline]
    pub fn distance(self, other: GeoPoint) -> f64 {
        self.distance_sq(other).sqrt()
    }

    /// The displacement vector from `self` to `other`.
    #[inline]
    pub fn toward(self, other: GeoPoint) -> GeoVec {
        GeoVec {
            d_lat: other.lat - self.lat,
            d_lng: other.lng - self.lng,
        }
    }

    /// The point reached by applying displacement `v`.
    #[inline]
    pub fn offset(self, v: GeoVec) -> GeoPoint {
        GeoPoint {
            lat: self.lat + v.d_lat,
            lng: self.lng + v.d_lng,
        }
    }

    /// `true` if both coordinates are finite numbers.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}

// ── GeoVec ────────────────────────────────────────────────────────────────────

/// A 2-component displacement (or force) in planar degree units.
///
/// Sub-forces in the motion policy are `GeoVec`s composed additively; the
/// unit state machine applies the final sum as a per-tick displacement.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoVec {
    pub d_lat: f64,
    pub d_lng: f64,
}

impl GeoVec {
    pub const ZERO: GeoVec = GeoVec { d_lat: 0.0, d_lng: 0.0 };

    #[inline]
    pub fn new(d_lat: f64, d_lng: f64) -> Self {
        Self { d_lat, d_lng }
    }

    /// Euclidean norm of the displacement.
    #[inline]
    pub fn norm(self) -> f64 {
        (self.d_lat * self.d_lat + self.d_lng * self.d_lng).sqrt()
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.d_lat == 0.0 && self.d_lng == 0.0
    }
}

impl Add for GeoVec {
    type Output = GeoVec;
    #[inline]
    fn add(self, rhs: GeoVec) -> GeoVec {
        GeoVec {
            d_lat: self.d_lat + rhs.d_lat,
            d_lng: self.d_lng + rhs.d_lng,
        }
    }
}

impl AddAssign for GeoVec {
    #[inline]
    fn add_assign(&mut self, rhs: GeoVec) {
        self.d_lat += rhs.d_lat;
        self.d_lng += rhs.d_lng;
    }
}

impl Mul<f64> for GeoVec {
    type Output = GeoVec;
    #[inline]
    fn mul(self, k: f64) -> GeoVec {
        GeoVec {
            d_lat: self.d_lat * k,
            d_lng: self.d_lng * k,
        }
    }
}
