//! Value types for the geodesic solver.

use std::fmt;

use crate::ellipsoid::Ellipsoid;
use crate::error::{Axis, GeometryError, Result};

/// Geographic position in decimal degrees.
///
/// Always within `lat ∈ [-90, 90]`, `lon ∈ [-180, 180]`; construct through
/// `GeoPoint::new` to have that checked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(GeometryError::coordinate(Axis::Latitude, lat.to_string()));
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(GeometryError::coordinate(Axis::Longitude, lon.to_string()));
        }
        Ok(Self { lat, lon })
    }

    /// Clamp latitude and wrap longitude. Callers guarantee finite input.
    #[inline]
    pub(crate) fn normalized(lat: f64, lon: f64) -> Self {
        debug_assert!(lat.is_finite() && lon.is_finite());
        Self {
            lat: lat.clamp(-90.0, 90.0),
            lon: wrap_longitude(lon),
        }
    }

    #[inline]
    pub fn lat(&self) -> f64 {
        self.lat
    }

    #[inline]
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// `(lon, lat)`, the axis order of WKT and GeoJSON.
    #[inline]
    pub fn xy(&self) -> (f64, f64) {
        (self.lon, self.lat)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.8}, {:.8})", self.lat, self.lon)
    }
}

/// Whether a destination came from the converged ellipsoidal solution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Precision {
    #[default]
    Full,
    /// Spherical closed-form fallback; metre-level errors at airspace radii.
    Degraded,
}

impl Precision {
    /// Degraded wins.
    #[inline]
    pub fn combine(self, other: Precision) -> Precision {
        if self == Precision::Degraded || other == Precision::Degraded {
            Precision::Degraded
        } else {
            Precision::Full
        }
    }

    #[inline]
    pub fn is_degraded(&self) -> bool {
        *self == Precision::Degraded
    }
}

/// Result of the direct problem.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Destination {
    pub point: GeoPoint,
    /// Azimuth of the geodesic at `point`, in [0, 360).
    pub final_azimuth: f64,
    pub precision: Precision,
    /// Vincenty iterations spent (0 for the zero-distance shortcut).
    pub iterations: usize,
}

impl Destination {
    /// Turn a degraded result into `SolverNonConvergence`.
    pub fn require_full_precision(self) -> Result<Self> {
        match self.precision {
            Precision::Full => Ok(self),
            Precision::Degraded => Err(GeometryError::SolverNonConvergence {
                iterations: self.iterations,
            }),
        }
    }
}

/// Solver configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeodesyCfg {
    pub ellipsoid: Ellipsoid,
    /// Convergence threshold on the auxiliary-sphere arc length σ (radians).
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for GeodesyCfg {
    fn default() -> Self {
        Self {
            ellipsoid: Ellipsoid::WGS84,
            tolerance: 1e-12,
            max_iterations: 200,
        }
    }
}

impl GeodesyCfg {
    pub fn with_ellipsoid(ellipsoid: Ellipsoid) -> Self {
        Self {
            ellipsoid,
            ..Self::default()
        }
    }
}

/// Azimuth into [0, 360).
#[inline]
pub fn normalize_azimuth(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360.
    if r >= 360.0 {
        0.0
    } else {
        r
    }
}

/// Longitude into [-180, 180).
#[inline]
pub fn wrap_longitude(deg: f64) -> f64 {
    if (-180.0..180.0).contains(&deg) {
        return deg;
    }
    let r = (deg + 180.0).rem_euclid(360.0);
    if r >= 360.0 {
        -180.0
    } else {
        r - 180.0
    }
}
