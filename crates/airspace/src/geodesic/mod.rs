//! Direct geodetic problem on a reference ellipsoid.
//!
//! Purpose
//! - Given a start point, an initial azimuth and a distance, find the
//!   destination point and the azimuth of the geodesic on arrival.
//! - Ellipsoidal (Vincenty) rather than spherical: airspace boundaries are
//!   published against WGS 84 coordinates, and a sphere is off by metres to
//!   kilometres at the radii involved.
//!
//! Numerics
//! - The Vincenty iteration is bounded by `GeodesyCfg::max_iterations`. If it
//!   does not reach `GeodesyCfg::tolerance`, or produces a non-finite value,
//!   the solver switches to a closed-form spherical solution and tags the
//!   result `Precision::Degraded`.
//! - Longitudes are wrapped into [-180, 180); a path over a pole comes out
//!   with the longitude shifted by 180° and the final azimuth flipped, as the
//!   ellipsoidal formulation yields naturally.

mod direct;
mod types;

pub use direct::{direct, solve};
pub use types::{normalize_azimuth, wrap_longitude, Destination, GeoPoint, GeodesyCfg, Precision};
