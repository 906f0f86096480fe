//! Geodetic geometry construction for airspace definitions.
//!
//! Points are computed on a reference ellipsoid (Vincenty's direct solution),
//! sampled along arcs around a center, and assembled into closed outlines:
//! circles, sectors, segments, rings and ring sectors.
//!
//! Layout
//! - `geodesic`: `GeoPoint` and the direct-problem solver.
//! - `arc`: azimuth ranges and arc sampling.
//! - `shapes`: the shape assembler.
//! - `emit`: the emitter seam towards vector-geometry representations.
//! - `dms`, `polygons`, `graticule`: coordinate parsing and plain-vertex geometries.

pub mod api;
pub mod arc;
pub mod dms;
pub mod ellipsoid;
pub mod emit;
pub mod error;
pub mod geodesic;
pub mod graticule;
pub mod polygons;
pub mod shapes;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use ellipsoid::Ellipsoid;
pub use error::GeometryError;
pub use geodesic::{GeoPoint, GeodesyCfg};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::arc::{sample_arc, ArcPoints, AzimuthRange};
    pub use crate::emit::{GeometryEmitter, WktEmitter};
    pub use crate::geodesic::{direct, solve, Destination, GeoPoint, GeodesyCfg, Precision};
    pub use crate::shapes::{
        build_circle, build_ring, build_ring_sector, build_sector, build_segment, Shape,
        ShapeKind,
    };
    pub use crate::{Ellipsoid, GeometryError};
}
