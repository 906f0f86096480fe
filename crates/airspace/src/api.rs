//! Curated surface for callers that want one import path.
//!
//! Groups the solver, sampler, assembler and the plain-vertex helpers; the
//! module paths stay available for finer-grained imports.

// Geodesic solver
pub use crate::ellipsoid::Ellipsoid;
pub use crate::geodesic::{
    direct, normalize_azimuth, solve, wrap_longitude, Destination, GeoPoint, GeodesyCfg,
    Precision,
};
// Arc sampling
pub use crate::arc::{sample_arc, sample_arc_with, sweep_azimuths, ArcPoints, AzimuthRange};
// Shapes
pub use crate::shapes::{
    build_circle, build_circle_with, build_ring, build_ring_sector, build_ring_sector_with,
    build_ring_with, build_sector, build_sector_with, build_segment, build_segment_with, Shape,
    ShapeKind,
};
// Emission
pub use crate::emit::{closed_ring, GeometryEmitter, WktEmitter};
// Coordinate tables and graticules
pub use crate::dms::{parse_latitude, parse_longitude, parse_point};
pub use crate::graticule::{graticule, meridians, parallels, GraticuleCfg, GraticuleLine, LineRange};
pub use crate::polygons::{
    assemble_polygons, NamedPolygon, PolygonReport, SkippedPolygon, VertexRow,
};
// Errors
pub use crate::error::{Axis, GeometryError};

/// Circle on WGS 84 straight to WKT.
///
/// Pre: `radius_m > 0`, `step_deg ∈ (0, 360]`.
/// Post: `POLYGON ((lon lat, …))` with the ring closed.
pub fn circle_wkt(center: GeoPoint, radius_m: f64, step_deg: f64) -> Result<String, GeometryError> {
    Ok(build_circle(center, radius_m, step_deg)?.emit(&mut WktEmitter))
}
