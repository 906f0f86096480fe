use super::{Shape, ShapeKind};
use crate::arc::{sample_arc_with, ArcPoints, AzimuthRange};
use crate::error::{GeometryError, Result};
use crate::geodesic::{GeoPoint, GeodesyCfg};

fn check_radius(name: &str, radius_m: f64) -> Result<()> {
    if radius_m.is_finite() && radius_m > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::radius(format!(
            "{name} radius {radius_m} must be finite and > 0"
        )))
    }
}

fn check_radii(inner_m: f64, outer_m: f64) -> Result<()> {
    check_radius("inner", inner_m)?;
    check_radius("outer", outer_m)?;
    if inner_m >= outer_m {
        return Err(GeometryError::radius(format!(
            "inner radius {inner_m} must be less than outer radius {outer_m}"
        )));
    }
    Ok(())
}

fn from_arc(kind: ShapeKind, arc: ArcPoints) -> Shape {
    Shape {
        kind,
        points: arc.points,
        precision: arc.precision,
    }
}

/// Outer arc forward, inner arc backward.
fn annulus(
    cfg: &GeodesyCfg,
    kind: ShapeKind,
    center: GeoPoint,
    inner_m: f64,
    outer_m: f64,
    azimuths: AzimuthRange,
    step_deg: f64,
) -> Result<Shape> {
    check_radii(inner_m, outer_m)?;
    let outer = sample_arc_with(cfg, center, outer_m, azimuths, step_deg)?;
    let inner = sample_arc_with(cfg, center, inner_m, azimuths, step_deg)?.reversed();
    let precision = outer.precision.combine(inner.precision);
    let mut points = outer.points;
    points.extend(inner.points);
    Ok(Shape {
        kind,
        points,
        precision,
    })
}

/// Circle on WGS 84.
pub fn build_circle(center: GeoPoint, radius_m: f64, step_deg: f64) -> Result<Shape> {
    build_circle_with(&GeodesyCfg::default(), center, radius_m, step_deg)
}

/// Full arc from North round to North; `ceil(360/step) + 1` points with
/// first == last.
pub fn build_circle_with(
    cfg: &GeodesyCfg,
    center: GeoPoint,
    radius_m: f64,
    step_deg: f64,
) -> Result<Shape> {
    check_radius("circle", radius_m)?;
    let arc = sample_arc_with(cfg, center, radius_m, AzimuthRange::full(), step_deg)?;
    Ok(from_arc(ShapeKind::Circle, arc))
}

/// Circular sector on WGS 84.
pub fn build_sector(
    center: GeoPoint,
    radius_m: f64,
    azimuths: AzimuthRange,
    step_deg: f64,
) -> Result<Shape> {
    build_sector_with(&GeodesyCfg::default(), center, radius_m, azimuths, step_deg)
}

/// Pie slice: center, arc, center. A full-turn range yields the circle.
pub fn build_sector_with(
    cfg: &GeodesyCfg,
    center: GeoPoint,
    radius_m: f64,
    azimuths: AzimuthRange,
    step_deg: f64,
) -> Result<Shape> {
    check_radius("sector", radius_m)?;
    if azimuths.is_full_turn() {
        return build_circle_with(cfg, center, radius_m, step_deg);
    }
    let arc = sample_arc_with(cfg, center, radius_m, azimuths, step_deg)?;
    let mut points = Vec::with_capacity(arc.len() + 2);
    points.push(center);
    points.extend(arc.points);
    points.push(center);
    Ok(Shape {
        kind: ShapeKind::Sector,
        points,
        precision: arc.precision,
    })
}

/// Circular segment on WGS 84.
pub fn build_segment(
    center: GeoPoint,
    radius_m: f64,
    azimuths: AzimuthRange,
    step_deg: f64,
) -> Result<Shape> {
    build_segment_with(&GeodesyCfg::default(), center, radius_m, azimuths, step_deg)
}

/// The arc alone; the emitter's implicit closure draws the chord.
pub fn build_segment_with(
    cfg: &GeodesyCfg,
    center: GeoPoint,
    radius_m: f64,
    azimuths: AzimuthRange,
    step_deg: f64,
) -> Result<Shape> {
    check_radius("segment", radius_m)?;
    if azimuths.is_full_turn() {
        return build_circle_with(cfg, center, radius_m, step_deg);
    }
    let arc = sample_arc_with(cfg, center, radius_m, azimuths, step_deg)?;
    Ok(from_arc(ShapeKind::Segment, arc))
}

/// Ring on WGS 84.
pub fn build_ring(center: GeoPoint, inner_m: f64, outer_m: f64, step_deg: f64) -> Result<Shape> {
    build_ring_with(&GeodesyCfg::default(), center, inner_m, outer_m, step_deg)
}

/// Annulus as one boundary: outer circle clockwise, then inner circle
/// counter-clockwise, joined along the North seam. Requires `0 < inner < outer`.
pub fn build_ring_with(
    cfg: &GeodesyCfg,
    center: GeoPoint,
    inner_m: f64,
    outer_m: f64,
    step_deg: f64,
) -> Result<Shape> {
    annulus(
        cfg,
        ShapeKind::Ring,
        center,
        inner_m,
        outer_m,
        AzimuthRange::full(),
        step_deg,
    )
}

/// Ring sector on WGS 84.
pub fn build_ring_sector(
    center: GeoPoint,
    inner_m: f64,
    outer_m: f64,
    azimuths: AzimuthRange,
    step_deg: f64,
) -> Result<Shape> {
    build_ring_sector_with(
        &GeodesyCfg::default(),
        center,
        inner_m,
        outer_m,
        azimuths,
        step_deg,
    )
}

/// Slice of an annulus between two azimuths. A full-turn range yields the ring.
pub fn build_ring_sector_with(
    cfg: &GeodesyCfg,
    center: GeoPoint,
    inner_m: f64,
    outer_m: f64,
    azimuths: AzimuthRange,
    step_deg: f64,
) -> Result<Shape> {
    let kind = if azimuths.is_full_turn() {
        ShapeKind::Ring
    } else {
        ShapeKind::RingSector
    };
    annulus(cfg, kind, center, inner_m, outer_m, azimuths, step_deg)
}
