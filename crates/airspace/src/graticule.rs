//! Graticule lines (meridians and parallels) over a lat/lon window.
//!
//! Lines are densified every `DENSIFY_STEP` degrees so they follow the
//! parallel/meridian after any downstream reprojection.

use crate::error::{GeometryError, Result};
use crate::geodesic::GeoPoint;
use crate::shapes::{Shape, ShapeKind};

/// Spacing of vertices along each line, degrees.
pub const DENSIFY_STEP: f64 = 0.1;

/// Upper bound on lines per axis.
pub const MAX_LINES: usize = 10_000;

/// `start..=end` window and the spacing of lines inside it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineRange {
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraticuleCfg {
    pub latitudes: LineRange,
    pub longitudes: LineRange,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraticuleLine {
    /// `LON <deg>` or `LAT <deg>`.
    pub label: String,
    pub shape: Shape,
}

impl GraticuleCfg {
    pub fn validate(&self) -> Result<()> {
        check_range("latitude", &self.latitudes, 90.0)?;
        check_range("longitude", &self.longitudes, 180.0)
    }
}

fn check_range(name: &str, r: &LineRange, limit: f64) -> Result<()> {
    if !(r.start.is_finite() && r.end.is_finite()) {
        return Err(GeometryError::InvalidGraticule {
            reason: format!("{name} bounds must be finite"),
        });
    }
    if r.start >= r.end {
        return Err(GeometryError::InvalidGraticule {
            reason: format!("{name} start {} must be less than end {}", r.start, r.end),
        });
    }
    if r.start < -limit || r.end > limit {
        return Err(GeometryError::InvalidGraticule {
            reason: format!("{name} window exceeds ±{limit}"),
        });
    }
    if !r.step.is_finite() || r.step <= 0.0 {
        return Err(GeometryError::InvalidStep { step: r.step });
    }
    let lines = (r.end - r.start) / r.step + 1.0;
    if lines > MAX_LINES as f64 {
        return Err(GeometryError::InvalidGraticule {
            reason: format!("{name} step {} gives more than {MAX_LINES} lines", r.step),
        });
    }
    Ok(())
}

/// `int((end - start) / DENSIFY_STEP)` evenly spaced values, endpoints included (min 2).
fn densify(start: f64, end: f64) -> Vec<f64> {
    let num = (((end - start) / DENSIFY_STEP + 1e-9) as usize).max(2);
    let span = end - start;
    (0..num)
        .map(|i| {
            if i + 1 == num {
                end
            } else {
                start + span * i as f64 / (num - 1) as f64
            }
        })
        .collect()
}

/// Line positions `start, start+step, … <= end`.
fn positions(r: &LineRange) -> Vec<f64> {
    let count = ((r.end - r.start) / r.step + 1e-9).floor() as usize + 1;
    (0..count)
        .map(|k| (r.start + k as f64 * r.step).min(r.end))
        .collect()
}

/// Meridians at each longitude position, spanning the latitude window.
pub fn meridians(cfg: &GraticuleCfg) -> Result<Vec<GraticuleLine>> {
    cfg.validate()?;
    let lats = densify(cfg.latitudes.start, cfg.latitudes.end);
    positions(&cfg.longitudes)
        .into_iter()
        .map(|lon| {
            let points = lats
                .iter()
                .map(|&lat| GeoPoint::new(lat, lon))
                .collect::<Result<Vec<_>>>()?;
            Ok(GraticuleLine {
                label: format!("LON {lon}"),
                shape: Shape::new(ShapeKind::Line, points),
            })
        })
        .collect()
}

/// Parallels at each latitude position, spanning the longitude window.
pub fn parallels(cfg: &GraticuleCfg) -> Result<Vec<GraticuleLine>> {
    cfg.validate()?;
    let lons = densify(cfg.longitudes.start, cfg.longitudes.end);
    positions(&cfg.latitudes)
        .into_iter()
        .map(|lat| {
            let points = lons
                .iter()
                .map(|&lon| GeoPoint::new(lat, lon))
                .collect::<Result<Vec<_>>>()?;
            Ok(GraticuleLine {
                label: format!("LAT {lat}"),
                shape: Shape::new(ShapeKind::Line, points),
            })
        })
        .collect()
}

/// Meridians followed by parallels.
pub fn graticule(cfg: &GraticuleCfg) -> Result<Vec<GraticuleLine>> {
    let mut lines = meridians(cfg)?;
    lines.extend(parallels(cfg)?);
    tracing::debug!(lines = lines.len(), "graticule generated");
    Ok(lines)
}
