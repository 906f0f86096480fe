use super::AzimuthRange;
use crate::error::{GeometryError, Result};
use crate::geodesic::{direct, normalize_azimuth, GeoPoint, GeodesyCfg, Precision};

/// Slack when counting steps, so `sweep/step` landing a hair above an integer
/// does not add a near-duplicate sample.
const STEP_SNAP: f64 = 1e-9;

/// Upper bound on samples per arc; finer steps are rejected as `InvalidStep`.
pub const MAX_SAMPLES: usize = 1_000_000;

/// Boundary points of an arc, in angular order from start to end azimuth.
#[derive(Clone, Debug, PartialEq)]
pub struct ArcPoints {
    pub points: Vec<GeoPoint>,
    /// Sampled azimuths in [0, 360), parallel to `points`.
    pub azimuths: Vec<f64>,
    pub precision: Precision,
}

impl ArcPoints {
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Walk the arc from end back to start.
    pub fn reversed(mut self) -> Self {
        self.points.reverse();
        self.azimuths.reverse();
        self
    }
}

/// Sample an arc on WGS 84.
pub fn sample_arc(
    center: GeoPoint,
    radius_m: f64,
    azimuths: AzimuthRange,
    step_deg: f64,
) -> Result<ArcPoints> {
    sample_arc_with(&GeodesyCfg::default(), center, radius_m, azimuths, step_deg)
}

/// Sample an arc of radius `radius_m` around `center`.
///
/// Pre: `step_deg ∈ (0, 360]` with at most `MAX_SAMPLES` samples over the
/// sweep, `radius_m >= 0` (0 repeats the center).
/// Post: at least two points; first at `azimuths.start()`, last at
/// `azimuths.end()`; azimuths increase monotonically (modulo 360).
pub fn sample_arc_with(
    cfg: &GeodesyCfg,
    center: GeoPoint,
    radius_m: f64,
    azimuths: AzimuthRange,
    step_deg: f64,
) -> Result<ArcPoints> {
    if !radius_m.is_finite() || radius_m < 0.0 {
        return Err(GeometryError::radius(format!(
            "arc radius {radius_m} must be finite and >= 0"
        )));
    }
    let walk = sweep_azimuths(azimuths, step_deg)?;
    let mut points = Vec::with_capacity(walk.len());
    let mut precision = Precision::Full;
    for &az in &walk {
        let dest = direct(cfg, center, az, radius_m)?;
        precision = precision.combine(dest.precision);
        points.push(dest.point);
    }
    tracing::debug!(
        radius_m,
        start = azimuths.start(),
        end = azimuths.end(),
        step_deg,
        samples = points.len(),
        "sampled arc"
    );
    Ok(ArcPoints {
        points,
        azimuths: walk,
        precision,
    })
}

/// Azimuths visited by an arc walk: `start + i*step` for each whole step
/// strictly inside the sweep, then exactly `end`. Normalized into [0, 360).
pub fn sweep_azimuths(azimuths: AzimuthRange, step_deg: f64) -> Result<Vec<f64>> {
    if !step_deg.is_finite() || step_deg <= 0.0 || step_deg > 360.0 {
        return Err(GeometryError::InvalidStep { step: step_deg });
    }
    let steps = ((azimuths.sweep() / step_deg) - STEP_SNAP).ceil().max(1.0);
    // One extra sample for the exact end.
    if steps + 1.0 > MAX_SAMPLES as f64 {
        return Err(GeometryError::InvalidStep { step: step_deg });
    }
    let steps = steps as usize;
    let mut walk = Vec::with_capacity(steps + 1);
    for i in 0..steps {
        walk.push(normalize_azimuth(azimuths.start() + i as f64 * step_deg));
    }
    walk.push(azimuths.end());
    Ok(walk)
}
