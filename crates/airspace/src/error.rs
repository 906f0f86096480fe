//! Error type shared by the solver, sampler and assembler.

use std::fmt;

/// Input rejected before any geometry is produced.
///
/// Every variant is a configuration problem on the caller side; retrying with
/// the same input yields the same error.
#[derive(Clone, Debug, PartialEq)]
pub enum GeometryError {
    /// Zero/negative/non-finite radius, or `inner >= outer` for a ring.
    InvalidRadius { reason: String },
    /// Non-finite or out-of-domain azimuth.
    InvalidAzimuthRange { reason: String },
    /// The iterative solver did not converge and the caller asked for full precision.
    SolverNonConvergence { iterations: usize },
    /// Step outside `(0, 360]`, or too fine for `arc::MAX_SAMPLES`.
    InvalidStep { step: f64 },
    /// Latitude/longitude outside its domain, or an unparseable coordinate string.
    InvalidCoordinate { axis: Axis, input: String },
    /// Degenerate graticule window.
    InvalidGraticule { reason: String },
    /// A polygon outline with fewer than three vertices.
    TooFewVertices { vertices: usize },
}

/// Which coordinate a `InvalidCoordinate` refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => write!(f, "latitude"),
            Axis::Longitude => write!(f, "longitude"),
        }
    }
}

impl GeometryError {
    pub(crate) fn radius(reason: impl Into<String>) -> Self {
        Self::InvalidRadius {
            reason: reason.into(),
        }
    }

    pub(crate) fn azimuth(reason: impl Into<String>) -> Self {
        Self::InvalidAzimuthRange {
            reason: reason.into(),
        }
    }

    pub(crate) fn coordinate(axis: Axis, input: impl Into<String>) -> Self {
        Self::InvalidCoordinate {
            axis,
            input: input.into(),
        }
    }
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRadius { reason } => write!(f, "invalid radius: {reason}"),
            Self::InvalidAzimuthRange { reason } => write!(f, "invalid azimuth range: {reason}"),
            Self::SolverNonConvergence { iterations } => write!(
                f,
                "geodesic solver did not converge after {iterations} iterations"
            ),
            Self::InvalidStep { step } => write!(
                f,
                "invalid step {step}: must be in (0, 360] degrees and give at most {} samples",
                crate::arc::MAX_SAMPLES
            ),
            Self::InvalidCoordinate { axis, input } => {
                write!(f, "{axis} not supported format/coordinate value error: {input}")
            }
            Self::InvalidGraticule { reason } => write!(f, "invalid graticule: {reason}"),
            Self::TooFewVertices { vertices } => {
                write!(f, "polygon needs at least 3 vertices, got {vertices}")
            }
        }
    }
}

impl std::error::Error for GeometryError {}

pub type Result<T> = std::result::Result<T, GeometryError>;
