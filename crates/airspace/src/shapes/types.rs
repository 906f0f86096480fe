use std::fmt;

use crate::emit::GeometryEmitter;
use crate::geodesic::{GeoPoint, Precision};

/// What a point sequence outlines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Sector,
    Segment,
    Ring,
    RingSector,
    /// Plain vertex list (e.g. read from a coordinate table).
    Polygon,
    /// Open polyline (e.g. a graticule meridian).
    Line,
}

impl ShapeKind {
    /// Everything but `Line` is an area whose ring closes implicitly.
    #[inline]
    pub fn is_area(&self) -> bool {
        !matches!(self, ShapeKind::Line)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Sector => "sector",
            ShapeKind::Segment => "segment",
            ShapeKind::Ring => "ring",
            ShapeKind::RingSector => "ring_sector",
            ShapeKind::Polygon => "polygon",
            ShapeKind::Line => "line",
        };
        f.write_str(name)
    }
}

/// Ordered outline ready for a `GeometryEmitter`.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub points: Vec<GeoPoint>,
    pub precision: Precision,
}

impl Shape {
    pub fn new(kind: ShapeKind, points: Vec<GeoPoint>) -> Self {
        Self {
            kind,
            points,
            precision: Precision::Full,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First and last point coincide within `eps` degrees.
    pub fn is_closed_eps(&self, eps: f64) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(a), Some(b)) => {
                (a.lat() - b.lat()).abs() <= eps && (a.lon() - b.lon()).abs() <= eps
            }
            _ => false,
        }
    }

    pub fn emit<E: GeometryEmitter>(&self, emitter: &mut E) -> E::Output {
        emitter.emit(self.kind, &self.points)
    }
}
