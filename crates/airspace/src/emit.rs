//! Emitter seam: hand an ordered outline to some vector-geometry representation.
//!
//! The assembler only promises "ordered coordinate pairs, ring closed
//! implicitly". Anything that turns that into a concrete geometry object
//! implements `GeometryEmitter`; the core never depends on a specific
//! geometry library's type hierarchy.

use std::fmt::Write as _;

use crate::geodesic::GeoPoint;
use crate::shapes::ShapeKind;

/// Turns an ordered outline into a host geometry.
pub trait GeometryEmitter {
    type Output;

    /// `points` are in boundary order; for area kinds the last point connects
    /// back to the first whether or not it repeats it.
    fn emit(&mut self, kind: ShapeKind, points: &[GeoPoint]) -> Self::Output;
}

/// Well-Known Text, `lon lat` axis order.
#[derive(Clone, Copy, Debug, Default)]
pub struct WktEmitter;

impl GeometryEmitter for WktEmitter {
    type Output = String;

    fn emit(&mut self, kind: ShapeKind, points: &[GeoPoint]) -> String {
        if points.is_empty() {
            return if kind.is_area() {
                "POLYGON EMPTY".to_string()
            } else {
                "LINESTRING EMPTY".to_string()
            };
        }
        let mut out = String::new();
        if kind.is_area() {
            out.push_str("POLYGON ((");
            write_coords(&mut out, closed_ring(points));
            out.push_str("))");
        } else {
            out.push_str("LINESTRING (");
            write_coords(&mut out, points.iter().copied());
            out.push(')');
        }
        out
    }
}

/// The outline with its first point appended when it is not already closed.
pub fn closed_ring(points: &[GeoPoint]) -> impl Iterator<Item = GeoPoint> + '_ {
    let closing = match (points.first(), points.last()) {
        (Some(first), Some(last)) if first != last => Some(*first),
        _ => None,
    };
    points.iter().copied().chain(closing)
}

fn write_coords(out: &mut String, coords: impl Iterator<Item = GeoPoint>) {
    for (i, p) in coords.enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let (x, y) = p.xy();
        // Writing into a String cannot fail.
        let _ = write!(out, "{x} {y}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Shape;

    fn pt(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    #[test]
    fn polygon_ring_gets_closed() {
        let shape = Shape::new(
            ShapeKind::Segment,
            vec![pt(0.0, 0.0), pt(1.0, 0.5), pt(0.0, 1.0)],
        );
        assert_eq!(
            shape.emit(&mut WktEmitter),
            "POLYGON ((0 0, 0.5 1, 1 0, 0 0))"
        );
    }

    #[test]
    fn already_closed_ring_is_not_doubled() {
        let pts = vec![pt(0.0, 0.0), pt(1.0, 0.0), pt(1.0, 1.0), pt(0.0, 0.0)];
        assert_eq!(closed_ring(&pts).count(), 4);
    }

    #[test]
    fn lines_stay_open() {
        let wkt = WktEmitter.emit(ShapeKind::Line, &[pt(-10.0, 5.0), pt(10.0, 5.0)]);
        assert_eq!(wkt, "LINESTRING (5 -10, 5 10)");
        assert_eq!(WktEmitter.emit(ShapeKind::Line, &[]), "LINESTRING EMPTY");
    }
}
