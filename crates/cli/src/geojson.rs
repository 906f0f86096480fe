//! GeoJSON output (RFC 7946): `[lon, lat]` positions, closed polygon rings.

use serde_json::{json, Value};

use airspace::emit::{closed_ring, GeometryEmitter};
use airspace::shapes::{Shape, ShapeKind};
use airspace::GeoPoint;

/// Emits GeoJSON geometry objects.
#[derive(Clone, Copy, Debug, Default)]
pub struct GeoJsonEmitter;

fn position(p: GeoPoint) -> Value {
    let (x, y) = p.xy();
    json!([x, y])
}

impl GeometryEmitter for GeoJsonEmitter {
    type Output = Value;

    fn emit(&mut self, kind: ShapeKind, points: &[GeoPoint]) -> Value {
        if kind.is_area() {
            let ring: Vec<Value> = closed_ring(points).map(position).collect();
            json!({ "type": "Polygon", "coordinates": [ring] })
        } else {
            let line: Vec<Value> = points.iter().copied().map(position).collect();
            json!({ "type": "LineString", "coordinates": line })
        }
    }
}

/// One named shape as a Feature.
pub fn feature(name: &str, shape: &Shape) -> Value {
    json!({
        "type": "Feature",
        "properties": {
            "name": name,
            "kind": shape.kind.to_string(),
            "degraded": shape.precision.is_degraded(),
        },
        "geometry": shape.emit(&mut GeoJsonEmitter),
    })
}

pub fn feature_collection(features: Vec<Value>) -> Value {
    json!({ "type": "FeatureCollection", "features": features })
}
