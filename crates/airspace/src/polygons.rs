//! Named polygons from coordinate tables.
//!
//! Each row carries a polygon name (blank rows inherit the previous name), a
//! latitude and a longitude in any form `dms` accepts. Rows are grouped by
//! name in first-appearance order. A polygon with any unreadable coordinate, or
//! with fewer than three vertices, is dropped as a whole and reported.

use std::collections::HashMap;

use crate::dms::parse_point;
use crate::error::GeometryError;
use crate::geodesic::GeoPoint;
use crate::shapes::{Shape, ShapeKind};

/// One table row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VertexRow {
    pub name: Option<String>,
    pub lat: String,
    pub lon: String,
}

impl VertexRow {
    pub fn new(name: Option<&str>, lat: &str, lon: &str) -> Self {
        Self {
            name: name.map(str::to_string),
            lat: lat.to_string(),
            lon: lon.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NamedPolygon {
    pub name: String,
    pub shape: Shape,
}

/// Outcome of grouping: the polygons that parsed and the names that did not.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PolygonReport {
    pub polygons: Vec<NamedPolygon>,
    pub skipped: Vec<SkippedPolygon>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SkippedPolygon {
    pub name: String,
    pub errors: Vec<GeometryError>,
}

/// Fewest vertices that enclose an area.
const MIN_VERTICES: usize = 3;

#[derive(Default)]
struct Group {
    name: String,
    points: Vec<GeoPoint>,
    errors: Vec<GeometryError>,
}

/// Group rows into polygons.
///
/// Rows before the first named row have no polygon to belong to and are
/// reported under the empty name.
pub fn assemble_polygons<I>(rows: I) -> PolygonReport
where
    I: IntoIterator<Item = VertexRow>,
{
    let mut groups: Vec<Group> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut current = String::new();

    for row in rows {
        if let Some(name) = row.name.filter(|n| !n.trim().is_empty()) {
            current = name.trim().to_string();
        }
        let slot = *index.entry(current.clone()).or_insert_with(|| {
            groups.push(Group {
                name: current.clone(),
                ..Group::default()
            });
            groups.len() - 1
        });
        let group = &mut groups[slot];
        match parse_point(&row.lat, &row.lon) {
            Ok(p) => group.points.push(p),
            Err(e) => {
                tracing::warn!(polygon = %group.name, error = %e, "coordinate rejected");
                group.errors.push(e);
            }
        }
    }

    let mut report = PolygonReport::default();
    for mut group in groups {
        if group.errors.is_empty() && group.points.len() < MIN_VERTICES {
            group.errors.push(GeometryError::TooFewVertices {
                vertices: group.points.len(),
            });
        }
        if group.name.is_empty() || !group.errors.is_empty() {
            report.skipped.push(SkippedPolygon {
                name: group.name,
                errors: group.errors,
            });
        } else {
            report.polygons.push(NamedPolygon {
                name: group.name,
                shape: Shape::new(ShapeKind::Polygon, group.points),
            });
        }
    }
    if !report.skipped.is_empty() {
        let names: Vec<&str> = report.skipped.iter().map(|s| s.name.as_str()).collect();
        tracing::warn!(skipped = %names.join(","), "polygons skipped");
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_fills_and_groups_in_order() {
        let rows = vec![
            VertexRow::new(Some("EPR1"), "520000N", "0200000E"),
            VertexRow::new(None, "520000N", "0210000E"),
            VertexRow::new(Some(""), "530000N", "0210000E"),
            VertexRow::new(Some("EPD2"), "500000N", "0190000E"),
            VertexRow::new(None, "510000N", "0190000E"),
            VertexRow::new(None, "510000N", "0200000E"),
        ];
        let report = assemble_polygons(rows);
        assert!(report.skipped.is_empty());
        let names: Vec<&str> = report.polygons.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["EPR1", "EPD2"]);
        assert_eq!(report.polygons[0].shape.len(), 3);
        assert_eq!(report.polygons[0].shape.kind, ShapeKind::Polygon);
        assert_eq!(report.polygons[1].shape.points[2].lon(), 20.0);
    }

    #[test]
    fn bad_coordinate_skips_whole_polygon() {
        let rows = vec![
            VertexRow::new(Some("GOOD"), "520000N", "0200000E"),
            VertexRow::new(None, "520000N", "0210000E"),
            VertexRow::new(None, "530000N", "0210000E"),
            VertexRow::new(Some("BAD"), "526000N", "0190000E"),
            VertexRow::new(None, "510000N", "0190000E"),
            VertexRow::new(None, "510000N", "0200000E"),
        ];
        let report = assemble_polygons(rows);
        assert_eq!(report.polygons.len(), 1);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].name, "BAD");
        assert_eq!(report.skipped[0].errors.len(), 1);
    }

    #[test]
    fn polygons_with_fewer_than_three_vertices_are_skipped() {
        let rows = vec![
            VertexRow::new(Some("LINE"), "520000N", "0200000E"),
            VertexRow::new(None, "520000N", "0210000E"),
            VertexRow::new(Some("DOT"), "510000N", "0190000E"),
            VertexRow::new(Some("TRI"), "500000N", "0190000E"),
            VertexRow::new(None, "510000N", "0190000E"),
            VertexRow::new(None, "510000N", "0200000E"),
        ];
        let report = assemble_polygons(rows);
        let kept: Vec<&str> = report.polygons.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(kept, vec!["TRI"]);
        assert_eq!(report.skipped.len(), 2);
        assert_eq!(report.skipped[0].name, "LINE");
        assert_eq!(
            report.skipped[0].errors,
            vec![GeometryError::TooFewVertices { vertices: 2 }]
        );
        assert_eq!(
            report.skipped[1].errors,
            vec![GeometryError::TooFewVertices { vertices: 1 }]
        );
    }

    #[test]
    fn rows_without_any_name_are_reported() {
        let report = assemble_polygons(vec![VertexRow::new(None, "520000N", "0200000E")]);
        assert!(report.polygons.is_empty());
        assert_eq!(report.skipped[0].name, "");
    }
}
