use super::*;
use crate::arc::AzimuthRange;
use crate::error::GeometryError;
use crate::geodesic::{solve, GeoPoint};
use proptest::prelude::*;

fn epwa() -> GeoPoint {
    GeoPoint::new(52.1657, 20.9671).unwrap()
}

/// Great-circle distance on the mean sphere; plenty to order kilometre-scale radii.
fn haversine_m(a: GeoPoint, b: GeoPoint) -> f64 {
    let (p1, p2) = (a.lat().to_radians(), b.lat().to_radians());
    let dp = p2 - p1;
    let dl = (b.lon() - a.lon()).to_radians();
    let h = (dp / 2.0).sin().powi(2) + p1.cos() * p2.cos() * (dl / 2.0).sin().powi(2);
    2.0 * 6_371_008.8 * h.sqrt().asin()
}

#[test]
fn circle_is_closed_with_expected_count() {
    for step in [1.0, 7.0, 10.0, 45.0] {
        let c = build_circle(epwa(), 5_000.0, step).unwrap();
        assert_eq!(c.kind, ShapeKind::Circle);
        assert_eq!(c.len(), (360.0_f64 / step).ceil() as usize + 1);
        assert!(c.is_closed_eps(1e-12));
        for p in &c.points {
            assert!((haversine_m(epwa(), *p) - 5_000.0).abs() < 40.0);
        }
    }
}

#[test]
fn circle_rejects_non_positive_radius() {
    for r in [0.0, -1.0, f64::NAN] {
        assert!(matches!(
            build_circle(epwa(), r, 10.0),
            Err(GeometryError::InvalidRadius { .. })
        ));
    }
}

#[test]
fn sector_45_to_135() {
    let r = AzimuthRange::new(45.0, 135.0).unwrap();
    let s = build_sector(epwa(), 10_000.0, r, 10.0).unwrap();
    assert_eq!(s.kind, ShapeKind::Sector);
    assert_eq!(s.len(), 12);
    assert_eq!(s.points[0], epwa());
    assert_eq!(s.points[11], epwa());
    assert_eq!(s.points[1], solve(epwa(), 45.0, 10_000.0).unwrap().point);
    assert_eq!(s.points[10], solve(epwa(), 135.0, 10_000.0).unwrap().point);
    assert!(s.is_closed_eps(0.0));
}

#[test]
fn degenerate_sector_is_the_circle() {
    let r = AzimuthRange::new(90.0, 90.0).unwrap();
    let s = build_sector(epwa(), 3_000.0, r, 5.0).unwrap();
    assert_eq!(s, build_circle(epwa(), 3_000.0, 5.0).unwrap());
    let seg = build_segment(epwa(), 3_000.0, r, 5.0).unwrap();
    assert_eq!(seg.kind, ShapeKind::Circle);
}

#[test]
fn wraparound_sector_walks_through_north() {
    let r = AzimuthRange::new(350.0, 10.0).unwrap();
    let s = build_sector(epwa(), 8_000.0, r, 5.0).unwrap();
    assert_eq!(s.len(), 7);
    let expected: Vec<GeoPoint> = [350.0, 355.0, 0.0, 5.0, 10.0]
        .iter()
        .map(|&az| solve(epwa(), az, 8_000.0).unwrap().point)
        .collect();
    assert_eq!(&s.points[1..6], expected.as_slice());
    // The arc stays north of the center the whole way.
    assert!(s.points[1..6].iter().all(|p| p.lat() > epwa().lat()));
}

#[test]
fn sector_rejects_bad_step() {
    let r = AzimuthRange::new(0.0, 90.0).unwrap();
    assert!(matches!(
        build_sector(epwa(), 1_000.0, r, 0.0),
        Err(GeometryError::InvalidStep { .. })
    ));
}

#[test]
fn segment_is_the_bare_arc() {
    let r = AzimuthRange::new(0.0, 180.0).unwrap();
    let s = build_segment(epwa(), 2_000.0, r, 15.0).unwrap();
    assert_eq!(s.kind, ShapeKind::Segment);
    assert_eq!(s.len(), 13);
    assert!(!s.points.contains(&epwa()));
}

#[test]
fn ring_outer_farther_than_inner() {
    let ring = build_ring(epwa(), 1_000.0, 5_000.0, 10.0).unwrap();
    assert_eq!(ring.kind, ShapeKind::Ring);
    let half = ring.len() / 2;
    assert_eq!(half, 37);
    let (outer, inner) = ring.points.split_at(half);
    let min_outer = outer
        .iter()
        .map(|p| haversine_m(epwa(), *p))
        .fold(f64::INFINITY, f64::min);
    let max_inner = inner
        .iter()
        .map(|p| haversine_m(epwa(), *p))
        .fold(0.0, f64::max);
    assert!(min_outer > max_inner);
    // Outer starts at North, inner is walked back to North.
    assert_eq!(outer[0], solve(epwa(), 0.0, 5_000.0).unwrap().point);
    assert_eq!(inner[half - 1], solve(epwa(), 0.0, 1_000.0).unwrap().point);
}

#[test]
fn ring_rejects_bad_radii() {
    for (inner, outer) in [(5_000.0, 1_000.0), (1_000.0, 1_000.0), (0.0, 1_000.0), (-1.0, 5.0)] {
        assert!(matches!(
            build_ring(epwa(), inner, outer, 10.0),
            Err(GeometryError::InvalidRadius { .. })
        ));
    }
}

#[test]
fn ring_sector_slices_the_annulus() {
    let r = AzimuthRange::new(270.0, 90.0).unwrap();
    let s = build_ring_sector(epwa(), 2_000.0, 4_000.0, r, 30.0).unwrap();
    assert_eq!(s.kind, ShapeKind::RingSector);
    assert_eq!(s.len(), 14);
    assert_eq!(s.points[0], solve(epwa(), 270.0, 4_000.0).unwrap().point);
    assert_eq!(s.points[6], solve(epwa(), 90.0, 4_000.0).unwrap().point);
    assert_eq!(s.points[7], solve(epwa(), 90.0, 2_000.0).unwrap().point);
    assert_eq!(s.points[13], solve(epwa(), 270.0, 2_000.0).unwrap().point);

    let full = build_ring_sector(epwa(), 2_000.0, 4_000.0, AzimuthRange::full(), 30.0).unwrap();
    assert_eq!(full, build_ring(epwa(), 2_000.0, 4_000.0, 30.0).unwrap());
}

#[test]
fn shapes_near_pole_and_antimeridian_stay_in_bounds() {
    let pole = GeoPoint::new(89.9, 0.0).unwrap();
    let dateline = GeoPoint::new(-10.0, 179.99).unwrap();
    for c in [pole, dateline] {
        let shape = build_ring(c, 10_000.0, 50_000.0, 3.0).unwrap();
        assert!(shape
            .points
            .iter()
            .all(|p| (-90.0..=90.0).contains(&p.lat()) && (-180.0..=180.0).contains(&p.lon())));
    }
}

proptest! {
    #[test]
    fn prop_sector_count_and_closure(
        start in 0.0..360.0f64,
        end in 0.0..360.0f64,
        step in 1.0..90.0f64,
        radius in 100.0..200_000.0f64,
    ) {
        let r = AzimuthRange::new(start, end).unwrap();
        let s = build_sector(epwa(), radius, r, step).unwrap();
        prop_assert!(s.is_closed_eps(1e-9));
        if !r.is_full_turn() {
            prop_assert_eq!(s.points[0], epwa());
            prop_assert!(s.len() >= 4);
        }
    }
}
