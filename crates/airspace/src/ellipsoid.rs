//! Reference ellipsoids.
//!
//! An ellipsoid of revolution is fully described by its semi-major axis `a`
//! and flattening `f`; everything else is derived.

/// Ellipsoid of revolution (semi-major axis in metres, flattening as a ratio).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    pub a: f64,
    pub f: f64,
}

impl Ellipsoid {
    /// WGS 84 primary parameters.
    pub const WGS84: Ellipsoid = Ellipsoid {
        a: 6_378_137.0,
        f: 1.0 / 298.257_223_563,
    };

    /// GRS 80. Differs from WGS 84 by well under a millimetre at the surface.
    pub const GRS80: Ellipsoid = Ellipsoid {
        a: 6_378_137.0,
        f: 1.0 / 298.257_222_101,
    };

    #[inline]
    pub const fn new(a: f64, f: f64) -> Self {
        Self { a, f }
    }

    /// Semi-minor axis `b = a (1 - f)`.
    #[inline]
    pub fn b(&self) -> f64 {
        self.a * (1.0 - self.f)
    }

    /// Second eccentricity squared `(a² - b²) / b²`.
    #[inline]
    pub fn ep2(&self) -> f64 {
        let b = self.b();
        (self.a * self.a - b * b) / (b * b)
    }

    /// Mean radius `(2a + b) / 3` (IUGG), used by the spherical fallback.
    #[inline]
    pub fn mean_radius(&self) -> f64 {
        (2.0 * self.a + self.b()) / 3.0
    }

    /// Accepts `a > 0` and `0 <= f < 1`.
    pub fn is_valid(&self) -> bool {
        self.a.is_finite() && self.a > 0.0 && self.f.is_finite() && (0.0..1.0).contains(&self.f)
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::WGS84
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wgs84_derived_axes() {
        let e = Ellipsoid::WGS84;
        assert!((e.b() - 6_356_752.314_245_179).abs() < 1e-6);
        assert!((e.mean_radius() - 6_371_008.771_415).abs() < 1e-3);
        assert!(e.is_valid());
    }

    #[test]
    fn sphere_has_no_eccentricity() {
        let s = Ellipsoid::new(6_371_000.0, 0.0);
        assert_eq!(s.b(), s.a);
        assert_eq!(s.ep2(), 0.0);
        assert!(!Ellipsoid::new(-1.0, 0.0).is_valid());
        assert!(!Ellipsoid::new(1.0, 1.0).is_valid());
    }
}
