//! Vincenty's direct solution plus the spherical fallback.
//!
//! Reference: T. Vincenty, "Direct and inverse solutions of geodesics on the
//! ellipsoid with application of nested equations", Survey Review XXIII (1975).

use nalgebra::Vector3;

use super::types::{normalize_azimuth, Destination, GeoPoint, GeodesyCfg, Precision};
use crate::error::{GeometryError, Result};

/// Direct problem on WGS 84 with default tolerances.
pub fn solve(start: GeoPoint, azimuth_deg: f64, distance_m: f64) -> Result<Destination> {
    direct(&GeodesyCfg::default(), start, azimuth_deg, distance_m)
}

/// Direct problem: destination at `distance_m` along `azimuth_deg` from `start`.
///
/// Pre: `azimuth_deg` finite (any value, normalized into [0, 360)),
/// `distance_m` finite and `>= 0`.
/// Post: destination within coordinate bounds; `Precision::Degraded` if the
/// spherical fallback was used.
pub fn direct(
    cfg: &GeodesyCfg,
    start: GeoPoint,
    azimuth_deg: f64,
    distance_m: f64,
) -> Result<Destination> {
    if !azimuth_deg.is_finite() {
        return Err(GeometryError::azimuth(format!(
            "azimuth {azimuth_deg} is not finite"
        )));
    }
    if !distance_m.is_finite() || distance_m < 0.0 {
        return Err(GeometryError::radius(format!(
            "distance {distance_m} must be finite and >= 0"
        )));
    }
    let azimuth = normalize_azimuth(azimuth_deg);
    if distance_m == 0.0 {
        return Ok(Destination {
            point: start,
            final_azimuth: azimuth,
            precision: Precision::Full,
            iterations: 0,
        });
    }
    match vincenty(cfg, start, azimuth, distance_m) {
        Ok(dest) => Ok(dest),
        Err(iterations) => {
            tracing::warn!(
                lat = start.lat(),
                lon = start.lon(),
                azimuth,
                distance_m,
                iterations,
                "vincenty did not converge, using spherical approximation"
            );
            Ok(spherical(cfg, start, azimuth, distance_m, iterations))
        }
    }
}

/// Converged ellipsoidal solution, or the number of iterations spent on failure.
fn vincenty(
    cfg: &GeodesyCfg,
    start: GeoPoint,
    azimuth: f64,
    s: f64,
) -> std::result::Result<Destination, usize> {
    let f = cfg.ellipsoid.f;
    let b = cfg.ellipsoid.b();
    let phi1 = start.lat().to_radians();
    let (sin_alpha1, cos_alpha1) = azimuth.to_radians().sin_cos();

    // Reduced latitude U1.
    let tan_u1 = (1.0 - f) * phi1.tan();
    let cos_u1 = 1.0 / (1.0 + tan_u1 * tan_u1).sqrt();
    let sin_u1 = tan_u1 * cos_u1;
    // Arc from the equator to the start point on the auxiliary sphere.
    let sigma1 = tan_u1.atan2(cos_alpha1);
    // Azimuth of the geodesic at the equator.
    let sin_alpha = cos_u1 * sin_alpha1;
    let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
    let u_sq = cos_sq_alpha * cfg.ellipsoid.ep2();
    let big_a = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
    let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));

    let sigma0 = s / (b * big_a);
    let mut sigma = sigma0;
    let mut iterations = 0;
    let mut converged = false;
    while iterations < cfg.max_iterations {
        iterations += 1;
        let next = sigma0 + delta_sigma(big_b, sigma, (2.0 * sigma1 + sigma).cos());
        let step = (next - sigma).abs();
        sigma = next;
        if step <= cfg.tolerance {
            converged = true;
            break;
        }
    }
    if !converged || !sigma.is_finite() {
        return Err(iterations);
    }

    let (sin_sigma, cos_sigma) = sigma.sin_cos();
    let cos_2sigma_m = (2.0 * sigma1 + sigma).cos();
    let tmp = sin_u1 * sin_sigma - cos_u1 * cos_sigma * cos_alpha1;
    let phi2 = (sin_u1 * cos_sigma + cos_u1 * sin_sigma * cos_alpha1)
        .atan2((1.0 - f) * (sin_alpha * sin_alpha + tmp * tmp).sqrt());
    let lambda =
        (sin_sigma * sin_alpha1).atan2(cos_u1 * cos_sigma - sin_u1 * sin_sigma * cos_alpha1);
    let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));
    let l = lambda
        - (1.0 - c)
            * f
            * sin_alpha
            * (sigma
                + c * sin_sigma
                    * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));
    let alpha2 = sin_alpha.atan2(-tmp);

    let lat = phi2.to_degrees();
    let lon = start.lon() + l.to_degrees();
    let final_azimuth = alpha2.to_degrees();
    if !(lat.is_finite() && lon.is_finite() && final_azimuth.is_finite()) {
        return Err(iterations);
    }
    Ok(Destination {
        point: GeoPoint::normalized(lat, lon),
        final_azimuth: normalize_azimuth(final_azimuth),
        precision: Precision::Full,
        iterations,
    })
}

/// Δσ of Vincenty's eq. (6).
#[inline]
fn delta_sigma(big_b: f64, sigma: f64, cos_2sigma_m: f64) -> f64 {
    let (sin_sigma, cos_sigma) = sigma.sin_cos();
    let c2 = cos_2sigma_m * cos_2sigma_m;
    big_b
        * sin_sigma
        * (cos_2sigma_m
            + big_b / 4.0
                * (cos_sigma * (-1.0 + 2.0 * c2)
                    - big_b / 6.0
                        * cos_2sigma_m
                        * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                        * (-3.0 + 4.0 * c2)))
}

/// First-order spherical solution on the mean-radius sphere (n-vector rotation).
///
/// Geodetic latitude is used as if it were spherical; always finite.
fn spherical(
    cfg: &GeodesyCfg,
    start: GeoPoint,
    azimuth: f64,
    s: f64,
    iterations: usize,
) -> Destination {
    let delta = s / cfg.ellipsoid.mean_radius();
    let (sin_d, cos_d) = delta.sin_cos();
    let (n1, north1, east1) = local_frame(start.lat().to_radians(), start.lon().to_radians());
    let (sin_t, cos_t) = azimuth.to_radians().sin_cos();
    let dir = north1 * cos_t + east1 * sin_t;

    let n2 = n1 * cos_d + dir * sin_d;
    let travel = dir * cos_d - n1 * sin_d;
    let lat2 = n2.z.atan2(n2.x.hypot(n2.y));
    let lon2 = n2.y.atan2(n2.x);
    let (_, north2, east2) = local_frame(lat2, lon2);
    let final_azimuth = travel.dot(&east2).atan2(travel.dot(&north2));

    Destination {
        point: GeoPoint::normalized(lat2.to_degrees(), lon2.to_degrees()),
        final_azimuth: normalize_azimuth(final_azimuth.to_degrees()),
        precision: Precision::Degraded,
        iterations,
    }
}

/// Unit normal, north and east vectors at (φ, λ) on the unit sphere.
fn local_frame(phi: f64, lambda: f64) -> (Vector3<f64>, Vector3<f64>, Vector3<f64>) {
    let (sin_p, cos_p) = phi.sin_cos();
    let (sin_l, cos_l) = lambda.sin_cos();
    let n = Vector3::new(cos_p * cos_l, cos_p * sin_l, sin_p);
    let north = Vector3::new(-sin_p * cos_l, -sin_p * sin_l, cos_p);
    let east = Vector3::new(-sin_l, cos_l, 0.0);
    (n, north, east)
}
