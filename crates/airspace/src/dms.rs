//! Compacted DMS/HDMS coordinate strings.
//!
//! Accepted forms (after upper-casing, dropping spaces, and `,` → `.`):
//! - latitude `[NS]?DDMMSS(.s+)?[NS]?`, e.g. `521000N`, `N5210005.5`;
//! - longitude `[EW]?DDDMMSS(.s+)?[EW]?`, e.g. `0205812E`, `W0031500`;
//! - plain decimal degrees, e.g. `52.5`, `-3.25`.
//!
//! A hemisphere letter may be a prefix or a suffix, never both. `S` and `W`
//! are negative.

use regex::Regex;
use std::sync::OnceLock;

use crate::error::{Axis, GeometryError, Result};
use crate::geodesic::GeoPoint;

fn latitude_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?P<pre>[NS])?(?P<deg>\d{2})(?P<min>\d{2})(?P<sec>\d{2}(?:\.\d+)?)(?P<suf>[NS])?$")
            .unwrap()
    })
}

fn longitude_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?P<pre>[EW])?(?P<deg>\d{3})(?P<min>\d{2})(?P<sec>\d{2}(?:\.\d+)?)(?P<suf>[EW])?$")
            .unwrap()
    })
}

fn decimal_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[+-]?\d+(?:\.\d+)?$").unwrap())
}

/// Upper-case, strip spaces, decimal comma to point.
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c.to_ascii_uppercase() })
        .collect()
}

/// Latitude in decimal degrees.
pub fn parse_latitude(input: &str) -> Result<f64> {
    parse(Axis::Latitude, input)
}

/// Longitude in decimal degrees.
pub fn parse_longitude(input: &str) -> Result<f64> {
    parse(Axis::Longitude, input)
}

/// Both coordinates into a `GeoPoint`.
pub fn parse_point(lat: &str, lon: &str) -> Result<GeoPoint> {
    GeoPoint::new(parse_latitude(lat)?, parse_longitude(lon)?)
}

fn parse(axis: Axis, input: &str) -> Result<f64> {
    let text = normalize(input);
    let (pattern, max_deg) = match axis {
        Axis::Latitude => (latitude_pattern(), 90.0),
        Axis::Longitude => (longitude_pattern(), 180.0),
    };
    let invalid = || GeometryError::coordinate(axis, input);

    if let Some(caps) = pattern.captures(&text) {
        let pre = caps.name("pre").map(|m| m.as_str());
        let suf = caps.name("suf").map(|m| m.as_str());
        if pre.is_some() && suf.is_some() {
            return Err(invalid());
        }
        let field = |name: &str| -> Result<f64> {
            caps.name(name)
                .and_then(|m| m.as_str().parse::<f64>().ok())
                .ok_or_else(invalid)
        };
        let (d, m, s) = (field("deg")?, field("min")?, field("sec")?);
        if d > max_deg || m >= 60.0 || s >= 60.0 || (d == max_deg && (m != 0.0 || s != 0.0)) {
            return Err(invalid());
        }
        let dd = d + (m + s / 60.0) / 60.0;
        return Ok(match pre.or(suf) {
            Some("S") | Some("W") => -dd,
            _ => dd,
        });
    }

    if decimal_pattern().is_match(&text) {
        let dd: f64 = text.parse().map_err(|_| invalid())?;
        if dd.abs() <= max_deg {
            return Ok(dd);
        }
    }
    Err(invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn latitude_forms() {
        let expected = 52.0 + 10.0 / 60.0 + 5.5 / 3600.0;
        assert!(close(parse_latitude("521005.5N").unwrap(), expected));
        assert!(close(parse_latitude("N521005.5").unwrap(), expected));
        assert!(close(parse_latitude("52 10 05,5 n").unwrap(), expected));
        assert!(close(parse_latitude("521005.5S").unwrap(), -expected));
        assert!(close(parse_latitude("900000N").unwrap(), 90.0));
    }

    #[test]
    fn longitude_forms() {
        let expected = 20.0 + 58.0 / 60.0 + 12.0 / 3600.0;
        assert!(close(parse_longitude("0205812E").unwrap(), expected));
        assert!(close(parse_longitude("W0205812").unwrap(), -expected));
        assert!(close(parse_longitude("1800000W").unwrap(), -180.0));
    }

    #[test]
    fn decimal_degrees_pass_through() {
        assert_eq!(parse_latitude("52.5").unwrap(), 52.5);
        assert_eq!(parse_longitude("-3,25").unwrap(), -3.25);
        assert!(parse_latitude("91").is_err());
    }

    #[test]
    fn rejects_malformed() {
        for bad in ["N521005S", "526005N", "521060N", "900001N", "52100N", "ABC", ""] {
            assert!(
                matches!(
                    parse_latitude(bad),
                    Err(GeometryError::InvalidCoordinate {
                        axis: Axis::Latitude,
                        ..
                    })
                ),
                "{bad} should be rejected"
            );
        }
        for bad in ["1810000E", "1800001E", "0205812N", "E0205812W"] {
            assert!(parse_longitude(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn point_from_strings() {
        let p = parse_point("521000N", "0210000E").unwrap();
        assert!(close(p.lat(), 52.0 + 1.0 / 6.0));
        assert!(close(p.lon(), 21.0));
    }
}
