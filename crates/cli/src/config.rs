//! Optional JSON configuration for the CLI.
//!
//! Every field is optional; missing fields fall back to WGS 84, the default
//! solver tolerances and a 1° arc step.
//!
//! ```json
//! { "ellipsoid": { "a": 6378137.0, "f": 0.0033528106647474805 },
//!   "step_deg": 0.5, "tolerance": 1e-12, "max_iterations": 200 }
//! ```

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use airspace::graticule::{GraticuleCfg, LineRange};
use airspace::{Ellipsoid, GeodesyCfg};

pub const DEFAULT_STEP_DEG: f64 = 1.0;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub ellipsoid: Option<EllipsoidConfig>,
    pub step_deg: Option<f64>,
    pub tolerance: Option<f64>,
    pub max_iterations: Option<usize>,
}

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct EllipsoidConfig {
    pub a: f64,
    pub f: f64,
}

/// Resolved settings used by every command.
#[derive(Clone, Copy, Debug)]
pub struct Settings {
    pub geodesy: GeodesyCfg,
    pub step_deg: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            geodesy: GeodesyCfg::default(),
            step_deg: DEFAULT_STEP_DEG,
        }
    }
}

impl FileConfig {
    pub fn resolve(self) -> Result<Settings> {
        let mut geodesy = GeodesyCfg::default();
        if let Some(e) = self.ellipsoid {
            let ellipsoid = Ellipsoid::new(e.a, e.f);
            if !ellipsoid.is_valid() {
                bail!("ellipsoid needs a > 0 and 0 <= f < 1, got a={} f={}", e.a, e.f);
            }
            geodesy.ellipsoid = ellipsoid;
        }
        if let Some(tol) = self.tolerance {
            if !(tol.is_finite() && tol > 0.0) {
                bail!("tolerance must be > 0, got {tol}");
            }
            geodesy.tolerance = tol;
        }
        if let Some(n) = self.max_iterations {
            geodesy.max_iterations = n;
        }
        Ok(Settings {
            geodesy,
            step_deg: self.step_deg.unwrap_or(DEFAULT_STEP_DEG),
        })
    }
}

/// Load settings from `path`, or defaults when no file is given.
pub fn load(path: Option<&Path>) -> Result<Settings> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };
    let text =
        fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
    let cfg: FileConfig = serde_json::from_str(&text)
        .with_context(|| format!("config file error in {}", path.display()))?;
    cfg.resolve()
}

#[derive(Clone, Copy, Debug, Deserialize)]
struct LineRangeConfig {
    start: f64,
    end: f64,
    step: f64,
}

#[derive(Clone, Copy, Debug, Deserialize)]
struct GraticuleConfig {
    latitudes: LineRangeConfig,
    longitudes: LineRangeConfig,
}

impl From<LineRangeConfig> for LineRange {
    fn from(r: LineRangeConfig) -> Self {
        LineRange {
            start: r.start,
            end: r.end,
            step: r.step,
        }
    }
}

/// Graticule window `{ "latitudes": {start,end,step}, "longitudes": {…} }`.
pub fn load_graticule(path: &Path) -> Result<GraticuleCfg> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading grid {}", path.display()))?;
    let cfg: GraticuleConfig = serde_json::from_str(&text)
        .with_context(|| format!("config file error in {}", path.display()))?;
    Ok(GraticuleCfg {
        latitudes: cfg.latitudes.into(),
        longitudes: cfg.longitudes.into(),
    })
}
