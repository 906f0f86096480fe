//! Provenance sidecars: every file written with `--out` gets a
//! `<stem>.provenance.json` next to it recording how it was produced.

use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::OnceLock;

/// What produced an output file.
pub struct Payload {
    pub command: &'static str,
    pub params: Value,
    pub features: usize,
    pub degraded: usize,
}

impl Payload {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self {
            command,
            params,
            features: 0,
            degraded: 0,
        }
    }

    /// Geometry count and how many of those used the spherical fallback.
    pub fn with_counts(mut self, features: usize, degraded: usize) -> Self {
        self.features = features;
        self.degraded = degraded;
        self
    }
}

/// Write the sidecar for `artifact`; returns its path.
#[track_caller]
pub fn write_sidecar(artifact: &Path, payload: Payload) -> Result<PathBuf> {
    let caller = Location::caller();
    let path = sidecar_path(artifact);
    let doc = json!({
        "tool": { "name": "airspace", "version": airspace::VERSION },
        "code_rev": current_git_rev(),
        "generated_by": { "file": caller.file(), "line": caller.line() },
        "command": payload.command,
        "params": payload.params,
        "geometry": { "features": payload.features, "degraded": payload.degraded },
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing provenance {}", path.display()))?;
    Ok(path)
}

/// `zones.geojson` -> `zones.provenance.json`; extensionless names gain the suffix.
fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// Commit of the running build: `GIT_COMMIT` (runtime, then build time), else
/// `git rev-parse HEAD`, else `unknown`. Resolved once per process.
pub fn current_git_rev() -> &'static str {
    static REV: OnceLock<String> = OnceLock::new();
    REV.get_or_init(|| {
        let from_env = std::env::var("GIT_COMMIT")
            .ok()
            .or_else(|| option_env!("GIT_COMMIT").map(str::to_string))
            .filter(|s| !s.is_empty());
        from_env
            .or_else(git_head)
            .unwrap_or_else(|| "unknown".to_string())
    })
}

fn git_head() -> Option<String> {
    let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !out.status.success() {
        return None;
    }
    let rev = String::from_utf8(out.stdout).ok()?;
    Some(rev.trim().to_string()).filter(|s| !s.is_empty())
}
