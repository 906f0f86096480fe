//! Arc sampling around a center point.
//!
//! - `AzimuthRange`: validated `[start, end]` pair; `end < start` wraps
//!   through North, `end == start` is a full turn.
//! - `sample_arc`: geodesic destinations at `start, start+step, …, end`.
//!
//! The step is the accuracy/cost knob: one solver call per sample,
//! `ceil(sweep/step) + 1` samples per arc, capped at `MAX_SAMPLES`.

mod range;
mod sample;

pub use range::AzimuthRange;
pub use sample::{sample_arc, sample_arc_with, sweep_azimuths, ArcPoints, MAX_SAMPLES};
