use crate::error::{GeometryError, Result};

/// Angular interval walked clockwise from `start` to `end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AzimuthRange {
    start: f64,
    end: f64,
}

impl AzimuthRange {
    /// Both bounds must be finite and within [0, 360]; 360 is read as 0.
    pub fn new(start: f64, end: f64) -> Result<Self> {
        Ok(Self {
            start: check_bound("start", start)?,
            end: check_bound("end", end)?,
        })
    }

    /// The full turn starting (and ending) at North.
    #[inline]
    pub const fn full() -> Self {
        Self {
            start: 0.0,
            end: 0.0,
        }
    }

    #[inline]
    pub fn start(&self) -> f64 {
        self.start
    }

    #[inline]
    pub fn end(&self) -> f64 {
        self.end
    }

    /// `start == end` denotes a whole circle, not an empty arc.
    #[inline]
    pub fn is_full_turn(&self) -> bool {
        self.start == self.end
    }

    /// Clockwise extent in (0, 360].
    pub fn sweep(&self) -> f64 {
        if self.is_full_turn() {
            360.0
        } else if self.end > self.start {
            self.end - self.start
        } else {
            self.end + 360.0 - self.start
        }
    }
}

fn check_bound(name: &str, deg: f64) -> Result<f64> {
    if !deg.is_finite() {
        return Err(GeometryError::azimuth(format!("{name} azimuth {deg} is not finite")));
    }
    if !(0.0..=360.0).contains(&deg) {
        return Err(GeometryError::azimuth(format!(
            "{name} azimuth {deg} outside [0, 360]"
        )));
    }
    Ok(if deg == 360.0 { 0.0 } else { deg })
}
