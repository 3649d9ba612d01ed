//! Growth curve for the affirmative control.
//!
//! `scale(n) = 1 + slope * n`. An optional cap saturates the curve so a very
//! stubborn user cannot push the button off the screen; without a cap the
//! curve is strictly increasing.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Scale above which the affirmative control starts to glow.
pub const GLOW_THRESHOLD: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGrowthCurve")]
pub struct GrowthCurve {
    slope: f64,
    max_scale: Option<f64>,
}

/// Unchecked wire form; deserialized curves go through `new`/`with_cap`.
#[derive(Deserialize)]
struct RawGrowthCurve {
    slope: f64,
    #[serde(default)]
    max_scale: Option<f64>,
}

impl TryFrom<RawGrowthCurve> for GrowthCurve {
    type Error = ValidationError;

    fn try_from(raw: RawGrowthCurve) -> Result<Self, Self::Error> {
        let curve = Self::new(raw.slope)?;
        match raw.max_scale {
            Some(cap) => curve.with_cap(cap),
            None => Ok(curve),
        }
    }
}

impl GrowthCurve {
    pub const DEFAULT_SLOPE: f64 = 0.4;

    pub fn new(slope: f64) -> Result<Self, ValidationError> {
        if !slope.is_finite() || slope <= 0.0 {
            return Err(ValidationError::InvalidSlope(slope));
        }
        Ok(Self {
            slope,
            max_scale: None,
        })
    }

    /// Cap the curve at `max_scale`.
    pub fn with_cap(mut self, max_scale: f64) -> Result<Self, ValidationError> {
        if !max_scale.is_finite() || max_scale < 1.0 {
            return Err(ValidationError::InvalidCap(max_scale));
        }
        self.max_scale = Some(max_scale);
        Ok(self)
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn max_scale(&self) -> Option<f64> {
        self.max_scale
    }

    pub fn scale(&self, decline_count: u32) -> f64 {
        let raw = 1.0 + self.slope * f64::from(decline_count);
        match self.max_scale {
            Some(cap) => raw.min(cap),
            None => raw,
        }
    }
}

impl Default for GrowthCurve {
    fn default() -> Self {
        Self {
            slope: Self::DEFAULT_SLOPE,
            max_scale: None,
        }
    }
}

pub fn glows(scale: f64) -> bool {
    scale > GLOW_THRESHOLD
}
