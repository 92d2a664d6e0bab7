//! Numeric ranges sampled with a uniform variate from the generation stream.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How a [`Range`] turns an interpolated value into a sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SampleMode {
    /// Values are returned as interpolated.
    #[default]
    Continuous,
    /// Values are truncated toward zero, for counts.
    Discrete,
}

/// A closed `[min, max]` interval.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Range {
    pub min: f32,
    pub max: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub mode: SampleMode,
}

impl Range {
    /// Create a continuous range.
    pub fn continuous(min: f32, max: f32) -> Self {
        Self {
            min,
            max,
            mode: SampleMode::Continuous,
        }
    }

    /// Create a discrete range, used for counts.
    pub fn discrete(min: u32, max: u32) -> Self {
        Self {
            min: min as f32,
            max: max as f32,
            mode: SampleMode::Discrete,
        }
    }

    /// A range that always yields `value`.
    pub fn constant(value: f32) -> Self {
        Self::continuous(value, value)
    }

    /// Map `t` in [0, 1] onto the range.
    ///
    /// `t` is expected to come from [`crate::random::rand01`]. Out-of-range
    /// variates are clamped so the result never leaves `[min, max]`.
    ///
    /// Sampling is done in `f32`, the precision of every radius, count and
    /// position it feeds; `f64` is reserved for noise evaluation.
    pub fn random(&self, t: f32) -> f32 {
        if self.min == self.max {
            return self.min;
        }
        let v = self.min + t.clamp(0.0, 1.0) * (self.max - self.min);
        match self.mode {
            SampleMode::Continuous => v,
            SampleMode::Discrete => v.trunc(),
        }
    }

    /// Map `t` onto the range as a non-negative count.
    pub fn random_count(&self, t: f32) -> usize {
        self.random(t).trunc().max(0.0) as usize
    }

    /// Returns `true` if `value` lies within `[min, max]`.
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Reject non-finite bounds and `min > max`.
    pub fn validate(&self, name: &str) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "{name} bounds must be finite"
            )));
        }
        if self.min > self.max {
            return Err(Error::InvalidConfig(format!(
                "{name} has min {} > max {}",
                self.min, self.max
            )));
        }
        Ok(())
    }
}
