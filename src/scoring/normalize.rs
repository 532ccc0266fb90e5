use serde::{Deserialize, Serialize};

/// Logarithmic damping of a weighted engagement sum onto a bounded scale.
///
/// `score = min(cap, log10(1 + w) * scale)`. Early increments move the score
/// far more than increments on an already large sum, so viral outliers do
/// not saturate the scale while volume is still rewarded monotonically.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogScale {
    pub scale: f64,
    pub cap: f64,
}

impl LogScale {
    pub const fn new(scale: f64, cap: f64) -> Self {
        Self { scale, cap }
    }

    pub fn score(&self, weighted: f64) -> f64 {
        if weighted <= 0.0 || weighted.is_nan() {
            return 0.0;
        }
        (log10_safe(1.0 + weighted) * self.scale).min(self.cap)
    }

    /// Weighted sum at which the cap is first reached.
    pub fn saturation_point(&self) -> f64 {
        if self.scale <= 0.0 {
            return f64::INFINITY;
        }
        10f64.powf(self.cap / self.scale) - 1.0
    }
}

pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        return min;
    }
    value.max(min).min(max)
}

pub fn clamp01(value: f64) -> f64 {
    clamp(value, 0.0, 1.0)
}

pub fn log10_safe(value: f64) -> f64 {
    if value <= 0.0 {
        0.0
    } else {
        value.log10()
    }
}

pub fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}

pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}
