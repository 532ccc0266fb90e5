use serde::{Deserialize, Serialize};

use crate::scoring::normalize::clamp01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeStatus {
    Below,
    Optimal,
    Above,
}

/// Range-membership bonus curve.
///
/// Inside `[lower, upper]` the curve awards full credit, or ramps up to an
/// optional `peak` and tapers by `peak_falloff` towards `upper`. Below the
/// window credit is proportional to `value / lower`, scaled by `under_scale`.
/// Above the window credit decays linearly over `decay_span` units and never
/// drops under `floor`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeCurve {
    pub lower: f64,
    pub upper: f64,
    pub peak: Option<f64>,
    pub peak_falloff: f64,
    pub under_scale: f64,
    pub decay_span: f64,
    pub floor: f64,
}

impl RangeCurve {
    pub fn window(lower: f64, upper: f64) -> Self {
        Self {
            lower,
            upper,
            peak: None,
            peak_falloff: 0.0,
            under_scale: 1.0,
            decay_span: f64::INFINITY,
            floor: 0.0,
        }
    }

    pub fn with_peak(mut self, peak: f64, falloff: f64) -> Self {
        self.peak = Some(peak);
        self.peak_falloff = falloff;
        self
    }

    pub fn with_under_scale(mut self, under_scale: f64) -> Self {
        self.under_scale = under_scale;
        self
    }

    pub fn with_decay(mut self, span: f64, floor: f64) -> Self {
        self.decay_span = span;
        self.floor = floor;
        self
    }

    pub fn status(&self, value: f64) -> RangeStatus {
        if value < self.lower {
            RangeStatus::Below
        } else if value > self.upper {
            RangeStatus::Above
        } else {
            RangeStatus::Optimal
        }
    }

    /// Fraction of full credit in `[0, 1]` for `value`.
    pub fn fraction(&self, value: f64) -> f64 {
        let fraction = match self.status(value) {
            RangeStatus::Optimal => self.inside_fraction(value),
            RangeStatus::Below => {
                if self.lower <= 0.0 {
                    0.0
                } else {
                    value.max(0.0) / self.lower * self.under_scale
                }
            }
            RangeStatus::Above => {
                let excess = value - self.upper;
                let decayed = if self.decay_span.is_finite() && self.decay_span > 0.0 {
                    1.0 - excess / self.decay_span
                } else {
                    1.0
                };
                decayed.max(self.floor)
            }
        };
        clamp01(fraction)
    }

    pub fn bonus(&self, value: f64, max_points: f64) -> f64 {
        self.fraction(value) * max_points.max(0.0)
    }

    fn inside_fraction(&self, value: f64) -> f64 {
        let Some(peak) = self.peak else {
            return 1.0;
        };
        if value <= peak {
            if peak <= 0.0 {
                1.0
            } else {
                value / peak
            }
        } else if self.upper > peak {
            1.0 - (value - peak) / (self.upper - peak) * self.peak_falloff
        } else {
            1.0
        }
    }
}

/// Proportional credit up to `saturation`, full credit beyond it.
pub fn linear_ramp(value: f64, saturation: f64, max_points: f64) -> f64 {
    if saturation <= 0.0 {
        return if value > 0.0 { max_points.max(0.0) } else { 0.0 };
    }
    clamp01(value / saturation) * max_points.max(0.0)
}

pub fn presence_bonus(present: bool, max_points: f64) -> f64 {
    if present {
        max_points.max(0.0)
    } else {
        0.0
    }
}
