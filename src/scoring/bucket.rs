use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

impl ConfidenceLevel {
    pub fn label(self) -> &'static str {
        match self {
            ConfidenceLevel::Low => "low",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Confidence {
    pub level: ConfidenceLevel,
    pub score: f64,
}

impl Confidence {
    pub const fn new(level: ConfidenceLevel, score: f64) -> Self {
        Self { level, score }
    }
}

/// Step `(min_volume, confidence)`; a step applies when `volume >= min_volume`.
pub type ConfidenceStep = (f64, Confidence);

/// Monotone step function from evidence volume to a confidence pair.
///
/// Steps are checked in declared order (highest threshold first). Volumes
/// below every step fall back to `trace` when any evidence exists and to
/// `none` when the volume is zero.
#[derive(Debug, Clone, Copy)]
pub struct ConfidenceScale {
    pub steps: &'static [ConfidenceStep],
    pub trace: Confidence,
    pub none: Confidence,
}

impl ConfidenceScale {
    pub fn calibrate(&self, volume: f64) -> Confidence {
        for (min_volume, confidence) in self.steps {
            if volume >= *min_volume {
                return *confidence;
            }
        }
        if volume > 0.0 {
            self.trace
        } else {
            self.none
        }
    }
}

/// Return the value of the first `(threshold, value)` entry with
/// `score >= threshold`, or `fallback`.
pub fn bucket<T: Copy>(score: f64, table: &[(f64, T)], fallback: T) -> T {
    table
        .iter()
        .find(|(threshold, _)| score >= *threshold)
        .map(|(_, value)| *value)
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCALE: ConfidenceScale = ConfidenceScale {
        steps: &[
            (10.0, Confidence::new(ConfidenceLevel::High, 90.0)),
            (5.0, Confidence::new(ConfidenceLevel::Medium, 60.0)),
        ],
        trace: Confidence::new(ConfidenceLevel::Low, 30.0),
        none: Confidence::new(ConfidenceLevel::Low, 10.0),
    };

    #[test]
    fn calibration_is_monotone() {
        let mut previous = 0.0;
        for volume in 0..40 {
            let confidence = SCALE.calibrate(volume as f64);
            assert!(confidence.score >= previous);
            previous = confidence.score;
        }
    }

    #[test]
    fn zero_and_trace_volumes_differ() {
        assert_eq!(SCALE.calibrate(0.0).score, 10.0);
        assert_eq!(SCALE.calibrate(1.0).score, 30.0);
        assert_eq!(SCALE.calibrate(10.0).level, ConfidenceLevel::High);
    }

    #[test]
    fn bucket_uses_first_matching_threshold() {
        let table = [(70.0, "high"), (40.0, "mid")];
        assert_eq!(bucket(70.0, &table, "low"), "high");
        assert_eq!(bucket(69.99, &table, "low"), "mid");
        assert_eq!(bucket(12.0, &table, "low"), "low");
    }
}
