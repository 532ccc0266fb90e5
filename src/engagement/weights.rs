use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::scoring::{round_to, LogScale, RangeCurve};

pub const BASE_SCORE_MAX: f64 = 60.0;
pub const BASE_LOG_SCALE: f64 = 15.0;
pub const QUALITY_BONUS_MAX: f64 = 40.0;

/// Multiplier to points conversion: a multiplier of 0.15 is worth 15 points.
const MULTIPLIER_POINTS: f64 = 100.0;

pub const WORD_COUNT_DECAY_SPAN: f64 = 500.0;
pub const WORD_COUNT_FLOOR: f64 = 0.3;
pub const HASHTAG_UNDER_SCALE: f64 = 0.4;
pub const HASHTAG_PEAK_FALLOFF: f64 = 0.2;
pub const HASHTAG_DECAY_SPAN: f64 = 5.0;
pub const HASHTAG_FLOOR: f64 = 0.2;
pub const EMOJI_SATURATION: f64 = 3.0;

pub static DEFAULT_WEIGHTS: Lazy<EngagementWeights> = Lazy::new(EngagementWeights::default);

/// Tunable coefficients of the engagement predictor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngagementWeights {
    pub likes_weight: f64,
    pub comments_weight: f64,
    pub shares_weight: f64,
    pub sentiment_multiplier: f64,
    pub word_count_multiplier: f64,
    pub hashtag_multiplier: f64,
    pub emoji_multiplier: f64,
    pub cta_multiplier: f64,
    pub url_multiplier: f64,
    pub optimal_word_count_min: f64,
    pub optimal_word_count_max: f64,
    pub optimal_hashtag_count: f64,
    pub min_hashtag_count: f64,
    pub max_hashtag_count: f64,
}

impl Default for EngagementWeights {
    fn default() -> Self {
        Self {
            likes_weight: 1.0,
            comments_weight: 2.0,
            shares_weight: 3.0,
            sentiment_multiplier: 0.15,
            word_count_multiplier: 0.10,
            hashtag_multiplier: 0.08,
            emoji_multiplier: 0.05,
            cta_multiplier: 0.07,
            url_multiplier: 0.03,
            optimal_word_count_min: 100.0,
            optimal_word_count_max: 300.0,
            optimal_hashtag_count: 3.0,
            min_hashtag_count: 2.0,
            max_hashtag_count: 5.0,
        }
    }
}

/// Per-call overrides, keyed like [`EngagementWeights`]. Unset keys keep the
/// base value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WeightOverrides {
    pub likes_weight: Option<f64>,
    pub comments_weight: Option<f64>,
    pub shares_weight: Option<f64>,
    pub sentiment_multiplier: Option<f64>,
    pub word_count_multiplier: Option<f64>,
    pub hashtag_multiplier: Option<f64>,
    pub emoji_multiplier: Option<f64>,
    pub cta_multiplier: Option<f64>,
    pub url_multiplier: Option<f64>,
    pub optimal_word_count_min: Option<f64>,
    pub optimal_word_count_max: Option<f64>,
    pub optimal_hashtag_count: Option<f64>,
    pub min_hashtag_count: Option<f64>,
    pub max_hashtag_count: Option<f64>,
}

impl WeightOverrides {
    pub fn is_empty(&self) -> bool {
        *self == WeightOverrides::default()
    }
}

impl EngagementWeights {
    /// Shallow merge: returns a new configuration, `self` is left untouched.
    pub fn merged(&self, overrides: &WeightOverrides) -> EngagementWeights {
        let pick = |base: f64, value: Option<f64>| value.unwrap_or(base);

        EngagementWeights {
            likes_weight: pick(self.likes_weight, overrides.likes_weight),
            comments_weight: pick(self.comments_weight, overrides.comments_weight),
            shares_weight: pick(self.shares_weight, overrides.shares_weight),
            sentiment_multiplier: pick(
                self.sentiment_multiplier,
                overrides.sentiment_multiplier,
            ),
            word_count_multiplier: pick(
                self.word_count_multiplier,
                overrides.word_count_multiplier,
            ),
            hashtag_multiplier: pick(self.hashtag_multiplier, overrides.hashtag_multiplier),
            emoji_multiplier: pick(self.emoji_multiplier, overrides.emoji_multiplier),
            cta_multiplier: pick(self.cta_multiplier, overrides.cta_multiplier),
            url_multiplier: pick(self.url_multiplier, overrides.url_multiplier),
            optimal_word_count_min: pick(
                self.optimal_word_count_min,
                overrides.optimal_word_count_min,
            ),
            optimal_word_count_max: pick(
                self.optimal_word_count_max,
                overrides.optimal_word_count_max,
            ),
            optimal_hashtag_count: pick(
                self.optimal_hashtag_count,
                overrides.optimal_hashtag_count,
            ),
            min_hashtag_count: pick(self.min_hashtag_count, overrides.min_hashtag_count),
            max_hashtag_count: pick(self.max_hashtag_count, overrides.max_hashtag_count),
        }
    }

    pub fn weighted_engagement(&self, likes: u64, comments: u64, shares: u64) -> f64 {
        likes as f64 * self.likes_weight
            + comments as f64 * self.comments_weight
            + shares as f64 * self.shares_weight
    }

    pub fn base_scale(&self) -> LogScale {
        LogScale::new(BASE_LOG_SCALE, BASE_SCORE_MAX)
    }

    pub fn sentiment_max(&self) -> f64 {
        multiplier_points(self.sentiment_multiplier)
    }

    pub fn word_count_max(&self) -> f64 {
        multiplier_points(self.word_count_multiplier)
    }

    pub fn hashtag_max(&self) -> f64 {
        multiplier_points(self.hashtag_multiplier)
    }

    pub fn emoji_max(&self) -> f64 {
        multiplier_points(self.emoji_multiplier)
    }

    pub fn cta_max(&self) -> f64 {
        multiplier_points(self.cta_multiplier)
    }

    pub fn url_max(&self) -> f64 {
        multiplier_points(self.url_multiplier)
    }

    pub fn word_count_curve(&self) -> RangeCurve {
        RangeCurve::window(self.optimal_word_count_min, self.optimal_word_count_max)
            .with_decay(WORD_COUNT_DECAY_SPAN, WORD_COUNT_FLOOR)
    }

    pub fn hashtag_curve(&self) -> RangeCurve {
        RangeCurve::window(self.min_hashtag_count, self.max_hashtag_count)
            .with_peak(self.optimal_hashtag_count, HASHTAG_PEAK_FALLOFF)
            .with_under_scale(HASHTAG_UNDER_SCALE)
            .with_decay(HASHTAG_DECAY_SPAN, HASHTAG_FLOOR)
    }
}

/// Rounded to six places so 0.07 yields exactly 7 points.
fn multiplier_points(multiplier: f64) -> f64 {
    round_to(multiplier * MULTIPLIER_POINTS, 6).max(0.0)
}
