use serde::{Deserialize, Serialize};

use crate::engagement::weights::{EngagementWeights, EMOJI_SATURATION, QUALITY_BONUS_MAX};
use crate::engagement::{ContentFeatures, SentimentSignal};
use crate::scoring::{aggregate, linear_ramp, presence_bonus, ComponentScore, RangeStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentDetail {
    #[serde(flatten)]
    pub component: ComponentScore,
    pub sentiment_label: String,
    pub intensity: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeDetail {
    #[serde(flatten)]
    pub component: ComponentScore,
    pub status: RangeStatus,
    pub optimal_range: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresenceDetail {
    #[serde(flatten)]
    pub component: ComponentScore,
    pub present: bool,
}

/// Content-quality sub-bonuses. A `None` entry means the input for that
/// bonus was not supplied and it contributed nothing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QualityBreakdown {
    pub sentiment: Option<SentimentDetail>,
    pub word_count: Option<RangeDetail>,
    pub hashtags: Option<RangeDetail>,
    pub emojis: Option<PresenceDetail>,
    pub call_to_action: Option<PresenceDetail>,
    pub urls: Option<PresenceDetail>,
    /// Sum of the sub-bonuses before the quality cap.
    pub total: f64,
    pub max: f64,
}

impl QualityBreakdown {
    pub fn components(&self) -> Vec<&ComponentScore> {
        let mut components = Vec::with_capacity(6);
        if let Some(detail) = &self.sentiment {
            components.push(&detail.component);
        }
        for detail in [&self.word_count, &self.hashtags].into_iter().flatten() {
            components.push(&detail.component);
        }
        for detail in [&self.emojis, &self.call_to_action, &self.urls]
            .into_iter()
            .flatten()
        {
            components.push(&detail.component);
        }
        components
    }

    /// Quality bonus after the cap.
    pub fn capped(&self) -> f64 {
        self.total.min(self.max).max(0.0)
    }
}

pub fn quality_bonus(
    sentiment: Option<&SentimentSignal>,
    features: Option<&ContentFeatures>,
    weights: &EngagementWeights,
) -> QualityBreakdown {
    let mut breakdown = QualityBreakdown {
        max: QUALITY_BONUS_MAX,
        ..QualityBreakdown::default()
    };

    if let Some(signal) = sentiment {
        breakdown.sentiment = Some(sentiment_bonus(signal, weights));
    }

    if let Some(features) = features {
        breakdown.word_count = Some(word_count_bonus(features.word_count, weights));
        breakdown.hashtags = Some(hashtag_bonus(features.hashtag_count, weights));
        breakdown.emojis = Some(emoji_bonus(features.emoji_count, weights));
        breakdown.call_to_action = Some(PresenceDetail {
            component: ComponentScore::capped(
                bool_to_f64(features.has_call_to_action),
                presence_bonus(features.has_call_to_action, weights.cta_max()),
                weights.cta_max(),
            ),
            present: features.has_call_to_action,
        });
        breakdown.urls = Some(PresenceDetail {
            component: ComponentScore::capped(
                features.url_count as f64,
                presence_bonus(features.url_count > 0, weights.url_max()),
                weights.url_max(),
            ),
            present: features.url_count > 0,
        });
    }

    let (total, _) = aggregate(breakdown.components(), QUALITY_BONUS_MAX);
    breakdown.total = total;
    tracing::trace!(total, capped = breakdown.capped(), "quality bonus");
    breakdown
}

/// Only positive sentiment earns points; neutral and negative earn zero.
pub fn sentiment_bonus(signal: &SentimentSignal, weights: &EngagementWeights) -> SentimentDetail {
    let max = weights.sentiment_max();
    let compound = signal.compound();
    let bonus = if compound > 0.0 { compound * max } else { 0.0 };

    SentimentDetail {
        component: ComponentScore::capped(compound, bonus, max),
        sentiment_label: signal.label().to_string(),
        intensity: signal.intensity().to_string(),
    }
}

pub fn word_count_bonus(word_count: u64, weights: &EngagementWeights) -> RangeDetail {
    let curve = weights.word_count_curve();
    let max = weights.word_count_max();
    let value = word_count as f64;

    RangeDetail {
        component: ComponentScore::capped(value, curve.bonus(value, max), max),
        status: curve.status(value),
        optimal_range: format_range(curve.lower, curve.upper),
    }
}

pub fn hashtag_bonus(hashtag_count: u64, weights: &EngagementWeights) -> RangeDetail {
    let curve = weights.hashtag_curve();
    let max = weights.hashtag_max();
    let value = hashtag_count as f64;

    RangeDetail {
        component: ComponentScore::capped(value, curve.bonus(value, max), max),
        status: curve.status(value),
        optimal_range: format_range(curve.lower, curve.upper),
    }
}

pub fn emoji_bonus(emoji_count: u64, weights: &EngagementWeights) -> PresenceDetail {
    let max = weights.emoji_max();
    let value = emoji_count as f64;

    PresenceDetail {
        component: ComponentScore::capped(value, linear_ramp(value, EMOJI_SATURATION, max), max),
        present: emoji_count > 0,
    }
}

fn format_range(lower: f64, upper: f64) -> String {
    format!("{}-{}", lower, upper)
}

fn bool_to_f64(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}
