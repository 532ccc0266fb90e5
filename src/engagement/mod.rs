pub mod quality;
pub mod recommend;
pub mod weights;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::null_as_default;
use crate::scoring::{
    bucket, clamp, round2, ComponentScore, Confidence, ConfidenceLevel, ConfidenceScale,
};

pub use quality::{PresenceDetail, QualityBreakdown, RangeDetail, SentimentDetail};
pub use weights::{EngagementWeights, WeightOverrides, DEFAULT_WEIGHTS};

/// Engagement counters captured for a post. Missing or `null` counters read as 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PostEngagement {
    #[serde(default, deserialize_with = "null_as_default")]
    pub likes: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comments: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub shares: u64,
}

impl PostEngagement {
    pub fn new(likes: u64, comments: u64, shares: u64) -> Self {
        Self {
            likes,
            comments,
            shares,
        }
    }

    pub fn total(&self) -> u64 {
        self.likes
            .saturating_add(self.comments)
            .saturating_add(self.shares)
    }
}

/// Text features produced by the feature extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContentFeatures {
    #[serde(default, deserialize_with = "null_as_default")]
    pub word_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hashtag_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub emoji_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_call_to_action: bool,
}

/// Output of the sentiment classifier. Only `compound_score` is scored; the
/// label and intensity are carried into the breakdown and derived from the
/// compound score when absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentSignal {
    #[serde(default, deserialize_with = "null_as_default")]
    pub compound_score: f64,
    #[serde(default)]
    pub sentiment_label: Option<String>,
    #[serde(default)]
    pub intensity: Option<String>,
}

impl SentimentSignal {
    pub fn new(compound_score: f64) -> Self {
        Self {
            compound_score,
            sentiment_label: None,
            intensity: None,
        }
    }

    pub fn compound(&self) -> f64 {
        clamp(self.compound_score, -1.0, 1.0)
    }

    pub fn label(&self) -> &str {
        match &self.sentiment_label {
            Some(label) => label,
            None => sentiment_label(self.compound()),
        }
    }

    pub fn intensity(&self) -> &str {
        match &self.intensity {
            Some(intensity) => intensity,
            None => sentiment_intensity(self.compound()),
        }
    }
}

pub fn sentiment_label(compound: f64) -> &'static str {
    if compound >= 0.05 {
        "positive"
    } else if compound <= -0.05 {
        "negative"
    } else {
        "neutral"
    }
}

pub fn sentiment_intensity(compound: f64) -> &'static str {
    if compound >= 0.5 {
        "very positive"
    } else if compound >= 0.05 {
        "positive"
    } else if compound > -0.05 {
        "neutral"
    } else if compound > -0.5 {
        "negative"
    } else {
        "very negative"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PredictionLabel {
    #[serde(rename = "High Performer")]
    HighPerformer,
    Medium,
    Low,
}

impl PredictionLabel {
    pub fn label(self) -> &'static str {
        match self {
            PredictionLabel::HighPerformer => "High Performer",
            PredictionLabel::Medium => "Medium",
            PredictionLabel::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Percentile {
    #[serde(rename = "top 10%")]
    Top10,
    #[serde(rename = "top 30%")]
    Top30,
    #[serde(rename = "top 50%")]
    Top50,
    #[serde(rename = "top 70%")]
    Top70,
    #[serde(rename = "bottom 30%")]
    Bottom30,
}

impl Percentile {
    pub fn label(self) -> &'static str {
        match self {
            Percentile::Top10 => "top 10%",
            Percentile::Top30 => "top 30%",
            Percentile::Top50 => "top 50%",
            Percentile::Top70 => "top 70%",
            Percentile::Bottom30 => "bottom 30%",
        }
    }
}

const LABEL_THRESHOLDS: [(f64, PredictionLabel); 2] = [
    (70.0, PredictionLabel::HighPerformer),
    (40.0, PredictionLabel::Medium),
];

const PERCENTILE_THRESHOLDS: [(f64, Percentile); 4] = [
    (85.0, Percentile::Top10),
    (70.0, Percentile::Top30),
    (55.0, Percentile::Top50),
    (40.0, Percentile::Top70),
];

/// Confidence grows with raw engagement volume, not with score quality.
pub const ENGAGEMENT_CONFIDENCE: ConfidenceScale = ConfidenceScale {
    steps: &[
        (100.0, Confidence::new(ConfidenceLevel::High, 95.0)),
        (50.0, Confidence::new(ConfidenceLevel::High, 80.0)),
        (20.0, Confidence::new(ConfidenceLevel::Medium, 65.0)),
        (10.0, Confidence::new(ConfidenceLevel::Medium, 50.0)),
    ],
    trace: Confidence::new(ConfidenceLevel::Low, 35.0),
    none: Confidence::new(ConfidenceLevel::Low, 20.0),
};

pub fn prediction_label(score: f64) -> PredictionLabel {
    bucket(score, &LABEL_THRESHOLDS, PredictionLabel::Low)
}

pub fn percentile(score: f64) -> Percentile {
    bucket(score, &PERCENTILE_THRESHOLDS, Percentile::Bottom30)
}

pub fn engagement_confidence(post: &PostEngagement) -> Confidence {
    ENGAGEMENT_CONFIDENCE.calibrate(post.total() as f64)
}

pub fn confidence_explanation(level: ConfidenceLevel) -> &'static str {
    match level {
        ConfidenceLevel::High => "Based on substantial engagement data",
        ConfidenceLevel::Medium => "Based on moderate engagement data",
        ConfidenceLevel::Low => {
            "Limited engagement data; prediction relies mostly on content features"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightsUsed {
    pub likes: f64,
    pub comments: f64,
    pub shares: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementBreakdown {
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub weighted_total: f64,
    #[serde(flatten)]
    pub base: ComponentScore,
    pub weights_used: WeightsUsed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceBreakdown {
    pub total_engagement: u64,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionBreakdown {
    pub engagement: EngagementBreakdown,
    pub quality_features: QualityBreakdown,
    pub confidence: ConfidenceBreakdown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub engagement_score: f64,
    pub prediction_label: PredictionLabel,
    pub percentile: Percentile,
    pub confidence_level: ConfidenceLevel,
    pub confidence_score: f64,
    pub base_score: f64,
    pub quality_bonus: f64,
    pub breakdown: PredictionBreakdown,
    pub recommendations: Vec<String>,
}

impl PredictionResult {
    pub fn summary(&self) -> String {
        format!(
            "{} ({:.1}/100) - {} - Confidence: {}",
            self.prediction_label.label(),
            self.engagement_score,
            self.percentile.label(),
            self.confidence_level.label()
        )
    }
}

/// One post to score, as exchanged with callers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    #[serde(default)]
    pub post: PostEngagement,
    #[serde(default)]
    pub sentiment: Option<SentimentSignal>,
    #[serde(default)]
    pub features: Option<ContentFeatures>,
    #[serde(default)]
    pub weights: Option<WeightOverrides>,
}

/// Scores a post against the process-wide default weights, merged with
/// `overrides` for this call only.
pub fn predict(
    post: &PostEngagement,
    sentiment: Option<&SentimentSignal>,
    features: Option<&ContentFeatures>,
    overrides: Option<&WeightOverrides>,
) -> PredictionResult {
    match overrides {
        Some(overrides) if !overrides.is_empty() => {
            let weights = DEFAULT_WEIGHTS.merged(overrides);
            predict_with_weights(post, sentiment, features, &weights)
        }
        _ => predict_with_weights(post, sentiment, features, &DEFAULT_WEIGHTS),
    }
}

pub fn predict_with_weights(
    post: &PostEngagement,
    sentiment: Option<&SentimentSignal>,
    features: Option<&ContentFeatures>,
    weights: &EngagementWeights,
) -> PredictionResult {
    let engagement = base_engagement(post, weights);
    let base_score = engagement.base.score;

    let quality_features = quality::quality_bonus(sentiment, features, weights);
    let quality_bonus = quality_features.capped();

    let engagement_score = round2(clamp(base_score + quality_bonus, 0.0, 100.0));
    let prediction_label = prediction_label(engagement_score);
    let confidence = engagement_confidence(post);

    let recommendations = recommend::recommendations(
        engagement_score,
        sentiment,
        features,
        &engagement,
    );

    tracing::debug!(
        likes = post.likes,
        comments = post.comments,
        shares = post.shares,
        base_score,
        quality_bonus,
        engagement_score,
        label = prediction_label.label(),
        "predicted post engagement"
    );

    PredictionResult {
        engagement_score,
        prediction_label,
        percentile: percentile(engagement_score),
        confidence_level: confidence.level,
        confidence_score: confidence.score,
        base_score,
        quality_bonus,
        breakdown: PredictionBreakdown {
            engagement,
            quality_features,
            confidence: ConfidenceBreakdown {
                total_engagement: post.total(),
                explanation: confidence_explanation(confidence.level).to_string(),
            },
        },
        recommendations,
    }
}

/// Scores every request against `base` merged with the request's own
/// overrides. Output order matches input order.
pub fn predict_batch(
    requests: &[PredictionRequest],
    base: &EngagementWeights,
) -> Vec<PredictionResult> {
    requests
        .par_iter()
        .map(|request| {
            let weights = match &request.weights {
                Some(overrides) => base.merged(overrides),
                None => base.clone(),
            };
            predict_with_weights(
                &request.post,
                request.sentiment.as_ref(),
                request.features.as_ref(),
                &weights,
            )
        })
        .collect()
}

/// One-line assessment from minimal input, with typical content assumed.
pub fn quick_predict(
    likes: u64,
    comments: u64,
    shares: u64,
    word_count: u64,
    hashtags: u64,
    is_positive: bool,
) -> String {
    let post = PostEngagement::new(likes, comments, shares);
    let sentiment = SentimentSignal {
        compound_score: if is_positive { 0.6 } else { 0.0 },
        sentiment_label: Some(if is_positive { "positive" } else { "neutral" }.to_string()),
        intensity: None,
    };
    let features = ContentFeatures {
        word_count,
        hashtag_count: hashtags,
        emoji_count: if is_positive { 2 } else { 0 },
        url_count: 1,
        has_call_to_action: true,
    };

    predict(&post, Some(&sentiment), Some(&features), None).summary()
}

fn base_engagement(post: &PostEngagement, weights: &EngagementWeights) -> EngagementBreakdown {
    let weighted = weights.weighted_engagement(post.likes, post.comments, post.shares);
    let scale = weights.base_scale();

    EngagementBreakdown {
        likes: post.likes,
        comments: post.comments,
        shares: post.shares,
        weighted_total: round2(weighted),
        base: ComponentScore::capped(weighted, scale.score(weighted), scale.cap),
        weights_used: WeightsUsed {
            likes: weights.likes_weight,
            comments: weights.comments_weight,
            shares: weights.shares_weight,
        },
    }
}
