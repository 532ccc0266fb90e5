//! Post engagement prediction and audience ICP relevance scoring.
//!
//! Both scorers are pure functions over plain records and share the
//! primitives in [`scoring`].

pub mod config;
pub mod engagement;
pub mod error;
pub mod icp;
pub mod scoring;

use serde::{Deserialize, Deserializer};

pub use config::ScoringConfig;
pub use engagement::{
    predict, predict_batch, predict_with_weights, quick_predict, ContentFeatures,
    EngagementWeights, PostEngagement, PredictionLabel, PredictionRequest, PredictionResult,
    SentimentSignal, WeightOverrides,
};
pub use error::ConfigError;
pub use icp::{
    audience_summary, batch_score_audience, AudienceProfile, AudienceSummary, IcpDefinition,
    IcpOverrides, LeadPriority, RelevanceLabel, RelevanceResult, ScoredProfile,
};

/// Reads an explicit `null` as the field's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

pub fn format_float(value: f64, digits: usize) -> String {
    format!("{:.1$}", value, digits)
}
