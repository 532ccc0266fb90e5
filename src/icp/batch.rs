use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::icp::{score, AudienceProfile, IcpDefinition, LeadPriority, RelevanceResult};
use crate::scoring::{bucket, round2};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredProfile {
    pub profile: AudienceProfile,
    pub relevance: RelevanceResult,
}

/// Scores every profile and ranks by relevance, highest first. Ties keep
/// input order.
pub fn batch_score_audience(
    profiles: &[AudienceProfile],
    icp: &IcpDefinition,
) -> Vec<ScoredProfile> {
    let mut scored: Vec<ScoredProfile> = profiles
        .par_iter()
        .map(|profile| ScoredProfile {
            profile: profile.clone(),
            relevance: score(profile, icp),
        })
        .collect();

    scored.sort_by(|a, b| b.relevance.relevance_score.cmp(&a.relevance.relevance_score));
    tracing::debug!(count = scored.len(), "scored audience batch");
    scored
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AudienceQuality {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl AudienceQuality {
    pub fn label(self) -> &'static str {
        match self {
            AudienceQuality::Excellent => "Excellent",
            AudienceQuality::Good => "Good",
            AudienceQuality::Fair => "Fair",
            AudienceQuality::Poor => "Poor",
        }
    }
}

const QUALITY_THRESHOLDS: [(f64, AudienceQuality); 3] = [
    (70.0, AudienceQuality::Excellent),
    (50.0, AudienceQuality::Good),
    (30.0, AudienceQuality::Fair),
];

const HIGH_RELEVANCE: u32 = 80;
const MEDIUM_RELEVANCE: u32 = 40;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudienceSummary {
    pub total_audience: usize,
    pub average_relevance_score: f64,
    pub high_relevance_count: usize,
    pub medium_relevance_count: usize,
    pub low_relevance_count: usize,
    pub hot_leads: usize,
    pub warm_leads: usize,
    pub cold_leads: usize,
    pub top_score: u32,
    pub lowest_score: u32,
    pub audience_quality: AudienceQuality,
}

/// `None` for an empty audience.
pub fn audience_summary(scored: &[ScoredProfile]) -> Option<AudienceSummary> {
    let scores: Vec<u32> = scored.iter().map(|entry| entry.relevance.relevance_score).collect();
    let top_score = scores.iter().copied().max()?;
    let lowest_score = scores.iter().copied().min()?;

    let average = scores.iter().map(|&score| score as f64).sum::<f64>() / scores.len() as f64;
    let priority_count = |priority: LeadPriority| {
        scored
            .iter()
            .filter(|entry| entry.relevance.lead_priority == priority)
            .count()
    };

    Some(AudienceSummary {
        total_audience: scores.len(),
        average_relevance_score: round2(average),
        high_relevance_count: scores.iter().filter(|&&s| s >= HIGH_RELEVANCE).count(),
        medium_relevance_count: scores
            .iter()
            .filter(|&&s| (MEDIUM_RELEVANCE..HIGH_RELEVANCE).contains(&s))
            .count(),
        low_relevance_count: scores.iter().filter(|&&s| s < MEDIUM_RELEVANCE).count(),
        hot_leads: priority_count(LeadPriority::Hot),
        warm_leads: priority_count(LeadPriority::Warm),
        cold_leads: priority_count(LeadPriority::Cold),
        top_score,
        lowest_score,
        audience_quality: bucket(average, &QUALITY_THRESHOLDS, AudienceQuality::Poor),
    })
}
