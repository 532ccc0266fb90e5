pub mod batch;
pub mod definition;
pub mod matching;
pub mod recommend;

use serde::{Deserialize, Serialize};

use crate::null_as_default;
use crate::scoring::{bucket, Confidence, ConfidenceLevel, ConfidenceScale};

pub use batch::{
    audience_summary, batch_score_audience, AudienceQuality, AudienceSummary, ScoredProfile,
};
pub use definition::{
    CompanySizeRanges, IcpDefinition, IcpOverrides, RoleCategory, RoleKeywords, SeniorityLevel,
    SizeRange, BONUS_MAX, COMPANY_SIZE_MAX, DEFAULT_ICP, INDUSTRY_MAX, ROLE_MAX, SENIORITY_MAX,
};
pub use matching::{CompanySizeCategory, RoleMatchType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EngagementHistory {
    #[serde(default, deserialize_with = "null_as_default")]
    pub posts_engaged_last_30_days: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comments_made: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub shares: u64,
}

/// An audience member as captured from post engagement. Every field is
/// optional on the wire and defaults to empty/zero.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AudienceProfile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub job_title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub seniority: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub industry: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub company_size: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub linkedin_followers: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub profile_signals: Vec<String>,
    #[serde(default)]
    pub engagement_history: Option<EngagementHistory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl AudienceProfile {
    /// Signal tags lowercased with `-` and spaces folded to `_`, duplicates
    /// dropped, first occurrence order kept.
    pub fn normalized_signals(&self) -> Vec<String> {
        let mut signals: Vec<String> = Vec::with_capacity(self.profile_signals.len());
        for raw in &self.profile_signals {
            let signal = raw.trim().to_lowercase().replace(['-', ' '], "_");
            if !signal.is_empty() && !signals.contains(&signal) {
                signals.push(signal);
            }
        }
        signals
    }

    pub fn has_signal(&self, signal: &str) -> bool {
        self.normalized_signals().iter().any(|found| found == signal)
    }

    /// Number of scored fields that carry data, out of seven.
    pub fn completeness(&self) -> u32 {
        [
            !self.job_title.trim().is_empty(),
            !self.seniority.trim().is_empty(),
            !self.industry.trim().is_empty(),
            self.company_size > 0,
            self.linkedin_followers > 0,
            !self.profile_signals.is_empty(),
            self.engagement_history.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count() as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelevanceLabel {
    High,
    #[serde(rename = "Medium-High")]
    MediumHigh,
    Medium,
    Low,
    #[serde(rename = "Not Relevant")]
    NotRelevant,
}

impl RelevanceLabel {
    pub fn label(self) -> &'static str {
        match self {
            RelevanceLabel::High => "High",
            RelevanceLabel::MediumHigh => "Medium-High",
            RelevanceLabel::Medium => "Medium",
            RelevanceLabel::Low => "Low",
            RelevanceLabel::NotRelevant => "Not Relevant",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeadPriority {
    Hot,
    Warm,
    Cold,
}

impl LeadPriority {
    pub fn label(self) -> &'static str {
        match self {
            LeadPriority::Hot => "Hot",
            LeadPriority::Warm => "Warm",
            LeadPriority::Cold => "Cold",
        }
    }
}

const RELEVANCE_THRESHOLDS: [(f64, (RelevanceLabel, LeadPriority)); 4] = [
    (80.0, (RelevanceLabel::High, LeadPriority::Hot)),
    (60.0, (RelevanceLabel::MediumHigh, LeadPriority::Warm)),
    (40.0, (RelevanceLabel::Medium, LeadPriority::Warm)),
    (20.0, (RelevanceLabel::Low, LeadPriority::Cold)),
];

/// Confidence from how many scored profile fields were populated.
pub const PROFILE_CONFIDENCE: ConfidenceScale = ConfidenceScale {
    steps: &[
        (6.0, Confidence::new(ConfidenceLevel::High, 90.0)),
        (4.0, Confidence::new(ConfidenceLevel::Medium, 70.0)),
        (2.0, Confidence::new(ConfidenceLevel::Medium, 50.0)),
    ],
    trace: Confidence::new(ConfidenceLevel::Low, 30.0),
    none: Confidence::new(ConfidenceLevel::Low, 10.0),
};

pub fn relevance_label(score: u32) -> (RelevanceLabel, LeadPriority) {
    bucket(
        score as f64,
        &RELEVANCE_THRESHOLDS,
        (RelevanceLabel::NotRelevant, LeadPriority::Cold),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub role_score: u32,
    pub role_max: u32,
    pub seniority_score: u32,
    pub seniority_max: u32,
    pub industry_score: u32,
    pub industry_max: u32,
    pub company_size_score: u32,
    pub company_size_max: u32,
    pub bonus_score: u32,
    pub bonus_max: u32,
    /// Role, seniority, industry and company size.
    pub base_score: u32,
    /// Base plus bonus, before the 100-point clamp.
    pub total_score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchDetails {
    pub role_match_type: RoleMatchType,
    pub role_matched: Option<String>,
    pub seniority_detected: Option<String>,
    pub industry_matched: Option<String>,
    pub company_size_category: Option<CompanySizeCategory>,
    pub bonus_signals_found: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelevanceResult {
    pub relevance_score: u32,
    pub relevance_label: RelevanceLabel,
    pub lead_priority: LeadPriority,
    pub confidence_level: ConfidenceLevel,
    pub confidence_score: f64,
    pub score_breakdown: ScoreBreakdown,
    pub match_details: MatchDetails,
    pub recommendations: Vec<String>,
}

/// Scores one audience member against `icp`.
pub fn score(profile: &AudienceProfile, icp: &IcpDefinition) -> RelevanceResult {
    let role = matching::match_role(&profile.job_title, icp);
    let (seniority_score, seniority_detected) =
        matching::match_seniority(&profile.seniority, &profile.job_title, icp);
    let (industry_score, industry_matched) = matching::match_industry(&profile.industry, icp);
    let company_size_category = matching::match_company_size(profile.company_size, icp);
    let company_size_score = company_size_category.map(|category| category.points()).unwrap_or(0);
    let bonus = matching::match_bonus_signals(profile, icp);
    let bonus_score = bonus.total.min(BONUS_MAX);

    let base_score = role.points + seniority_score + industry_score + company_size_score;
    let total_score = base_score + bonus_score;
    let relevance_score = total_score.min(100);
    let (relevance_label, lead_priority) = relevance_label(relevance_score);
    let confidence = PROFILE_CONFIDENCE.calibrate(profile.completeness() as f64);

    let match_details = MatchDetails {
        role_match_type: role.match_type,
        role_matched: role.matched,
        seniority_detected,
        industry_matched,
        company_size_category,
        bonus_signals_found: bonus.signals_found,
    };

    let recommendations = recommend::recommendations(relevance_score, &match_details, profile);

    tracing::debug!(
        job_title = %profile.job_title,
        relevance_score,
        label = relevance_label.label(),
        priority = lead_priority.label(),
        "scored audience member"
    );

    RelevanceResult {
        relevance_score,
        relevance_label,
        lead_priority,
        confidence_level: confidence.level,
        confidence_score: confidence.score,
        score_breakdown: ScoreBreakdown {
            role_score: role.points,
            role_max: ROLE_MAX,
            seniority_score,
            seniority_max: SENIORITY_MAX,
            industry_score,
            industry_max: INDUSTRY_MAX,
            company_size_score,
            company_size_max: COMPANY_SIZE_MAX,
            bonus_score,
            bonus_max: BONUS_MAX,
            base_score,
            total_score,
        },
        match_details,
        recommendations,
    }
}
