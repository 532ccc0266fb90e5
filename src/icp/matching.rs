//! Ordered first-match rules for each relevance component.
//!
//! Every table is walked in declared order and the first hit wins, so list
//! order is the tie-break.

use serde::{Deserialize, Serialize};

use crate::icp::definition::{
    IcpDefinition, COMPANY_SIZE_MAX, DEFAULT_FREQUENT_ENGAGEMENT_POINTS, DEFAULT_INFLUENCER_POINTS,
    FREQUENT_ENGAGEMENT_POSTS, FREQUENT_ENGAGEMENT_SIGNAL, INDUSTRY_MAX, INFLUENCER_SIGNAL,
    ROLE_MAX, RoleTier, SENIORITY_MAX,
};
use crate::icp::AudienceProfile;

pub const TECH_KEYWORDS: [&str; 6] = [
    "tech", "software", "digital", "cloud", "internet", "startup",
];
pub const BUSINESS_KEYWORDS: [&str; 4] = ["business", "services", "consulting", "agency"];
pub const TECH_RELATED: &str = "Tech-related";
pub const BUSINESS_RELATED: &str = "Business-related";
const TECH_RELATED_POINTS: u32 = 15;
const BUSINESS_RELATED_POINTS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleMatchType {
    Exact,
    HighKeyword,
    MediumKeyword,
    LowKeyword,
    #[default]
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompanySizeCategory {
    Optimal,
    Good,
    Acceptable,
    #[serde(rename = "Outside target range")]
    OutsideTargetRange,
}

impl CompanySizeCategory {
    pub fn label(self) -> &'static str {
        match self {
            CompanySizeCategory::Optimal => "Optimal",
            CompanySizeCategory::Good => "Good",
            CompanySizeCategory::Acceptable => "Acceptable",
            CompanySizeCategory::OutsideTargetRange => "Outside target range",
        }
    }

    pub fn points(self) -> u32 {
        match self {
            CompanySizeCategory::Optimal => COMPANY_SIZE_MAX,
            CompanySizeCategory::Good => 10,
            CompanySizeCategory::Acceptable => 5,
            CompanySizeCategory::OutsideTargetRange => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleMatch {
    pub points: u32,
    pub match_type: RoleMatchType,
    pub matched: Option<String>,
}

pub fn match_role(job_title: &str, icp: &IcpDefinition) -> RoleMatch {
    let title = job_title.trim().to_lowercase();
    if title.is_empty() {
        return no_role_match();
    }

    if let Some(target) = icp
        .target_roles
        .iter()
        .find(|target| contains_term(&title, target))
    {
        return RoleMatch {
            points: ROLE_MAX,
            match_type: RoleMatchType::Exact,
            matched: Some(target.clone()),
        };
    }

    for entry in &icp.role_keywords {
        if let Some(keyword) = entry
            .keywords
            .iter()
            .find(|keyword| contains_term(&title, keyword))
        {
            let tier = entry.category.tier();
            let match_type = match tier {
                RoleTier::High => RoleMatchType::HighKeyword,
                RoleTier::Medium => RoleMatchType::MediumKeyword,
                RoleTier::Low => RoleMatchType::LowKeyword,
            };
            return RoleMatch {
                points: tier.points().min(ROLE_MAX),
                match_type,
                matched: Some(format!("{} ({})", entry.category.label(), keyword)),
            };
        }
    }

    no_role_match()
}

fn no_role_match() -> RoleMatch {
    RoleMatch {
        points: 0,
        match_type: RoleMatchType::None,
        matched: None,
    }
}

/// First seniority level found in either the seniority field or the title.
pub fn match_seniority(
    seniority: &str,
    job_title: &str,
    icp: &IcpDefinition,
) -> (u32, Option<String>) {
    let seniority = seniority.to_lowercase();
    let title = job_title.to_lowercase();

    icp.seniority_levels
        .iter()
        .find(|entry| {
            contains_term(&seniority, &entry.level) || contains_term(&title, &entry.level)
        })
        .map(|entry| (entry.points.min(SENIORITY_MAX), Some(entry.level.clone())))
        .unwrap_or((0, None))
}

/// Target industries match in both directions: the target inside the
/// profile's industry, or the industry inside a target name.
pub fn match_industry(industry: &str, icp: &IcpDefinition) -> (u32, Option<String>) {
    let industry = industry.trim().to_lowercase();
    if industry.is_empty() {
        return (0, None);
    }

    let exact = icp.target_industries.iter().find(|target| {
        let target = target.to_lowercase();
        !target.is_empty() && (industry.contains(&target) || target.contains(&industry))
    });
    if let Some(target) = exact {
        return (INDUSTRY_MAX, Some(target.clone()));
    }

    if TECH_KEYWORDS.iter().any(|keyword| industry.contains(keyword)) {
        return (TECH_RELATED_POINTS, Some(TECH_RELATED.to_string()));
    }
    if BUSINESS_KEYWORDS.iter().any(|keyword| industry.contains(keyword)) {
        return (BUSINESS_RELATED_POINTS, Some(BUSINESS_RELATED.to_string()));
    }

    (0, None)
}

/// `None` when the size is unknown (zero or negative).
pub fn match_company_size(company_size: i64, icp: &IcpDefinition) -> Option<CompanySizeCategory> {
    if company_size <= 0 {
        return None;
    }

    let ranges = &icp.company_size_ranges;
    let category = if ranges.optimal.contains(company_size) {
        CompanySizeCategory::Optimal
    } else if ranges.good.contains(company_size) {
        CompanySizeCategory::Good
    } else if ranges.acceptable.contains(company_size) {
        CompanySizeCategory::Acceptable
    } else {
        CompanySizeCategory::OutsideTargetRange
    };
    Some(category)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BonusMatch {
    /// Sum before the bonus cap.
    pub total: u32,
    pub signals_found: Vec<String>,
}

pub fn match_bonus_signals(profile: &AudienceProfile, icp: &IcpDefinition) -> BonusMatch {
    let mut total = 0u32;
    let mut signals_found = Vec::new();

    if profile.linkedin_followers >= icp.influencer_followers {
        total = total.saturating_add(
            icp.signal_points(INFLUENCER_SIGNAL)
                .unwrap_or(DEFAULT_INFLUENCER_POINTS),
        );
        signals_found.push(format!(
            "LinkedIn Influencer ({}+ followers)",
            compact_count(icp.influencer_followers)
        ));
    }

    if let Some(history) = &profile.engagement_history {
        let posts = history.posts_engaged_last_30_days;
        if posts >= FREQUENT_ENGAGEMENT_POSTS {
            total = total.saturating_add(
                icp.signal_points(FREQUENT_ENGAGEMENT_SIGNAL)
                    .unwrap_or(DEFAULT_FREQUENT_ENGAGEMENT_POINTS),
            );
            signals_found.push(format!("Frequent Engagement ({} posts)", posts));
        }
    }

    for signal in profile.normalized_signals() {
        if let Some(points) = icp.signal_points(&signal) {
            total = total.saturating_add(points);
            signals_found.push(title_case(&signal));
        }
    }

    BonusMatch {
        total,
        signals_found,
    }
}

fn contains_term(haystack: &str, term: &str) -> bool {
    let term = term.to_lowercase();
    !term.is_empty() && haystack.contains(&term)
}

fn title_case(signal: &str) -> String {
    signal
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn compact_count(value: u64) -> String {
    if value >= 1_000 && value % 1_000 == 0 {
        format!("{}K", value / 1_000)
    } else {
        value.to_string()
    }
}
