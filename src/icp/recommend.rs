use crate::icp::{AudienceProfile, CompanySizeCategory, MatchDetails, RoleMatchType};

pub const HOT_LEAD: &str = "High-priority lead: strong ICP match across all dimensions.";
pub const IMMEDIATE_OUTREACH: &str = "Recommend immediate personalized outreach.";
pub const GOOD_FIT: &str = "Good ICP fit. Worth engaging with tailored messaging.";
pub const MODERATE_FIT: &str = "Moderate fit. Consider a nurture campaign or content engagement.";
pub const LOW_FIT: &str =
    "Low ICP fit. Deprioritize unless specific indicators suggest otherwise.";
pub const ROLE_MISMATCH: &str =
    "Role mismatch: not in a target function. May not have budget or authority.";
pub const VERIFY_AUTHORITY: &str =
    "Partial role match: verify decision-making authority before outreach.";
pub const SENIOR_DECISION_MAKER: &str =
    "Senior decision-maker: strong buying authority. Focus on ROI and strategic value.";
pub const MANAGER_INFLUENCER: &str =
    "Manager level: likely influencer. May need buy-in from leadership.";
pub const IDEAL_COMPANY_SIZE: &str =
    "Ideal company size: good fit for SaaS adoption and growth needs.";
pub const SMALL_COMPANY: &str =
    "Small company: may have budget constraints. Emphasize ROI and efficiency.";
pub const LARGE_ENTERPRISE: &str =
    "Large enterprise: expect complex approval processes. Focus on scale benefits.";
pub const INFLUENCER_ADVOCATE: &str =
    "LinkedIn influencer: high engagement potential. Could become an advocate.";
pub const CONTENT_PARTNERSHIP: &str =
    "Content creator: active on LinkedIn. Potential for a partnership or case study.";

const SENIOR_LEVELS: [&str; 4] = ["C-Level", "VP", "Director", "Head of"];
const MANAGER_LEVELS: [&str; 2] = ["Manager", "Senior Manager"];
const SMALL_COMPANY_BELOW: i64 = 50;
const LARGE_ENTERPRISE_ABOVE: i64 = 10_000;
const INFLUENCER_PREFIX: &str = "LinkedIn Influencer";
const CONTENT_CREATOR_SIGNAL: &str = "content_creator";

pub fn recommendations(
    score: u32,
    details: &MatchDetails,
    profile: &AudienceProfile,
) -> Vec<String> {
    let mut out: Vec<&'static str> = Vec::new();

    match score {
        80.. => out.extend([HOT_LEAD, IMMEDIATE_OUTREACH]),
        60..=79 => out.push(GOOD_FIT),
        40..=59 => out.push(MODERATE_FIT),
        _ => out.push(LOW_FIT),
    }

    match details.role_match_type {
        RoleMatchType::None => out.push(ROLE_MISMATCH),
        RoleMatchType::LowKeyword | RoleMatchType::MediumKeyword => out.push(VERIFY_AUTHORITY),
        RoleMatchType::Exact | RoleMatchType::HighKeyword => {}
    }

    if let Some(level) = details.seniority_detected.as_deref() {
        if SENIOR_LEVELS.contains(&level) {
            out.push(SENIOR_DECISION_MAKER);
        } else if MANAGER_LEVELS.contains(&level) {
            out.push(MANAGER_INFLUENCER);
        }
    }

    match details.company_size_category {
        Some(CompanySizeCategory::Optimal) => out.push(IDEAL_COMPANY_SIZE),
        Some(CompanySizeCategory::OutsideTargetRange) => {
            if profile.company_size < SMALL_COMPANY_BELOW {
                out.push(SMALL_COMPANY);
            } else if profile.company_size > LARGE_ENTERPRISE_ABOVE {
                out.push(LARGE_ENTERPRISE);
            }
        }
        _ => {}
    }

    if details
        .bonus_signals_found
        .iter()
        .any(|signal| signal.starts_with(INFLUENCER_PREFIX))
    {
        out.push(INFLUENCER_ADVOCATE);
    }
    if profile.has_signal(CONTENT_CREATOR_SIGNAL) {
        out.push(CONTENT_PARTNERSHIP);
    }

    out.into_iter().map(str::to_string).collect()
}
