use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const ROLE_MAX: u32 = 40;
pub const SENIORITY_MAX: u32 = 20;
pub const INDUSTRY_MAX: u32 = 25;
pub const COMPANY_SIZE_MAX: u32 = 15;
pub const BONUS_MAX: u32 = 20;

pub const INFLUENCER_SIGNAL: &str = "linkedin_influencer";
pub const FREQUENT_ENGAGEMENT_SIGNAL: &str = "frequent_engagement";
pub const DEFAULT_INFLUENCER_POINTS: u32 = 10;
pub const DEFAULT_FREQUENT_ENGAGEMENT_POINTS: u32 = 5;
pub const DEFAULT_INFLUENCER_FOLLOWERS: u64 = 5_000;
pub const FREQUENT_ENGAGEMENT_POSTS: u64 = 10;

pub static DEFAULT_ICP: Lazy<IcpDefinition> = Lazy::new(IcpDefinition::default);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleCategory {
    Marketing,
    Growth,
    Sales,
    Product,
    Executive,
    Social,
    Operations,
}

impl RoleCategory {
    pub fn label(self) -> &'static str {
        match self {
            RoleCategory::Marketing => "marketing",
            RoleCategory::Growth => "growth",
            RoleCategory::Sales => "sales",
            RoleCategory::Product => "product",
            RoleCategory::Executive => "executive",
            RoleCategory::Social => "social",
            RoleCategory::Operations => "operations",
        }
    }

    pub fn tier(self) -> RoleTier {
        match self {
            RoleCategory::Executive | RoleCategory::Growth | RoleCategory::Marketing => {
                RoleTier::High
            }
            RoleCategory::Sales | RoleCategory::Product | RoleCategory::Social => RoleTier::Medium,
            RoleCategory::Operations => RoleTier::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleTier {
    High,
    Medium,
    Low,
}

impl RoleTier {
    pub fn points(self) -> u32 {
        match self {
            RoleTier::High => 35,
            RoleTier::Medium => 25,
            RoleTier::Low => 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleKeywords {
    pub category: RoleCategory,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeniorityLevel {
    pub level: String,
    pub points: u32,
}

/// Closed employee-count interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeRange {
    pub min: i64,
    pub max: i64,
}

impl SizeRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, size: i64) -> bool {
        self.min <= size && size <= self.max
    }
}

/// Company-size tiers, checked optimal first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanySizeRanges {
    pub optimal: SizeRange,
    pub good: SizeRange,
    pub acceptable: SizeRange,
}

impl Default for CompanySizeRanges {
    fn default() -> Self {
        Self {
            optimal: SizeRange::new(50, 5_000),
            good: SizeRange::new(20, 10_000),
            acceptable: SizeRange::new(10, 49_999),
        }
    }
}

/// Reference data for audience relevance scoring. Built once and shared
/// read-only; customize with [`IcpDefinition::with_overrides`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IcpDefinition {
    pub target_roles: Vec<String>,
    pub role_keywords: Vec<RoleKeywords>,
    pub seniority_levels: Vec<SeniorityLevel>,
    pub target_industries: Vec<String>,
    pub company_size_ranges: CompanySizeRanges,
    pub bonus_signals: BTreeMap<String, u32>,
    pub target_regions: Vec<String>,
    pub influencer_followers: u64,
}

/// Replacement tables for a customized ICP. Each present table replaces the
/// base table wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IcpOverrides {
    pub target_roles: Option<Vec<String>>,
    pub target_industries: Option<Vec<String>>,
    pub company_size_ranges: Option<CompanySizeRanges>,
    pub seniority_levels: Option<Vec<SeniorityLevel>>,
    pub bonus_signals: Option<BTreeMap<String, u32>>,
}

impl IcpDefinition {
    pub fn with_overrides(&self, overrides: &IcpOverrides) -> IcpDefinition {
        let mut icp = self.clone();
        if let Some(roles) = &overrides.target_roles {
            icp.target_roles = roles.clone();
        }
        if let Some(industries) = &overrides.target_industries {
            icp.target_industries = industries.clone();
        }
        if let Some(ranges) = overrides.company_size_ranges {
            icp.company_size_ranges = ranges;
        }
        if let Some(levels) = &overrides.seniority_levels {
            icp.seniority_levels = levels.clone();
        }
        if let Some(signals) = &overrides.bonus_signals {
            icp.bonus_signals = signals.clone();
        }
        icp
    }

    pub fn signal_points(&self, signal: &str) -> Option<u32> {
        self.bonus_signals.get(signal).copied()
    }
}

impl Default for IcpDefinition {
    fn default() -> Self {
        Self {
            target_roles: strings(&[
                "Marketing Manager",
                "Marketing Director",
                "VP Marketing",
                "CMO",
                "Head of Marketing",
                "Digital Marketing Manager",
                "Content Marketing Manager",
                "Demand Generation Manager",
                "Growth Marketing Manager",
                "Brand Manager",
                "Growth Manager",
                "Growth Director",
                "VP Growth",
                "Head of Growth",
                "Business Development Manager",
                "Business Development Director",
                "Product Marketing Manager",
                "GTM Manager",
                "GTM Director",
                "Revenue Operations Manager",
                "Sales Operations Manager",
                "CEO",
                "Founder",
                "Co-Founder",
                "Chief Growth Officer",
                "CRO",
                "Sales Manager",
                "Sales Director",
                "VP Sales",
                "Account Executive",
                "Head of Sales",
                "Sales Development Manager",
                "Community Manager",
                "Social Media Manager",
                "Social Media Director",
                "Content Director",
                "Content Strategist",
                "Strategy Manager",
            ]),
            role_keywords: vec![
                role_keywords(
                    RoleCategory::Marketing,
                    &["marketing", "brand", "demand gen", "demand generation", "content"],
                ),
                role_keywords(
                    RoleCategory::Growth,
                    &["growth", "acquisition", "expansion", "scale"],
                ),
                role_keywords(
                    RoleCategory::Sales,
                    &[
                        "sales",
                        "business development",
                        "bd",
                        "revenue",
                        "account executive",
                        "ae",
                    ],
                ),
                role_keywords(RoleCategory::Product, &["product", "gtm", "go-to-market"]),
                role_keywords(
                    RoleCategory::Executive,
                    &["ceo", "founder", "chief", "president", "owner", "coo", "cro", "cmo"],
                ),
                role_keywords(
                    RoleCategory::Social,
                    &["social media", "community", "engagement", "linkedin"],
                ),
                role_keywords(
                    RoleCategory::Operations,
                    &["operations", "ops", "revops", "revenue operations"],
                ),
            ],
            seniority_levels: vec![
                seniority("C-Level", 20),
                seniority("VP", 18),
                seniority("Director", 16),
                seniority("Head of", 16),
                seniority("Senior Manager", 14),
                seniority("Manager", 12),
                seniority("Lead", 10),
                seniority("Senior", 8),
                seniority("Specialist", 6),
                seniority("Coordinator", 4),
                seniority("Associate", 4),
                seniority("Intern", 2),
            ],
            target_industries: strings(&[
                "SaaS",
                "Software",
                "Technology",
                "B2B SaaS",
                "Enterprise Software",
                "Information Technology",
                "Cloud Computing",
                "Artificial Intelligence",
                "Machine Learning",
                "Data Analytics",
                "Cybersecurity",
                "Marketing Services",
                "Marketing Technology",
                "MarTech",
                "Business Intelligence",
                "Consulting",
                "Fintech",
                "Financial Technology",
                "Digital Payments",
                "Startup",
                "Scale-up",
                "Venture Capital",
                "Tech Startup",
                "E-commerce",
                "Digital Commerce",
                "Retail Technology",
            ]),
            company_size_ranges: CompanySizeRanges::default(),
            bonus_signals: [
                (INFLUENCER_SIGNAL, DEFAULT_INFLUENCER_POINTS),
                (FREQUENT_ENGAGEMENT_SIGNAL, DEFAULT_FREQUENT_ENGAGEMENT_POINTS),
                ("content_creator", 8),
                ("premium_user", 5),
                ("verified", 5),
                ("active_in_target_groups", 6),
                ("event_speaker", 7),
                ("thought_leader", 10),
            ]
            .into_iter()
            .map(|(signal, points)| (signal.to_string(), points))
            .collect(),
            target_regions: strings(&[
                "North America",
                "United States",
                "Canada",
                "Europe",
                "United Kingdom",
                "Germany",
                "France",
                "Netherlands",
                "Asia Pacific",
                "Australia",
                "Singapore",
                "Global",
                "Remote",
            ]),
            influencer_followers: DEFAULT_INFLUENCER_FOLLOWERS,
        }
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn role_keywords(category: RoleCategory, keywords: &[&str]) -> RoleKeywords {
    RoleKeywords {
        category,
        keywords: strings(keywords),
    }
}

fn seniority(level: &str, points: u32) -> SeniorityLevel {
    SeniorityLevel {
        level: level.to_string(),
        points,
    }
}
