use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use signal_score::icp::recommend::{
    CONTENT_PARTNERSHIP, HOT_LEAD, IDEAL_COMPANY_SIZE, IMMEDIATE_OUTREACH, INFLUENCER_ADVOCATE,
    LARGE_ENTERPRISE, LOW_FIT, ROLE_MISMATCH, SENIOR_DECISION_MAKER, VERIFY_AUTHORITY,
};
use signal_score::icp::{
    audience_summary, batch_score_audience, relevance_label, score, AudienceProfile,
    AudienceQuality, CompanySizeCategory, EngagementHistory, IcpOverrides, LeadPriority,
    RelevanceLabel, RoleMatchType, DEFAULT_ICP,
};
use signal_score::scoring::ConfidenceLevel;

fn profile(job_title: &str, seniority: &str, industry: &str, company_size: i64) -> AudienceProfile {
    AudienceProfile {
        job_title: job_title.to_string(),
        seniority: seniority.to_string(),
        industry: industry.to_string(),
        company_size,
        ..AudienceProfile::default()
    }
}

fn vp_marketing() -> AudienceProfile {
    AudienceProfile {
        linkedin_followers: 8_000,
        profile_signals: vec!["content_creator".to_string(), "premium_user".to_string()],
        ..profile("VP Marketing", "VP", "B2B SaaS", 250)
    }
}

fn software_engineer() -> AudienceProfile {
    profile("Software Engineer", "", "Healthcare", 50_000)
}

#[test]
fn vp_marketing_is_a_hot_lead() {
    let result = score(&vp_marketing(), &DEFAULT_ICP);
    let breakdown = result.score_breakdown;

    assert_eq!(breakdown.role_score, 40);
    assert_eq!(breakdown.seniority_score, 18);
    assert_eq!(breakdown.industry_score, 25);
    assert_eq!(breakdown.company_size_score, 15);
    // 10 influencer + 8 content creator + 5 premium, capped at 20.
    assert_eq!(breakdown.bonus_score, 20);
    assert_eq!(breakdown.total_score, 118);
    assert_eq!(result.relevance_score, 100);
    assert_eq!(result.relevance_label, RelevanceLabel::High);
    assert_eq!(result.lead_priority, LeadPriority::Hot);
    assert_eq!(result.confidence_level, ConfidenceLevel::High);
    assert!((result.confidence_score - 90.0).abs() < 1e-6);

    let details = &result.match_details;
    assert_eq!(details.role_match_type, RoleMatchType::Exact);
    assert_eq!(details.role_matched.as_deref(), Some("VP Marketing"));
    assert_eq!(details.seniority_detected.as_deref(), Some("VP"));
    assert_eq!(details.industry_matched.as_deref(), Some("SaaS"));
    assert_eq!(details.company_size_category, Some(CompanySizeCategory::Optimal));
    assert_eq!(
        details.bonus_signals_found,
        vec![
            "LinkedIn Influencer (5K+ followers)".to_string(),
            "Content Creator".to_string(),
            "Premium User".to_string(),
        ]
    );

    let expected = vec![
        HOT_LEAD,
        IMMEDIATE_OUTREACH,
        SENIOR_DECISION_MAKER,
        IDEAL_COMPANY_SIZE,
        INFLUENCER_ADVOCATE,
        CONTENT_PARTNERSHIP,
    ];
    assert_eq!(result.recommendations, expected);
}

#[test]
fn software_engineer_in_healthcare_is_cold() {
    let result = score(&software_engineer(), &DEFAULT_ICP);
    let breakdown = result.score_breakdown;

    assert_eq!(breakdown.role_score, 0);
    assert_eq!(breakdown.industry_score, 0);
    assert_eq!(breakdown.company_size_score, 0);
    assert_eq!(result.relevance_score, 0);
    assert_eq!(result.relevance_label, RelevanceLabel::NotRelevant);
    assert_eq!(result.lead_priority, LeadPriority::Cold);
    assert_eq!(
        result.match_details.company_size_category,
        Some(CompanySizeCategory::OutsideTargetRange)
    );
    assert_eq!(result.confidence_level, ConfidenceLevel::Medium);
    assert!((result.confidence_score - 50.0).abs() < 1e-6);
    assert_eq!(
        result.recommendations,
        vec![LOW_FIT, ROLE_MISMATCH, LARGE_ENTERPRISE]
    );
}

#[test]
fn empty_profile_scores_zero_with_low_confidence() {
    let result = score(&AudienceProfile::default(), &DEFAULT_ICP);

    assert_eq!(result.relevance_score, 0);
    assert_eq!(result.match_details.company_size_category, None);
    assert_eq!(result.match_details.industry_matched, None);
    assert_eq!(result.confidence_level, ConfidenceLevel::Low);
    assert!((result.confidence_score - 10.0).abs() < 1e-6);
}

#[test]
fn relevance_boundaries_are_inclusive() {
    // 40 exact + 10 lead + 25 industry + 5 acceptable size.
    let eighty = score(&profile("CMO", "Lead", "SaaS", 15), &DEFAULT_ICP);
    assert_eq!(eighty.relevance_score, 80);
    assert_eq!(eighty.relevance_label, RelevanceLabel::High);
    assert_eq!(eighty.lead_priority, LeadPriority::Hot);

    // 40 exact + 4 coordinator + 25 industry + 10 good size.
    let seventy_nine = score(&profile("CMO", "Coordinator", "SaaS", 7_500), &DEFAULT_ICP);
    assert_eq!(seventy_nine.relevance_score, 79);
    assert_eq!(seventy_nine.relevance_label, RelevanceLabel::MediumHigh);
    assert_eq!(seventy_nine.lead_priority, LeadPriority::Warm);

    assert_eq!(relevance_label(60), (RelevanceLabel::MediumHigh, LeadPriority::Warm));
    assert_eq!(relevance_label(59), (RelevanceLabel::Medium, LeadPriority::Warm));
    assert_eq!(relevance_label(40), (RelevanceLabel::Medium, LeadPriority::Warm));
    assert_eq!(relevance_label(39), (RelevanceLabel::Low, LeadPriority::Cold));
    assert_eq!(relevance_label(20), (RelevanceLabel::Low, LeadPriority::Cold));
    assert_eq!(relevance_label(19), (RelevanceLabel::NotRelevant, LeadPriority::Cold));
}

#[test]
fn first_matching_rule_wins_when_several_apply() {
    let growth_marketer = score(&profile("Growth Marketing Manager", "", "", 0), &DEFAULT_ICP);
    assert_eq!(growth_marketer.score_breakdown.role_score, 40);
    assert_eq!(
        growth_marketer.match_details.role_matched.as_deref(),
        Some("Marketing Manager")
    );
    assert_eq!(growth_marketer.score_breakdown.seniority_score, 12);
    assert_eq!(
        growth_marketer.match_details.seniority_detected.as_deref(),
        Some("Manager")
    );

    let sales_growth = score(&profile("Sales Growth Analyst", "", "", 0), &DEFAULT_ICP);
    assert_eq!(sales_growth.score_breakdown.role_score, 35);
    assert_eq!(sales_growth.match_details.role_match_type, RoleMatchType::HighKeyword);
    assert_eq!(
        sales_growth.match_details.role_matched.as_deref(),
        Some("growth (growth)")
    );

    let senior_manager = score(
        &profile("Senior Manager, Partnerships", "", "", 0),
        &DEFAULT_ICP,
    );
    assert_eq!(senior_manager.score_breakdown.seniority_score, 14);
    assert_eq!(
        senior_manager.match_details.seniority_detected.as_deref(),
        Some("Senior Manager")
    );
}

#[test]
fn keyword_roles_ask_to_verify_authority() {
    let result = score(&profile("Revenue Analyst", "", "", 0), &DEFAULT_ICP);
    assert_eq!(result.match_details.role_match_type, RoleMatchType::MediumKeyword);
    assert_eq!(result.score_breakdown.role_score, 25);
    assert!(result.recommendations.iter().any(|line| line == VERIFY_AUTHORITY));
}

#[test]
fn frequent_engagement_earns_bonus() {
    let member = AudienceProfile {
        engagement_history: Some(EngagementHistory {
            posts_engaged_last_30_days: 12,
            comments_made: 3,
            shares: 1,
        }),
        ..AudienceProfile::default()
    };
    let result = score(&member, &DEFAULT_ICP);
    assert_eq!(result.score_breakdown.bonus_score, 5);
    assert_eq!(
        result.match_details.bonus_signals_found,
        vec!["Frequent Engagement (12 posts)".to_string()]
    );
}

#[test]
fn overrides_replace_tables_for_one_definition() {
    let overrides: IcpOverrides = serde_json::from_str(
        r#"{"target_industries": ["Healthcare"], "company_size_ranges": {
            "optimal": {"min": 10000, "max": 100000},
            "good": {"min": 1000, "max": 9999},
            "acceptable": {"min": 100, "max": 999}
        }}"#,
    )
    .expect("overrides");
    let icp = DEFAULT_ICP.with_overrides(&overrides);

    let custom = score(&software_engineer(), &icp);
    assert_eq!(custom.score_breakdown.industry_score, 25);
    assert_eq!(custom.score_breakdown.company_size_score, 15);

    let default = score(&software_engineer(), &DEFAULT_ICP);
    assert_eq!(default.score_breakdown.industry_score, 0);
    assert_eq!(DEFAULT_ICP.target_industries.len(), 26);
}

#[test]
fn unknown_override_tables_are_rejected() {
    let parsed = serde_json::from_str::<IcpOverrides>(r#"{"target_region": ["Europe"]}"#);
    assert!(parsed.is_err());
}

#[test]
fn null_profile_fields_read_as_empty() {
    let member: AudienceProfile = serde_json::from_str(
        r#"{"job_title": null, "industry": "Fintech", "company_size": null,
            "linkedin_followers": 7000, "profile_signals": null, "engagement_history": null}"#,
    )
    .expect("profile");

    assert_eq!(member.job_title, "");
    assert_eq!(member.company_size, 0);
    assert!(member.profile_signals.is_empty());

    let result = score(&member, &DEFAULT_ICP);
    assert_eq!(result.score_breakdown.industry_score, 25);
    assert_eq!(result.score_breakdown.bonus_score, 10);
}

#[test]
fn batch_ranks_descending_and_keeps_ties_in_order() {
    let mut first_tie = software_engineer();
    first_tie.name = Some("first".to_string());
    let mut second_tie = software_engineer();
    second_tie.name = Some("second".to_string());

    let profiles = vec![
        first_tie,
        profile("CMO", "Coordinator", "SaaS", 7_500),
        second_tie,
        vp_marketing(),
        profile("CMO", "Lead", "SaaS", 15),
    ];
    let scored = batch_score_audience(&profiles, &DEFAULT_ICP);
    let scores: Vec<u32> = scored.iter().map(|entry| entry.relevance.relevance_score).collect();
    assert_eq!(scores, vec![100, 80, 79, 0, 0]);
    assert_eq!(scored[3].profile.name.as_deref(), Some("first"));
    assert_eq!(scored[4].profile.name.as_deref(), Some("second"));

    let summary = audience_summary(&scored).expect("summary");
    assert_eq!(summary.total_audience, 5);
    assert!((summary.average_relevance_score - 51.8).abs() < 1e-6);
    assert_eq!(summary.high_relevance_count, 2);
    assert_eq!(summary.medium_relevance_count, 1);
    assert_eq!(summary.low_relevance_count, 2);
    assert_eq!(summary.hot_leads, 2);
    assert_eq!(summary.warm_leads, 1);
    assert_eq!(summary.cold_leads, 2);
    assert_eq!(summary.top_score, 100);
    assert_eq!(summary.lowest_score, 0);
    assert_eq!(summary.audience_quality, AudienceQuality::Good);
}

#[test]
fn empty_audience_has_no_summary() {
    let scored = batch_score_audience(&[], &DEFAULT_ICP);
    assert!(scored.is_empty());
    assert!(audience_summary(&scored).is_none());
}

#[test]
fn random_profiles_respect_caps() {
    let titles = [
        "VP Marketing",
        "Growth Lead",
        "Sales Director",
        "Ops Specialist",
        "Chief Executive",
        "Nurse",
        "",
    ];
    let seniorities = ["C-Level", "VP", "Manager", "Intern", ""];
    let industries = ["SaaS", "Cloud Hosting", "Agency", "Farming", ""];
    let signals = ["content_creator", "verified", "thought-leader", "Event Speaker", "unknown"];

    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..300 {
        let member = AudienceProfile {
            job_title: titles.choose(&mut rng).copied().unwrap_or_default().to_string(),
            seniority: seniorities.choose(&mut rng).copied().unwrap_or_default().to_string(),
            industry: industries.choose(&mut rng).copied().unwrap_or_default().to_string(),
            company_size: rng.gen_range(-10..200_000),
            linkedin_followers: rng.gen_range(0..20_000),
            profile_signals: signals
                .choose_multiple(&mut rng, 3)
                .map(|signal| signal.to_string())
                .collect(),
            engagement_history: Some(EngagementHistory {
                posts_engaged_last_30_days: rng.gen_range(0..30),
                ..EngagementHistory::default()
            }),
            ..AudienceProfile::default()
        };

        let result = score(&member, &DEFAULT_ICP);
        let b = result.score_breakdown;
        assert!(result.relevance_score <= 100);
        assert!(b.role_score <= b.role_max);
        assert!(b.seniority_score <= b.seniority_max);
        assert!(b.industry_score <= b.industry_max);
        assert!(b.company_size_score <= b.company_size_max);
        assert!(b.bonus_score <= b.bonus_max);
        assert_eq!(
            b.role_score
                + b.seniority_score
                + b.industry_score
                + b.company_size_score
                + b.bonus_score,
            b.total_score
        );
        assert_eq!(result, score(&member, &DEFAULT_ICP));
    }
}
