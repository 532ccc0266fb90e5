use crate::engagement::{ContentFeatures, EngagementBreakdown, SentimentSignal};

pub const LOW_SCORE_NOTICE: &str =
    "Low engagement predicted. Consider major revisions to the content and distribution strategy.";
pub const MODERATE_SCORE_NOTICE: &str =
    "Moderate engagement expected. Small optimizations could noticeably boost performance.";
pub const BOOST_REACH: &str =
    concat!(
        "Boost initial reach: share in relevant groups, tag key connections ",
        "and post at peak hours (Tue-Thu 8-10am)."
    );
pub const BOOST_SHAREABILITY: &str =
    "Low share rate: add a shareable insight, statistic or quote and invite readers to share it.";
pub const DISCUSSION_PROMPT: &str =
    "Good visibility but little discussion: end with a question to encourage comments.";
pub const POSITIVE_FRAMING: &str =
    "Add positive framing: upbeat posts tend to draw noticeably more engagement.";
pub const EXPAND_CONTENT: &str =
    "Expand the content: posts with 100-300 words perform best. Add context, examples or insights.";
pub const TRIM_CONTENT: &str =
    "Trim the content: split long posts or add line breaks for scannability.";
pub const ADD_HASHTAGS: &str = "Add hashtags: 3-5 relevant hashtags improve discoverability.";
pub const REDUCE_HASHTAGS: &str = "Reduce hashtags: 3-5 is the sweet spot; more looks spammy.";
pub const ADD_EMOJI: &str =
    "Add visual interest: 1-3 relevant emojis catch attention and convey emotion.";
pub const ADD_CTA: &str =
    "Add a clear call to action: tell readers what to do next (comment, share, click, apply).";
pub const ADD_LINK: &str =
    "Consider adding a link: posts with URLs drive traffic and add value.";
pub const WELL_OPTIMIZED: &str =
    "Content is well optimized. Keep monitoring performance and iterating.";

const LOW_SCORE: f64 = 40.0;
const HIGH_SCORE: f64 = 70.0;
const REACH_WEIGHTED_TOTAL: f64 = 50.0;
const DISCUSSION_MIN_COMMENTS: u64 = 5;
const DISCUSSION_MIN_LIKES: u64 = 20;
const POSITIVE_COMPOUND: f64 = 0.05;

/// Every rule is evaluated in this fixed order; no rule suppresses another.
pub fn recommendations(
    score: f64,
    sentiment: Option<&SentimentSignal>,
    features: Option<&ContentFeatures>,
    engagement: &EngagementBreakdown,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if score < LOW_SCORE {
        recommendations.push(LOW_SCORE_NOTICE.to_string());
    } else if score < HIGH_SCORE {
        recommendations.push(MODERATE_SCORE_NOTICE.to_string());
    }

    if engagement.weighted_total < REACH_WEIGHTED_TOTAL {
        recommendations.push(BOOST_REACH.to_string());
    }
    if engagement.shares == 0 && engagement.comments > 0 {
        recommendations.push(BOOST_SHAREABILITY.to_string());
    }
    if engagement.comments < DISCUSSION_MIN_COMMENTS && engagement.likes > DISCUSSION_MIN_LIKES {
        recommendations.push(DISCUSSION_PROMPT.to_string());
    }

    if let Some(signal) = sentiment {
        if signal.compound() < POSITIVE_COMPOUND {
            recommendations.push(POSITIVE_FRAMING.to_string());
        }
    }

    if let Some(features) = features {
        recommendations.extend(feature_recommendations(features).into_iter().map(str::to_string));
    }

    if recommendations.is_empty() {
        recommendations.push(WELL_OPTIMIZED.to_string());
    }

    recommendations
}

fn feature_recommendations(features: &ContentFeatures) -> Vec<&'static str> {
    let mut out = Vec::new();

    if features.word_count < 100 {
        out.push(EXPAND_CONTENT);
    } else if features.word_count > 300 {
        out.push(TRIM_CONTENT);
    }

    if features.hashtag_count < 2 {
        out.push(ADD_HASHTAGS);
    } else if features.hashtag_count > 5 {
        out.push(REDUCE_HASHTAGS);
    }

    if features.emoji_count == 0 {
        out.push(ADD_EMOJI);
    }
    if !features.has_call_to_action {
        out.push(ADD_CTA);
    }
    if features.url_count == 0 {
        out.push(ADD_LINK);
    }

    out
}
