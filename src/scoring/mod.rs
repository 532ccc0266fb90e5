pub mod bucket;
pub mod component;
pub mod curve;
pub mod normalize;

pub use bucket::{bucket, Confidence, ConfidenceLevel, ConfidenceScale, ConfidenceStep};
pub use component::{aggregate, ComponentScore};
pub use curve::{linear_ramp, presence_bonus, RangeCurve, RangeStatus};
pub use normalize::{clamp, clamp01, log10_safe, round2, round_to, LogScale};
