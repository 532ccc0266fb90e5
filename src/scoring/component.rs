use serde::{Deserialize, Serialize};

/// One scored component: the raw input, the points it earned and the most it
/// could have earned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentScore {
    pub raw: f64,
    pub score: f64,
    pub max: f64,
}

impl ComponentScore {
    /// Builds a component with `score` clamped into `[0, max]`.
    pub fn capped(raw: f64, score: f64, max: f64) -> Self {
        let max = max.max(0.0);
        let score = if score.is_nan() { 0.0 } else { score.max(0.0).min(max) };
        Self { raw, score, max }
    }
}

/// Sums component scores and clamps the total to `cap`.
///
/// Returns `(uncapped, capped)` so callers can keep both the additive total
/// and the bounded value.
pub fn aggregate<'a, I>(components: I, cap: f64) -> (f64, f64)
where
    I: IntoIterator<Item = &'a ComponentScore>,
{
    let total: f64 = components.into_iter().map(|component| component.score).sum();
    (total, total.min(cap).max(0.0))
}
