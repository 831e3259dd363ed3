//! 0-100 reputation index from label counts.

use crate::round_to;

/// Score returned for an empty batch.
pub const NEUTRAL_PRIOR: f64 = 50.0;

/// `50 + 50 * (positive - negative) / total`, clamped to `[0, 100]` and rounded to
/// two decimals. Neutral mentions dilute the balance without moving it.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn reputation_score(positive: usize, neutral: usize, negative: usize) -> f64 {
    let total = positive + neutral + negative;
    if total == 0 {
        return NEUTRAL_PRIOR;
    }
    let total = total as f64;
    let balance = positive as f64 / total - negative as f64 / total;
    round_to((50.0 + 50.0 * balance).clamp(0.0, 100.0), 2)
}
