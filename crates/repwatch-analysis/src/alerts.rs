//! Threshold alerts over a batch's label counts.

use crate::types::Alert;

pub const DEFAULT_RATIO_THRESHOLD: f64 = 0.30;
pub const DEFAULT_MIN_MENTIONS: usize = 10;
/// Minimum fold change over the historical ratio for a spike.
pub const SPIKE_FOLD_CHANGE: f64 = 2.0;
/// Absolute negative ratio a spike also needs, so near-zero batches cannot spike.
pub const SPIKE_MIN_RATIO: f64 = 0.05;
const RATIO_EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlertThresholds {
    /// Negative share at or above which `high_negative_ratio` fires.
    pub ratio_threshold: f64,
    /// Smallest batch the ratio rule is evaluated for.
    pub min_mentions: usize,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            ratio_threshold: DEFAULT_RATIO_THRESHOLD,
            min_mentions: DEFAULT_MIN_MENTIONS,
        }
    }
}

/// Evaluates the ratio and spike rules. Stateless: the caller supplies any baseline.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertDetector {
    thresholds: AlertThresholds,
}

impl AlertDetector {
    #[must_use]
    pub fn new(thresholds: AlertThresholds) -> Self {
        Self { thresholds }
    }

    #[must_use]
    pub fn thresholds(&self) -> AlertThresholds {
        self.thresholds
    }

    /// Evaluate both rules; at most one alert of each kind is returned.
    ///
    /// The spike rule runs only when both baseline values are present and
    /// `historical_window` is positive. A zero historical ratio against a non-zero
    /// current ratio is an unbounded fold change.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn detect(
        &self,
        positive: usize,
        neutral: usize,
        negative: usize,
        historical_ratio: Option<f64>,
        historical_window: Option<i64>,
    ) -> Vec<Alert> {
        let total = positive + neutral + negative;
        if total == 0 {
            return Vec::new();
        }
        let neg_ratio = negative as f64 / total as f64;
        let mut alerts = Vec::new();

        if total >= self.thresholds.min_mentions && neg_ratio >= self.thresholds.ratio_threshold {
            alerts.push(Alert::HighNegativeRatio {
                message: format!(
                    "High negative ratio: {:.2}% over {total} mentions (threshold {:.2}%)",
                    neg_ratio * 100.0,
                    self.thresholds.ratio_threshold * 100.0,
                ),
                neg_ratio,
                total_mentions: total,
            });
        }

        if let (Some(historical), Some(window)) = (historical_ratio, historical_window) {
            if window > 0 {
                let fold_change = if historical == 0.0 && neg_ratio > 0.0 {
                    f64::INFINITY
                } else {
                    neg_ratio / historical.max(RATIO_EPSILON)
                };
                if fold_change >= SPIKE_FOLD_CHANGE && neg_ratio >= SPIKE_MIN_RATIO {
                    let message = if fold_change.is_finite() {
                        format!(
                            "Negative mentions spiked {fold_change:.2}x vs historical ({:.2}%).",
                            historical * 100.0
                        )
                    } else {
                        format!(
                            "Negative mentions rose to {:.2}% from a zero historical baseline.",
                            neg_ratio * 100.0
                        )
                    };
                    alerts.push(Alert::NegativeSpike {
                        message,
                        fold_change,
                        neg_ratio,
                    });
                }
            }
        }

        alerts
    }
}
