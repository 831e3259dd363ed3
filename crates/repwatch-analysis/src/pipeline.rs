//! Batch pipeline orchestration.

use std::sync::Arc;
use std::time::Duration;

use repwatch_core::AppConfig;

use crate::alerts::{AlertDetector, AlertThresholds};
use crate::drafter::{DrafterConfig, ResponseDrafter, TextGenerator};
use crate::error::{AnalysisError, GenerationError};
use crate::keywords::{KeywordExtractor, DEFAULT_TOP_K};
use crate::openai::OpenAiGenerator;
use crate::reputation::reputation_score;
use crate::scorer::SentimentAnalyzer;
use crate::types::{
    BatchRequest, BatchResult, BatchSummary, ProcessOutcome, ScoredMention, SentimentLabel,
};

/// Tunables for one [`BatchProcessor`]. Built by the binaries from [`AppConfig`].
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub alerts: AlertThresholds,
    pub top_k_keywords: usize,
    pub drafter: DrafterConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            alerts: AlertThresholds::default(),
            top_k_keywords: DEFAULT_TOP_K,
            drafter: DrafterConfig::default(),
        }
    }
}

impl AnalysisConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            alerts: AlertThresholds {
                ratio_threshold: config.neg_alert_ratio,
                min_mentions: config.neg_alert_min_mentions,
            },
            top_k_keywords: config.top_k_keywords,
            drafter: DrafterConfig {
                support_contact: config.support_contact.clone(),
                timeout: Duration::from_secs(config.generation_timeout_secs),
                concurrency: config.draft_concurrency,
            },
        }
    }
}

/// Runs the whole pipeline over one batch. Immutable once built, so one instance is
/// shared across concurrent requests.
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    analyzer: SentimentAnalyzer,
    keywords: KeywordExtractor,
    alerts: AlertDetector,
    drafter: ResponseDrafter,
}

impl BatchProcessor {
    #[must_use]
    pub fn new(config: AnalysisConfig, generator: Option<Arc<dyn TextGenerator>>) -> Self {
        Self {
            analyzer: SentimentAnalyzer::new(),
            keywords: KeywordExtractor::new(config.top_k_keywords),
            alerts: AlertDetector::new(config.alerts),
            drafter: ResponseDrafter::new(config.drafter, generator),
        }
    }

    /// Build a processor from application config, wiring the OpenAI generator when an
    /// API key is present.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if the HTTP client for the generator cannot be built.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, GenerationError> {
        let analysis = AnalysisConfig::from_app_config(config);
        let generator: Option<Arc<dyn TextGenerator>> = match config.openai_api_key.as_deref() {
            Some(key) if config.generation_enabled() => Some(Arc::new(
                OpenAiGenerator::with_base_url(
                    key,
                    &config.openai_model,
                    analysis.drafter.timeout,
                    &config.openai_base_url,
                )?,
            )),
            _ => None,
        };
        tracing::info!(
            generator = generator.as_ref().map_or("template", |g| g.provider_name()),
            top_k = analysis.top_k_keywords,
            "batch processor configured"
        );
        Ok(Self::new(analysis, generator))
    }

    #[must_use]
    pub fn analyzer(&self) -> &SentimentAnalyzer {
        &self.analyzer
    }

    /// Process one batch.
    ///
    /// 1. Drop mentions whose text is empty after trimming.
    /// 2. Score each remaining mention.
    /// 3. Count labels.
    /// 4. Compute the reputation score, trending keywords and alerts.
    /// 5. Draft replies for the first negative mentions, in input order.
    ///
    /// A request with no mentions at all yields [`ProcessOutcome::NoMentions`].
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::EmptyBatch`] if mentions were supplied but none has text.
    /// A historical ratio that is not a finite value within `[0, 1]` only disables the
    /// spike rule.
    pub async fn process(&self, request: BatchRequest) -> Result<ProcessOutcome, AnalysisError> {
        let BatchRequest {
            brand,
            mentions,
            historical_negative_ratio,
            historical_window_size,
        } = request;

        if mentions.is_empty() {
            tracing::info!("no mentions provided");
            return Ok(ProcessOutcome::NoMentions);
        }
        let historical_negative_ratio = usable_baseline(historical_negative_ratio);

        // Step 1: Normalize.
        let submitted = mentions.len();
        let kept: Vec<_> = mentions
            .into_iter()
            .filter_map(repwatch_core::Mention::normalized)
            .collect();
        if kept.is_empty() {
            return Err(AnalysisError::EmptyBatch { submitted });
        }
        if kept.len() < submitted {
            tracing::debug!(
                dropped = submitted - kept.len(),
                "dropped mentions with empty text"
            );
        }

        // Step 2: Score.
        let scored: Vec<ScoredMention> = kept
            .into_iter()
            .map(|mention| {
                let sentiment = self.analyzer.analyze(&mention.text);
                ScoredMention {
                    mention,
                    compound: sentiment.compound,
                    label: sentiment.label,
                    scores: sentiment.scores,
                }
            })
            .collect();

        // Step 3: Count.
        let summary = BatchSummary::from_labels(scored.iter().map(|s| s.label));

        // Step 4: Batch-level aggregates.
        let reputation = reputation_score(summary.positive, summary.neutral, summary.negative);
        let texts: Vec<&str> = scored.iter().map(|s| s.mention.text.as_str()).collect();
        let trending_keywords = self.keywords.extract(&texts);
        let alerts = self.alerts.detect(
            summary.positive,
            summary.neutral,
            summary.negative,
            historical_negative_ratio,
            historical_window_size,
        );

        // Step 5: Draft replies.
        let negatives: Vec<&ScoredMention> = scored
            .iter()
            .filter(|s| s.label == SentimentLabel::Negative)
            .collect();
        let suggested_responses = self.drafter.draft_all(brand.as_deref(), &negatives).await;

        tracing::info!(
            brand = brand.as_deref().unwrap_or("-"),
            total = summary.total_mentions,
            positive = summary.positive,
            neutral = summary.neutral,
            negative = summary.negative,
            reputation_score = reputation,
            alerts = alerts.len(),
            drafts = suggested_responses.len(),
            "batch processed"
        );

        Ok(ProcessOutcome::Processed(BatchResult {
            summary,
            reputation_score: reputation,
            trending_keywords,
            alerts,
            suggested_responses,
        }))
    }
}

/// Drop a historical ratio the spike rule cannot use. The rest of the batch is unaffected.
fn usable_baseline(ratio: Option<f64>) -> Option<f64> {
    match ratio {
        Some(r) if !r.is_finite() || !(0.0..=1.0).contains(&r) => {
            tracing::warn!(
                historical_negative_ratio = r,
                "historical ratio outside [0, 1], skipping spike detection"
            );
            None
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_documented_defaults() {
        let config = AnalysisConfig::default();
        assert!((config.alerts.ratio_threshold - 0.30).abs() < f64::EPSILON);
        assert_eq!(config.alerts.min_mentions, 10);
        assert_eq!(config.top_k_keywords, 10);
        assert_eq!(config.drafter.support_contact, "support@example.com");
        assert_eq!(config.drafter.timeout, Duration::from_secs(10));
    }

    #[test]
    fn usable_baseline_keeps_values_in_range() {
        assert_eq!(usable_baseline(None), None);
        assert_eq!(usable_baseline(Some(0.0)), Some(0.0));
        assert_eq!(usable_baseline(Some(1.0)), Some(1.0));
        assert_eq!(usable_baseline(Some(0.1)), Some(0.1));
    }

    #[tokio::test]
    async fn out_of_range_baseline_still_processes_batch() {
        let processor = BatchProcessor::new(AnalysisConfig::default(), None);
        for ratio in [1.2, -0.1, f64::NAN, f64::INFINITY] {
            let request = BatchRequest {
                mentions: vec![
                    repwatch_core::Mention::from_text("great phone"),
                    repwatch_core::Mention::from_text("terrible delivery"),
                ],
                historical_negative_ratio: Some(ratio),
                historical_window_size: Some(100),
                ..BatchRequest::default()
            };
            let ProcessOutcome::Processed(result) = processor.process(request).await.unwrap()
            else {
                panic!("expected a processed batch for ratio {ratio}");
            };
            assert_eq!(result.summary.total_mentions, 2);
            assert_eq!(result.summary.negative, 1);
            assert!(result.alerts.is_empty(), "ratio {ratio}: {:?}", result.alerts);
            assert_eq!(result.suggested_responses.len(), 1);
        }
    }

    #[tokio::test]
    async fn whitespace_is_trimmed_before_scoring() {
        let processor = BatchProcessor::new(AnalysisConfig::default(), None);
        let request = BatchRequest {
            mentions: vec![
                repwatch_core::Mention::from_text("   "),
                repwatch_core::Mention::from_text("  terrible delivery  "),
            ],
            ..BatchRequest::default()
        };
        let ProcessOutcome::Processed(result) = processor.process(request).await.unwrap() else {
            panic!("expected a processed batch");
        };
        assert_eq!(result.summary.total_mentions, 1);
        assert_eq!(result.summary.negative, 1);
        assert_eq!(result.suggested_responses[0].text_snippet, "terrible delivery");
    }
}
