//! Brand-mention analysis pipeline for repwatch.
//!
//! Scores each mention with a rule-based lexicon model, derives label counts, a 0-100
//! reputation index, TF-IDF trending keywords and threshold alerts, then drafts replies
//! for negative mentions through an optional [`TextGenerator`] with a template fallback.

pub mod alerts;
pub mod drafter;
pub mod error;
pub mod keywords;
pub mod openai;
pub mod pipeline;
pub mod reputation;
pub mod scorer;
pub mod types;

mod lexicon;
mod stop_words;

pub use alerts::{AlertDetector, AlertThresholds};
pub use drafter::{DrafterConfig, ResponseDrafter, TextGenerator};
pub use error::{AnalysisError, GenerationError};
pub use keywords::KeywordExtractor;
pub use openai::OpenAiGenerator;
pub use pipeline::{AnalysisConfig, BatchProcessor};
pub use reputation::reputation_score;
pub use scorer::SentimentAnalyzer;
pub use types::{
    Alert, AlertKind, BatchRequest, BatchResult, BatchSummary, DraftSource, Keyword,
    ProcessOutcome, ScoredMention, Sentiment, SentimentLabel, SentimentScores, SuggestedResponse,
};

/// Round half away from zero to `places` decimal places.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}
