use repwatch_core::Mention;
use serde::{Deserialize, Serialize};

/// Compound score at or above which a mention is labelled positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Compound score at or below which a mention is labelled negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Map a compound score onto a label using the fixed thresholds.
    #[must_use]
    pub fn from_compound(compound: f64) -> Self {
        if compound >= POSITIVE_THRESHOLD {
            Self::Positive
        } else if compound <= NEGATIVE_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "positive"),
            SentimentLabel::Neutral => write!(f, "neutral"),
            SentimentLabel::Negative => write!(f, "negative"),
        }
    }
}

/// Per-axis proportions plus the normalized compound polarity.
///
/// `neg`, `neu` and `pos` sum to roughly 1.0 for any text with at least one token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

/// Output of the sentiment scorer for one text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub compound: f64,
    pub label: SentimentLabel,
    pub scores: SentimentScores,
}

/// A normalized mention with its sentiment attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredMention {
    #[serde(flatten)]
    pub mention: Mention,
    pub compound: f64,
    pub label: SentimentLabel,
    pub scores: SentimentScores,
}

/// A trending term or two-word phrase with its summed TF-IDF weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub term: String,
    pub weight: f64,
}

/// Label counts for one batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total_mentions: usize,
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl BatchSummary {
    #[must_use]
    pub fn from_labels<I>(labels: I) -> Self
    where
        I: IntoIterator<Item = SentimentLabel>,
    {
        let mut summary = Self::default();
        for label in labels {
            match label {
                SentimentLabel::Positive => summary.positive += 1,
                SentimentLabel::Neutral => summary.neutral += 1,
                SentimentLabel::Negative => summary.negative += 1,
            }
            summary.total_mentions += 1;
        }
        summary
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    HighNegativeRatio,
    NegativeSpike,
}

impl std::fmt::Display for AlertKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertKind::HighNegativeRatio => write!(f, "high_negative_ratio"),
            AlertKind::NegativeSpike => write!(f, "negative_spike"),
        }
    }
}

/// A rule-based alert raised for a batch.
///
/// Serialized with a `kind` tag. An unbounded `fold_change` (zero historical baseline)
/// serializes as `null` because JSON has no infinity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Alert {
    HighNegativeRatio {
        message: String,
        neg_ratio: f64,
        total_mentions: usize,
    },
    NegativeSpike {
        message: String,
        fold_change: f64,
        neg_ratio: f64,
    },
}

impl Alert {
    #[must_use]
    pub fn kind(&self) -> AlertKind {
        match self {
            Alert::HighNegativeRatio { .. } => AlertKind::HighNegativeRatio,
            Alert::NegativeSpike { .. } => AlertKind::NegativeSpike,
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Alert::HighNegativeRatio { message, .. } | Alert::NegativeSpike { message, .. } => {
                message
            }
        }
    }
}

/// Where a drafted reply came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftSource {
    Generated,
    Template,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestedResponse {
    pub mention_id: Option<String>,
    pub platform: Option<String>,
    pub author: Option<String>,
    pub text_snippet: String,
    pub draft: String,
    pub draft_source: DraftSource,
}

/// Aggregated output for one processed batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchResult {
    pub summary: BatchSummary,
    pub reputation_score: f64,
    pub trending_keywords: Vec<Keyword>,
    pub alerts: Vec<Alert>,
    pub suggested_responses: Vec<SuggestedResponse>,
}

/// One batch submission. The historical baseline is tracked by the caller.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BatchRequest {
    #[serde(default)]
    pub brand: Option<String>,
    pub mentions: Vec<Mention>,
    #[serde(default)]
    pub historical_negative_ratio: Option<f64>,
    #[serde(default)]
    pub historical_window_size: Option<i64>,
}

/// Result of [`crate::BatchProcessor::process`].
///
/// An empty submission is a recognised no-data case, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessOutcome {
    NoMentions,
    Processed(BatchResult),
}
