//! Rule-based sentiment scorer for short social-media text.
//!
//! Sums per-word valences from [`crate::lexicon`], adjusted for intensifiers, negation,
//! emphatic capitals, a contrastive "but", and trailing `!`/`?` runs, then squashes the
//! sum into a compound polarity in `[-1.0, 1.0]`.

use std::collections::HashMap;

use crate::lexicon::{BOOSTERS, LEXICON, NEGATORS, NEUTRAL_TERMS};
use crate::round_to;
use crate::types::{Sentiment, SentimentLabel, SentimentScores};

/// Added to an all-caps sentiment word when the text is not shouting throughout.
const CAPS_INCR: f64 = 0.733;
/// Multiplier applied once per negator in the three preceding tokens.
const NEGATION_SCALAR: f64 = -0.74;
/// Normalization constant for the compound score.
const ALPHA: f64 = 15.0;
const EXCLAMATION_INCR: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const QUESTION_INCR: f64 = 0.18;
const QUESTION_CAP: f64 = 0.96;

#[derive(Debug)]
struct Token<'a> {
    raw: &'a str,
    lower: String,
}

/// Deterministic lexicon-based scorer. Cheap to share; holds only lookup tables.
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    lexicon: HashMap<&'static str, f64>,
    boosters: HashMap<&'static str, f64>,
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentAnalyzer {
    /// Build the lookup tables: the VADER base lexicon, then the domain overrides, minus
    /// the neutral terms.
    #[must_use]
    pub fn new() -> Self {
        let mut lexicon: HashMap<&'static str, f64> = vader_sentiment::LEXICON
            .iter()
            .map(|(word, &valence)| (**word, valence))
            .filter(|(word, _)| {
                word.chars()
                    .all(|c| c.is_lowercase() || c.is_ascii_digit())
            })
            .collect();
        lexicon.extend(LEXICON.iter().copied());
        for word in NEUTRAL_TERMS {
            lexicon.remove(word);
        }
        Self {
            lexicon,
            boosters: BOOSTERS.iter().copied().collect(),
        }
    }

    /// Score `text` and attach a label.
    ///
    /// Empty or whitespace-only text scores `0.0` and is labelled neutral.
    #[must_use]
    pub fn analyze(&self, text: &str) -> Sentiment {
        let scores = self.polarity_scores(text);
        Sentiment {
            compound: scores.compound,
            label: SentimentLabel::from_compound(scores.compound),
            scores,
        }
    }

    /// Compute per-axis proportions and the compound polarity for `text`.
    #[must_use]
    pub fn polarity_scores(&self, text: &str) -> SentimentScores {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return SentimentScores::default();
        }

        let cap_diff = has_cap_differential(&tokens);
        let mut valences: Vec<f64> = (0..tokens.len())
            .map(|i| self.token_valence(&tokens, i, cap_diff))
            .collect();
        apply_but_contrast(&tokens, &mut valences);

        let punct = punctuation_emphasis(text);
        let sum: f64 = valences.iter().sum();
        let compound = if sum == 0.0 {
            0.0
        } else {
            let amplified = sum + punct.copysign(sum);
            (amplified / (amplified * amplified + ALPHA).sqrt()).clamp(-1.0, 1.0)
        };

        let (pos, neu, neg) = axis_proportions(&valences, punct);
        SentimentScores {
            neg: round_to(neg, 3),
            neu: round_to(neu, 3),
            pos: round_to(pos, 3),
            compound: round_to(compound, 4),
        }
    }

    fn token_valence(&self, tokens: &[Token<'_>], i: usize, cap_diff: bool) -> f64 {
        let token = &tokens[i];
        if self.boosters.contains_key(token.lower.as_str()) {
            return 0.0;
        }
        let Some(&base) = self.lexicon.get(token.lower.as_str()) else {
            return 0.0;
        };
        // "no" directly before another sentiment word acts only as a negator.
        if token.lower == "no"
            && tokens
                .get(i + 1)
                .is_some_and(|next| self.lexicon.contains_key(next.lower.as_str()))
        {
            return 0.0;
        }

        let mut valence = base;
        if cap_diff && is_all_caps(token.raw) {
            valence += CAPS_INCR.copysign(valence);
        }

        for distance in 1..=3 {
            let Some(j) = i.checked_sub(distance) else {
                break;
            };
            let prev = &tokens[j];
            if let Some(&boost) = self.boosters.get(prev.lower.as_str()) {
                let mut scalar = if valence < 0.0 { -boost } else { boost };
                if cap_diff && is_all_caps(prev.raw) {
                    scalar += CAPS_INCR.copysign(valence);
                }
                scalar *= match distance {
                    1 => 1.0,
                    2 => 0.95,
                    _ => 0.9,
                };
                valence += scalar;
            }
            if is_negator(prev) {
                valence *= NEGATION_SCALAR;
            }
        }
        valence
    }
}

/// Split on whitespace, trim surrounding punctuation, and drop single-character tokens.
fn tokenize(text: &str) -> Vec<Token<'_>> {
    text.split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|word| word.chars().count() > 1)
        .map(|raw| Token {
            raw,
            lower: raw.to_lowercase().replace(['\'', '\u{2019}'], ""),
        })
        .collect()
}

fn is_negator(token: &Token<'_>) -> bool {
    NEGATORS.contains(&token.lower.as_str())
        || token.raw.to_lowercase().contains("n't")
        || token.raw.to_lowercase().contains("n\u{2019}t")
}

fn is_all_caps(word: &str) -> bool {
    word.chars().any(char::is_alphabetic)
        && word
            .chars()
            .filter(|c| c.is_alphabetic())
            .all(char::is_uppercase)
}

/// True when some, but not all, tokens are written in capitals.
fn has_cap_differential(tokens: &[Token<'_>]) -> bool {
    let caps = tokens.iter().filter(|t| is_all_caps(t.raw)).count();
    caps > 0 && caps < tokens.len()
}

/// Sentiment before the first "but" is halved; sentiment after it is weighted up.
fn apply_but_contrast(tokens: &[Token<'_>], valences: &mut [f64]) {
    let Some(pivot) = tokens.iter().position(|t| t.lower == "but") else {
        return;
    };
    for (i, valence) in valences.iter_mut().enumerate() {
        if i < pivot {
            *valence *= 0.5;
        } else if i > pivot {
            *valence *= 1.5;
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
    let questions = text.matches('?').count();
    let question_amp = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_INCR,
        _ => QUESTION_CAP,
    };
    exclamations as f64 * EXCLAMATION_INCR + question_amp
}

/// Returns `(pos, neu, neg)` as fractions of the total emphasis mass.
#[allow(clippy::cast_precision_loss)]
fn axis_proportions(valences: &[f64], punct: f64) -> (f64, f64, f64) {
    let mut pos_sum = 0.0_f64;
    let mut neg_sum = 0.0_f64;
    let mut neu_count = 0_usize;
    for &v in valences {
        if v > 0.0 {
            pos_sum += v + 1.0;
        } else if v < 0.0 {
            neg_sum += v - 1.0;
        } else {
            neu_count += 1;
        }
    }

    if pos_sum > neg_sum.abs() {
        pos_sum += punct;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= punct;
    }

    let total = pos_sum + neg_sum.abs() + neu_count as f64;
    if total == 0.0 {
        return (0.0, 0.0, 0.0);
    }
    (
        (pos_sum / total).abs(),
        neu_count as f64 / total,
        (neg_sum / total).abs(),
    )
}
