//! Batch-level trending keywords via TF-IDF over unigrams and bigrams.

use std::collections::{BTreeMap, HashMap, HashSet};

use regex::Regex;

use crate::stop_words::STOP_WORDS;
use crate::types::Keyword;

/// Vocabulary cap, by corpus frequency.
pub const DEFAULT_MAX_FEATURES: usize = 2000;
pub const DEFAULT_TOP_K: usize = 10;

/// Ranks the terms and two-word phrases that characterise a whole batch.
///
/// Each text is one document. Term frequencies are raw counts, inverse document
/// frequency is smoothed (`ln((1 + n) / (1 + df)) + 1`) and every document vector is
/// L2-normalised before the per-term weights are summed across the batch.
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    top_k: usize,
    max_features: usize,
    token_re: Regex,
    stop_words: HashSet<&'static str>,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_K)
    }
}

impl KeywordExtractor {
    #[must_use]
    pub fn new(top_k: usize) -> Self {
        Self::with_max_features(top_k, DEFAULT_MAX_FEATURES)
    }

    /// # Panics
    ///
    /// Does not panic: the token pattern is a compile-time constant.
    #[must_use]
    pub fn with_max_features(top_k: usize, max_features: usize) -> Self {
        Self {
            top_k,
            max_features,
            token_re: Regex::new(r"\b\w\w+\b").expect("valid regex"),
            stop_words: STOP_WORDS.iter().copied().collect(),
        }
    }

    #[must_use]
    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Return at most `top_k` keywords ordered by total weight, heaviest first.
    ///
    /// Ties keep alphabetical order. Empty input, or input with nothing but stop words,
    /// yields an empty list.
    #[must_use]
    pub fn extract<S: AsRef<str>>(&self, texts: &[S]) -> Vec<Keyword> {
        if texts.is_empty() || self.top_k == 0 {
            return Vec::new();
        }

        let docs: Vec<HashMap<String, usize>> = texts
            .iter()
            .map(|t| self.term_counts(t.as_ref()))
            .collect();

        let vocabulary = self.vocabulary(&docs);
        if vocabulary.is_empty() {
            return Vec::new();
        }

        let mut doc_freq: HashMap<&str, usize> = HashMap::new();
        for doc in &docs {
            for term in doc.keys() {
                if vocabulary.contains(term.as_str()) {
                    *doc_freq.entry(term.as_str()).or_default() += 1;
                }
            }
        }

        #[allow(clippy::cast_precision_loss)]
        let n_docs = docs.len() as f64;
        let idf = |term: &str| -> f64 {
            #[allow(clippy::cast_precision_loss)]
            let df = doc_freq.get(term).copied().unwrap_or(0) as f64;
            ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0
        };

        let mut totals: BTreeMap<&str, f64> = vocabulary.iter().map(|t| (*t, 0.0)).collect();
        for doc in &docs {
            #[allow(clippy::cast_precision_loss)]
            let weights: Vec<(&str, f64)> = doc
                .iter()
                .filter(|(term, _)| vocabulary.contains(term.as_str()))
                .map(|(term, &count)| (term.as_str(), count as f64 * idf(term.as_str())))
                .collect();
            let norm = weights.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
            if norm == 0.0 {
                continue;
            }
            for (term, w) in weights {
                if let Some(total) = totals.get_mut(term) {
                    *total += w / norm;
                }
            }
        }

        // BTreeMap iteration is alphabetical; the stable sort keeps that order for ties.
        let mut ranked: Vec<(&str, f64)> = totals.into_iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
            .into_iter()
            .filter(|(_, weight)| *weight > 0.0)
            .take(self.top_k)
            .map(|(term, weight)| Keyword {
                term: term.to_string(),
                weight,
            })
            .collect()
    }

    /// Count unigrams and bigrams in one document.
    ///
    /// A bigram joins two adjacent non-stop tokens separated by a single space, so every
    /// emitted phrase occurs verbatim in the lower-cased text.
    fn term_counts(&self, text: &str) -> HashMap<String, usize> {
        let lower = text.to_lowercase();
        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut prev: Option<(usize, &str)> = None;

        for m in self.token_re.find_iter(&lower) {
            let token = m.as_str();
            if self.stop_words.contains(token) {
                prev = None;
                continue;
            }
            *counts.entry(token.to_string()).or_default() += 1;
            if let Some((prev_end, prev_token)) = prev {
                if &lower[prev_end..m.start()] == " " {
                    *counts.entry(format!("{prev_token} {token}")).or_default() += 1;
                }
            }
            prev = Some((m.end(), token));
        }
        counts
    }

    /// Keep the `max_features` most frequent terms across the corpus.
    fn vocabulary<'a>(&self, docs: &'a [HashMap<String, usize>]) -> HashSet<&'a str> {
        let mut corpus: BTreeMap<&str, usize> = BTreeMap::new();
        for doc in docs {
            for (term, count) in doc {
                *corpus.entry(term.as_str()).or_default() += count;
            }
        }
        let mut by_freq: Vec<(&str, usize)> = corpus.into_iter().collect();
        by_freq.sort_by(|a, b| b.1.cmp(&a.1));
        by_freq
            .into_iter()
            .take(self.max_features)
            .map(|(term, _)| term)
            .collect()
    }
}
