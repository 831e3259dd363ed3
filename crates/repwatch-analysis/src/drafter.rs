//! Reply drafting for negative mentions.
//!
//! An optional [`TextGenerator`] writes the reply. Any failure, including a timeout,
//! falls back to a fixed template so drafting itself never fails.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use futures::stream::{self, StreamExt};

use crate::error::GenerationError;
use crate::types::{DraftSource, ScoredMention, SuggestedResponse};

pub const DEFAULT_SUPPORT_CONTACT: &str = "support@example.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_CONCURRENCY: usize = 4;
/// Only the first this-many negative mentions of a batch get a draft.
pub const MAX_DRAFTS: usize = 10;
/// Upper bound, in characters, on the quote echoed by the template reply.
pub const QUOTE_MAX_CHARS: usize = 120;
/// Upper bound, in characters, on `SuggestedResponse::text_snippet`.
pub const SNIPPET_MAX_CHARS: usize = 200;

const ELLIPSIS: &str = "...";

/// Future returned by [`TextGenerator::draft`].
pub type GenerationFuture<'a> =
    Pin<Box<dyn Future<Output = Result<String, GenerationError>> + Send + 'a>>;

/// Something that can turn a reply prompt into free text.
///
/// Implementations own all provider-specific request and response handling and
/// return only the normalized reply text.
pub trait TextGenerator: Send + Sync {
    fn draft<'a>(&'a self, prompt: &'a str) -> GenerationFuture<'a>;

    /// Short provider name for logs.
    fn provider_name(&self) -> &'static str;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrafterConfig {
    /// Contact echoed by the template reply.
    pub support_contact: String,
    /// Upper bound on a single generator call.
    pub timeout: Duration,
    /// Drafts in flight at once for one batch.
    pub concurrency: usize,
}

impl Default for DrafterConfig {
    fn default() -> Self {
        Self {
            support_contact: DEFAULT_SUPPORT_CONTACT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

#[derive(Clone)]
pub struct ResponseDrafter {
    generator: Option<Arc<dyn TextGenerator>>,
    config: DrafterConfig,
}

impl std::fmt::Debug for ResponseDrafter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseDrafter")
            .field(
                "generator",
                &self.generator.as_ref().map(|g| g.provider_name()),
            )
            .field("config", &self.config)
            .finish()
    }
}

impl ResponseDrafter {
    #[must_use]
    pub fn new(config: DrafterConfig, generator: Option<Arc<dyn TextGenerator>>) -> Self {
        Self { generator, config }
    }

    /// Drafter that always uses the template reply.
    #[must_use]
    pub fn template_only(config: DrafterConfig) -> Self {
        Self::new(config, None)
    }

    #[must_use]
    pub fn config(&self) -> &DrafterConfig {
        &self.config
    }

    /// Draft one reply. Never fails; generator errors and timeouts yield the template.
    pub async fn draft(
        &self,
        brand: Option<&str>,
        mention_text: &str,
        author: Option<&str>,
    ) -> (String, DraftSource) {
        let Some(generator) = &self.generator else {
            return (self.fallback(mention_text), DraftSource::Template);
        };

        let prompt = build_prompt(brand, mention_text, author);
        let outcome = match tokio::time::timeout(self.config.timeout, generator.draft(&prompt)).await
        {
            Ok(result) => result,
            Err(_) => Err(GenerationError::Timeout(self.config.timeout)),
        };

        match outcome {
            Ok(text) if !text.trim().is_empty() => (text.trim().to_string(), DraftSource::Generated),
            Ok(_) => {
                tracing::warn!(
                    provider = generator.provider_name(),
                    "generator returned blank text, using template reply"
                );
                (self.fallback(mention_text), DraftSource::Template)
            }
            Err(e) => {
                tracing::warn!(
                    provider = generator.provider_name(),
                    error = %e,
                    "reply generation failed, using template reply"
                );
                (self.fallback(mention_text), DraftSource::Template)
            }
        }
    }

    /// Draft replies for up to [`MAX_DRAFTS`] negative mentions.
    ///
    /// Drafts run concurrently up to the configured limit; output order matches
    /// input order.
    pub async fn draft_all(
        &self,
        brand: Option<&str>,
        negatives: &[&ScoredMention],
    ) -> Vec<SuggestedResponse> {
        let futures: Vec<_> = negatives
            .iter()
            .take(MAX_DRAFTS)
            .map(|scored| async move {
                let mention = &scored.mention;
                let (draft, draft_source) = self
                    .draft(brand, &mention.text, mention.author.as_deref())
                    .await;
                SuggestedResponse {
                    mention_id: mention.id.clone(),
                    platform: mention.platform.clone(),
                    author: mention.author.clone(),
                    text_snippet: truncate_with_ellipsis(&mention.text, SNIPPET_MAX_CHARS),
                    draft,
                    draft_source,
                }
            })
            .collect();
        stream::iter(futures)
            .buffered(self.config.concurrency.max(1))
            .collect()
            .await
    }

    /// Deterministic template reply quoting at most [`QUOTE_MAX_CHARS`] of the mention.
    #[must_use]
    pub fn fallback(&self, mention_text: &str) -> String {
        format!(
            "Thanks for flagging this. We're sorry to hear about your experience, and we'd like to help. \
             {} (Ref: \"{}\")",
            contact_line(&self.config.support_contact),
            truncate_with_ellipsis(mention_text, QUOTE_MAX_CHARS),
        )
    }
}

/// The sentence of the template reply that points the user at support.
#[must_use]
pub fn contact_line(contact: &str) -> String {
    format!("Can you DM us with details or reach out at {contact}?")
}

/// Prompt sent to the generator for one mention.
#[must_use]
pub fn build_prompt(brand: Option<&str>, mention_text: &str, author: Option<&str>) -> String {
    let brand = brand.map_or_else(|| "the brand".to_string(), str::to_string);
    let who = author.map_or_else(|| "A user".to_string(), |a| format!("A user ({a})"));
    format!(
        "You are a polite brand social media manager for {brand}. {who} wrote: \"{mention_text}\". \
         Write a short, professional, empathetic public reply (1-3 sentences) that acknowledges \
         the concern, offers help or next steps, and invites the user to DM or use a support link \
         if needed."
    )
}

/// Cut `text` to at most `max_chars` characters, marking a cut with `...`.
#[must_use]
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

#[cfg(test)]
#[path = "drafter_test.rs"]
mod tests;
