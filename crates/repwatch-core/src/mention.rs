use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single piece of text attributed to a source platform, referencing a brand.
///
/// Only `text` is required. `date` is accepted as an alias of `created_at` so rows
/// produced by the scraping layer deserialize without remapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mention {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    pub text: String,
    #[serde(default, alias = "date")]
    pub created_at: Option<String>,
    #[serde(default)]
    pub metadata: Option<Map<String, Value>>,
}

impl Mention {
    /// Create a mention carrying only text.
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Trim the text and drop the mention if nothing is left.
    #[must_use]
    pub fn normalized(mut self) -> Option<Self> {
        let trimmed = self.text.trim();
        if trimmed.is_empty() {
            return None;
        }
        if trimmed.len() != self.text.len() {
            self.text = trimmed.to_string();
        }
        Some(self)
    }
}
