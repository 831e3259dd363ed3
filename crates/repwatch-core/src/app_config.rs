use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub neg_alert_ratio: f64,
    pub neg_alert_min_mentions: usize,
    pub top_k_keywords: usize,
    pub support_contact: String,
    pub generation_timeout_secs: u64,
    pub draft_concurrency: usize,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: String,
    pub rate_limit_per_minute: usize,
}

impl AppConfig {
    /// Whether an external text generator has enough configuration to be built.
    #[must_use]
    pub fn generation_enabled(&self) -> bool {
        self.openai_api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("neg_alert_ratio", &self.neg_alert_ratio)
            .field("neg_alert_min_mentions", &self.neg_alert_min_mentions)
            .field("top_k_keywords", &self.top_k_keywords)
            .field("support_contact", &self.support_contact)
            .field("generation_timeout_secs", &self.generation_timeout_secs)
            .field("draft_concurrency", &self.draft_concurrency)
            .field(
                "openai_api_key",
                &self.openai_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("openai_model", &self.openai_model)
            .field("openai_base_url", &self.openai_base_url)
            .field("rate_limit_per_minute", &self.rate_limit_per_minute)
            .finish()
    }
}
