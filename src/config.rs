//! Configuration types for the copywriter and the listing store.
//!
//! Both are built through a builder whose `build()` validates the result, so
//! a config that reached a [`crate::copywriter::Copywriter`] or a
//! [`crate::store::ListingStore`] is always usable.

use crate::error::ListingError;
use edgequake_llm::LLMProvider;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Default model when a provider is named without one.
pub const DEFAULT_MODEL: &str = "gpt-4.1-nano";

/// Configuration for generative-text calls.
///
/// # Example
/// ```rust
/// use listing2html::CopywriterConfig;
///
/// let config = CopywriterConfig::builder()
///     .model("gpt-4.1-mini")
///     .max_retries(2)
///     .build()
///     .unwrap();
/// assert_eq!(config.max_retries, 2);
/// ```
#[derive(Clone)]
pub struct CopywriterConfig {
    /// LLM model identifier, e.g. "gpt-4.1-nano". If None, uses provider default.
    pub model: Option<String>,

    /// LLM provider name (e.g. "openai", "anthropic", "gemini", "ollama").
    pub provider_name: Option<String>,

    /// Pre-constructed LLM provider. Takes precedence over `provider_name`.
    pub provider: Option<Arc<dyn LLMProvider>>,

    /// Sampling temperature. Default: 0.7.
    ///
    /// Marketing copy benefits from some variety; 0.7 keeps it on-topic.
    pub temperature: f32,

    /// Maximum tokens for a generated description. Default: 1024.
    pub max_tokens: usize,

    /// Maximum tokens for an optimized title. Default: 128.
    pub title_max_tokens: usize,

    /// Maximum retry attempts on a failed call. Default: 2.
    pub max_retries: u32,

    /// Initial retry delay in milliseconds, doubled per attempt. Default: 500.
    pub retry_backoff_ms: u64,

    /// Per-call timeout in seconds. Default: 60.
    pub api_timeout_secs: u64,

    /// Replaces the built-in description prompt. `{title}` and `{features}`
    /// are substituted.
    pub description_prompt: Option<String>,

    /// Replaces the built-in title prompt. `{title}` is substituted.
    pub title_prompt: Option<String>,
}

impl Default for CopywriterConfig {
    fn default() -> Self {
        Self {
            model: None,
            provider_name: None,
            provider: None,
            temperature: 0.7,
            max_tokens: 1024,
            title_max_tokens: 128,
            max_retries: 2,
            retry_backoff_ms: 500,
            api_timeout_secs: 60,
            description_prompt: None,
            title_prompt: None,
        }
    }
}

impl fmt::Debug for CopywriterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CopywriterConfig")
            .field("model", &self.model)
            .field("provider_name", &self.provider_name)
            .field("provider", &self.provider.as_ref().map(|_| "<dyn LLMProvider>"))
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("title_max_tokens", &self.title_max_tokens)
            .field("max_retries", &self.max_retries)
            .field("retry_backoff_ms", &self.retry_backoff_ms)
            .field("api_timeout_secs", &self.api_timeout_secs)
            .finish()
    }
}

impl CopywriterConfig {
    pub fn builder() -> CopywriterConfigBuilder {
        CopywriterConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`CopywriterConfig`].
#[derive(Debug)]
pub struct CopywriterConfigBuilder {
    config: CopywriterConfig,
}

impl CopywriterConfigBuilder {
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = Some(model.into());
        self
    }

    pub fn provider_name(mut self, name: impl Into<String>) -> Self {
        self.config.provider_name = Some(name.into());
        self
    }

    pub fn provider(mut self, provider: Arc<dyn LLMProvider>) -> Self {
        self.config.provider = Some(provider);
        self
    }

    pub fn temperature(mut self, t: f32) -> Self {
        self.config.temperature = t.clamp(0.0, 2.0);
        self
    }

    pub fn max_tokens(mut self, n: usize) -> Self {
        self.config.max_tokens = n;
        self
    }

    pub fn title_max_tokens(mut self, n: usize) -> Self {
        self.config.title_max_tokens = n;
        self
    }

    pub fn max_retries(mut self, n: u32) -> Self {
        self.config.max_retries = n;
        self
    }

    pub fn retry_backoff_ms(mut self, ms: u64) -> Self {
        self.config.retry_backoff_ms = ms;
        self
    }

    pub fn api_timeout_secs(mut self, secs: u64) -> Self {
        self.config.api_timeout_secs = secs;
        self
    }

    pub fn description_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.description_prompt = Some(prompt.into());
        self
    }

    pub fn title_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.title_prompt = Some(prompt.into());
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<CopywriterConfig, ListingError> {
        let c = &self.config;
        if c.max_tokens == 0 || c.title_max_tokens == 0 {
            return Err(ListingError::InvalidConfig(
                "max_tokens must be ≥ 1".into(),
            ));
        }
        if c.api_timeout_secs == 0 {
            return Err(ListingError::InvalidConfig(
                "api_timeout_secs must be ≥ 1".into(),
            ));
        }
        Ok(self.config)
    }
}

// ── Store ────────────────────────────────────────────────────────────────

/// Default fast-tier byte limit (5 MiB, the usual browser local-storage quota).
pub const DEFAULT_FAST_LIMIT: usize = 5 * 1024 * 1024;

/// Where and how listing snapshots are persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory holding both tiers.
    pub dir: PathBuf,

    /// Snapshot key; becomes the file stem. Default: `listingData`.
    pub key: String,

    /// Byte limit of the fast tier. `None` disables the limit.
    pub fast_limit: Option<usize>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(".listing2html"),
            key: crate::store::DEFAULT_KEY.to_string(),
            fast_limit: Some(DEFAULT_FAST_LIMIT),
        }
    }
}

impl StoreConfig {
    pub fn builder() -> StoreConfigBuilder {
        StoreConfigBuilder {
            config: Self::default(),
        }
    }

    /// Directory of the fast tier.
    pub fn fast_dir(&self) -> PathBuf {
        self.dir.join("fast")
    }

    /// Directory of the durable tier.
    pub fn durable_dir(&self) -> PathBuf {
        self.dir.join("durable")
    }
}

#[derive(Debug)]
pub struct StoreConfigBuilder {
    config: StoreConfig,
}

impl StoreConfigBuilder {
    pub fn dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.dir = dir.into();
        self
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.config.key = key.into();
        self
    }

    pub fn fast_limit(mut self, limit: Option<usize>) -> Self {
        self.config.fast_limit = limit;
        self
    }

    pub fn build(self) -> Result<StoreConfig, ListingError> {
        let key = &self.config.key;
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(ListingError::InvalidConfig(format!(
                "store key must be a plain file stem, got '{key}'"
            )));
        }
        Ok(self.config)
    }
}
