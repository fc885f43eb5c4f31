//! Generative copy: listing descriptions and optimized titles.
//!
//! Neither call can fail from the caller's point of view. A failed call
//! yields a fixed fallback ([`DESCRIPTION_ERROR`], or the original title), an
//! empty answer yields [`DESCRIPTION_EMPTY`] or the original title.
//!
//! ## Retry Strategy
//!
//! Provider errors and timeouts are retried with exponential backoff
//! (`retry_backoff_ms * 2^(attempt-1)`). An empty answer is not retried: the
//! provider did respond, it just had nothing to say.

use crate::config::{CopywriterConfig, DEFAULT_MODEL};
use crate::error::{GenerationError, ListingError};
use crate::model::ListingRecord;
use crate::postprocess::{clean_description, clean_title};
use crate::prompts::{description_prompt, title_prompt, SYSTEM_PROMPT};
use edgequake_llm::{ChatMessage, CompletionOptions, LLMProvider, ProviderFactory};
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tokio::time::{sleep, timeout, Duration};
use tracing::{debug, info, warn};

/// Returned when the provider answers with no text.
pub const DESCRIPTION_EMPTY: &str = "Could not generate description.";

/// Returned when every attempt failed.
pub const DESCRIPTION_ERROR: &str = "Error generating description. Please check your API key.";

/// Something that turns a prompt into text.
pub trait TextGenerator: Send + Sync {
    fn generate(
        &self,
        prompt: &str,
        max_tokens: usize,
    ) -> impl Future<Output = Result<String, GenerationError>> + Send;
}

/// [`TextGenerator`] backed by an edgequake-llm provider.
pub struct LlmGenerator {
    provider: Arc<dyn LLMProvider>,
    temperature: f32,
}

impl LlmGenerator {
    pub fn new(provider: Arc<dyn LLMProvider>, temperature: f32) -> Self {
        Self {
            provider,
            temperature,
        }
    }

    /// Resolve the provider from `config` (see [`resolve_provider`]).
    pub fn from_config(config: &CopywriterConfig) -> Result<Self, ListingError> {
        Ok(Self::new(resolve_provider(config)?, config.temperature))
    }
}

impl TextGenerator for LlmGenerator {
    async fn generate(&self, prompt: &str, max_tokens: usize) -> Result<String, GenerationError> {
        let messages = vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(prompt)];
        let options = CompletionOptions {
            temperature: Some(self.temperature),
            max_tokens: Some(max_tokens),
            ..Default::default()
        };
        let response = self
            .provider
            .chat(&messages, Some(&options))
            .await
            .map_err(|e| GenerationError::Provider(e.to_string()))?;
        debug!(
            "{} input tokens, {} output tokens",
            response.prompt_tokens, response.completion_tokens
        );
        Ok(response.content)
    }
}

/// Resolve the LLM provider, from most-specific to least-specific:
///
/// 1. `config.provider`, used as-is
/// 2. `config.provider_name` with `config.model` (or [`DEFAULT_MODEL`])
/// 3. `EDGEQUAKE_LLM_PROVIDER` + `EDGEQUAKE_MODEL`, when both are set
/// 4. OpenAI, when `OPENAI_API_KEY` is set
/// 5. whatever `ProviderFactory::from_env` detects
pub fn resolve_provider(config: &CopywriterConfig) -> Result<Arc<dyn LLMProvider>, ListingError> {
    if let Some(ref provider) = config.provider {
        return Ok(Arc::clone(provider));
    }

    if let Some(ref name) = config.provider_name {
        let model = config.model.as_deref().unwrap_or(DEFAULT_MODEL);
        return create_provider(name, model);
    }

    if let (Ok(prov), Ok(model)) = (
        std::env::var("EDGEQUAKE_LLM_PROVIDER"),
        std::env::var("EDGEQUAKE_MODEL"),
    ) {
        if !prov.is_empty() && !model.is_empty() {
            return create_provider(&prov, &model);
        }
    }

    if let Ok(key) = std::env::var("OPENAI_API_KEY") {
        if !key.is_empty() {
            let model = config.model.as_deref().unwrap_or(DEFAULT_MODEL);
            return create_provider("openai", model);
        }
    }

    let (llm, _embedding) =
        ProviderFactory::from_env().map_err(|e| ListingError::ProviderNotConfigured {
            provider: "auto".to_string(),
            hint: format!(
                "No LLM provider could be auto-detected from environment.\n\
                Set OPENAI_API_KEY, ANTHROPIC_API_KEY, GEMINI_API_KEY, or pass --provider.\n\
                Error: {e}"
            ),
        })?;
    Ok(llm)
}

fn create_provider(name: &str, model: &str) -> Result<Arc<dyn LLMProvider>, ListingError> {
    ProviderFactory::create_llm_provider(name, model).map_err(|e| {
        ListingError::ProviderNotConfigured {
            provider: name.to_string(),
            hint: e.to_string(),
        }
    })
}

/// Drafts descriptions and titles through a [`TextGenerator`].
pub struct Copywriter<G> {
    generator: G,
    config: CopywriterConfig,
}

impl Copywriter<LlmGenerator> {
    /// Copywriter over the provider resolved from `config`.
    pub fn from_config(config: CopywriterConfig) -> Result<Self, ListingError> {
        Ok(Self::new(LlmGenerator::from_config(&config)?, config))
    }
}

impl<G: TextGenerator> Copywriter<G> {
    pub fn new(generator: G, config: CopywriterConfig) -> Self {
        Self { generator, config }
    }

    pub fn config(&self) -> &CopywriterConfig {
        &self.config
    }

    /// A short persuasive description for `title`. Never fails.
    pub async fn generate_description(&self, title: &str, features: &str) -> String {
        let prompt = description_prompt(self.config.description_prompt.as_deref(), title, features);
        match self.call("description", &prompt, self.config.max_tokens).await {
            Ok(raw) => {
                let text = clean_description(&raw);
                if text.is_empty() {
                    DESCRIPTION_EMPTY.to_string()
                } else {
                    text
                }
            }
            Err(GenerationError::Empty) => DESCRIPTION_EMPTY.to_string(),
            Err(e) => {
                warn!("Description generation failed: {}", e);
                DESCRIPTION_ERROR.to_string()
            }
        }
    }

    /// An optimized version of `title`, or `title` itself on any failure.
    pub async fn optimize_title(&self, title: &str) -> String {
        let prompt = title_prompt(self.config.title_prompt.as_deref(), title);
        match self
            .call("title", &prompt, self.config.title_max_tokens)
            .await
            .map(|raw| clean_title(&raw))
        {
            Ok(optimized) if !optimized.is_empty() => optimized,
            Ok(_) | Err(GenerationError::Empty) => title.to_string(),
            Err(e) => {
                warn!("Title optimization failed: {}", e);
                title.to_string()
            }
        }
    }

    /// `record` with a freshly generated description. Unchanged when the
    /// title is empty.
    pub async fn describe(&self, record: &ListingRecord) -> ListingRecord {
        if record.title.is_empty() {
            debug!("no title, skipping description");
            return record.clone();
        }
        let features = record.specifications.join(", ");
        ListingRecord {
            description: self.generate_description(&record.title, &features).await,
            ..record.clone()
        }
    }

    /// `record` with an optimized title. Unchanged when the title is empty.
    pub async fn retitle(&self, record: &ListingRecord) -> ListingRecord {
        if record.title.is_empty() {
            debug!("no title, skipping optimization");
            return record.clone();
        }
        ListingRecord {
            title: self.optimize_title(&record.title).await,
            ..record.clone()
        }
    }

    async fn call(
        &self,
        what: &str,
        prompt: &str,
        max_tokens: usize,
    ) -> Result<String, GenerationError> {
        let start = Instant::now();
        let secs = self.config.api_timeout_secs;
        let mut last_err = GenerationError::Empty;

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                let backoff = self.config.retry_backoff_ms * 2u64.pow(attempt - 1);
                warn!(
                    "{}: retry {}/{} after {}ms",
                    what, attempt, self.config.max_retries, backoff
                );
                sleep(Duration::from_millis(backoff)).await;
            }

            let result = match timeout(
                Duration::from_secs(secs),
                self.generator.generate(prompt, max_tokens),
            )
            .await
            {
                Ok(r) => r,
                Err(_) => Err(GenerationError::Timeout { secs }),
            };

            match result {
                Ok(text) if text.trim().is_empty() => {
                    debug!("{}: empty response", what);
                    return Err(GenerationError::Empty);
                }
                Ok(text) => {
                    info!("{} generated in {:?}", what, start.elapsed());
                    return Ok(text);
                }
                Err(e) => {
                    warn!("{}: attempt {} failed: {}", what, attempt + 1, e);
                    last_err = e;
                }
            }
        }

        Err(last_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;

    /// Replays canned answers; records prompts.
    struct Scripted {
        answers: Mutex<Vec<Result<String, GenerationError>>>,
        prompts: Mutex<Vec<String>>,
        calls: AtomicU32,
    }

    impl Scripted {
        fn new(answers: Vec<Result<&str, GenerationError>>) -> Self {
            Self {
                answers: Mutex::new(answers.into_iter().rev().map(|a| a.map(String::from)).collect()),
                prompts: Mutex::new(Vec::new()),
                calls: AtomicU32::new(0),
            }
        }
    }

    impl TextGenerator for Scripted {
        async fn generate(&self, prompt: &str, _max: usize) -> Result<String, GenerationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.answers
                .lock()
                .unwrap()
                .pop()
                .unwrap_or(Err(GenerationError::Provider("script exhausted".into())))
        }
    }

    struct Stalls;

    impl TextGenerator for Stalls {
        async fn generate(&self, _prompt: &str, _max: usize) -> Result<String, GenerationError> {
            sleep(Duration::from_secs(3600)).await;
            Ok("too late".into())
        }
    }

    fn fast_config() -> CopywriterConfig {
        CopywriterConfig::builder()
            .max_retries(2)
            .retry_backoff_ms(1)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn description_cleaned() {
        let cw = Copywriter::new(
            Scripted::new(vec![Ok("\"A **bright** metal shade.\"")]),
            fast_config(),
        );
        assert_eq!(
            cw.generate_description("Lamp", "Metal").await,
            "A bright metal shade."
        );
    }

    #[tokio::test]
    async fn description_empty_fallback() {
        let cw = Copywriter::new(Scripted::new(vec![Ok("   ")]), fast_config());
        assert_eq!(cw.generate_description("Lamp", "").await, DESCRIPTION_EMPTY);
        assert_eq!(cw.generator.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn description_error_after_retries() {
        let cw = Copywriter::new(Scripted::new(vec![]), fast_config());
        assert_eq!(cw.generate_description("Lamp", "").await, DESCRIPTION_ERROR);
        assert_eq!(cw.generator.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn retry_then_success() {
        let cw = Copywriter::new(
            Scripted::new(vec![
                Err(GenerationError::Provider("503".into())),
                Ok("Brass Pendant Shade E27"),
            ]),
            fast_config(),
        );
        assert_eq!(cw.optimize_title("lamp").await, "Brass Pendant Shade E27");
    }

    #[tokio::test]
    async fn title_falls_back_to_original() {
        let cw = Copywriter::new(Scripted::new(vec![]), fast_config());
        assert_eq!(cw.optimize_title("Old Title").await, "Old Title");

        let cw = Copywriter::new(Scripted::new(vec![Ok("\"\"")]), fast_config());
        assert_eq!(cw.optimize_title("Old Title").await, "Old Title");
    }

    #[tokio::test]
    async fn timeout_counts_as_failure() {
        let config = CopywriterConfig::builder()
            .max_retries(0)
            .api_timeout_secs(1)
            .build()
            .unwrap();
        let cw = Copywriter::new(Stalls, config);
        assert_eq!(cw.optimize_title("Old").await, "Old");
    }

    #[tokio::test]
    async fn describe_uses_joined_specifications() {
        let cw = Copywriter::new(Scripted::new(vec![Ok("Nice.")]), fast_config());
        let rec = ListingRecord {
            title: "Lamp".into(),
            specifications: vec!["Metal".into(), "E27".into()],
            ..Default::default()
        };
        let next = cw.describe(&rec).await;
        assert_eq!(next.description, "Nice.");
        assert_eq!(next.title, "Lamp");
        assert!(cw.generator.prompts.lock().unwrap()[0].contains("Metal, E27"));
    }

    #[tokio::test]
    async fn empty_title_skips_generation() {
        let cw = Copywriter::new(Scripted::new(vec![Ok("x")]), fast_config());
        let rec = ListingRecord::default();
        assert_eq!(cw.describe(&rec).await, rec);
        assert_eq!(cw.retitle(&rec).await, rec);
        assert_eq!(cw.generator.calls.load(Ordering::SeqCst), 0);
    }
}
