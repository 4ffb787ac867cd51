use std::time::Duration;

/// Default chat-completions endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.deepseek.com";

/// Default annotation model.
pub const DEFAULT_MODEL: &str = "deepseek-chat";

/// Near-zero sampling temperature keeps annotations deterministic.
pub const DEFAULT_TEMPERATURE: f32 = 0.01;

/// Per-attempt network timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Maximum characters per submitted chunk.
pub const DEFAULT_CHUNK_CHARS: usize = 400;

/// Additional attempts after the first failure.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Pause between failed attempts. Constant, not exponential.
pub const DEFAULT_RETRY_BACKOFF: Duration = Duration::from_secs(1);

/// Annotation pipeline configuration.
///
/// Credentials and endpoint are externally supplied; nothing here is
/// computed. `from_env()` is the usual way to build one in an
/// application, while tests construct it directly.
#[derive(Debug, Clone)]
pub struct AnnotatorConfig {
    /// Base URL of the chat-completions API.
    pub base_url: String,
    /// Bearer token sent with each request.
    pub api_key: String,
    /// Model identifier sent with each request.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Per-attempt request timeout in seconds.
    pub timeout_secs: u64,
    /// Maximum chunk size in characters.
    pub max_chunk_chars: usize,
    /// Retries after the first failed attempt.
    pub max_retries: u32,
    /// Fixed pause between failed attempts.
    pub retry_backoff: Duration,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_chunk_chars: DEFAULT_CHUNK_CHARS,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_backoff: DEFAULT_RETRY_BACKOFF,
        }
    }
}

impl AnnotatorConfig {
    /// Build a configuration from environment variables, falling back
    /// to defaults for anything unset.
    ///
    /// Recognized variables: `GLOSSWORK_API_KEY`, `GLOSSWORK_BASE_URL`,
    /// `GLOSSWORK_MODEL`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(key) = std::env::var("GLOSSWORK_API_KEY") {
            config.api_key = key;
        }
        if let Ok(url) = std::env::var("GLOSSWORK_BASE_URL") {
            config.base_url = url;
        }
        if let Ok(model) = std::env::var("GLOSSWORK_MODEL") {
            config.model = model;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_deepseek() {
        let config = AnnotatorConfig::default();
        assert_eq!(config.base_url, "https://api.deepseek.com");
        assert_eq!(config.model, "deepseek-chat");
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn default_retry_policy() {
        let config = AnnotatorConfig::default();
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.retry_backoff, Duration::from_secs(1));
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn default_chunk_size() {
        assert_eq!(AnnotatorConfig::default().max_chunk_chars, 400);
    }

    #[test]
    fn from_env_overrides_defaults() {
        std::env::set_var("GLOSSWORK_API_KEY", "sk-test");
        std::env::set_var("GLOSSWORK_BASE_URL", "http://localhost:9999");
        std::env::set_var("GLOSSWORK_MODEL", "deepseek-reasoner");

        let config = AnnotatorConfig::from_env();
        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.base_url, "http://localhost:9999");
        assert_eq!(config.model, "deepseek-reasoner");
        // Unrelated fields keep their defaults
        assert_eq!(config.max_chunk_chars, DEFAULT_CHUNK_CHARS);

        std::env::remove_var("GLOSSWORK_API_KEY");
        std::env::remove_var("GLOSSWORK_BASE_URL");
        std::env::remove_var("GLOSSWORK_MODEL");
    }
}
