use std::time::Duration;

/// Default Gemini REST base URL.
pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
/// Default text model.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
/// Default HTTP client timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Connection settings for the text-generation service.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// API key; absent or blank means every request fails with missing credentials.
    pub api_key: Option<String>,
    /// Model name used in the `generateContent` path.
    pub model: String,
    /// Base URL, or a full `...:generateContent` URL.
    pub endpoint: String,
    /// Whole-request timeout.
    pub timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_GEMINI_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ServiceConfig {
    /// The key, if present and not blank.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    /// Whether a usable key is configured.
    pub fn is_configured(&self) -> bool {
        self.api_key().is_some()
    }

    /// Client timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}
