use std::{path::Path, sync::Arc};

use anyhow::Context as _;

use crate::{
    canopy::generator::CanopyParams,
    content::prompts::{DEFAULT_RECIPIENT, Prompts},
    foundation::error::{BloomError, BloomResult},
    service::{
        TextFetchService, UnconfiguredTextService, config::ServiceConfig,
        gemini::GeminiTextService,
    },
};

/// Environment variables consulted for the API key, in priority order.
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];
/// Overrides [`ServiceConfig::model`].
pub const MODEL_VAR: &str = "HEARTBLOOM_MODEL";
/// Overrides [`ServiceConfig::endpoint`].
pub const ENDPOINT_VAR: &str = "HEARTBLOOM_ENDPOINT";
/// Overrides [`BloomConfig::recipient`].
pub const RECIPIENT_VAR: &str = "HEARTBLOOM_RECIPIENT";

/// Everything a session needs, loadable from TOML plus environment overrides.
///
/// ```toml
/// recipient = "Alisha"
///
/// [service]
/// model = "gemini-3-flash-preview"
/// timeout_secs = 30
///
/// [canopy]
/// count = 1500
/// seed = 7
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BloomConfig {
    /// Name used in prompts, fallbacks and screen text.
    pub recipient: String,
    /// Text service connection.
    pub service: ServiceConfig,
    /// Landing tree generation.
    pub canopy: CanopyParams,
}

impl Default for BloomConfig {
    fn default() -> Self {
        Self {
            recipient: DEFAULT_RECIPIENT.to_string(),
            service: ServiceConfig::default(),
            canopy: CanopyParams::default(),
        }
    }
}

impl BloomConfig {
    /// Parse a TOML document; missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> BloomResult<Self> {
        let cfg: Self =
            toml::from_str(s).map_err(|e| BloomError::config(format!("parse config: {e}")))?;
        cfg.canopy.validate()?;
        Ok(cfg)
    }

    /// Read `path` (if any), then apply process environment overrides.
    pub fn load(path: Option<&Path>) -> BloomResult<Self> {
        let mut cfg = match path {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("read config '{}'", path.display()))?;
                Self::from_toml_str(&text)?
            }
            None => Self::default(),
        };
        cfg.apply_env(|key| std::env::var(key).ok());
        Ok(cfg)
    }

    /// Apply overrides from `lookup` (normally `std::env::var`). Blank values are ignored.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = API_KEY_VARS.into_iter().find_map(|var| get(var)) {
            self.service.api_key = Some(key);
        }
        if let Some(model) = get(MODEL_VAR) {
            self.service.model = model;
        }
        if let Some(endpoint) = get(ENDPOINT_VAR) {
            self.service.endpoint = endpoint;
        }
        if let Some(recipient) = get(RECIPIENT_VAR) {
            self.recipient = recipient;
        }
    }

    /// Prompts personalised for the configured recipient.
    pub fn prompts(&self) -> Prompts {
        Prompts::new(self.recipient.clone())
    }

    /// The Gemini client when a key is configured, otherwise a service that always reports
    /// missing credentials.
    pub fn text_service(&self) -> BloomResult<Arc<dyn TextFetchService>> {
        if self.service.is_configured() {
            Ok(Arc::new(GeminiTextService::new(self.service.clone())?))
        } else {
            tracing::info!("no API key configured; generated text will use fallbacks");
            Ok(Arc::new(UnconfiguredTextService))
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
