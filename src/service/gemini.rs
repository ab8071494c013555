use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::{Value, json};

use crate::{
    foundation::error::{BloomError, BloomResult},
    service::{ServiceError, TextFetchService, config::ServiceConfig},
};

/// [`TextFetchService`] backed by the Gemini `generateContent` REST endpoint.
#[derive(Clone, Debug)]
pub struct GeminiTextService {
    client: Client,
    config: ServiceConfig,
}

impl GeminiTextService {
    /// Build the HTTP client. A missing key is not an error here; it surfaces per request.
    pub fn new(config: ServiceConfig) -> BloomResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| BloomError::config(format!("build http client: {e}")))?;
        Ok(Self { client, config })
    }

    /// Settings this client was built with.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

#[async_trait]
impl TextFetchService for GeminiTextService {
    #[tracing::instrument(skip_all)]
    async fn request_text(&self, prompt: &str) -> Result<String, ServiceError> {
        let api_key = self
            .config
            .api_key()
            .ok_or(ServiceError::MissingCredentials)?;
        let url = resolve_endpoint(&self.config.endpoint, &self.config.model, api_key)?;
        tracing::debug!(model = %self.config.model, "requesting generated text");

        let payload = json!({
            "contents": [
                {
                    "parts": [
                        { "text": prompt }
                    ]
                }
            ]
        });

        let response = self
            .client
            .post(url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::Status {
                status: status.as_u16(),
                body: truncate(&body, 320),
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| ServiceError::Malformed(e.to_string()))?;

        let text = extract_candidate_text(&body)?;
        if text.trim().is_empty() {
            return Err(ServiceError::EmptyResponse);
        }
        Ok(text.trim().to_string())
    }
}

/// Build the request URL, appending the model path and `key` query when absent.
pub(crate) fn resolve_endpoint(
    endpoint: &str,
    model: &str,
    api_key: &str,
) -> Result<Url, ServiceError> {
    let mut url = if endpoint.contains(":generateContent") {
        Url::parse(endpoint)
            .map_err(|e| ServiceError::Network(format!("invalid endpoint {endpoint}: {e}")))?
    } else {
        let base = endpoint.trim_end_matches('/');
        let generated = format!("{base}/v1beta/models/{model}:generateContent");
        Url::parse(&generated)
            .map_err(|e| ServiceError::Network(format!("invalid endpoint {generated}: {e}")))?
    };

    if !url.query_pairs().any(|(k, _)| k == "key") {
        url.query_pairs_mut().append_pair("key", api_key);
    }

    Ok(url)
}

/// Join the text parts of the first candidate.
pub(crate) fn extract_candidate_text(body: &Value) -> Result<String, ServiceError> {
    let candidate = body["candidates"]
        .as_array()
        .and_then(|candidates| candidates.first())
        .ok_or_else(|| ServiceError::Malformed("response has no candidates".to_string()))?;

    let parts = candidate["content"]["parts"]
        .as_array()
        .ok_or_else(|| ServiceError::Malformed("candidate has no content parts".to_string()))?;

    Ok(parts
        .iter()
        .filter_map(|part| part["text"].as_str())
        .collect::<Vec<_>>()
        .join("\n"))
}

fn truncate(value: &str, max_chars: usize) -> String {
    let mut chars = value.chars();
    let truncated: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{truncated}...")
    } else {
        truncated
    }
}

#[cfg(test)]
#[path = "../../tests/unit/service/gemini.rs"]
mod tests;
