use super::google::read_gemini_response;
use crate::config::{GeminiConfig, ImagesConfig};
use crate::error::RecommendError;
use crate::providers::{ImageProvider, InlinePart};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};
use std::error::Error;
use std::time::Duration;

/// Gemini model used with the image response modality
pub struct GoogleImageProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    candidate_count: u32,
}

impl GoogleImageProvider {
    /// Create a new Google Gemini image provider from configuration
    pub fn new(
        config: &GeminiConfig,
        images: &ImagesConfig,
        timeout: Duration,
    ) -> Result<Self, RecommendError> {
        let api_key = config.resolve_api_key().ok_or_else(|| {
            RecommendError::Configuration(
                "GEMINI_API_KEY not found in config or environment".to_string(),
            )
        })?;

        Ok(GoogleImageProvider {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.image_model.clone(),
            candidate_count: images.candidate_count.max(1),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        GoogleImageProvider {
            client: Client::new(),
            api_key,
            base_url,
            model,
            candidate_count: 1,
        }
    }
}

#[async_trait]
impl ImageProvider for GoogleImageProvider {
    fn provider_name(&self) -> &str {
        "google"
    }

    async fn generate(
        &self,
        prompt: &str,
    ) -> Result<Vec<InlinePart>, Box<dyn Error + Send + Sync>> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&json!({
                "contents": [{
                    "parts": [{
                        "text": prompt
                    }]
                }],
                "generationConfig": {
                    "candidateCount": self.candidate_count,
                    "responseModalities": ["TEXT", "IMAGE"]
                }
            }))
            .send()
            .await?;

        let response_body = read_gemini_response(response).await?;

        let parts = inline_parts(&response_body);
        debug!(
            "Google Gemini image response carried {} inline part(s)",
            parts.len()
        );

        Ok(parts)
    }
}

/// Collect every `inlineData` part across all candidates, in order.
fn inline_parts(response_body: &Value) -> Vec<InlinePart> {
    response_body["candidates"]
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(|candidate| candidate["content"]["parts"].as_array())
        .flatten()
        .filter_map(|part| {
            let inline = part.get("inlineData").or_else(|| part.get("inline_data"))?;
            let mime_type = inline
                .get("mimeType")
                .or_else(|| inline.get("mime_type"))
                .and_then(Value::as_str)
                .unwrap_or_default();
            let data = inline["data"].as_str()?;
            Some(InlinePart {
                mime_type: mime_type.to_string(),
                data: data.to_string(),
            })
        })
        .collect()
}
