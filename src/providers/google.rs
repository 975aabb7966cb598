use crate::config::GeminiConfig;
use crate::error::RecommendError;
use crate::providers::CompletionProvider;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};
use std::error::Error;
use std::time::Duration;

pub struct GoogleProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl GoogleProvider {
    /// Create a new Google Gemini text provider from configuration
    pub fn new(config: &GeminiConfig, timeout: Duration) -> Result<Self, RecommendError> {
        let api_key = config.resolve_api_key().ok_or_else(|| {
            RecommendError::Configuration(
                "GEMINI_API_KEY not found in config or environment".to_string(),
            )
        })?;

        Ok(GoogleProvider {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.text_model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        GoogleProvider {
            client: Client::new(),
            api_key,
            base_url,
            model,
            temperature: 0.7,
            max_tokens: 4096,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionProvider for GoogleProvider {
    fn provider_name(&self) -> &str {
        "google"
    }

    async fn complete(&self, prompt: &str) -> Result<String, Box<dyn Error + Send + Sync>> {
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
                    "temperature": self.temperature,
                    "maxOutputTokens": self.max_tokens
                }
            }))
            .send()
            .await?;

        let response_body = read_gemini_response(response).await?;
        debug!("Google Gemini response: {:?}", response_body);

        let parts = response_body["candidates"][0]["content"]["parts"]
            .as_array()
            .ok_or_else(|| missing_content_error(&response_body))?;

        let text: String = parts
            .iter()
            .filter_map(|part| part["text"].as_str())
            .collect();

        if text.is_empty() && parts.iter().all(|part| part.get("text").is_none()) {
            return Err(missing_content_error(&response_body).into());
        }

        Ok(text)
    }
}

/// Read a generateContent response, turning service-side failures into errors.
pub(crate) async fn read_gemini_response(
    response: reqwest::Response,
) -> Result<Value, Box<dyn Error + Send + Sync>> {
    let status = response.status();
    let body = response.text().await?;

    let response_body: Value = serde_json::from_str(&body)
        .map_err(|_| format!("Google Gemini returned {} with a non-JSON body: {}", status, body))?;

    // Check for API error response (auth, quota, bad model...)
    if let Some(error) = response_body.get("error") {
        let error_code = error["code"].as_i64().unwrap_or(status.as_u16() as i64);
        let error_message = error["message"].as_str().unwrap_or("Unknown error");
        return Err(format!(
            "Google Gemini API error ({}): {}",
            error_code, error_message
        )
        .into());
    }

    if !status.is_success() {
        return Err(format!("Google Gemini API error ({}): {}", status, body).into());
    }

    if let Some(reason) = response_body["promptFeedback"]["blockReason"].as_str() {
        return Err(format!("Google Gemini blocked the prompt: {}", reason).into());
    }

    Ok(response_body)
}

fn missing_content_error(response_body: &Value) -> String {
    format!(
        "Failed to extract content from Google Gemini response. Response: {}",
        serde_json::to_string_pretty(response_body).unwrap_or_else(|_| response_body.to_string())
    )
}
