mod google;
mod google_image;
mod prompt;

pub use google::GoogleProvider;
pub use google_image::GoogleImageProvider;
pub use prompt::{build_prompt, image_prompt, INGREDIENTS_LABEL, RECIPE_PROMPT_TEMPLATE};

use async_trait::async_trait;
use std::error::Error;

/// Text-generation capability
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Get the provider name (e.g., "google")
    fn provider_name(&self) -> &str;

    /// Send a prompt and return the raw completion text
    async fn complete(&self, prompt: &str) -> Result<String, Box<dyn Error + Send + Sync>>;
}

/// An inline binary part of a generation response, still base64-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlinePart {
    pub mime_type: String,
    pub data: String,
}

/// Image-generation capability
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Get the provider name (e.g., "google")
    fn provider_name(&self) -> &str;

    /// Send an image description and return the inline parts of the response
    async fn generate(
        &self,
        prompt: &str,
    ) -> Result<Vec<InlinePart>, Box<dyn Error + Send + Sync>>;
}
