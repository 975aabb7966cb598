use crate::error::ImageError;
use crate::model::RecipeImage;
use crate::providers::{image_prompt, ImageProvider, InlinePart};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::debug;

/// Requests and decodes one illustration per recipe title.
pub struct ImageRequester {
    provider: Box<dyn ImageProvider>,
}

impl ImageRequester {
    pub fn new(provider: Box<dyn ImageProvider>) -> Self {
        Self { provider }
    }

    /// Generate an image for the given recipe title.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The image service call fails
    /// - No returned part has an image content type
    /// - The payload is not valid base64 or not a decodable bitmap
    pub async fn request(&self, title: &str) -> Result<RecipeImage, ImageError> {
        let prompt = image_prompt(title);
        debug!(
            "Requesting image for '{}' from {}",
            title,
            self.provider.provider_name()
        );

        let parts = self
            .provider
            .generate(&prompt)
            .await
            .map_err(|e| ImageError::Request(e.to_string()))?;

        let part = parts
            .iter()
            .find(|part| part.mime_type.contains("image"))
            .ok_or(ImageError::NoImagePart)?;

        decode_part(part)
    }
}

/// Decode a base64 inline part into a bitmap-checked image.
pub fn decode_part(part: &InlinePart) -> Result<RecipeImage, ImageError> {
    let data = STANDARD.decode(part.data.trim())?;
    let bitmap = image::load_from_memory(&data)?;

    Ok(RecipeImage {
        mime_type: part.mime_type.clone(),
        width: bitmap.width(),
        height: bitmap.height(),
        data,
    })
}
