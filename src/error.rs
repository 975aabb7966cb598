use thiserror::Error;

/// Errors that stop a recommendation request
#[derive(Error, Debug)]
pub enum RecommendError {
    /// Missing or invalid credential / settings
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Failed to load the layered configuration
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Failed to build the HTTP client
    #[error("HTTP client error: {0}")]
    ClientError(#[from] reqwest::Error),

    /// The text-generation call failed
    #[error("Recipe generation failed: {0}")]
    Completion(String),
}

impl RecommendError {
    /// Whether the error should end the whole session rather than just the current request
    pub fn is_fatal_to_session(&self) -> bool {
        !matches!(self, RecommendError::Completion(_))
    }
}

/// Errors from the decorative image step. Never propagated past the pipeline.
#[derive(Error, Debug)]
pub enum ImageError {
    /// The image-generation service call failed
    #[error("Image request failed: {0}")]
    Request(String),

    /// The response carried no part with an image content type
    #[error("No image part in response")]
    NoImagePart,

    /// The inline payload was not valid base64
    #[error("Invalid image payload: {0}")]
    Payload(#[from] base64::DecodeError),

    /// The payload could not be decoded into a bitmap
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}
