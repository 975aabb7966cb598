use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Environment variable the Gemini credential is read from when it is not in the config
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Gemini connection and model settings
    #[serde(default)]
    pub gemini: GeminiConfig,
    /// Illustrative image settings
    #[serde(default)]
    pub images: ImagesConfig,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gemini: GeminiConfig::default(),
            images: ImagesConfig::default(),
            timeout: default_timeout(),
        }
    }
}

/// Configuration for the Gemini text and image models
#[derive(Debug, Deserialize, Clone)]
pub struct GeminiConfig {
    /// API key for authentication (can also be set via GEMINI_API_KEY)
    pub api_key: Option<String>,
    /// Base URL for the API endpoint (for proxies and tests)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model used for recipe text
    #[serde(default = "default_text_model")]
    pub text_model: String,
    /// Model used for recipe images
    #[serde(default = "default_image_model")]
    pub image_model: String,
    /// Temperature for generation (0.0-1.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            text_model: default_text_model(),
            image_model: default_image_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

/// Configuration for the per-recipe image step
#[derive(Debug, Deserialize, Clone)]
pub struct ImagesConfig {
    /// Whether to request an image for each recipe
    #[serde(default = "default_images_enabled")]
    pub enabled: bool,
    /// Number of image candidates to ask for
    #[serde(default = "default_candidate_count")]
    pub candidate_count: u32,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            enabled: default_images_enabled(),
            candidate_count: default_candidate_count(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_text_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_image_model() -> String {
    "gemini-2.0-flash-preview-image-generation".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    4096
}

fn default_images_enabled() -> bool {
    true
}

fn default_candidate_count() -> u32 {
    1
}

fn default_timeout() -> u64 {
    60
}

impl GeminiConfig {
    /// The configured API key, falling back to the GEMINI_API_KEY environment variable
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .filter(|key| !key.trim().is_empty())
    }
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with FRIDGE_CHEF__ prefix
    /// 2. fridge-chef.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: FRIDGE_CHEF__GEMINI__TEXT_MODEL
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`AppConfig::load`] for the source priority.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("fridge-chef").required(false))
        .add_source(environment())
        .build()?;

    settings.try_deserialize()
}

// Use double underscore for nested: FRIDGE_CHEF__GEMINI__API_KEY
fn environment() -> Environment {
    Environment::with_prefix("FRIDGE_CHEF")
        .separator("__")
        .try_parsing(true)
}
