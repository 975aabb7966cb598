use std::time::Duration;

use crate::{config::AppConfig, Outcome, RecipeRecommender, RecommendError};

/// Builder for configuring and executing a recipe recommendation
#[derive(Debug, Default)]
pub struct RecommendationBuilder {
    ingredients: Option<String>,
    config: Option<AppConfig>,
    api_key: Option<String>,
    model: Option<String>,
    image_model: Option<String>,
    base_url: Option<String>,
    images: Option<bool>,
    timeout: Option<Duration>,
}

impl RecommendationBuilder {
    /// Set the ingredient list, comma or newline separated
    ///
    /// # Example
    /// ```
    /// use fridge_chef::Recommender;
    ///
    /// let builder = Recommender::builder()
    ///     .ingredients("치품송, 파프리카, 양파, 계란");
    /// ```
    pub fn ingredients(mut self, ingredients: impl Into<String>) -> Self {
        self.ingredients = Some(ingredients.into());
        self
    }

    /// Start from an already loaded configuration instead of reading files and environment
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the Gemini API key
    ///
    /// This allows passing the API key directly instead of relying on
    /// the GEMINI_API_KEY environment variable or config files.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the model used for recipe text
    ///
    /// # Example
    /// ```
    /// use fridge_chef::Recommender;
    ///
    /// let builder = Recommender::builder()
    ///     .ingredients("양파, 계란")
    ///     .model("gemini-1.5-flash");
    /// ```
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the model used for recipe images
    pub fn image_model(mut self, model: impl Into<String>) -> Self {
        self.image_model = Some(model.into());
        self
    }

    #[doc(hidden)]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Skip image generation; cards carry text only
    pub fn without_images(mut self) -> Self {
        self.images = Some(false);
        self
    }

    /// Set a timeout for each HTTP request
    ///
    /// # Example
    /// ```
    /// use fridge_chef::Recommender;
    /// use std::time::Duration;
    ///
    /// let builder = Recommender::builder()
    ///     .ingredients("양파, 계란")
    ///     .timeout(Duration::from_secs(30));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Resolve the configuration: loaded sources first, then builder overrides
    ///
    /// # Errors
    /// Returns `RecommendError::ConfigError` if the config file or environment is malformed.
    pub fn resolve_config(&self) -> Result<AppConfig, RecommendError> {
        let mut config = match &self.config {
            Some(config) => config.clone(),
            None => AppConfig::load()?,
        };

        if let Some(key) = &self.api_key {
            config.gemini.api_key = Some(key.clone());
        }
        if let Some(model) = &self.model {
            config.gemini.text_model = model.clone();
        }
        if let Some(model) = &self.image_model {
            config.gemini.image_model = model.clone();
        }
        if let Some(url) = &self.base_url {
            config.gemini.base_url = url.clone();
        }
        if let Some(enabled) = self.images {
            config.images.enabled = enabled;
        }
        if let Some(timeout) = self.timeout {
            config.timeout = timeout.as_secs().max(1);
        }

        Ok(config)
    }

    /// Build and execute the recommendation
    ///
    /// # Returns
    /// `Outcome::MissingIngredients` when no (or only blank) ingredients were given,
    /// otherwise the parsed recipe cards.
    ///
    /// # Errors
    /// Returns `RecommendError` if:
    /// - The configuration cannot be loaded or has no API key
    /// - The text-generation call fails
    ///
    /// # Example
    /// ```no_run
    /// # use fridge_chef::Recommender;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let outcome = Recommender::builder()
    ///     .ingredients("치품송, 양파, 계란")
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<Outcome, RecommendError> {
        let ingredients = self.ingredients.clone().unwrap_or_default();

        // The guard comes before credentials so an empty request never needs a key
        if ingredients.trim().is_empty() {
            return Ok(Outcome::MissingIngredients);
        }

        let config = self.resolve_config()?;
        let recommender = RecipeRecommender::from_config(&config)?;
        recommender.recommend(&ingredients).await
    }
}

/// Main entry point for the builder API
pub struct Recommender;

impl Recommender {
    /// Creates a new builder for a recommendation
    ///
    /// # Example
    /// ```
    /// use fridge_chef::Recommender;
    ///
    /// let builder = Recommender::builder();
    /// ```
    pub fn builder() -> RecommendationBuilder {
        RecommendationBuilder::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_apply_over_config() {
        let config = Recommender::builder()
            .config(AppConfig::default())
            .api_key("key")
            .model("gemini-1.5-flash")
            .image_model("gemini-image")
            .base_url("http://localhost:9999")
            .without_images()
            .timeout(Duration::from_secs(12))
            .resolve_config()
            .unwrap();

        assert_eq!(config.gemini.api_key.as_deref(), Some("key"));
        assert_eq!(config.gemini.text_model, "gemini-1.5-flash");
        assert_eq!(config.gemini.image_model, "gemini-image");
        assert_eq!(config.gemini.base_url, "http://localhost:9999");
        assert!(!config.images.enabled);
        assert_eq!(config.timeout, 12);
    }

    #[test]
    fn test_sub_second_timeout_rounds_up() {
        let config = Recommender::builder()
            .config(AppConfig::default())
            .timeout(Duration::from_millis(200))
            .resolve_config()
            .unwrap();
        assert_eq!(config.timeout, 1);
    }

    #[tokio::test]
    async fn test_missing_ingredients_needs_no_credentials() {
        let outcome = Recommender::builder()
            .config(AppConfig::default())
            .ingredients("  \n ")
            .build()
            .await
            .unwrap();
        assert!(matches!(outcome, Outcome::MissingIngredients));
    }
}
