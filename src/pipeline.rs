use crate::config::AppConfig;
use crate::error::RecommendError;
use crate::images::ImageRequester;
use crate::model::{CardImage, Outcome, RecipeCard, Recommendation};
use crate::providers::{
    build_prompt, CompletionProvider, GoogleImageProvider, GoogleProvider, ImageProvider,
};
use crate::recipes::{assemble_share_payload, split_recipes};
use log::{debug, error, info, warn};
use std::time::Duration;

/// Turns an ingredient list into rendered recipe cards.
///
/// Holds only immutable provider handles; every call to [`recommend`](Self::recommend)
/// builds its result from scratch.
pub struct RecipeRecommender {
    completion: Box<dyn CompletionProvider>,
    images: Option<ImageRequester>,
}

impl RecipeRecommender {
    pub fn new(
        completion: Box<dyn CompletionProvider>,
        images: Option<Box<dyn ImageProvider>>,
    ) -> Self {
        Self {
            completion,
            images: images.map(ImageRequester::new),
        }
    }

    /// Create a recommender backed by Gemini from configuration
    ///
    /// # Errors
    /// Returns `RecommendError::Configuration` when no API key is available.
    pub fn from_config(config: &AppConfig) -> Result<Self, RecommendError> {
        let timeout = Duration::from_secs(config.timeout);
        let completion = GoogleProvider::new(&config.gemini, timeout)?;
        let images: Option<Box<dyn ImageProvider>> = if config.images.enabled {
            Some(Box::new(GoogleImageProvider::new(
                &config.gemini,
                &config.images,
                timeout,
            )?))
        } else {
            None
        };

        Ok(Self::new(Box::new(completion), images))
    }

    pub fn images_enabled(&self) -> bool {
        self.images.is_some()
    }

    /// Handle one user action.
    ///
    /// An empty ingredient list short-circuits to [`Outcome::MissingIngredients`]
    /// without contacting the service. Image failures are kept on the card and
    /// never fail the request.
    ///
    /// # Errors
    /// Returns `RecommendError::Completion` if the text-generation call fails.
    pub async fn recommend(&self, ingredients: &str) -> Result<Outcome, RecommendError> {
        if ingredients.trim().is_empty() {
            warn!("No ingredients given, skipping recipe generation");
            return Ok(Outcome::MissingIngredients);
        }

        let prompt = build_prompt(ingredients);
        debug!(
            "Requesting recipes from {} ({} prompt bytes)",
            self.completion.provider_name(),
            prompt.len()
        );

        let raw = self.completion.complete(&prompt).await.map_err(|e| {
            error!("Recipe generation failed: {}", e);
            RecommendError::Completion(e.to_string())
        })?;

        let blocks = split_recipes(&raw);
        info!("Parsed {} recipe(s) from response", blocks.len());

        let share_payload = assemble_share_payload(&blocks);

        let mut cards = Vec::with_capacity(blocks.len());
        for block in blocks {
            let image = match &self.images {
                Some(requester) => {
                    let result = requester.request(&block.title).await;
                    if let Err(e) = &result {
                        warn!("Image for '{}' unavailable: {}", block.title, e);
                    }
                    CardImage::from(result)
                }
                None => CardImage::Skipped,
            };
            cards.push(RecipeCard {
                recipe: block,
                image,
            });
        }

        Ok(Outcome::Recommended(Recommendation {
            cards,
            share_payload,
        }))
    }
}
