//! Recipe recommendations from the ingredients left in your fridge.
//!
//! The ingredient list is wrapped in a fixed chef prompt, sent to Gemini, and
//! the answer is cut into recipe cards (one per `---` separated block that
//! carries a `요리 이름:` title). Each card can get an AI illustration, and all
//! cards are joined into one text for bulk copying.

pub mod builder;
pub mod config;
pub mod error;
pub mod images;
pub mod model;
pub mod pipeline;
pub mod providers;
pub mod recipes;
pub mod render;

pub use builder::{RecommendationBuilder, Recommender};
pub use config::AppConfig;
pub use error::{ImageError, RecommendError};
pub use model::{CardImage, Outcome, RecipeCard, RecipeImage, Recommendation};
pub use pipeline::RecipeRecommender;
pub use recipes::{assemble_share_payload, extract_title, split_recipes, RecipeBlock};

/// Recommend recipes for an ingredient list using the loaded configuration.
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let outcome = fridge_chef::recommend("치품송, 양파, 계란").await?;
/// if let Some(recommendation) = outcome.recommendation() {
///     for card in &recommendation.cards {
///         println!("{}", card.recipe.title);
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub async fn recommend(ingredients: &str) -> Result<Outcome, RecommendError> {
    Recommender::builder().ingredients(ingredients).build().await
}

/// Recommend recipes without requesting images.
pub async fn recommend_text_only(ingredients: &str) -> Result<Outcome, RecommendError> {
    Recommender::builder()
        .ingredients(ingredients)
        .without_images()
        .build()
        .await
}
