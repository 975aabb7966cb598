//! Recommend recipes for a fixed ingredient list through the builder API.
//!
//! Needs `GEMINI_API_KEY` in the environment:
//!
//! ```sh
//! GEMINI_API_KEY=... cargo run --example recommend -- "치품송, 양파, 계란"
//! ```

use fridge_chef::{CardImage, Outcome, Recommender};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let ingredients = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "치품송, 파프리카, 양파, 계란".to_string());

    let outcome = Recommender::builder()
        .ingredients(ingredients)
        .model("gemini-2.5-flash")
        .timeout(Duration::from_secs(90))
        .build()
        .await?;

    let recommendation = match outcome {
        Outcome::MissingIngredients => {
            println!("재료를 먼저 입력해주세요!");
            return Ok(());
        }
        Outcome::Recommended(recommendation) => recommendation,
    };

    for card in &recommendation.cards {
        match &card.image {
            CardImage::Ready(image) => println!(
                "{} ({}x{} {})",
                card.recipe.title, image.width, image.height, image.mime_type
            ),
            CardImage::Unavailable(e) => println!("{} (no image: {})", card.recipe.title, e),
            CardImage::Skipped => println!("{}", card.recipe.title),
        }
    }

    if let Some(payload) = &recommendation.share_payload {
        println!("\n{}", payload);
    }

    Ok(())
}
