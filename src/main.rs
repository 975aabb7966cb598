use clap::Parser;
use fridge_chef::render::{
    image_file_name, render_recommendation, COPIED_MESSAGE, MISSING_INGREDIENTS_WARNING,
    MISSING_KEY_MESSAGE, THINKING_MESSAGE,
};
use fridge_chef::{Outcome, Recommendation, RecommendError, Recommender};
use log::{debug, warn};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tokio::io::AsyncReadExt;

/// 오늘 뭐 먹지? Recipe ideas from the ingredients in your fridge.
#[derive(Parser, Debug)]
#[command(name = "fridge-chef", version, about)]
struct Cli {
    /// Ingredients, separated by commas or newlines (read from stdin when omitted)
    ingredients: Option<String>,

    /// Do not generate an image for each recipe
    #[arg(long)]
    no_images: bool,

    /// Directory to write generated images into
    #[arg(long, value_name = "DIR")]
    image_dir: Option<PathBuf>,

    /// Print the result as JSON instead of formatted text
    #[arg(long)]
    json: bool,

    /// Copy all recipes to the clipboard
    #[arg(long)]
    copy: bool,

    /// Gemini model for recipe text
    #[arg(long)]
    model: Option<String>,

    /// Gemini model for recipe images
    #[arg(long)]
    image_model: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match &e {
                RecommendError::Configuration(_) => eprintln!("{}", MISSING_KEY_MESSAGE),
                _ => eprintln!("{}", e),
            }
            debug!("{:?}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), RecommendError> {
    let ingredients = match cli.ingredients.clone() {
        Some(ingredients) => ingredients,
        None => read_stdin().await,
    };

    let thinking = !cli.json && !ingredients.trim().is_empty();

    let mut builder = Recommender::builder().ingredients(ingredients);
    if cli.no_images {
        builder = builder.without_images();
    }
    if let Some(model) = &cli.model {
        builder = builder.model(model);
    }
    if let Some(model) = &cli.image_model {
        builder = builder.image_model(model);
    }

    if thinking {
        eprintln!("{}", THINKING_MESSAGE);
    }

    let recommendation = match builder.build().await? {
        Outcome::MissingIngredients => {
            eprintln!("{}", MISSING_INGREDIENTS_WARNING);
            return Ok(());
        }
        Outcome::Recommended(recommendation) => recommendation,
    };

    let saved_images = match &cli.image_dir {
        Some(dir) => save_images(dir, &recommendation).await,
        None => vec![None; recommendation.cards.len()],
    };

    if cli.json {
        match serde_json::to_string_pretty(&recommendation) {
            Ok(json) => println!("{}", json),
            Err(e) => warn!("Failed to serialize result: {}", e),
        }
    } else {
        print!("{}", render_recommendation(&recommendation, &saved_images));
    }

    if cli.copy {
        if let Some(payload) = &recommendation.share_payload {
            copy_to_clipboard(payload);
        }
    }

    Ok(())
}

async fn read_stdin() -> String {
    let mut input = String::new();
    if let Err(e) = tokio::io::stdin().read_to_string(&mut input).await {
        warn!("Failed to read ingredients from stdin: {}", e);
    }
    input
}

/// Write each decoded image to `dir`; failures only cost that card its file.
async fn save_images(dir: &Path, recommendation: &Recommendation) -> Vec<Option<String>> {
    if let Err(e) = tokio::fs::create_dir_all(dir).await {
        warn!("Cannot create image directory {}: {}", dir.display(), e);
        return vec![None; recommendation.cards.len()];
    }

    let mut saved = Vec::with_capacity(recommendation.cards.len());
    for (index, card) in recommendation.cards.iter().enumerate() {
        let (Some(name), Some(image)) = (image_file_name(index, card), card.image.image()) else {
            saved.push(None);
            continue;
        };

        let path = dir.join(name);
        match tokio::fs::write(&path, &image.data).await {
            Ok(()) => saved.push(Some(path.display().to_string())),
            Err(e) => {
                warn!("Failed to write {}: {}", path.display(), e);
                saved.push(None);
            }
        }
    }
    saved
}

fn copy_to_clipboard(payload: &str) {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(payload)) {
        Ok(()) => eprintln!("{}", COPIED_MESSAGE),
        Err(e) => warn!("Clipboard unavailable: {}", e),
    }
}
