use crate::error::ImageError;
use crate::recipes::RecipeBlock;
use serde::{Serialize, Serializer};

/// A decoded illustration for one recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeImage {
    /// MIME type reported by the service (e.g. "image/png")
    pub mime_type: String,
    /// Encoded image bytes as returned by the service
    #[serde(skip)]
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl RecipeImage {
    /// File extension matching the MIME type
    pub fn extension(&self) -> &str {
        match self.mime_type.as_str() {
            "image/jpeg" | "image/jpg" => "jpg",
            "image/webp" => "webp",
            "image/gif" => "gif",
            _ => "png",
        }
    }
}

/// What happened to the image step for a card.
#[derive(Debug, Default)]
pub enum CardImage {
    /// Images were not requested
    #[default]
    Skipped,
    /// The image was generated and decoded
    Ready(RecipeImage),
    /// The image step failed; the card renders text-only
    Unavailable(ImageError),
}

impl CardImage {
    pub fn image(&self) -> Option<&RecipeImage> {
        match self {
            CardImage::Ready(image) => Some(image),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ImageError> {
        match self {
            CardImage::Unavailable(err) => Some(err),
            _ => None,
        }
    }
}

impl From<Result<RecipeImage, ImageError>> for CardImage {
    fn from(result: Result<RecipeImage, ImageError>) -> Self {
        match result {
            Ok(image) => CardImage::Ready(image),
            Err(err) => CardImage::Unavailable(err),
        }
    }
}

impl Serialize for CardImage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.image().serialize(serializer)
    }
}

/// A recipe ready for display: its text plus an optional image.
#[derive(Debug, Serialize)]
pub struct RecipeCard {
    #[serde(flatten)]
    pub recipe: RecipeBlock,
    pub image: CardImage,
}

/// Everything rendered for one request.
#[derive(Debug, Serialize)]
pub struct Recommendation {
    pub cards: Vec<RecipeCard>,
    /// All bodies joined for bulk copy; `None` when no recipe was accepted
    pub share_payload: Option<String>,
}

impl Recommendation {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Result of handling one user action.
#[derive(Debug)]
pub enum Outcome {
    /// The ingredient list was empty; nothing was requested
    MissingIngredients,
    /// The service was called and its answer parsed
    Recommended(Recommendation),
}

impl Outcome {
    pub fn recommendation(&self) -> Option<&Recommendation> {
        match self {
            Outcome::Recommended(recommendation) => Some(recommendation),
            Outcome::MissingIngredients => None,
        }
    }
}
