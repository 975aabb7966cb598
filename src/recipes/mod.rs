mod share;
mod splitter;
mod title;

pub use share::assemble_share_payload;
pub use splitter::split_recipes;
pub use title::extract_title;

use serde::Serialize;

/// Literal label locating a dish's name inside a recipe block.
pub const TITLE_MARKER: &str = "요리 이름:";

/// A line consisting solely of this token separates recipe blocks.
pub const DELIMITER: &str = "---";

/// Separator placed between bodies in the share payload.
pub const SHARE_SEPARATOR: &str = "\n\n---\n\n";

/// Title used when the marker is present but nothing follows it.
pub const PLACEHOLDER_TITLE: &str = "요리";

/// One recommended dish, as cut out of the model's response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeBlock {
    pub title: String,
    pub body: String,
}

impl RecipeBlock {
    /// Create a block from a candidate's text, trimming it and extracting its title.
    pub fn new(text: &str) -> Self {
        let body = text.trim().to_string();
        let title = extract_title(&body).unwrap_or_else(|| PLACEHOLDER_TITLE.to_string());
        RecipeBlock { title, body }
    }

    /// Whether the title fell back to the placeholder
    pub fn has_placeholder_title(&self) -> bool {
        self.title == PLACEHOLDER_TITLE
    }
}
