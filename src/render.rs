//! Plain-text rendering of a recommendation for the terminal.

use crate::model::{RecipeCard, Recommendation};

pub const MISSING_INGREDIENTS_WARNING: &str = "재료를 먼저 입력해주세요!";
pub const THINKING_MESSAGE: &str = "금복상회 수석 셰프가 레시피를 구상 중입니다... 🧑‍🍳";
pub const RESULTS_HEADER: &str = "✨ 수석 셰프 추천요리 ✨";
pub const SHARE_HINT: &str = "📋 아래 상자 안의 텍스트를 복사해서 공유하세요!";
pub const COPIED_MESSAGE: &str = "✅ 레시피가 클립보드에 복사되었습니다! 원하는 곳에 붙여넣으세요.";
pub const NO_RECIPES_MESSAGE: &str = "추천할 수 있는 레시피를 찾지 못했습니다. 다시 시도해주세요.";
pub const MISSING_KEY_MESSAGE: &str =
    "API 키 설정에 실패했습니다. GEMINI_API_KEY 환경 변수나 fridge-chef.toml 설정을 확인해주세요.";

const RULE: &str = "---";
const CARD_BORDER: &str = "────────────────────────────────────────";

/// Caption shown under a generated image
pub fn image_caption(title: &str) -> String {
    format!("AI가 생성한 '{}' 이미지", title)
}

/// Render one card: border, optional image caption, then the recipe text.
pub fn render_card(card: &RecipeCard, saved_image: Option<&str>) -> String {
    let mut out = String::new();
    out.push_str(CARD_BORDER);
    out.push('\n');

    if let Some(image) = card.image.image() {
        out.push_str(&format!(
            "🖼  {} ({}x{})",
            image_caption(&card.recipe.title),
            image.width,
            image.height
        ));
        if let Some(path) = saved_image {
            out.push_str(&format!(" → {}", path));
        }
        out.push('\n');
        out.push('\n');
    }

    out.push_str(&card.recipe.body);
    out.push('\n');
    out.push_str(CARD_BORDER);
    out.push('\n');
    out
}

/// Render the full result: header, cards, and the share block.
///
/// `saved_images` holds, per card, where its image was written (if anywhere).
pub fn render_recommendation(
    recommendation: &Recommendation,
    saved_images: &[Option<String>],
) -> String {
    if recommendation.is_empty() {
        return format!("{}\n", NO_RECIPES_MESSAGE);
    }

    let mut out = String::new();
    out.push_str(RULE);
    out.push('\n');
    out.push_str(RESULTS_HEADER);
    out.push_str("\n\n");

    for (index, card) in recommendation.cards.iter().enumerate() {
        let saved = saved_images.get(index).and_then(|s| s.as_deref());
        out.push_str(&render_card(card, saved));
        out.push('\n');
    }

    if let Some(payload) = &recommendation.share_payload {
        out.push_str(RULE);
        out.push('\n');
        out.push_str(SHARE_HINT);
        out.push_str("\n\n```\n");
        out.push_str(payload);
        out.push_str("\n```\n");
    }

    out
}

/// File name for a card's image: `<index>-<slug>.<ext>`, 1-based.
pub fn image_file_name(index: usize, card: &RecipeCard) -> Option<String> {
    let image = card.image.image()?;
    let slug = slugify(&card.recipe.title);
    Some(format!("{}-{}.{}", index + 1, slug, image.extension()))
}

fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        "recipe".to_string()
    } else {
        slug.to_string()
    }
}
