/// The instruction template sent ahead of the user's ingredients.
///
/// Describes the chef persona, the special handling rules for 치품송 and the
/// exact card format (title marker, summary, ingredients, steps) each recipe
/// must follow, separated by `---` lines.
///
/// The template is loaded from `prompt.txt` at compile time using the
/// `include_str!` macro, making it easy to edit without dealing with
/// Rust string syntax.
pub const RECIPE_PROMPT_TEMPLATE: &str = include_str!("prompt.txt");

/// Label placed in front of the ingredient text at the end of the prompt.
pub const INGREDIENTS_LABEL: &str = "**입력 재료:** ";

/// Build the full completion prompt for the given ingredient list.
///
/// The ingredient text is appended verbatim: no escaping, no validation.
pub fn build_prompt(ingredients: &str) -> String {
    let mut prompt = String::with_capacity(
        RECIPE_PROMPT_TEMPLATE.len() + INGREDIENTS_LABEL.len() + ingredients.len() + 1,
    );
    prompt.push_str(RECIPE_PROMPT_TEMPLATE);
    prompt.push('\n');
    prompt.push_str(INGREDIENTS_LABEL);
    prompt.push_str(ingredients);
    prompt
}

/// Build the image-description prompt for a recipe title.
pub fn image_prompt(title: &str) -> String {
    format!(
        "A realistic and delicious photo of '{}', minimalist style, bright background",
        title
    )
}
