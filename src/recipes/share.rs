use super::{RecipeBlock, SHARE_SEPARATOR};

/// Join the accepted blocks into one copyable text.
///
/// Bodies are kept in order and separated by a blank line, a `---` line and
/// another blank line, so feeding the payload back through
/// [`split_recipes`](super::split_recipes) yields the same bodies.
/// Returns `None` when there is nothing to share.
pub fn assemble_share_payload(blocks: &[RecipeBlock]) -> Option<String> {
    if blocks.is_empty() {
        return None;
    }

    Some(
        blocks
            .iter()
            .map(|block| block.body.as_str())
            .collect::<Vec<_>>()
            .join(SHARE_SEPARATOR),
    )
}
