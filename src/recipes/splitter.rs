use super::{RecipeBlock, DELIMITER, TITLE_MARKER};
use log::debug;

/// Split a raw completion into recipe blocks.
///
/// Candidates are separated by lines holding only `---`. A candidate is kept
/// only when it contains the title marker; anything else (greetings, closing
/// remarks, empty fragments) is dropped. Order follows the source text. Text
/// without any delimiter is treated as a single candidate.
pub fn split_recipes(raw: &str) -> Vec<RecipeBlock> {
    split_candidates(raw)
        .into_iter()
        .filter_map(|candidate| {
            if candidate.contains(TITLE_MARKER) {
                Some(RecipeBlock::new(candidate))
            } else {
                if !candidate.trim().is_empty() {
                    debug!("Dropping fragment without title marker: {:?}", candidate.trim());
                }
                None
            }
        })
        .collect()
}

/// Cut `raw` around delimiter lines, keeping each candidate's original line endings.
fn split_candidates(raw: &str) -> Vec<&str> {
    let mut candidates = Vec::new();
    let mut start = 0;
    let mut offset = 0;

    for line in raw.split_inclusive('\n') {
        if line.trim() == DELIMITER {
            candidates.push(&raw[start..offset]);
            start = offset + line.len();
        }
        offset += line.len();
    }
    candidates.push(&raw[start..]);

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_RECIPES: &str = concat!(
        "**요리 이름:** 치품송 꼬치구이\n**총평:** 겉은 바삭\n",
        "\n---\n\n",
        "**요리 이름:** 치품송 스테이크\n**총평:** 든든한 한 끼",
    );

    #[test]
    fn test_splits_on_delimiter_lines() {
        let blocks = split_recipes(TWO_RECIPES);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].title, "치품송 꼬치구이");
        assert_eq!(blocks[1].title, "치품송 스테이크");
    }

    #[test]
    fn test_drops_chatter_without_marker() {
        let raw = format!("네, 추천해 드릴게요!\n---\n{}\n---\n맛있게 드세요.", TWO_RECIPES);
        let blocks = split_recipes(&raw);
        assert_eq!(blocks.len(), 2);
        assert!(blocks.iter().all(|b| b.body.contains(TITLE_MARKER)));
    }

    #[test]
    fn test_no_delimiter_yields_single_block() {
        let raw = "\n  **요리 이름:** 양파 계란볶음\n1. 볶는다\n  ";
        let blocks = split_recipes(raw);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].body, raw.trim());

        let crlf = "**요리 이름:** 양파전\r\n**총평:** 바삭\r\n1. 부친다\r\n";
        let blocks = split_recipes(crlf);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].body, crlf.trim());
    }

    #[test]
    fn test_crlf_bodies_are_slices_of_the_response() {
        let raw = "**요리 이름:** 하나\r\n1. 굽기\r\n---\r\n**요리 이름:** 둘\r\n1. 찌기\r\n";
        let blocks = split_recipes(raw);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].body, "**요리 이름:** 하나\r\n1. 굽기");
        assert_eq!(blocks[1].body, "**요리 이름:** 둘\r\n1. 찌기");
        assert!(blocks.iter().all(|b| raw.contains(b.body.as_str())));
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(split_recipes("").is_empty());
        assert!(split_recipes("   \n\n").is_empty());
    }

    #[test]
    fn test_only_delimiters_yields_nothing() {
        assert!(split_recipes("---\n---\n---").is_empty());
    }

    #[test]
    fn test_leading_delimiter_is_ignored() {
        let raw = format!("---\n{}", TWO_RECIPES);
        assert_eq!(split_recipes(&raw).len(), 2);
    }

    #[test]
    fn test_dashes_inside_text_do_not_split() {
        let raw = "**요리 이름:** 샐러드\n소스 --- 취향껏\n-----\n끝";
        let blocks = split_recipes(raw);
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].body.contains("소스 --- 취향껏"));
    }

    #[test]
    fn test_delimiter_with_surrounding_whitespace() {
        let raw = "**요리 이름:** 하나\n  ---  \r\n**요리 이름:** 둘";
        let blocks = split_recipes(raw);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1].title, "둘");
    }
}
