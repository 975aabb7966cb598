use super::TITLE_MARKER;
use once_cell::sync::Lazy;
use regex::Regex;

static TITLE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"{}(?:\*\*|__)?[ \t]*(.*)",
        regex::escape(TITLE_MARKER)
    ))
    .expect("title pattern is a valid regex")
});

/// Pull the dish name out of a recipe block.
///
/// Captures the rest of the line following the title marker. The bold run
/// closing the marker (`**요리 이름:** ...`) is skipped, as is an unpaired
/// bold run at the end of the line (`**요리 이름: 양파전**`). Emphasis inside
/// the title itself is kept. Returns `None` when there is no marker or the
/// captured text is empty.
pub fn extract_title(body: &str) -> Option<String> {
    let captures = TITLE_PATTERN.captures(body)?;
    let mut title = captures.get(1)?.as_str().trim();

    for run in ["**", "__"] {
        if title.matches(run).count() == 1 {
            if let Some(stripped) = title.strip_suffix(run) {
                title = stripped.trim_end();
            }
        }
    }

    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_bold_title() {
        let body = "**요리 이름:** 치품송 스테이크\n**총평:** 맛있다";
        assert_eq!(extract_title(body).as_deref(), Some("치품송 스테이크"));
    }

    #[test]
    fn test_keeps_emphasis_inside_title() {
        let body = "**요리 이름:** *매운* 떡볶이\n**총평:** 매콤";
        assert_eq!(extract_title(body).as_deref(), Some("*매운* 떡볶이"));

        let body = "**요리 이름:** **치품송** 스테이크";
        assert_eq!(extract_title(body).as_deref(), Some("**치품송** 스테이크"));
    }

    #[test]
    fn test_strips_unpaired_trailing_bold() {
        assert_eq!(
            extract_title("**요리 이름: 양파전**").as_deref(),
            Some("양파전")
        );
        assert_eq!(
            extract_title("__요리 이름:__ 계란찜").as_deref(),
            Some("계란찜")
        );
    }

    #[test]
    fn test_extracts_plain_title() {
        assert_eq!(extract_title("요리 이름:   계란찜  ").as_deref(), Some("계란찜"));
    }

    #[test]
    fn test_title_stops_at_line_end() {
        let body = "요리 이름: 양파전\r\n재료: 양파";
        assert_eq!(extract_title(body).as_deref(), Some("양파전"));
    }

    #[test]
    fn test_empty_title_is_none() {
        assert_eq!(extract_title("**요리 이름:**\n**총평:** ..."), None);
        assert_eq!(extract_title("요리 이름:    "), None);
    }

    #[test]
    fn test_missing_marker_is_none() {
        assert_eq!(extract_title("**총평:** 제목이 없어요"), None);
    }

    #[test]
    fn test_first_marker_wins() {
        let body = "요리 이름: 첫째\n요리 이름: 둘째";
        assert_eq!(extract_title(body).as_deref(), Some("첫째"));
    }
}
