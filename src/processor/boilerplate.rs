use regex::Regex;
use std::sync::LazyLock;

static LABEL_AFTER_BREAK_COLON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(^|\n)\s*KEY BENEFITS\s*:\s*(\s*-\s*)?").expect("hardcoded regex")
});
static LABEL_AFTER_BREAK_DASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(^|\n)\s*KEY BENEFITS\s*-\s*").expect("hardcoded regex"));
static LABEL_AFTER_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(^|\n)\s*KEY BENEFITS\s+").expect("hardcoded regex"));
static LABEL_INLINE_DASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+KEY BENEFITS\s*-\s*").expect("hardcoded regex"));
static LABEL_INLINE_COLON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+KEY BENEFITS\s*:\s*").expect("hardcoded regex"));
static LABEL_INLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+KEY BENEFITS\s+").expect("hardcoded regex"));
static SPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"  +").expect("hardcoded regex"));
static NEWLINE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("hardcoded regex"));

/// Strip "KEY BENEFITS" marketing boilerplate from scraped overview text:
/// bare label lines, labels prefixing a line (with optional `:` or `-`), and
/// inline occurrences mid-sentence. Whitespace left behind is collapsed.
pub fn clean_key_benefits(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    // Lines that are nothing but the label.
    let kept: Vec<&str> = text
        .split('\n')
        .filter(|line| {
            let stripped = line.trim().to_uppercase();
            stripped != "KEY BENEFITS" && !stripped.starts_with("KEY BENEFITS:")
        })
        .collect();
    let result = kept.join("\n");

    // Labels at the start of the text or of a line.
    let result = LABEL_AFTER_BREAK_COLON.replace_all(&result, "$1");
    let result = LABEL_AFTER_BREAK_DASH.replace_all(&result, "$1");
    let result = LABEL_AFTER_BREAK.replace_all(&result, "$1");

    // Inline occurrences.
    let result = LABEL_INLINE_DASH.replace_all(&result, " ");
    let result = LABEL_INLINE_COLON.replace_all(&result, " ");
    let result = LABEL_INLINE.replace_all(&result, " ");

    let result = SPACE_RUN.replace_all(&result, " ");
    let result = NEWLINE_RUN.replace_all(result.trim(), "\n\n");
    result.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_bare_label_line() {
        let text = "KEY BENEFITS\n- Hydrates\n- Firms";
        assert_eq!(clean_key_benefits(text), "- Hydrates\n- Firms");
    }

    #[test]
    fn test_drops_whole_label_line_with_colon() {
        // A line beginning "KEY BENEFITS:" is treated as pure boilerplate.
        let text = "KEY BENEFITS: hydration\nApply nightly.";
        assert_eq!(clean_key_benefits(text), "Apply nightly.");
    }

    #[test]
    fn test_removes_label_with_dash_prefix() {
        let text = "KEY BENEFITS - Visibly smooths skin";
        assert_eq!(clean_key_benefits(text), "Visibly smooths skin");
    }

    #[test]
    fn test_removes_inline_label() {
        let text = "A rich cream. KEY BENEFITS - deep hydration all day.";
        assert_eq!(clean_key_benefits(text), "A rich cream. deep hydration all day.");
    }

    #[test]
    fn test_case_insensitive() {
        let text = "Overview key benefits: smoother skin";
        assert_eq!(clean_key_benefits(text), "Overview smoother skin");
    }

    #[test]
    fn test_clean_text_unchanged() {
        let text = "Hydrates and firms.\n\nApply morning and night.";
        assert_eq!(clean_key_benefits(text), text);
        assert_eq!(clean_key_benefits(""), "");
    }
}
