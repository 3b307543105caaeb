use regex::Regex;
use std::sync::LazyLock;

static HORIZONTAL_WS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").expect("hardcoded regex"));
static EXCESS_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("hardcoded regex"));
static ANY_WS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("hardcoded regex"));
static LEADING_BULLETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\-•\t ]+").expect("hardcoded regex"));

/// Normalize a multi-line text block: unify line endings, replace non-breaking
/// spaces, collapse runs of horizontal whitespace, cap blank runs at one empty
/// line, and trim. Paragraph structure is preserved. Idempotent.
pub fn normalize_block(value: &str) -> String {
    let text = value
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\u{a0}', " ");
    let text = HORIZONTAL_WS.replace_all(&text, " ");
    let text = EXCESS_NEWLINES.replace_all(&text, "\n\n");
    text.trim().to_string()
}

/// Block normalization plus collapsing all whitespace (newlines included) to
/// single spaces. Used for single-line fields like titles and summaries.
pub fn normalize_inline(value: &str) -> String {
    ANY_WS
        .replace_all(&normalize_block(value), " ")
        .trim()
        .to_string()
}

/// Split a normalized block into its non-empty lines, stripping leading
/// bullet markers and indentation from each.
pub fn extract_lines(block: &str) -> Vec<String> {
    block
        .lines()
        .map(|line| LEADING_BULLETS.replace(line, "").trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}
