use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

use super::text_normalizer::{extract_lines, normalize_inline};

/// How many ingredients to keep from a parsed ingredient list.
const MAX_INGREDIENTS: usize = 20;
/// How many description sentences become product features.
const MAX_FEATURES: usize = 3;

static DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)").expect("hardcoded regex"));
static GROUPED_INT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d[\d,]*)").expect("hardcoded regex"));
static SPF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)spf\s*(\d+)").expect("hardcoded regex"));
static SIZE_ML: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*ml").expect("hardcoded regex"));
static INGREDIENTS_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)ingredients?:\s*(.+)").expect("hardcoded regex"));
static WS_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("hardcoded regex"));
static LIST_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,;\n]").expect("hardcoded regex"));
static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("hardcoded regex"));

/// First decimal number in the text after stripping thousands separators,
/// e.g. "$1,045.00" -> 1045.0. `None` when no number is present.
pub fn parse_price(value: &str) -> Option<f64> {
    let cleaned = value.replace(',', "");
    DECIMAL
        .captures(&cleaned)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// First decimal number in the text, e.g. "4.5 out of 5 stars" -> 4.5.
pub fn parse_rating(value: &str) -> Option<f64> {
    DECIMAL
        .captures(value)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// First integer in the text, thousands separators allowed,
/// e.g. "1,204 reviews" -> 1204.
pub fn parse_review_count(value: &str) -> Option<u64> {
    GROUPED_INT
        .captures(value)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().replace(',', "").parse::<u64>().ok())
}

/// Decode the embedded variants column. Anything other than a well-formed
/// JSON array (decode failure, scalar, object) yields an empty list.
pub fn parse_variants(value: &str) -> Vec<Value> {
    match serde_json::from_str::<Value>(value) {
        Ok(Value::Array(items)) => items,
        _ => Vec::new(),
    }
}

/// Pull an ingredient list out of a composition block. Looks for an
/// "Ingredients:" label, unifies interpunct separators to commas, and keeps
/// the first 20 non-empty entries.
pub fn extract_ingredients(block: &str) -> Vec<String> {
    let Some(caps) = INGREDIENTS_LABEL.captures(block) else {
        return Vec::new();
    };
    let text = caps
        .get(1)
        .map(|m| m.as_str())
        .unwrap_or_default()
        .replace(['\u{ff65}', '・'], ",");
    let text = WS_RUN.replace_all(&text, " ");
    LIST_SEPARATOR
        .split(text.trim())
        .map(|part| part.trim_matches([' ', '.', ';']).to_string())
        .filter(|part| !part.is_empty())
        .take(MAX_INGREDIENTS)
        .collect()
}

/// Up to three short feature strings: description sentences first, falling
/// back to composition lines when the description is empty.
pub fn extract_features(description: &str, composition: &str) -> Vec<String> {
    let inline = normalize_inline(description);
    let mut features: Vec<String> = SENTENCE_END
        .split(&inline)
        .map(|sentence| sentence.trim().to_string())
        .filter(|sentence| !sentence.is_empty())
        .collect();
    if features.is_empty() {
        features = extract_lines(composition);
    }
    features.truncate(MAX_FEATURES);
    features
}

/// SPF factor from free text, e.g. "SPF 50+ lotion" -> 50.
pub fn extract_spf(text: &str) -> Option<u32> {
    SPF.captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
}

/// Container size in millilitres, e.g. "75ml / 2.5 oz" -> 75.
pub fn extract_size_ml(text: &str) -> Option<u32> {
    SIZE_ML
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
}
