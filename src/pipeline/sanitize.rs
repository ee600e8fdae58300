//! Deterministic cleanup of model-generated JSON.
//!
//! ## Why is sanitising necessary?
//!
//! Even when the prompt demands "STRICTLY do not return any other text with
//! the JSON", vision models routinely introduce artefacts that are
//! semantically fine but break a strict parser:
//!
//! - Wrapping the object in ` ```json … ``` ` fences
//! - Typographic quotes (`“ ”`) where JSON requires `"`
//! - Thousands separators inside numbers (`"grand_total": 1,234.56`)
//! - The literal strings `"null"` or `"NA"` where null was meant
//!
//! Each rule is a small pure function applied in a fixed order, so rules
//! stay independently testable and the prompt can stay focused on what to
//! extract rather than formatting edge cases.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Apply all text-level cleanup rules to raw model output.
///
/// Rules (applied in order):
/// 1. Strip outer ```json fences
/// 2. Replace typographic double quotes with ASCII quotes
/// 3. Remove comma digit-group separators (`1,234` → `1234`)
///
/// The result is plain text expected to parse as JSON; value-level fixes
/// happen afterwards in [`normalize_nulls`].
pub fn clean_model_json(input: &str) -> String {
    let s = strip_json_fences(input);
    let s = normalize_quotes(&s);
    strip_digit_group_commas(&s)
}

// ── Rule 1: Strip outer json fences ──────────────────────────────────────

static RE_OUTER_FENCES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^```(?:json)?\s*(.*?)\s*```\s*$").unwrap());

fn strip_json_fences(input: &str) -> String {
    let trimmed = input.trim();
    if let Some(caps) = RE_OUTER_FENCES.captures(trimmed) {
        caps[1].to_string()
    } else {
        trimmed.to_string()
    }
}

// ── Rule 2: Normalise typographic quotes ─────────────────────────────────

fn normalize_quotes(input: &str) -> String {
    input.replace(['\u{201C}', '\u{201D}'], "\"")
}

// ── Rule 3: Remove digit-group commas ────────────────────────────────────

static RE_GROUPED_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d),(\d)").unwrap());

fn strip_digit_group_commas(input: &str) -> String {
    // A single pass cannot catch adjacent groups ("1,2,3"), so iterate
    // until stable. Converges in at most two passes for real input.
    let mut s = input.to_string();
    while RE_GROUPED_DIGITS.is_match(&s) {
        s = RE_GROUPED_DIGITS.replace_all(&s, "$1$2").into_owned();
    }
    s
}

// ── Value-level rule: "null"/"NA" strings → JSON null ────────────────────

/// Recursively replace the literal strings `"null"` and `"NA"` with null.
///
/// Models asked to "handle missing fields with null values" sometimes emit
/// the word as a string instead of the JSON literal.
pub fn normalize_nulls(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k, normalize_nulls(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_nulls).collect()),
        Value::String(s) if s == "null" || s == "NA" => Value::Null,
        other => other,
    }
}
