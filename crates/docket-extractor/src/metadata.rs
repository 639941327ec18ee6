//! Metadata inference for a candidate span
//!
//! Every inference is a pure function of the span text. Failed numeric
//! parses fall through to the next pattern and are never errors.

use docket_domain::{
    ConfidenceScore, ExtractionMethod, Priority, TaskSuggestion, MAX_SNIPPET_CHARS,
    MAX_TITLE_CHARS,
};
use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s").expect("Invalid sentence end regex"));

static MARKER_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:task|item|step|requirement|feature|deliverable)\s*[#:]?\s*\d+[.:]?\s*")
        .expect("Invalid marker prefix regex")
});

static DUE_DATE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\b(?:due|deadline|by|before|on)\s*(?:date)?\s*:?\s*(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})",
        r"(?i)\b(?:due|deadline|by|before|on)\s*(?:date)?\s*:?\s*(\d{4}[/-]\d{1,2}[/-]\d{1,2})",
        r"(?i)\b(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)\w*\s+\d{1,2},?\s+\d{4}",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("Invalid due date regex"))
    .collect()
});

static HOURS_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\b(?:estimate|estimated|hours|hrs|time|duration)\s*:?\s*([0-9]+)\s*(?:hours?|hrs?|h)?",
        r"(?i)\b([0-9]+)\s*(?:hours?|hrs?|h)\s*(?:estimate|estimated|time|duration)?",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("Invalid hours regex"))
    .collect()
});

fn priority_keywords(priority: Priority) -> &'static [&'static str] {
    match priority {
        Priority::Critical => &["critical", "urgent", "asap", "immediate", "emergency"],
        Priority::High => &["high", "important", "priority", "urgent"],
        Priority::Medium => &["medium", "moderate", "normal"],
        Priority::Low => &["low", "minor", "optional", "nice to have"],
    }
}

/// Derive a title from a span
///
/// Collapses whitespace, keeps the first sentence, strips a leading task
/// marker, capitalizes the first character and truncates to
/// [`MAX_TITLE_CHARS`].
pub fn derive_title(span: &str) -> String {
    let collapsed = WHITESPACE.replace_all(span, " ");
    let collapsed = collapsed.trim();

    let first_sentence = match SENTENCE_END.find(collapsed) {
        Some(m) => &collapsed[..m.start()],
        None => collapsed,
    };

    let stripped = MARKER_PREFIX.replace(first_sentence, "");

    let mut chars = stripped.chars();
    let title: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    title.chars().take(MAX_TITLE_CHARS).collect()
}

/// Infer priority from keyword hits (default medium)
///
/// Levels are checked in [`Priority::ORDERED`]; the first with a hit wins.
pub fn infer_priority(span: &str) -> Priority {
    let lower = span.to_lowercase();
    Priority::ORDERED
        .into_iter()
        .find(|priority| {
            priority_keywords(*priority)
                .iter()
                .any(|keyword| lower.contains(keyword))
        })
        .unwrap_or_default()
}

/// First due-date expression in the span, as matched
pub fn infer_due_date(span: &str) -> Option<String> {
    DUE_DATE_PATTERNS.iter().find_map(|pattern| {
        pattern.captures(span).map(|caps| {
            caps.get(1)
                .or_else(|| caps.get(0))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default()
        })
    })
}

/// First positive hour estimate in the span
pub fn infer_estimated_hours(span: &str) -> Option<u32> {
    HOURS_PATTERNS.iter().find_map(|pattern| {
        pattern.captures_iter(span).find_map(|caps| {
            caps.get(1)?
                .as_str()
                .parse::<u32>()
                .ok()
                .filter(|hours| *hours > 0)
        })
    })
}

/// Build an unscored suggestion from a span
///
/// Returns `None` when the derived title is empty.
pub fn build_suggestion(span: &str, method: ExtractionMethod) -> Option<TaskSuggestion> {
    let span = span.trim();
    let title = derive_title(span);
    if title.is_empty() {
        return None;
    }

    let description =
        (span.chars().count() > title.chars().count()).then(|| span.to_string());

    Some(TaskSuggestion {
        description,
        priority: infer_priority(span),
        due_date: infer_due_date(span),
        estimated_hours: infer_estimated_hours(span),
        method,
        raw_text_snippet: span.chars().take(MAX_SNIPPET_CHARS).collect(),
        confidence: ConfidenceScore::MIN,
        title,
    })
}
