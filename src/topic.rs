//! Topic labeling for Safechat
//!
//! Derives a short, emoji-prefixed topic label from the first user message
//! of a session. The keyword table is scanned in a fixed priority order and
//! the first match wins, so specific categories (Programming, Mathematics)
//! outrank generic ones (Education, Technology).

use regex::{Regex, RegexBuilder};
use std::sync::OnceLock;

/// Label used when no keyword table entry matches
pub const DEFAULT_TOPIC: &str = "💬 General Chat";

/// Keyword table in priority order: first matching entry wins
const TOPIC_TABLE: &[(&str, &str)] = &[
    (
        r"\b(code|programming|python|java|c\+\+|algorithm|script|developer)\b",
        "💻 Programming",
    ),
    (
        r"\b(math|algebra|calculus|geometry|equation|formula|theorem)\b",
        "🧮 Mathematics",
    ),
    (
        r"\b(science|physics|chemistry|biology|experiment|research)\b",
        "🔬 Science",
    ),
    (
        r"\b(study|learn|education|school|university|exam|test|teach|class)\b",
        "📚 Education",
    ),
    (
        r"\b(business|finance|money|invest|stock|market|startup|entrepreneur)\b",
        "💼 Business",
    ),
    (
        r"\b(health|medicine|doctor|hospital|diet|fitness|nutrition|exercise)\b",
        "🏥 Health",
    ),
    (
        r"\b(art|music|paint|draw|design|creative|photography|film)\b",
        "🎨 Arts",
    ),
    (
        r"\b(sport|game|football|basketball|tennis|soccer|olympics)\b",
        "⚽ Sports",
    ),
    (
        r"\b(history|historical|past|war|empire|civilization)\b",
        "🏛️ History",
    ),
    (
        r"\b(tech|technology|computer|software|hardware|ai|machine learning)\b",
        "🤖 Technology",
    ),
];

/// Compiled keyword table, built on first use
fn topic_table() -> &'static Vec<(Regex, &'static str)> {
    static TABLE: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    TABLE.get_or_init(|| {
        TOPIC_TABLE
            .iter()
            .map(|(pattern, label)| {
                let regex = RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .expect("Invalid regex pattern");
                (regex, *label)
            })
            .collect()
    })
}

/// Derive a topic label from the first user message of a session
///
/// Scans the keyword table in priority order and returns the label of the
/// first pattern that matches on whole-word boundaries, case-insensitively.
/// Returns [`DEFAULT_TOPIC`] when nothing matches.
///
/// # Arguments
///
/// * `message` - The first user message of the session
///
/// # Examples
///
/// ```
/// use safechat::topic::{extract_topic, DEFAULT_TOPIC};
///
/// assert_eq!(extract_topic("I want to learn python programming"), "💻 Programming");
/// assert_eq!(extract_topic("hello there"), DEFAULT_TOPIC);
/// ```
pub fn extract_topic(message: &str) -> &'static str {
    topic_table()
        .iter()
        .find(|(pattern, _)| pattern.is_match(message))
        .map(|(_, label)| *label)
        .unwrap_or(DEFAULT_TOPIC)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_table_compiles() {
        assert_eq!(topic_table().len(), TOPIC_TABLE.len());
    }

    #[test]
    fn test_programming_outranks_education() {
        // "learn" is an Education keyword, but Programming is checked first
        assert_eq!(extract_topic("I want to learn python programming"), "💻 Programming");
    }

    #[test]
    fn test_programming_outranks_technology() {
        assert_eq!(extract_topic("write code for my computer"), "💻 Programming");
    }

    #[test]
    fn test_education_without_specific_keywords() {
        assert_eq!(extract_topic("how should I study for my exam"), "📚 Education");
    }

    #[test]
    fn test_mathematics() {
        assert_eq!(extract_topic("explain calculus to me"), "🧮 Mathematics");
    }

    #[test]
    fn test_science() {
        assert_eq!(extract_topic("a chemistry question"), "🔬 Science");
    }

    #[test]
    fn test_business() {
        assert_eq!(extract_topic("should I invest in this startup"), "💼 Business");
    }

    #[test]
    fn test_health() {
        assert_eq!(extract_topic("recommend a fitness routine"), "🏥 Health");
    }

    #[test]
    fn test_arts() {
        assert_eq!(extract_topic("how to paint a portrait"), "🎨 Arts");
    }

    #[test]
    fn test_sports() {
        assert_eq!(extract_topic("who won the football match"), "⚽ Sports");
    }

    #[test]
    fn test_history() {
        assert_eq!(extract_topic("tell me about the Roman empire"), "🏛️ History");
    }

    #[test]
    fn test_technology() {
        assert_eq!(extract_topic("what is new in hardware"), "🤖 Technology");
    }

    #[test]
    fn test_default_for_unmatched() {
        assert_eq!(extract_topic("hello there"), DEFAULT_TOPIC);
        assert_eq!(extract_topic(""), DEFAULT_TOPIC);
    }

    #[test]
    fn test_whole_word_boundaries() {
        // "artisan" should not match the "art" keyword
        assert_eq!(extract_topic("my favorite artisan bakery"), DEFAULT_TOPIC);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(extract_topic("PYTHON tips please"), "💻 Programming");
    }

    #[test]
    fn test_idempotent() {
        let message = "explain calculus to me";
        assert_eq!(extract_topic(message), extract_topic(message));
    }
}
