//! Response sanitizing for Safechat
//!
//! Raw completions from reasoning models may carry internal "thinking"
//! blocks bracketed by `◁think▷` … `◁/think▷` markers. Those blocks are
//! stripped before the reply is shown to the user.

use regex::Regex;
use std::sync::OnceLock;

/// Matches one marker pair and everything between, across newlines
///
/// Non-greedy so multiple pairs are stripped independently. An opening
/// marker with no closing marker does not match: the text is left as-is
/// rather than truncated to end-of-string.
fn think_block() -> &'static Regex {
    static THINK_BLOCK: OnceLock<Regex> = OnceLock::new();
    THINK_BLOCK
        .get_or_init(|| Regex::new(r"(?s)◁think▷.*?◁/think▷").expect("Invalid regex pattern"))
}

/// Strip thinking blocks from a raw completion and trim whitespace
///
/// Removes every `◁think▷` … `◁/think▷` pair (including multi-line
/// content), then trims leading and trailing whitespace. With no markers
/// present, only the trim applies.
///
/// # Arguments
///
/// * `raw` - Raw completion text from the model
///
/// # Examples
///
/// ```
/// use safechat::sanitize::clean_response;
///
/// assert_eq!(clean_response("Hello ◁think▷hmm◁/think▷ world"), "Hello  world");
/// assert_eq!(clean_response("  plain text  "), "plain text");
/// ```
pub fn clean_response(raw: &str) -> String {
    think_block().replace_all(raw, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_markers_trims_only() {
        assert_eq!(clean_response("  hello world  "), "hello world");
    }

    #[test]
    fn test_strips_single_block() {
        assert_eq!(
            clean_response("before ◁think▷reasoning◁/think▷ after"),
            "before  after"
        );
    }

    #[test]
    fn test_strips_multiline_block() {
        let raw = "Answer:◁think▷line one\nline two\nline three◁/think▷ 42";
        assert_eq!(clean_response(raw), "Answer: 42");
    }

    #[test]
    fn test_strips_multiple_blocks() {
        let raw = "a◁think▷x◁/think▷b◁think▷y◁/think▷c";
        assert_eq!(clean_response(raw), "abc");
    }

    #[test]
    fn test_block_at_start_is_trimmed_away() {
        assert_eq!(clean_response("◁think▷x◁/think▷  result"), "result");
    }

    #[test]
    fn test_unterminated_marker_left_unmodified() {
        // No closing marker: the text survives apart from trimming
        assert_eq!(
            clean_response("  partial ◁think▷never closed"),
            "partial ◁think▷never closed"
        );
    }

    #[test]
    fn test_orphan_closing_marker_left_unmodified() {
        assert_eq!(clean_response("text ◁/think▷ more"), "text ◁/think▷ more");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(clean_response(""), "");
    }

    #[test]
    fn test_whole_string_is_one_block() {
        assert_eq!(clean_response("◁think▷all reasoning◁/think▷"), "");
    }
}
