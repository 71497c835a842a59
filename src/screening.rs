//! Input screening for Safechat
//!
//! This module checks user input against a fixed denylist of shell-danger
//! signatures before anything is sent to the completion endpoint. Matching
//! is case-insensitive and pure; the denylist is compiled once per process.

use regex::{Regex, RegexBuilder};
use std::sync::OnceLock;

/// Denylist of shell-danger signatures, in evaluation order
///
/// The boolean result does not depend on ordering (any match wins), only
/// the evaluation cost does: cheap, common signatures come first.
const DANGER_PATTERNS: &[&str] = &[
    // Destructive file operations
    r"\b(rm\s+-|del\s+|erase\s+|format\s+)",
    // Moving files into system paths
    r"\b(mv\s+.*\s+/|move\s+.*\s+/)",
    // Permission changes
    r"\b(chmod\s+[0-7]{3,4}\s+)",
    // Downloading executables
    r"\b(wget\s+|curl\s+)\S*(\.sh|\.exe|\.bat)",
    // Executing scripts
    r"\b(\./|sh\s+|bash\s+|python\s+)\S*\.(sh|py)",
    // Remote connections
    r"\b(ssh\s+|scp\s+)",
    // Privilege escalation
    r"\b(sudo\s+|su\s+)",
    // Writing to system files
    r"\b(echo\s+[^>]*>\s*/)",
    // Disk-level operations
    r"\b(dd\s+if=)",
    // Process termination
    r"\b(kill\s+-9|taskkill\s+)",
    // Backtick command substitution
    r"`.*`",
    // $() and ${} command substitution
    r"\$(\(|\{).*(\)|\})",
    // Process substitution
    r"<\s*\(.*\)",
];

/// Compiled denylist, built on first use and reused for the process lifetime
fn denylist() -> &'static Vec<Regex> {
    static DENYLIST: OnceLock<Vec<Regex>> = OnceLock::new();
    DENYLIST.get_or_init(|| {
        DANGER_PATTERNS
            .iter()
            .map(|p| {
                RegexBuilder::new(p)
                    .case_insensitive(true)
                    .build()
                    .expect("Invalid regex pattern")
            })
            .collect()
    })
}

/// Check whether input text contains a potentially dangerous command
///
/// Returns true if the text matches any signature in the denylist,
/// case-insensitively; false otherwise. Empty input is never dangerous.
/// The first matching signature short-circuits evaluation.
///
/// # Arguments
///
/// * `input` - Raw user input text
///
/// # Examples
///
/// ```
/// use safechat::screening::is_potentially_dangerous;
///
/// assert!(is_potentially_dangerous("sudo rm -rf /"));
/// assert!(!is_potentially_dangerous("How do I learn calculus?"));
/// ```
pub fn is_potentially_dangerous(input: &str) -> bool {
    if input.is_empty() {
        return false;
    }
    denylist().iter().any(|pattern| pattern.is_match(input))
}
