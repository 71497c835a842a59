//! Conversation transcript for Safechat
//!
//! The transcript is the insertion-ordered log of everything shown in a
//! session: user messages, assistant replies, and system security notices.
//! Entries are immutable once appended and are only ever removed wholesale
//! by a session reset.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Role of a transcript entry author
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Text typed by the user
    User,
    /// Reply generated by the model
    Assistant,
    /// Notice produced by the client itself
    System,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
            Self::System => write!(f, "system"),
        }
    }
}

/// One immutable entry in the conversation transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatEntry {
    /// Author of the entry
    pub role: Role,
    /// Entry text
    pub content: String,
    /// Wall-clock creation time, formatted hours:minutes:seconds
    pub time: String,
    /// Marks security-block notices so they render with warning styling
    #[serde(default)]
    pub warning: bool,
}

impl ChatEntry {
    fn stamped(role: Role, content: impl Into<String>, warning: bool) -> Self {
        Self {
            role,
            content: content.into(),
            time: Local::now().format("%H:%M:%S").to_string(),
            warning,
        }
    }

    /// Creates a user entry stamped with the current time
    ///
    /// # Examples
    ///
    /// ```
    /// use safechat::session::{ChatEntry, Role};
    ///
    /// let entry = ChatEntry::user("Hello!");
    /// assert_eq!(entry.role, Role::User);
    /// assert!(!entry.warning);
    /// ```
    pub fn user(content: impl Into<String>) -> Self {
        Self::stamped(Role::User, content, false)
    }

    /// Creates an assistant entry stamped with the current time
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::stamped(Role::Assistant, content, false)
    }

    /// Creates a system entry carrying the warning flag
    ///
    /// Used for security-block notices; rendered with warning styling.
    pub fn warning_notice(content: impl Into<String>) -> Self {
        Self::stamped(Role::System, content, true)
    }
}

/// Insertion-ordered log of chat entries
///
/// Owned exclusively by the session; cleared to empty only on an explicit
/// reset.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    entries: Vec<ChatEntry>,
}

impl Transcript {
    /// Creates an empty transcript
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry to the end of the log
    pub fn push(&mut self, entry: ChatEntry) {
        self.entries.push(entry);
    }

    /// Removes every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of entries in the log
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the log holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recently appended entry, if any
    pub fn last(&self) -> Option<&ChatEntry> {
        self.entries.last()
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }
}
