//! Session state machine for Safechat
//!
//! The session is modeled as an explicit state struct plus a pure
//! transition function. The transition never performs IO: a completion
//! request is returned as an [`Effect`] for the driver to execute, and the
//! outcome comes back as a subsequent [`SessionEvent`]. This keeps every
//! path testable without a network.

use crate::sanitize::clean_response;
use crate::screening::is_potentially_dangerous;
use crate::session::transcript::{ChatEntry, Transcript};
use crate::topic::{extract_topic, DEFAULT_TOPIC};

/// Fixed notice appended when input is blocked by screening
pub const SECURITY_NOTICE: &str =
    "⚠️ For security reasons, I can't execute or discuss commands that might affect system operations.";

/// Fixed notice appended when the completion call yields nothing usable
pub const FAILURE_NOTICE: &str = "Failed to generate your response";

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Ready for input
    Idle,
    /// A user message awaits an assistant reply; input is refused
    PendingReply,
}

/// Events fed to the session by the driver
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// The user submitted a line of text
    UserInput(String),
    /// The completion call finished; None means it failed or returned no
    /// content
    CompletionFinished(Option<String>),
    /// The user asked for a fresh session
    Reset,
}

/// Work the driver must perform on behalf of the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Call the completion backend with this user message
    RequestCompletion(String),
}

/// Complete state of one chat session
///
/// Lifecycle: initialized once at session start to an empty transcript,
/// `Idle`, and the default topic; mutated by [`SessionState::transition`];
/// restored to initial values by [`SessionEvent::Reset`].
#[derive(Debug, Clone)]
pub struct SessionState {
    transcript: Transcript,
    phase: Phase,
    topic: String,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    /// Creates a fresh session: empty transcript, `Idle`, default topic
    ///
    /// # Examples
    ///
    /// ```
    /// use safechat::session::{Phase, SessionState};
    ///
    /// let session = SessionState::new();
    /// assert_eq!(session.phase(), Phase::Idle);
    /// assert!(session.transcript().is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            transcript: Transcript::new(),
            phase: Phase::Idle,
            topic: DEFAULT_TOPIC.to_string(),
        }
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current topic label
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// The conversation log
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Apply one event and return any effect the driver must execute
    ///
    /// Transitions:
    /// - `Idle` + dangerous input: append a warning notice, stay `Idle`.
    /// - `Idle` + safe input: derive the topic if the transcript is empty,
    ///   append the user entry, move to `PendingReply`, and request a
    ///   completion.
    /// - `PendingReply` + input: refused without mutation (the driver never
    ///   offers input in this phase; the machine defends the invariant for
    ///   any driver).
    /// - `PendingReply` + completion outcome: append the sanitized reply,
    ///   or the fixed failure notice when there is none, and return to
    ///   `Idle`.
    /// - `Reset` from any phase: back to the initial state.
    ///
    /// # Arguments
    ///
    /// * `event` - The event to apply
    ///
    /// # Returns
    ///
    /// Returns `Some(Effect)` when the driver has work to do, `None`
    /// otherwise.
    pub fn transition(&mut self, event: SessionEvent) -> Option<Effect> {
        match (self.phase, event) {
            (Phase::Idle, SessionEvent::UserInput(text)) => {
                if is_potentially_dangerous(&text) {
                    tracing::warn!("Blocked potentially dangerous input");
                    self.transcript.push(ChatEntry::warning_notice(SECURITY_NOTICE));
                    return None;
                }

                // Topic is derived from the first entry of a session only
                if self.transcript.is_empty() {
                    self.topic = extract_topic(&text).to_string();
                    tracing::debug!("Session topic set to {}", self.topic);
                }

                self.transcript.push(ChatEntry::user(text.clone()));
                self.phase = Phase::PendingReply;
                Some(Effect::RequestCompletion(text))
            }
            (Phase::PendingReply, SessionEvent::UserInput(_)) => {
                tracing::warn!("Ignoring input while a reply is pending");
                None
            }
            (Phase::PendingReply, SessionEvent::CompletionFinished(outcome)) => {
                let content = match outcome {
                    Some(raw) => clean_response(&raw),
                    None => FAILURE_NOTICE.to_string(),
                };
                self.transcript.push(ChatEntry::assistant(content));
                self.phase = Phase::Idle;
                None
            }
            (Phase::Idle, SessionEvent::CompletionFinished(_)) => {
                // Stale outcome after a reset; nothing is waiting for it
                tracing::debug!("Dropping completion outcome with no pending reply");
                None
            }
            (_, SessionEvent::Reset) => {
                self.transcript.clear();
                self.topic = DEFAULT_TOPIC.to_string();
                self.phase = Phase::Idle;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::transcript::Role;

    fn submit(session: &mut SessionState, text: &str) -> Option<Effect> {
        session.transition(SessionEvent::UserInput(text.to_string()))
    }

    #[test]
    fn test_initial_state() {
        let session = SessionState::new();
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.topic(), DEFAULT_TOPIC);
        assert!(session.transcript().is_empty());
    }

    #[test]
    fn test_safe_input_requests_completion() {
        let mut session = SessionState::new();
        let effect = submit(&mut session, "How do I learn calculus?");

        assert_eq!(
            effect,
            Some(Effect::RequestCompletion("How do I learn calculus?".to_string()))
        );
        assert_eq!(session.phase(), Phase::PendingReply);
        assert_eq!(session.transcript().len(), 1);
        let entry = session.transcript().last().unwrap();
        assert_eq!(entry.role, Role::User);
        assert!(!entry.warning);
    }

    #[test]
    fn test_topic_set_once_from_first_message() {
        let mut session = SessionState::new();
        submit(&mut session, "I want to learn python programming");
        assert_eq!(session.topic(), "💻 Programming");

        session.transition(SessionEvent::CompletionFinished(Some("ok".to_string())));

        // A later message about history must not change the topic
        submit(&mut session, "tell me about the Roman empire");
        assert_eq!(session.topic(), "💻 Programming");
    }

    #[test]
    fn test_dangerous_input_blocked_without_effect() {
        let mut session = SessionState::new();
        let effect = submit(&mut session, "sudo rm -rf /");

        assert!(effect.is_none());
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.transcript().len(), 1);
        let entry = session.transcript().last().unwrap();
        assert_eq!(entry.role, Role::System);
        assert!(entry.warning);
        assert_eq!(entry.content, SECURITY_NOTICE);
    }

    #[test]
    fn test_successful_completion_appends_sanitized_reply() {
        let mut session = SessionState::new();
        submit(&mut session, "hello");

        let effect =
            session.transition(SessionEvent::CompletionFinished(Some(
                "◁think▷internal◁/think▷  The answer  ".to_string(),
            )));

        assert!(effect.is_none());
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.transcript().len(), 2);
        let entry = session.transcript().last().unwrap();
        assert_eq!(entry.role, Role::Assistant);
        assert_eq!(entry.content, "The answer");
    }

    #[test]
    fn test_failed_completion_appends_failure_notice() {
        let mut session = SessionState::new();
        submit(&mut session, "hello");

        session.transition(SessionEvent::CompletionFinished(None));

        assert_eq!(session.phase(), Phase::Idle);
        let entry = session.transcript().last().unwrap();
        assert_eq!(entry.role, Role::Assistant);
        assert_eq!(entry.content, FAILURE_NOTICE);
    }

    #[test]
    fn test_empty_completion_is_not_a_failure() {
        let mut session = SessionState::new();
        submit(&mut session, "hello");

        session.transition(SessionEvent::CompletionFinished(Some(String::new())));

        let entry = session.transcript().last().unwrap();
        assert_eq!(entry.content, "");
        assert_ne!(entry.content, FAILURE_NOTICE);
    }

    #[test]
    fn test_input_refused_while_pending() {
        let mut session = SessionState::new();
        submit(&mut session, "first");

        let effect = submit(&mut session, "second");
        assert!(effect.is_none());
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.phase(), Phase::PendingReply);
    }

    #[test]
    fn test_stale_completion_dropped_when_idle() {
        let mut session = SessionState::new();
        let effect =
            session.transition(SessionEvent::CompletionFinished(Some("late".to_string())));

        assert!(effect.is_none());
        assert!(session.transcript().is_empty());
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[test]
    fn test_reset_from_pending_reply() {
        let mut session = SessionState::new();
        submit(&mut session, "I want to learn python programming");

        session.transition(SessionEvent::Reset);

        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.transcript().is_empty());
        assert_eq!(session.topic(), DEFAULT_TOPIC);
    }

    #[test]
    fn test_reset_then_new_topic() {
        let mut session = SessionState::new();
        submit(&mut session, "explain calculus");
        session.transition(SessionEvent::CompletionFinished(Some("ok".to_string())));
        assert_eq!(session.topic(), "🧮 Mathematics");

        session.transition(SessionEvent::Reset);
        submit(&mut session, "who won the football match");
        assert_eq!(session.topic(), "⚽ Sports");
    }

    #[test]
    fn test_pending_iff_last_entry_is_unanswered_user() {
        let mut session = SessionState::new();

        submit(&mut session, "hello");
        assert_eq!(session.phase(), Phase::PendingReply);
        assert_eq!(session.transcript().last().unwrap().role, Role::User);

        session.transition(SessionEvent::CompletionFinished(Some("hi".to_string())));
        assert_eq!(session.phase(), Phase::Idle);
        assert_ne!(session.transcript().last().unwrap().role, Role::User);
    }
}
