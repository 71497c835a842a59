//! Safechat - safety-screened terminal chat client library
//!
//! This library provides the core functionality for the Safechat client:
//! input screening, topic labeling, response sanitizing, the completion
//! backend, and the session state machine.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `session`: Conversation transcript and session state machine
//! - `screening`: Shell-danger denylist over user input
//! - `topic`: Topic label derivation from the first message
//! - `sanitize`: Thinking-marker stripping for raw completions
//! - `providers`: Completion backend abstraction and OpenRouter client
//! - `config`: Configuration management and validation
//! - `error`: Error types and result aliases
//! - `cli`: Command-line interface definition
//!
//! # Example
//!
//! ```
//! use safechat::session::{Effect, SessionEvent, SessionState};
//!
//! let mut session = SessionState::new();
//! let effect = session.transition(SessionEvent::UserInput("Hello!".to_string()));
//! assert!(matches!(effect, Some(Effect::RequestCompletion(_))));
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod providers;
pub mod sanitize;
pub mod screening;
pub mod session;
pub mod topic;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, SafechatError};
pub use providers::{CompletionBackend, OpenRouterProvider};
pub use sanitize::clean_response;
pub use screening::is_potentially_dangerous;
pub use session::{Effect, Phase, SessionEvent, SessionState};
pub use topic::extract_topic;
