//! Session management for Safechat
//!
//! This module contains the conversation transcript and the state machine
//! that drives a chat session.

pub mod machine;
pub mod transcript;

pub use machine::{
    Effect, Phase, SessionEvent, SessionState, FAILURE_NOTICE, SECURITY_NOTICE,
};
pub use transcript::{ChatEntry, Role, Transcript};
