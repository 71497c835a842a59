//! Completion backend trait for Safechat
//!
//! Defines the seam between the session driver and the remote completion
//! service. Production code uses the OpenRouter implementation; tests
//! substitute scripted fakes.

use crate::error::Result;
use async_trait::async_trait;

/// Backend that turns one user message into one assistant reply
///
/// The call is stateless from the backend's point of view: only the latest
/// user message is transmitted, never the conversation log.
///
/// # Examples
///
/// ```
/// use safechat::providers::CompletionBackend;
/// use safechat::error::Result;
/// use async_trait::async_trait;
///
/// struct CannedBackend;
///
/// #[async_trait]
/// impl CompletionBackend for CannedBackend {
///     async fn complete(&self, _user_message: &str) -> Result<Option<String>> {
///         Ok(Some("canned reply".to_string()))
///     }
/// }
/// ```
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Request a completion for a single user message
    ///
    /// # Arguments
    ///
    /// * `user_message` - The raw user message text
    ///
    /// # Returns
    ///
    /// * `Ok(Some(text))` - the service returned assistant content; an empty
    ///   string is a legal, distinct outcome
    /// * `Ok(None)` - the response parsed but carried no content
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-2xx status, malformed
    /// payload, or missing credential. One attempt per invocation; the
    /// implementation must not retry.
    async fn complete(&self, user_message: &str) -> Result<Option<String>>;
}
