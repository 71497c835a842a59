//! Special commands parser for interactive chat mode
//!
//! This module parses special commands that can be entered during an
//! interactive chat session. Special commands allow users to:
//! - Clear the session and start fresh
//! - View the current topic label
//! - View session status
//! - Display help information
//! - Exit the session
//!
//! Commands are prefixed with `/` and are case-insensitive.

use thiserror::Error;

/// Errors that can occur when parsing special commands
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Unknown command was entered
    #[error("Unknown command: {0}\n\nType '/help' to see available commands")]
    UnknownCommand(String),
}

/// Special commands that can be executed during interactive chat
///
/// These commands act on the session itself rather than being sent to the
/// model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecialCommand {
    /// Clear the transcript and reset the topic label
    Clear,

    /// Display the current topic label
    ShowTopic,

    /// Display session status (phase, entry count, topic)
    ShowStatus,

    /// Display help information
    Help,

    /// Exit the interactive session
    Exit,

    /// Not a special command
    ///
    /// The input should be processed as a regular chat message.
    None,
}

/// Parse a user input string into a special command
///
/// Commands are case-insensitive. Input that does not start with `/` (and
/// is not a bare `exit`/`quit`) is a regular chat message.
///
/// # Arguments
///
/// * `input` - The user input string to parse
///
/// # Errors
///
/// Returns [`CommandError::UnknownCommand`] if the input starts with `/`
/// but is not a recognized command.
///
/// # Examples
///
/// ```
/// use safechat::commands::special_commands::{parse_special_command, SpecialCommand};
///
/// assert_eq!(parse_special_command("/clear"), Ok(SpecialCommand::Clear));
/// assert_eq!(parse_special_command("hello"), Ok(SpecialCommand::None));
/// assert!(parse_special_command("/bogus").is_err());
/// ```
pub fn parse_special_command(input: &str) -> Result<SpecialCommand, CommandError> {
    let lower = input.trim().to_lowercase();
    match lower.as_str() {
        "/clear" | "/reset" => Ok(SpecialCommand::Clear),
        "/topic" => Ok(SpecialCommand::ShowTopic),
        "/status" => Ok(SpecialCommand::ShowStatus),
        "/help" | "/?" => Ok(SpecialCommand::Help),
        "exit" | "quit" | "/exit" | "/quit" => Ok(SpecialCommand::Exit),
        _ if lower.starts_with('/') => Err(CommandError::UnknownCommand(input.trim().to_string())),
        _ => Ok(SpecialCommand::None),
    }
}

/// Print help for the available special commands
pub fn print_help() {
    println!("\nAvailable commands:");
    println!("  /clear   Clear the chat and reset the topic");
    println!("  /topic   Show the current topic label");
    println!("  /status  Show session status");
    println!("  /help    Show this help");
    println!("  exit     Leave the session (also: quit)\n");
}
