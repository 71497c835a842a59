/*!
Command handlers for the CLI

This module provides command handlers invoked by the CLI entrypoint.

It exposes two top-level command modules:

- `chat` — Interactive chat session
- `ask`  — Send a single prompt and print the reply

These handlers are intentionally small and use the library components:
the session state machine, the input screening, and the completion backend.
*/

use crate::config::{ChatConfig, Config};
use crate::error::Result;
use crate::providers::{CompletionBackend, OpenRouterProvider};
use crate::session::{ChatEntry, Effect, Role, SessionEvent, SessionState};

// Special commands parser for session control
pub mod special_commands;

/// Render one transcript entry to the terminal
///
/// User entries are not re-echoed (the user just typed them); warning
/// notices and assistant replies are shown with colored role tags and an
/// optional timestamp.
fn render_entry(entry: &ChatEntry, chat: &ChatConfig) {
    use colored::Colorize;

    let tag = match entry.role {
        Role::User => return,
        Role::Assistant => "assistant".green().bold(),
        Role::System => "notice".yellow().bold(),
    };

    let content = if entry.warning {
        entry.content.yellow().to_string()
    } else {
        entry.content.clone()
    };

    if chat.show_timestamps {
        println!("{} {}  {}", format!("[{}]", entry.time).dimmed(), tag, content);
    } else {
        println!("{}  {}", tag, content);
    }
    println!();
}

/// Render every entry appended since `from`
fn render_new_entries(session: &SessionState, from: usize, chat: &ChatConfig) {
    for entry in &session.transcript().entries()[from..] {
        render_entry(entry, chat);
    }
}

/// Run one full user turn against the session and backend
///
/// Feeds the input to the state machine, executes a returned completion
/// effect, and feeds the outcome back in. The await on the backend is the
/// back-pressure point: no further input is read until the session is back
/// to `Idle`.
async fn run_turn<B: CompletionBackend>(
    session: &mut SessionState,
    backend: &B,
    input: &str,
    chat: &ChatConfig,
) {
    use colored::Colorize;

    let before = session.transcript().len();
    let effect = session.transition(SessionEvent::UserInput(input.to_string()));
    render_new_entries(session, before, chat);

    if let Some(Effect::RequestCompletion(text)) = effect {
        println!("{}", "Thinking...".dimmed());

        // Any backend failure collapses to "no reply"; the session machine
        // turns that into the fixed failure notice.
        let outcome = match backend.complete(&text).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!("Completion call failed: {}", e);
                None
            }
        };

        let before = session.transcript().len();
        session.transition(SessionEvent::CompletionFinished(outcome));
        render_new_entries(session, before, chat);
    }
}

// Chat command handler
pub mod chat {
    //! Interactive chat session handler.
    //!
    //! Instantiates the OpenRouter backend and runs a readline-based loop
    //! that drives the session state machine. Each line is screened and
    //! answered before the next prompt is offered, so input is never read
    //! while a reply is pending.

    use super::*;
    use crate::commands::special_commands::{parse_special_command, print_help, SpecialCommand};
    use rustyline::error::ReadlineError;
    use rustyline::DefaultEditor;

    /// Start an interactive chat session
    ///
    /// # Arguments
    ///
    /// * `config` - Global configuration (consumed)
    /// * `model` - Optional override for the configured model
    ///
    /// # Examples
    ///
    /// ```
    /// use safechat::commands::chat;
    /// use safechat::config::Config;
    ///
    /// // In application code:
    /// // chat::run_chat(Config::default(), None).await?;
    /// ```
    pub async fn run_chat(config: Config, model: Option<String>) -> Result<()> {
        tracing::info!("Starting interactive chat session");

        let mut provider_config = config.provider.openrouter.clone();
        if let Some(m) = model {
            tracing::debug!("Using model override: {}", m);
            provider_config.model = m;
        }

        let provider = OpenRouterProvider::new(provider_config)?;
        run_session_loop(&provider, &config.chat).await
    }

    /// Readline loop driving one session against a backend
    async fn run_session_loop<B: CompletionBackend>(backend: &B, chat: &ChatConfig) -> Result<()> {
        use colored::Colorize;

        let mut session = SessionState::new();
        let mut rl = DefaultEditor::new()?;

        print_welcome_banner(session.topic());
        let mut shown_topic = session.topic().to_string();

        loop {
            match rl.readline("you> ") {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }

                    rl.add_history_entry(trimmed)?;

                    // Check for special commands first
                    match parse_special_command(trimmed) {
                        Ok(SpecialCommand::Clear) => {
                            session.transition(SessionEvent::Reset);
                            shown_topic = session.topic().to_string();
                            println!("{}\n", "Chat cleared".cyan());
                            continue;
                        }
                        Ok(SpecialCommand::ShowTopic) => {
                            println!("Topic: {}\n", session.topic());
                            continue;
                        }
                        Ok(SpecialCommand::ShowStatus) => {
                            print_status(&session);
                            continue;
                        }
                        Ok(SpecialCommand::Help) => {
                            print_help();
                            continue;
                        }
                        Ok(SpecialCommand::Exit) => break,
                        Ok(SpecialCommand::None) => {
                            // Regular chat message
                        }
                        Err(e) => {
                            eprintln!("{}\n", e.to_string().red());
                            continue;
                        }
                    }

                    run_turn(&mut session, backend, trimmed, chat).await;

                    // The first accepted message sets the session topic
                    if session.topic() != shown_topic {
                        shown_topic = session.topic().to_string();
                        println!("{}\n", format!("Topic: {}", shown_topic).cyan().bold());
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {:?}", err);
                    break;
                }
            }
        }

        println!("Goodbye!");
        Ok(())
    }

    /// Display welcome banner at the start of an interactive session
    fn print_welcome_banner(topic: &str) {
        println!("\n╔══════════════════════════════════════════════════════════════╗");
        println!("║                  Safechat - Terminal Chat                    ║");
        println!("╚══════════════════════════════════════════════════════════════╝\n");
        println!("Topic: {}", topic);
        println!("Type '/help' for available commands, 'exit' to quit\n");
    }

    /// Display session status: phase, transcript length, and topic
    fn print_status(session: &SessionState) {
        println!("\nPhase:   {:?}", session.phase());
        println!("Entries: {}", session.transcript().len());
        println!("Topic:   {}\n", session.topic());
    }
}

// Ask command handler
pub mod ask {
    //! One-shot prompt handler.
    //!
    //! Sends a single prompt through the same screening and session
    //! pipeline as interactive chat, prints the reply, and exits.

    use super::*;

    /// Send one prompt and print the reply
    ///
    /// # Arguments
    ///
    /// * `config` - Global configuration (consumed)
    /// * `prompt` - Prompt text to send
    /// * `model` - Optional override for the configured model
    pub async fn run_ask(config: Config, prompt: String, model: Option<String>) -> Result<()> {
        tracing::info!("Running one-shot prompt");

        let mut provider_config = config.provider.openrouter.clone();
        if let Some(m) = model {
            provider_config.model = m;
        }

        let provider = OpenRouterProvider::new(provider_config)?;
        let mut session = SessionState::new();

        run_turn(&mut session, &provider, &prompt, &config.chat).await;
        Ok(())
    }
}
