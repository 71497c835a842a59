//! Command-line interface definition for Safechat
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for interactive chat and one-shot prompts.

use clap::{Parser, Subcommand};

/// Safechat - safety-screened terminal chat client
///
/// Talk to an OpenRouter-hosted model from the terminal. Input is screened
/// against a denylist of shell-command patterns before anything leaves the
/// machine.
#[derive(Parser, Debug, Clone)]
#[command(name = "safechat")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for Safechat
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start an interactive chat session
    Chat {
        /// Override the configured model identifier
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Send a single prompt and print the reply
    Ask {
        /// Prompt text to send
        prompt: String,

        /// Override the configured model identifier
        #[arg(short, long)]
        model: Option<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    ///
    /// # Returns
    ///
    /// Returns the parsed CLI structure
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
