//! Command parsing for the terminal frontend.
//!
//! This module parses command strings into structured [`Command`] values.

use ballot_app::AppEvent;

/// Parsed command from user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Toggle a candidate.
    Select {
        /// Candidate name, exactly as typed.
        name: String,
    },

    /// Cast a vote for the current selection.
    Vote,

    /// Ask the host for fresh snapshots.
    Refresh,

    /// Quit the application.
    Quit,

    /// Empty input.
    Empty,

    /// Unknown or invalid command.
    Unknown {
        /// The original input.
        input: String,
    },

    /// Command with missing or invalid arguments.
    InvalidArgs {
        /// Command name.
        command: String,
        /// Error message.
        error: String,
    },
}

impl Command {
    /// The event this command feeds to the runtime, if any.
    pub fn into_event(self) -> Option<AppEvent> {
        match self {
            Self::Select { name } => Some(AppEvent::Toggle { name }),
            Self::Vote => Some(AppEvent::Submit),
            Self::Refresh => Some(AppEvent::Refresh),
            Self::Quit => Some(AppEvent::Quit),
            Self::Empty | Self::Unknown { .. } | Self::InvalidArgs { .. } => None,
        }
    }
}

/// Parse a user input string into a command.
///
/// Commands start with `/`. Anything else is taken as a candidate name to
/// toggle.
pub fn parse(input: &str) -> Command {
    let input = input.trim();

    if input.is_empty() {
        return Command::Empty;
    }

    let Some(cmd_str) = input.strip_prefix('/') else {
        return Command::Select { name: input.to_string() };
    };

    let (command, rest) = match cmd_str.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (cmd_str, ""),
    };

    match command {
        "select" | "s" => {
            if rest.is_empty() {
                Command::InvalidArgs {
                    command: "select".into(),
                    error: "Usage: /select <candidate>".into(),
                }
            } else {
                Command::Select { name: rest.to_string() }
            }
        },

        "vote" | "v" => Command::Vote,

        "refresh" | "r" => Command::Refresh,

        "quit" | "q" => Command::Quit,

        _ => Command::Unknown { input: input.to_string() },
    }
}
