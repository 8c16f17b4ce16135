//! Command parsing for the TUI command deck
//!
//! Parses user input in Command mode, supporting:
//! - `:q` or `:quit` → Quit
//! - `:h` or `:help` → Help overlay
//! - `:clear` → Clear the token
//! - `:ex` or `:example` → Load the sample token
//! - `:json` / `:table` → Switch the decoded view
//! - `:copy [token|header|payload]` → Copy to clipboard (default token)
//! - `@path` → Load a token from a file
//! - `@@` → Load a token from the clipboard

use crate::app::{AppEvent, CopyTarget};
use crate::config::ViewTab;

/// Commands that can be parsed from command deck input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Help,
    Clear,
    Example,
    Tab(ViewTab),
    Copy(CopyTarget),
    LoadFile(String),
    LoadClipboard,
    Unknown(String),
}

/// Parse command deck input string into a Command
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();

    if input.is_empty() {
        return Command::Unknown(input.to_string());
    }

    if let Some(cmd) = input.strip_prefix(':') {
        let mut words = cmd.split_whitespace();
        let name = words.next().unwrap_or_default();
        let arg = words.next();

        if words.next().is_some() {
            return Command::Unknown(input.to_string());
        }

        match (name, arg) {
            ("q" | "quit", None) => Command::Quit,
            ("h" | "help", None) => Command::Help,
            ("clear", None) => Command::Clear,
            ("ex" | "example", None) => Command::Example,
            ("json", None) => Command::Tab(ViewTab::Json),
            ("table", None) => Command::Tab(ViewTab::Table),
            ("copy" | "c", None | Some("token")) => Command::Copy(CopyTarget::Token),
            ("copy" | "c", Some("header")) => Command::Copy(CopyTarget::Header),
            ("copy" | "c", Some("payload")) => Command::Copy(CopyTarget::Payload),
            _ => Command::Unknown(input.to_string()),
        }
    } else if let Some(rest) = input.strip_prefix('@') {
        let filename = rest.trim();
        if filename.is_empty() || filename == "@" {
            Command::LoadClipboard
        } else {
            Command::LoadFile(filename.to_string())
        }
    } else {
        Command::Unknown(input.to_string())
    }
}

/// Convert a parsed command into an AppEvent
///
/// This is the translation layer between command deck input and App core.
pub fn command_to_app_event(command: Command) -> AppEvent {
    match command {
        Command::Quit => AppEvent::Quit,
        Command::Help => AppEvent::Help,
        Command::Clear => AppEvent::ClearToken,
        Command::Example => AppEvent::LoadExample,
        Command::Tab(tab) => AppEvent::SetTab(tab),
        Command::Copy(target) => AppEvent::Copy(target),
        Command::LoadFile(path) => AppEvent::LoadFile(path),
        Command::LoadClipboard => AppEvent::LoadClipboard,
        Command::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}
