//! Console commands typed by the user, mapped onto page actions.

use client_core::PageAction;
use shared::domain::{HttpMethod, Severity};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Writes the name input for `method`, then fires the greeting action.
    Greet { method: HttpMethod, name: String },
    Fetch(PageAction),
    Show,
    Notify { message: String, severity: Severity },
    Help,
    Quit,
}

impl ConsoleCommand {
    pub fn action(&self) -> Option<PageAction> {
        match self {
            ConsoleCommand::Greet {
                method: HttpMethod::Get,
                ..
            } => Some(PageAction::LoadGetMsg),
            ConsoleCommand::Greet {
                method: HttpMethod::Post,
                ..
            } => Some(PageAction::LoadPostMsg),
            ConsoleCommand::Fetch(action) => Some(*action),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Comando desconocido: {0}")]
    Unknown(String),
    #[error("`notify` necesita un mensaje")]
    MissingMessage,
}

pub const HELP: &str = "\
Comandos:
  get [nombre]            saludo via GET
  post [nombre]           saludo via POST
  weather                 información del clima
  quote                   cita inspiradora
  show                    muestra todas las regiones
  notify [error] mensaje  notificación temporal
  help | quit";

/// Blank lines parse to `None`.
pub fn parse_command(line: &str) -> Result<Option<ConsoleCommand>, CommandError> {
    let line = line.trim_start();
    if line.trim().is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (line.trim_end(), ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "get" => ConsoleCommand::Greet {
            method: HttpMethod::Get,
            name: rest.to_string(),
        },
        "post" => ConsoleCommand::Greet {
            method: HttpMethod::Post,
            name: rest.to_string(),
        },
        "weather" => ConsoleCommand::Fetch(PageAction::GetWeather),
        "quote" => ConsoleCommand::Fetch(PageAction::GetQuote),
        "show" => ConsoleCommand::Show,
        "notify" => parse_notify(rest)?,
        "help" | "?" => ConsoleCommand::Help,
        "quit" | "exit" => ConsoleCommand::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn parse_notify(rest: &str) -> Result<ConsoleCommand, CommandError> {
    let rest = rest.trim();
    let (severity, message) = match rest.split_once(char::is_whitespace) {
        Some(("error", message)) => (Severity::Error, message.trim()),
        Some(("info", message)) => (Severity::Info, message.trim()),
        _ => (Severity::Info, rest),
    };
    if message.is_empty() {
        return Err(CommandError::MissingMessage);
    }
    Ok(ConsoleCommand::Notify {
        message: message.to_string(),
        severity,
    })
}

#[cfg(test)]
#[path = "tests/commands_tests.rs"]
mod tests;
