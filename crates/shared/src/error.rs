use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportKind {
    Timeout,
    Connection,
    Other,
}

/// Failure of a single dispatch, classified at the request boundary.
///
/// The `Display` form is the user-facing text written into the display target.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("Error HTTP {code}: {text}")]
    HttpStatus { code: u16, text: String },
    #[error("{}", transport_text(*kind))]
    Transport { kind: TransportKind, detail: String },
    #[error("Error al parsear respuesta JSON")]
    Parse { detail: String },
    #[error("URL de petición inválida: {0}")]
    InvalidUrl(String),
}

fn transport_text(kind: TransportKind) -> &'static str {
    match kind {
        TransportKind::Timeout => "Timeout de la petición",
        TransportKind::Connection | TransportKind::Other => "Error de conexión",
    }
}

impl DispatchError {
    pub fn http_status(code: u16, text: impl Into<String>) -> Self {
        Self::HttpStatus {
            code,
            text: text.into(),
        }
    }

    pub fn transport(kind: TransportKind, detail: impl Into<String>) -> Self {
        Self::Transport {
            kind,
            detail: detail.into(),
        }
    }

    pub fn parse(detail: impl Into<String>) -> Self {
        Self::Parse {
            detail: detail.into(),
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            DispatchError::HttpStatus { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, DispatchError::Transport { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, DispatchError::Parse { .. })
    }
}

#[cfg(test)]
#[path = "tests/error_tests.rs"]
mod tests;
