//! Poll cycle errors

use hwbot_client::ClientError;
use hwbot_core::{ResponseError, StatusError};
use thiserror::Error;

/// Anything that can end a single poll cycle early
#[derive(Debug, Error)]
pub enum CycleError {
    #[error("homework API request failed: {0}")]
    Client(#[from] ClientError),

    #[error("unexpected homework API response: {0}")]
    Shape(#[from] ResponseError),

    #[error("cannot read homework status: {0}")]
    Status(#[from] StatusError),
}

/// Coarse classification the loop branches on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No HTTP answer: DNS, connection, timeout, bad URL. Expected to heal.
    Transport,
    /// Non-200 status or undecodable body. Usually needs an operator.
    Protocol,
    /// Decoded body with the wrong structure
    Shape,
    /// Homework record the bot cannot describe
    Domain,
}

impl CycleError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Client(e) if e.is_transport() => ErrorKind::Transport,
            Self::Client(ClientError::InvalidUrl(_)) => ErrorKind::Transport,
            Self::Client(_) => ErrorKind::Protocol,
            Self::Shape(_) => ErrorKind::Shape,
            Self::Status(_) => ErrorKind::Domain,
        }
    }

    /// The underlying request error, for failures that came from the API call
    pub fn client(&self) -> Option<&ClientError> {
        match self {
            Self::Client(e) => Some(e),
            _ => None,
        }
    }

    /// Text relayed to the chat when a cycle fails
    pub fn diagnostic(&self) -> String {
        format!("Сбой в работе программы: {}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(
            CycleError::from(ClientError::InvalidUrl("x".into())).kind(),
            ErrorKind::Transport
        );
        assert_eq!(
            CycleError::from(ClientError::api_error(500, "")).kind(),
            ErrorKind::Protocol
        );
        assert_eq!(
            CycleError::from(ClientError::ParseError("eof".into())).kind(),
            ErrorKind::Protocol
        );
        assert_eq!(
            CycleError::from(ResponseError::NotAnObject).kind(),
            ErrorKind::Shape
        );
        assert_eq!(
            CycleError::from(StatusError::MissingName).kind(),
            ErrorKind::Domain
        );
    }

    #[test]
    fn test_client_error_exposed() {
        let error = CycleError::from(ClientError::api_error(401, "not_authenticated"));
        assert!(error.client().is_some_and(ClientError::is_client_error));

        let error = CycleError::from(ClientError::api_error(502, "bad gateway"));
        assert!(error.client().is_some_and(ClientError::is_server_error));

        assert!(CycleError::from(StatusError::MissingName).client().is_none());
    }

    #[test]
    fn test_diagnostic_embeds_error() {
        let error = CycleError::from(StatusError::UnknownStatus("archived".into()));
        assert_eq!(
            error.diagnostic(),
            "Сбой в работе программы: cannot read homework status: unknown homework status: \"archived\""
        );
    }
}
