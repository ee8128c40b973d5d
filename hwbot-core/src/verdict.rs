//! Verdict translation
//!
//! Turns the latest homework record into the message sent to the chat.

use thiserror::Error;

use crate::domain::homework::{HomeworkRecord, HomeworkStatus};

/// The record cannot be turned into a verdict
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatusError {
    #[error("homework has no `homework_name`")]
    MissingName,

    #[error("homework has no `status`")]
    MissingStatus,

    #[error("unknown homework status: {0:?}")]
    UnknownStatus(String),
}

impl std::str::FromStr for HomeworkStatus {
    type Err = StatusError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        HomeworkStatus::from_code(code).ok_or_else(|| StatusError::UnknownStatus(code.to_string()))
    }
}

/// Builds the notification text for a homework record
///
/// The name is checked before the status, so a record missing both
/// reports a missing name.
pub fn parse_status(homework: &HomeworkRecord) -> Result<String, StatusError> {
    let homework_name = homework
        .homework_name
        .as_deref()
        .filter(|name| !name.is_empty())
        .ok_or(StatusError::MissingName)?;

    let status: HomeworkStatus = homework
        .status
        .as_deref()
        .ok_or(StatusError::MissingStatus)?
        .parse()?;

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        homework_name,
        status.verdict()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approved() {
        let message = parse_status(&HomeworkRecord::new("hw1", "approved")).unwrap();
        assert_eq!(
            message,
            "Изменился статус проверки работы \"hw1\". Работа проверена: ревьюеру всё понравилось. Ура!"
        );
    }

    #[test]
    fn test_reviewing() {
        let message = parse_status(&HomeworkRecord::new("hw1", "reviewing")).unwrap();
        assert_eq!(
            message,
            "Изменился статус проверки работы \"hw1\". Работа взята на проверку ревьюером."
        );
    }

    #[test]
    fn test_rejected() {
        let message = parse_status(&HomeworkRecord::new("user__hw_api.zip", "rejected")).unwrap();
        assert_eq!(
            message,
            "Изменился статус проверки работы \"user__hw_api.zip\". Работа проверена: у ревьюера есть замечания."
        );
    }

    #[test]
    fn test_unknown_status() {
        assert_eq!(
            parse_status(&HomeworkRecord::new("hw1", "archived")),
            Err(StatusError::UnknownStatus("archived".to_string()))
        );
    }

    #[test]
    fn test_missing_name_regardless_of_status() {
        for status in ["approved", "reviewing", "rejected", "archived"] {
            let absent = HomeworkRecord {
                homework_name: None,
                status: Some(status.to_string()),
            };
            assert_eq!(parse_status(&absent), Err(StatusError::MissingName));

            let empty = HomeworkRecord::new("", status);
            assert_eq!(parse_status(&empty), Err(StatusError::MissingName));
        }
    }

    #[test]
    fn test_missing_status() {
        let record = HomeworkRecord {
            homework_name: Some("hw1".to_string()),
            status: None,
        };
        assert_eq!(parse_status(&record), Err(StatusError::MissingStatus));
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("rejected".parse::<HomeworkStatus>(), Ok(HomeworkStatus::Rejected));
        assert!("".parse::<HomeworkStatus>().is_err());
    }
}
