//! Homework domain types

use serde::Deserialize;
use serde_json::Value;

use crate::response::ResponseError;

/// One submission's review state as reported by the API
///
/// Both fields are kept optional: the API does not guarantee them, and a
/// missing value is a translation error rather than a shape error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HomeworkRecord {
    #[serde(default)]
    pub homework_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl HomeworkRecord {
    pub fn new(homework_name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            homework_name: Some(homework_name.into()),
            status: Some(status.into()),
        }
    }

    /// Decodes one element of the `homeworks` list
    pub fn from_value(value: &Value) -> Result<Self, ResponseError> {
        if !value.is_object() {
            return Err(ResponseError::InvalidRecord {
                reason: "not an object".to_string(),
            });
        }

        Self::deserialize(value).map_err(|e| ResponseError::InvalidRecord {
            reason: e.to_string(),
        })
    }
}

/// A validated answer from the homework statuses endpoint
///
/// Records stay undecoded until asked for, so a malformed older record
/// never hides the latest one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiResponse {
    /// Records in server order, most recent first
    pub homeworks: Vec<Value>,
    /// Server time of the answer, used as the next `from_date`
    pub current_date: Option<i64>,
}

impl ApiResponse {
    /// Decodes the most recent record, if the server reported any
    pub fn latest(&self) -> Result<Option<HomeworkRecord>, ResponseError> {
        self.homeworks
            .first()
            .map(HomeworkRecord::from_value)
            .transpose()
    }

    pub fn is_empty(&self) -> bool {
        self.homeworks.is_empty()
    }
}

/// Review status of a homework
///
/// The set is closed: anything else the API sends is an unknown status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub const ALL: [HomeworkStatus; 3] = [Self::Approved, Self::Reviewing, Self::Rejected];

    /// Status code as the API spells it
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }

    /// Human-readable verdict sent to the chat
    pub fn verdict(&self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }

    /// Looks up a status by its API code
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == code)
    }
}

impl std::fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
