//! Response validation
//!
//! Checks that a decoded API answer has the documented shape:
//!
//! ```json
//! {"homeworks": [{"homework_name": "...", "status": "..."}], "current_date": 0}
//! ```
//!
//! Only the envelope is checked here. Individual records are decoded on
//! demand by [`ApiResponse::latest`]. An empty `homeworks` list is a valid
//! answer meaning "nothing new".

use serde_json::Value;
use thiserror::Error;

use crate::domain::homework::ApiResponse;

/// The answer does not match the expected structure
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResponseError {
    #[error("API response is not an object")]
    NotAnObject,

    #[error("API response has no `homeworks` key")]
    MissingHomeworks,

    #[error("`homeworks` in API response is not a list")]
    HomeworksNotAList,

    #[error("latest homework in API response is malformed: {reason}")]
    InvalidRecord { reason: String },

    #[error("`current_date` in API response is not an integer")]
    InvalidCurrentDate,
}

/// Validates a raw API answer and extracts its records
///
/// Records keep server order; callers interested in the latest update
/// use the head of the list.
pub fn check_response(value: &Value) -> Result<ApiResponse, ResponseError> {
    let object = value.as_object().ok_or(ResponseError::NotAnObject)?;

    let homeworks = object
        .get("homeworks")
        .ok_or(ResponseError::MissingHomeworks)?
        .as_array()
        .ok_or(ResponseError::HomeworksNotAList)?
        .clone();

    let current_date = match object.get("current_date") {
        None | Some(Value::Null) => None,
        Some(date) => Some(date.as_i64().ok_or(ResponseError::InvalidCurrentDate)?),
    };

    Ok(ApiResponse {
        homeworks,
        current_date,
    })
}
