//! Homework Bot Core
//!
//! Core types and pure logic for the homework status bot.
//!
//! This crate contains:
//! - Domain types: homework records, API responses, review statuses, the poll cursor
//! - Response validation: checks the shape of a raw API answer
//! - Verdicts: translation of a homework record into a notification message
//!
//! Note: HTTP transport lives in `hwbot-client`, the poll loop in `hwbot-runner`.

pub mod domain;
pub mod response;
pub mod verdict;

pub use domain::cursor::PollCursor;
pub use domain::homework::{ApiResponse, HomeworkRecord, HomeworkStatus};
pub use response::{ResponseError, check_response};
pub use verdict::{StatusError, parse_status};
