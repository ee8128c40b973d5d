//! Core domain types
//!
//! These types describe what the homework API reports and how far back
//! the bot has already looked. They are shared between the validation
//! logic in this crate and the poll loop in the runner.

pub mod cursor;
pub mod homework;
