//! Scheduler layer for the bot
//!
//! This layer runs the poll loop: fetch the latest statuses, validate
//! them, translate the head record and notify the chat, then sleep.
//! Per-cycle failures are contained here and never end the process.

pub mod error;
pub mod poller;

pub use error::{CycleError, ErrorKind};
pub use poller::StatusPoller;
