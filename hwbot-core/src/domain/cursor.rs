//! Poll cursor
//!
//! The cursor is the `from_date` of the next query window. It starts in the
//! past to pick up recent history and afterwards follows the server clock.

use chrono::{DateTime, Months, Utc};

/// Unix timestamp marking the start of the next query window
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PollCursor(i64);

impl PollCursor {
    pub fn new(from_date: i64) -> Self {
        Self(from_date)
    }

    /// Cursor positioned `months` calendar months before `now`
    pub fn backfill(now: DateTime<Utc>, months: u32) -> Self {
        let start = now
            .checked_sub_months(Months::new(months))
            .map(|date| date.timestamp())
            .unwrap_or(0);
        Self(start)
    }

    pub fn from_date(&self) -> i64 {
        self.0
    }

    /// Moves the cursor to the server-reported time
    ///
    /// Returns `false` and leaves the cursor in place when `current_date`
    /// lies behind it.
    pub fn advance(&mut self, current_date: i64) -> bool {
        if current_date < self.0 {
            return false;
        }
        self.0 = current_date;
        true
    }
}

impl std::fmt::Display for PollCursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
