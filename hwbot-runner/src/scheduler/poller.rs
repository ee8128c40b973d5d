//! Status poller
//!
//! Polls the homework API on a fixed period and reports status changes.
//! One cycle runs to completion before the next sleep starts, so there is
//! never more than one request in flight.

use hwbot_client::ClientError;
use hwbot_core::{PollCursor, check_response, parse_status};
use std::sync::Arc;
use std::time::Duration;
use tokio::time;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::repository::HomeworkRepository;
use crate::scheduler::error::{CycleError, ErrorKind};
use crate::service::Notifier;

/// Poll loop state
///
/// Owns the cursor and the last delivered message; nothing else reads or
/// writes them.
pub struct StatusPoller {
    retry_period: Duration,
    homeworks: Arc<dyn HomeworkRepository>,
    notifier: Arc<dyn Notifier>,
    cursor: PollCursor,
    last_message: Option<String>,
}

impl StatusPoller {
    /// Creates a new status poller starting at `cursor`
    pub fn new(
        config: &Config,
        homeworks: Arc<dyn HomeworkRepository>,
        notifier: Arc<dyn Notifier>,
        cursor: PollCursor,
    ) -> Self {
        Self {
            retry_period: config.retry_period,
            homeworks,
            notifier,
            cursor,
            last_message: None,
        }
    }

    #[cfg(test)]
    pub fn cursor(&self) -> PollCursor {
        self.cursor
    }

    #[cfg(test)]
    pub fn last_message(&self) -> Option<&str> {
        self.last_message.as_deref()
    }

    /// Starts the polling loop
    ///
    /// Runs until the process is terminated.
    pub async fn run(&mut self) {
        info!(
            "Starting status poller (interval: {:?}, from_date: {})",
            self.retry_period, self.cursor
        );

        loop {
            self.cycle().await;
            time::sleep(self.retry_period).await;
        }
    }

    /// Runs one poll cycle and reports its failure, if any
    pub async fn cycle(&mut self) {
        debug!("Polling homework statuses (from_date: {})", self.cursor);

        if let Err(e) = self.poll_once().await {
            self.report(e).await;
        }
    }

    /// Performs a single poll cycle
    ///
    /// The cursor only moves when every step succeeded.
    async fn poll_once(&mut self) -> Result<(), CycleError> {
        let answer = self.homeworks.fetch(self.cursor.from_date()).await?;
        let response = check_response(&answer)?;

        match response.latest()? {
            Some(homework) => {
                let message = parse_status(&homework)?;
                self.send_if_changed(message).await;
            }
            None => debug!("No new homework statuses"),
        }

        match response.current_date {
            Some(current_date) => {
                if !self.cursor.advance(current_date) {
                    warn!(
                        "Server reported current_date {} behind cursor {}, keeping cursor",
                        current_date, self.cursor
                    );
                }
            }
            None => warn!("Response has no current_date, keeping cursor {}", self.cursor),
        }

        Ok(())
    }

    async fn report(&mut self, e: CycleError) {
        let client = e.client();
        match e.kind() {
            ErrorKind::Transport if client.is_some_and(ClientError::is_timeout) => {
                warn!("Homework API timed out, will retry: {}", e)
            }
            ErrorKind::Transport => warn!("Homework API unreachable, will retry: {}", e),
            ErrorKind::Protocol if client.is_some_and(ClientError::is_server_error) => {
                warn!("Homework API server error, will retry: {}", e)
            }
            ErrorKind::Protocol if client.is_some_and(ClientError::is_client_error) => {
                error!("Homework API rejected the request, check token and endpoint: {}", e)
            }
            _ => error!("Poll cycle failed: {}", e),
        }

        self.send_if_changed(e.diagnostic()).await;
    }

    /// Notifies unless `message` repeats the previous one
    async fn send_if_changed(&mut self, message: String) {
        if self.last_message.as_deref() == Some(message.as_str()) {
            debug!("Message unchanged since last notification, not sending");
            return;
        }

        self.notifier.notify(&message).await;
        self.last_message = Some(message);
    }
}
