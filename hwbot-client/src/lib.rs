//! Homework Bot HTTP Clients
//!
//! Typed HTTP clients for the two services the bot talks to:
//! - [`PracticumClient`]: the homework statuses API, polled with a `from_date` cursor
//! - [`TelegramClient`]: the Bot API, used to deliver plain-text notifications
//!
//! # Example
//!
//! ```no_run
//! use hwbot_client::PracticumClient;
//!
//! #[tokio::main]
//! async fn main() -> hwbot_client::Result<()> {
//!     let client = PracticumClient::new(
//!         "https://practicum.yandex.ru/api/user_api/homework_statuses/",
//!         "token",
//!     );
//!
//!     let answer = client.get_homework_statuses(0).await?;
//!     println!("{}", answer);
//!     Ok(())
//! }
//! ```

pub mod error;
mod practicum;
mod telegram;

pub use error::{ClientError, Result};
pub use practicum::PracticumClient;
pub use telegram::TelegramClient;

use serde::de::DeserializeOwned;

// =============================================================================
// Response Handlers
// =============================================================================

/// Handle an API response and deserialize JSON
///
/// Non-success statuses become [`ClientError::ApiError`] carrying the body;
/// a body that is not valid JSON for `T` becomes [`ClientError::ParseError`].
async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();

    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ClientError::api_error(status.as_u16(), error_text));
    }

    let body = response.bytes().await?;
    serde_json::from_slice(&body)
        .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
}

/// Handle an API response whose body is not needed
async fn handle_empty_response(response: reqwest::Response) -> Result<()> {
    let status = response.status();

    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ClientError::api_error(status.as_u16(), error_text));
    }

    Ok(())
}
