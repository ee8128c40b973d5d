//! Telegram Bot API
//!
//! Only `sendMessage` is needed: the bot posts plain text to one chat.

use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::handle_empty_response;

/// Default Bot API base URL
pub const TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// HTTP client for the Telegram Bot API
#[derive(Clone)]
pub struct TelegramClient {
    /// Base URL of the Bot API, without trailing slash
    api_url: String,
    /// Bot token, embedded in the request path
    token: String,
    client: Client,
}

impl TelegramClient {
    /// Create a new client against the public Bot API
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_client(TELEGRAM_API_URL, token, Client::new())
    }

    /// Create a new client with a custom base URL and HTTP client
    pub fn with_client(api_url: impl Into<String>, token: impl Into<String>, client: Client) -> Self {
        let api_url = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.into(),
            client,
        }
    }

    /// Send a plain-text message to a chat
    ///
    /// # Arguments
    /// * `chat_id` - Recipient chat identifier
    /// * `text` - Message body
    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.api_url, self.token);

        debug!("Sending message to chat {}", chat_id);

        // The token is part of the URL, keep it out of error messages.
        let response = self
            .client
            .post(&url)
            .json(&SendMessage { chat_id, text })
            .send()
            .await
            .map_err(|e| ClientError::from(e.without_url()))?;

        handle_empty_response(response).await
    }
}

impl std::fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramClient")
            .field("api_url", &self.api_url)
            .field("token", &"***")
            .finish()
    }
}

#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}
