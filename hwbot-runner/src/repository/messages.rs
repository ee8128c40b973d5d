//! Messages repository
//!
//! Delivers text to the single chat the bot reports to.

use async_trait::async_trait;
use hwbot_client::{Result, TelegramClient};

/// Repository trait for outgoing messages
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Sends `text` to the configured recipient
    async fn send(&self, text: &str) -> Result<()>;
}

/// Telegram implementation of MessageRepository
pub struct TelegramMessageRepository {
    client: TelegramClient,
    chat_id: String,
}

impl TelegramMessageRepository {
    /// Creates a new Telegram message repository
    ///
    /// # Arguments
    /// * `client` - Bot API client carrying the bot token
    /// * `chat_id` - Recipient of every message
    pub fn new(client: TelegramClient, chat_id: String) -> Self {
        Self { client, chat_id }
    }
}

#[async_trait]
impl MessageRepository for TelegramMessageRepository {
    async fn send(&self, text: &str) -> Result<()> {
        self.client.send_message(&self.chat_id, text).await
    }
}
