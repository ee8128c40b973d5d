//! Homeworks repository
//!
//! Fetches raw homework status answers from the homework API.

use async_trait::async_trait;
use hwbot_client::{PracticumClient, Result};
use serde_json::Value;

/// Repository trait for reading homework statuses
#[async_trait]
pub trait HomeworkRepository: Send + Sync {
    /// Fetches statuses changed since `from_date`
    ///
    /// Transport failures, non-200 answers and undecodable bodies are
    /// returned as distinct [`hwbot_client::ClientError`] variants.
    async fn fetch(&self, from_date: i64) -> Result<Value>;
}

/// HTTP implementation of HomeworkRepository
pub struct HttpHomeworkRepository {
    client: PracticumClient,
}

impl HttpHomeworkRepository {
    pub fn new(client: PracticumClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HomeworkRepository for HttpHomeworkRepository {
    async fn fetch(&self, from_date: i64) -> Result<Value> {
        self.client.get_homework_statuses(from_date).await
    }
}
