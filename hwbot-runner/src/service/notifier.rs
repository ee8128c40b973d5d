//! Notification service
//!
//! Best-effort delivery of bot messages. A failed send is logged and
//! swallowed so that the poll loop never stops because of the messenger.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error};

use crate::repository::MessageRepository;

/// Service trait for delivering notifications
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Attempts to deliver `message`
    ///
    /// Never fails: delivery errors are logged by the implementation.
    async fn notify(&self, message: &str);
}

/// Standard implementation of Notifier
pub struct StandardNotifier {
    messages: Arc<dyn MessageRepository>,
}

impl StandardNotifier {
    pub fn new(messages: Arc<dyn MessageRepository>) -> Self {
        Self { messages }
    }
}

#[async_trait]
impl Notifier for StandardNotifier {
    async fn notify(&self, message: &str) {
        match self.messages.send(message).await {
            Ok(()) => debug!("Message sent: {}", message),
            Err(e) => error!("Failed to send message {:?}: {}", message, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hwbot_client::{ClientError, Result};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingRepository {
        fail: bool,
        sent: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl MessageRepository for RecordingRepository {
        async fn send(&self, text: &str) -> Result<()> {
            self.sent.lock().unwrap().push(text.to_string());
            if self.fail {
                return Err(ClientError::api_error(400, "chat not found"));
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_notify_delivers() {
        let repository = Arc::new(RecordingRepository::default());
        let notifier = StandardNotifier::new(repository.clone());

        notifier.notify("hello").await;

        assert_eq!(*repository.sent.lock().unwrap(), vec!["hello".to_string()]);
    }

    #[tokio::test]
    async fn test_notify_swallows_delivery_errors() {
        let repository = Arc::new(RecordingRepository {
            fail: true,
            ..Default::default()
        });
        let notifier = StandardNotifier::new(repository.clone());

        notifier.notify("first").await;
        notifier.notify("second").await;

        assert_eq!(repository.sent.lock().unwrap().len(), 2);
    }
}
