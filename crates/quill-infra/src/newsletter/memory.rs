//! In-memory newsletter sink.
//!
//! Records subscriptions for the process lifetime and logs them. A
//! delivery-backed implementation would replace this behind the same port.

use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::ports::{Newsletter, NewsletterError};

/// Newsletter sink that keeps subscribed addresses in memory.
pub struct InMemoryNewsletter {
    subscribers: RwLock<Vec<String>>,
}

impl InMemoryNewsletter {
    pub fn new() -> Self {
        Self {
            subscribers: RwLock::new(Vec::new()),
        }
    }

    /// Addresses recorded so far, in subscription order.
    pub async fn subscribers(&self) -> Vec<String> {
        self.subscribers.read().await.clone()
    }
}

impl Default for InMemoryNewsletter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Newsletter for InMemoryNewsletter {
    async fn subscribe(&self, email: &str) -> Result<(), NewsletterError> {
        let mut subscribers = self.subscribers.write().await;
        subscribers.push(email.to_string());
        tracing::info!("Newsletter subscription: {}", email);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscribe_records_the_address() {
        let newsletter = InMemoryNewsletter::new();
        newsletter.subscribe("reader@example.com").await.unwrap();
        newsletter.subscribe("other@example.com").await.unwrap();
        assert_eq!(
            newsletter.subscribers().await,
            vec!["reader@example.com", "other@example.com"]
        );
    }
}
