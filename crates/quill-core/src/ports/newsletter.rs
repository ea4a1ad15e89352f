use async_trait::async_trait;

/// Newsletter trait - abstraction over subscription sinks.
///
/// The current deployment records subscriptions without sending mail;
/// a delivery-backed implementation would plug in here.
#[async_trait]
pub trait Newsletter: Send + Sync {
    /// Record a subscription for the given address.
    async fn subscribe(&self, email: &str) -> Result<(), NewsletterError>;
}

/// Newsletter operation errors.
#[derive(Debug, thiserror::Error)]
pub enum NewsletterError {
    #[error("Subscription failed: {0}")]
    Subscription(String),
}
