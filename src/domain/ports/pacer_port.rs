use async_trait::async_trait;

/// Port for spacing consecutive deliveries.
#[async_trait]
pub trait PacerPort: Send + Sync {
    /// Waits until the next delivery may start.
    async fn pause(&self);
}
