//! Gateway delivery port definition.

use async_trait::async_trait;

use crate::domain::entities::{DeliveryResult, MessageChain};
use crate::domain::errors::DeliveryError;

/// Port for posting message chains to the messaging gateway.
#[async_trait]
pub trait DeliveryPort: Send + Sync {
    /// Posts one message chain to the configured destination.
    async fn post(&self, chain: &MessageChain) -> Result<DeliveryResult, DeliveryError>;

    /// Releases the underlying transport session. Safe to call repeatedly.
    async fn close(&self);
}
