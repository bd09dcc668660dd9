//! Domain entity definitions.

mod api_key;
mod illustration;
mod message;

pub use api_key::ApiKey;
pub use illustration::{ContentKind, IllustId, IllustrationRecord};
pub use message::{DeliveryResult, GatewayMessageId, MessageChain, MessageSegment, TextButton};
