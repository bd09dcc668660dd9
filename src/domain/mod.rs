//! Domain layer with core entities, errors and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;
/// Serde utilities.
pub mod serde_utils;

pub use entities::{IllustId, IllustrationRecord, MessageChain, MessageSegment};
pub use errors::{DeliveryError, ImageError};
pub use ports::{DeliveryPort, ImageCodecPort, ImageFetchPort, PacerPort};
