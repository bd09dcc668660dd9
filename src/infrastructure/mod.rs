//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// Messaging gateway client.
pub mod gateway;
/// Image download and transcoding.
pub mod image;
/// Delivery pacing.
pub mod pacing;

pub use config::{AppConfig, CliArgs, Command, ConfigError, ConfigLoader, LogLevel};
pub use gateway::{GatewayTarget, HttpDeliveryClient, TransportSession};
pub use image::{HttpImageFetcher, JpegCodec};
pub use pacing::{IntervalPacer, NoopPacer};
