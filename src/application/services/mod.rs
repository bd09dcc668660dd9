//! Application services composing the delivery pipeline.

mod correlation;
mod feedback_bridge;
mod image_transcoder;
mod message_formatter;
mod mirror_url;
mod push_dispatcher;

pub use correlation::CorrelationMap;
pub use feedback_bridge::FeedbackBridge;
pub use image_transcoder::ImageTranscoder;
pub use message_formatter::{MAX_CAPTION_TAGS, MessageFormatter, PERMALINK_BASE};
pub use mirror_url::{DEFAULT_MIRROR_TEMPLATE, MirrorUrl};
pub use push_dispatcher::PushDispatcher;
