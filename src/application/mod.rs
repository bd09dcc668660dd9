//! Application layer with the delivery pipeline services.

/// Pipeline services.
pub mod services;

pub use services::{
    CorrelationMap, FeedbackBridge, ImageTranscoder, MessageFormatter, MirrorUrl, PushDispatcher,
};
