mod delivery_port;
mod feedback_port;
mod image_port;
mod pacer_port;

pub use delivery_port::DeliveryPort;
pub use feedback_port::{ActionHandler, FeedbackHandler};
pub use image_port::{ImageCodecPort, ImageFetchPort, ImageResult, TranscodeOptions};
pub use pacer_port::PacerPort;

#[cfg(test)]
pub use image_port::MockImageCodecPort;
