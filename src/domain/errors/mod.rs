//! Domain error types.

mod delivery_error;
mod image_error;

pub use delivery_error::DeliveryError;
pub use image_error::ImageError;
