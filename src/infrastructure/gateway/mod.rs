//! Messaging gateway client.

mod client;
mod dto;
mod session;

pub use client::{GatewayTarget, HttpDeliveryClient, SEND_ENDPOINT};
pub use session::{DEFAULT_TIMEOUT_SECS, TransportSession};
