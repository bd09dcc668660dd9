//! illust-notifier - pushes curated illustrations to a chat-bot gateway.
//!
//! The crate is split into a domain layer (records, message chains, ports),
//! an application layer (caption formatting, image transcoding, batch
//! dispatch, feedback forwarding) and an infrastructure layer with the HTTP,
//! image codec and configuration adapters.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the delivery pipeline services.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "illust-notifier";
