//! Application configuration.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::args::CliArgs;
use super::storage::ConfigError;
use crate::application::{MessageFormatter, MirrorUrl};
use crate::application::services::DEFAULT_MIRROR_TEMPLATE;
use crate::domain::entities::ApiKey;
use crate::domain::ports::TranscodeOptions;
use crate::infrastructure::gateway::{DEFAULT_TIMEOUT_SECS, GatewayTarget, SEND_ENDPOINT};
use crate::infrastructure::image::DEFAULT_REFERER;

pub(super) const APP_NAME: &str = "illust-notifier";
pub(super) const APP_QUALIFIER: &str = "com";
pub(super) const APP_ORGANIZATION: &str = "illust-notifier";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration loaded from TOML and overridden by CLI flags.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path. Logs go to stderr when unset.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Messaging gateway settings.
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Preview image settings.
    #[serde(default)]
    pub image: ImageConfig,

    /// Caption settings.
    #[serde(default)]
    pub format: FormatConfig,

    /// Delivery pacing settings.
    #[serde(default)]
    pub delivery: DeliveryConfig,
}

/// Messaging gateway configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Gateway base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Destination conversation, e.g. `QQOfficial:group:123456`.
    #[serde(default)]
    pub unified_msg_origin: String,

    /// Bearer API key, if the gateway requires one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Send endpoint path.
    #[serde(default = "default_endpoint_path")]
    pub endpoint_path: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            unified_msg_origin: String::new(),
            api_key: None,
            endpoint_path: default_endpoint_path(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Preview image configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageConfig {
    /// JPEG quality, 1-100.
    #[serde(default = "default_quality")]
    pub quality: u8,

    /// Longest edge in pixels.
    #[serde(default = "default_max_edge")]
    pub max_edge: u32,

    /// Referer sent to the image host.
    #[serde(default = "default_referer")]
    pub referer: String,

    /// Fallback link template; `{id}` is replaced by the illustration id.
    #[serde(default = "default_mirror_url")]
    pub mirror_url: String,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            quality: default_quality(),
            max_edge: default_max_edge(),
            referer: default_referer(),
            mirror_url: default_mirror_url(),
        }
    }
}

/// Caption configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatConfig {
    /// Page count above which a work is marked long-form.
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            max_pages: default_max_pages(),
        }
    }
}

/// Delivery pacing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryConfig {
    /// Pause after each delivery in milliseconds.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:6185".to_string()
}

fn default_endpoint_path() -> String {
    SEND_ENDPOINT.to_string()
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

const fn default_quality() -> u8 {
    TranscodeOptions::DEFAULT_QUALITY
}

const fn default_max_edge() -> u32 {
    TranscodeOptions::DEFAULT_MAX_EDGE
}

fn default_referer() -> String {
    DEFAULT_REFERER.to_string()
}

fn default_mirror_url() -> String {
    DEFAULT_MIRROR_TEMPLATE.to_string()
}

const fn default_max_pages() -> u32 {
    MessageFormatter::DEFAULT_MAX_PAGES
}

const fn default_interval_ms() -> u64 {
    1000
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(config_path) = &args.config {
            self.config = Some(config_path.clone());
        }
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(base_url) = &args.base_url {
            self.gateway.base_url.clone_from(base_url);
        }
        if let Some(target) = &args.target {
            self.gateway.unified_msg_origin.clone_from(target);
        }
        if let Some(api_key) = &args.api_key {
            self.gateway.api_key = Some(api_key.clone());
        }
    }

    /// Checks that the gateway destination is usable.
    ///
    /// # Errors
    /// Returns `ConfigError::Invalid` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gateway.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("gateway.base_url is empty".into()));
        }
        if self.gateway.unified_msg_origin.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "gateway.unified_msg_origin is empty".into(),
            ));
        }
        if !(1..=100).contains(&self.image.quality) {
            return Err(ConfigError::Invalid(format!(
                "image.quality must be 1-100, got {}",
                self.image.quality
            )));
        }
        if self.image.max_edge == 0 {
            return Err(ConfigError::Invalid("image.max_edge must be positive".into()));
        }
        Ok(())
    }

    /// Returns the gateway delivery target.
    #[must_use]
    pub fn gateway_target(&self) -> GatewayTarget {
        let mut target = GatewayTarget::new(
            self.gateway.base_url.clone(),
            self.gateway.unified_msg_origin.clone(),
        )
        .with_api_key(self.gateway.api_key.as_deref().and_then(ApiKey::new));
        target.endpoint_path.clone_from(&self.gateway.endpoint_path);
        target
    }

    /// Returns the HTTP request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.gateway.timeout_secs)
    }

    /// Returns the image transcoding limits.
    #[must_use]
    pub const fn transcode_options(&self) -> TranscodeOptions {
        TranscodeOptions {
            quality: self.image.quality,
            max_edge: self.image.max_edge,
        }
    }

    /// Returns the caption formatter.
    #[must_use]
    pub const fn formatter(&self) -> MessageFormatter {
        MessageFormatter::new(self.format.max_pages)
    }

    /// Returns the fallback mirror.
    #[must_use]
    pub fn mirror(&self) -> MirrorUrl {
        MirrorUrl::new(self.image.mirror_url.clone())
    }

    /// Returns the pause between deliveries.
    #[must_use]
    pub const fn delivery_interval(&self) -> Duration {
        Duration::from_millis(self.delivery.interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
            log_level = "debug"

            [gateway]
            base_url = "http://gateway.local:6185/"
            unified_msg_origin = "QQOfficial:group:42"
            api_key = "k-123"

            [image]
            quality = 70

            [format]
            max_pages = 4
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.image.quality, 70);
        assert_eq!(config.image.max_edge, 1500);
        assert_eq!(config.formatter().max_pages(), 4);
        assert_eq!(config.delivery_interval(), Duration::from_secs(1));

        let target = config.gateway_target();
        assert_eq!(target.send_url(), "http://gateway.local:6185/api/v1/send");
        assert_eq!(target.api_key.map(|k| k.bearer()), Some("Bearer k-123".to_string()));
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.gateway.timeout_secs, 30);
        assert_eq!(config.transcode_options(), TranscodeOptions::default());
        assert_eq!(config.format.max_pages, 10);
        assert!(config.gateway.api_key.is_none());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_api_key_is_ignored() {
        let mut config = AppConfig::default();
        config.gateway.api_key = Some("  ".into());

        assert!(config.gateway_target().api_key.is_none());
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = AppConfig::default();
        let args = CliArgs::parse_from([
            "illust-notifier",
            "--target",
            "QQOfficial:group:9",
            "--log-level",
            "warn",
            "text",
            "hi",
        ]);

        config.merge_with_args(&args);

        assert_eq!(config.gateway.unified_msg_origin, "QQOfficial:group:9");
        assert_eq!(config.log_level, LogLevel::Warn);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_quality() {
        let mut config = AppConfig::default();
        config.gateway.unified_msg_origin = "x".into();
        config.image.quality = 0;

        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
