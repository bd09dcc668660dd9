use super::app_config::LogLevel;
use crate::domain::entities::TextButton;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "illust-notifier",
    version,
    about = "Push illustration notifications to a chat-bot gateway",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Gateway base URL.
    #[arg(long, env = "ILLUST_NOTIFIER_BASE_URL")]
    pub base_url: Option<String>,

    /// Destination conversation identifier.
    #[arg(long, env = "ILLUST_NOTIFIER_TARGET")]
    pub target: Option<String>,

    /// Gateway API key.
    #[arg(long, env = "ILLUST_NOTIFIER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Push illustration records read from a JSON array file.
    Send {
        /// Records file.
        #[arg(short, long, value_name = "FILE")]
        records: PathBuf,
    },
    /// Send a plain text message.
    Text {
        /// Message body.
        message: String,

        /// Button shown under the message.
        #[arg(short, long = "button", value_name = "LABEL=ACTION", value_parser = parse_button)]
        buttons: Vec<TextButton>,
    },
}

fn parse_button(raw: &str) -> Result<TextButton, String> {
    match raw.split_once('=') {
        Some((label, action)) if !label.trim().is_empty() => {
            Ok(TextButton::new(label.trim(), action.trim()))
        }
        _ => Err(format!("expected LABEL=ACTION, got `{raw}`")),
    }
}
