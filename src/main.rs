use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use illust_notifier::application::{ImageTranscoder, PushDispatcher};
use illust_notifier::domain::IllustrationRecord;
use illust_notifier::infrastructure::{
    AppConfig, CliArgs, Command, ConfigLoader, HttpDeliveryClient, HttpImageFetcher,
    IntervalPacer, JpegCodec, TransportSession,
};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = &config.log_path {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}

fn load_config(args: &CliArgs) -> Result<AppConfig> {
    let loader = ConfigLoader::new()?;
    let mut config = loader.load_config(args.config.as_deref())?;
    config.merge_with_args(args);
    config.validate()?;
    Ok(config)
}

fn build_dispatcher(config: &AppConfig) -> PushDispatcher {
    let session = Arc::new(TransportSession::new(config.request_timeout()));

    let delivery = Arc::new(HttpDeliveryClient::new(
        session.clone(),
        config.gateway_target(),
    ));
    let transcoder = ImageTranscoder::new(
        Arc::new(HttpImageFetcher::new(session, config.image.referer.clone())),
        Arc::new(JpegCodec::new()),
        config.transcode_options(),
    );
    let pacer = Arc::new(IntervalPacer::new(config.delivery_interval()));

    PushDispatcher::new(delivery, transcoder, pacer)
        .with_formatter(config.formatter())
        .with_mirror(config.mirror())
}

fn read_records(path: &Path) -> Result<Vec<IllustrationRecord>> {
    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).wrap_err("records file is not a JSON array of illustrations")
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let _ = dotenvy::dotenv();

    let args = CliArgs::parse();
    let config = load_config(&args)?;

    init_logging(&config)?;

    info!(
        version = illust_notifier::VERSION,
        destination = %config.gateway.unified_msg_origin,
        "Starting illust-notifier"
    );

    let dispatcher = build_dispatcher(&config);

    let outcome = match &args.command {
        Command::Send { records } => match read_records(records) {
            Ok(records) => {
                let delivered = dispatcher.send(&records).await;
                for id in &delivered {
                    println!("{id}");
                }
                Ok(())
            }
            Err(e) => Err(e),
        },
        Command::Text { message, buttons } => {
            if !dispatcher.send_text(message, buttons).await {
                eprintln!("text message was not delivered");
            }
            Ok(())
        }
    };

    dispatcher.close().await;
    outcome
}
