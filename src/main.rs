use std::io::Read;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use url_image_auto::domain::MessageChain;
use url_image_auto::infrastructure::{AppConfig, ClockSeedSource, CliArgs, StorageManager};
use url_image_auto::presentation::{OutputFormat, render_chain, render_conversion};
use url_image_auto::{ImageSegmentService, RewriteChainUseCase};

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
    let storage = StorageManager::new()?;
    let mut config = storage
        .load_config(args.config.as_deref())
        .wrap_err("failed to load configuration")?;

    config.merge_with_args(args);
    Ok(config)
}

fn read_text(args: &CliArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .wrap_err("failed to read message text from stdin")?;
    Ok(text)
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    let config = load_config(&args)?;

    init_logging(&config)?;

    debug!(version = url_image_auto::VERSION, "Starting url-image-auto");

    let service = Arc::new(ImageSegmentService::new(
        config.convert.clone(),
        Arc::new(ClockSeedSource::new()),
    ));
    let format = OutputFormat::from_json_flag(args.json);

    if let Some(chain_path) = &args.chain {
        let content = std::fs::read_to_string(chain_path)
            .wrap_err_with(|| format!("failed to read {}", chain_path.display()))?;
        let chain: MessageChain =
            serde_json::from_str(&content).wrap_err("invalid message chain json")?;

        let use_case = RewriteChainUseCase::new(service, config.chain.pad_plain_text);
        match use_case.execute(&chain) {
            Some(rewritten) => print!("{}", render_chain(&rewritten, format)?),
            None => {
                eprintln!("no image urls found, chain unchanged");
                print!("{}", render_chain(&chain, format)?);
            }
        }
        return Ok(());
    }

    let text = read_text(&args)?;
    let conversion = service.convert(&text);
    print!("{}", render_conversion(&conversion, format)?);

    Ok(())
}
