use anyhow::{Context, Result};
use std::sync::Arc;
use ticklist::api::RestClient;
use ticklist::cli::{CliArgs, Command, USAGE};
use ticklist::config::Config;
use ticklist::constants::API_URL_ENV;
use ticklist::logger::{self, Logger};
use ticklist::ui;

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse(std::env::args().skip(1))?;

    match args.command {
        Command::Help => {
            print!("{}", USAGE);
            return Ok(());
        }
        Command::Version => {
            println!("ticklist {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Command::GenerateConfig => {
            let path = match args.config_path {
                Some(path) => path,
                None => Config::get_default_config_path()?,
            };
            return Config::generate_default_config(path);
        }
        Command::Run => {}
    }

    let mut config = match &args.config_path {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };
    config
        .apply_overrides(std::env::var(API_URL_ENV).ok(), args.api_url)
        .context("Invalid API URL override")?;

    let log_buffer = Logger::new();
    logger::init(&config.logging, log_buffer.clone())?;

    let api = RestClient::new(&config.server).context("Failed to create HTTP client")?;
    log::info!("Using API at {}", api.base_url());

    ui::run_app(Arc::new(api), config, log_buffer).await
}
