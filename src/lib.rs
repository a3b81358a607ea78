pub mod cli;
pub mod config;
pub mod core;
pub mod fallback;
pub mod loader;
pub mod log;
pub mod providers;
pub mod view;

use crate::providers::TefasProvider;
use crate::view::ViewState;
use anyhow::Result;
use std::time::Duration;
use tracing::debug;

pub enum AppCommand {
    Dashboard(ViewState),
    Funds(ViewState),
    Investors,
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    let config = match config_path {
        Some(path) => config::AppConfig::load_from_path(path)?,
        None => config::AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let provider = TefasProvider::new(
        &config.provider.base_url,
        Duration::from_secs(config.provider.timeout_secs),
        config.provider.retries,
    );

    match command {
        AppCommand::Dashboard(state) => cli::dashboard::run(&provider, &state).await,
        AppCommand::Funds(state) => cli::funds::run(&provider, &state).await,
        AppCommand::Investors => cli::investors::run(&provider).await,
    }
}
