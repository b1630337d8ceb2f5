use crate::config::ResolvedConfig;
use crate::constants::DEMO_IMAGES;
use crate::downloader;
use crate::errors::AppResult;
use crate::models::BatchSummary;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;
use tracing::info;

// CLI metadata constants
const APP_NAME: &str = env!("CARGO_PKG_NAME");
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_ABOUT: &str = env!("CARGO_PKG_DESCRIPTION");

/// Builds the argument parser. The only option is an optional TOML config path.
pub fn command() -> Command<'static> {
    Command::new(APP_NAME)
        .version(APP_VERSION)
        .about(APP_ABOUT)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("TOML file overriding the services directory or query parameters")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
}

/// Resolves the configuration from parsed arguments, falling back to the built-in defaults.
pub fn resolve_config(matches: &ArgMatches) -> AppResult<ResolvedConfig> {
    match matches.get_one::<PathBuf>("config") {
        Some(path) => {
            info!(config = %path.display(), "Loading configuration");
            ResolvedConfig::from_toml_file(path)
        }
        None => Ok(ResolvedConfig::default()),
    }
}

/// Parses the process arguments and downloads the demonstration images.
///
/// Per-image failures are reported by the downloader and never turn into an error
/// here; only an unreadable config file or an uncreatable services directory do.
pub async fn cli() -> AppResult<BatchSummary> {
    let matches = command().get_matches();
    let config = resolve_config(&matches)?;

    info!(
        services_dir = %config.services_dir.display(),
        categories = DEMO_IMAGES.len(),
        "Starting download"
    );

    downloader::run(DEMO_IMAGES, &config).await
}
