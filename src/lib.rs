//! demo-image-fetcher library
//!
//! Downloads the demonstration images used by the service catalogue into the
//! local assets directory, one file per (category, index) pair.
//!
//! ## Overview
//!
//! - [`constants`] - The category table and built-in defaults
//! - [`models`] - Category rows, download tasks and the batch summary
//! - [`config`] - Resolved destination and query parameters, optional TOML loader
//! - [`downloader`] - Task enumeration, URL construction and the sequential batch
//! - [`cli`] - Argument parsing and orchestration for the binary
//! - [`errors`] - Error types used throughout the application
//!
//! ## Example Usage
//!
//! ```no_run
//! use demo_image_fetcher::{config::ResolvedConfig, constants::DEMO_IMAGES, downloader, errors::AppResult};
//!
//! # async fn example() -> AppResult<()> {
//! let summary = downloader::run(DEMO_IMAGES, &ResolvedConfig::default()).await?;
//! println!("{} downloaded, {} failed", summary.downloaded.len(), summary.failed.len());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod downloader;
pub mod errors;
pub mod models;
pub mod telemetry;
pub mod utils;
