//! Fetching of the demonstration images.
//!
//! [`download_tasks`] turns a category table into an ordered task sequence,
//! [`build_image_url`] adds the image host query parameters, and [`run`] drives
//! the sequential batch and reports a [`crate::models::BatchSummary`].

mod file_downloader;
mod tasks;

// Re-export public API
pub use file_downloader::{download_image, run, run_with_client};
pub use tasks::{build_image_url, download_tasks};
