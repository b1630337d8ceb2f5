use crate::constants::{FILE_EXTENSION, FILE_PREFIX};
use std::path::{Path, PathBuf};

/// One row of the category table: a category name and its ordered source URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySources<'a> {
    pub name: &'a str,
    pub urls: &'a [&'a str],
}

/// A single image to fetch, derived from the category table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTask<'a> {
    pub category: &'a str,
    /// 1-based position within the category
    pub index: usize,
    pub source_url: &'a str,
    pub destination: PathBuf,
}

impl<'a> DownloadTask<'a> {
    pub fn new(services_dir: &Path, category: &'a str, index: usize, source_url: &'a str) -> Self {
        Self {
            category,
            index,
            source_url,
            destination: services_dir.join(file_name(category, index)),
        }
    }

    /// File name of the destination, used in notifications.
    pub fn file_name(&self) -> String {
        file_name(self.category, self.index)
    }

    /// Sibling path the body is streamed into before being renamed onto `destination`.
    pub fn partial_path(&self) -> PathBuf {
        let mut name = self.file_name();
        name.push_str(".part");
        self.destination.with_file_name(name)
    }
}

/// Builds `service_<category>_<index>.jpg`.
pub fn file_name(category: &str, index: usize) -> String {
    format!("{FILE_PREFIX}_{category}_{index}.{FILE_EXTENSION}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedImage {
    pub file: PathBuf,
    pub bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedDownload {
    pub file: PathBuf,
    pub reason: String,
}

/// Outcome of one batch run, in task order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub downloaded: Vec<DownloadedImage>,
    pub failed: Vec<FailedDownload>,
}

impl BatchSummary {
    pub fn attempted(&self) -> usize {
        self.downloaded.len() + self.failed.len()
    }

    pub fn total_bytes(&self) -> u64 {
        self.downloaded.iter().map(|d| d.bytes).sum()
    }

    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}
