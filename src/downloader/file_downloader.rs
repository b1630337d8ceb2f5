use crate::config::ResolvedConfig;
use crate::downloader::tasks::{build_image_url, download_tasks};
use crate::errors::{AppError, AppResult};
use crate::models::{BatchSummary, CategorySources, DownloadTask, DownloadedImage, FailedDownload};
use crate::utils::{format_duration, kb_from_bytes};
use reqwest::StatusCode;
use std::path::Path;
use std::time::Instant;
use tokio::fs;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

/// Downloads a single image for `task`.
///
/// The body is streamed into `<destination>.part` and renamed onto the destination
/// once complete, so a failed task never leaves a truncated or altered file behind.
/// An existing destination is overwritten.
///
/// # Returns
///
/// The number of bytes written.
///
/// # Errors
///
/// - `UrlError` if the source URL does not parse
/// - `NetworkError` if the request fails or the body stream breaks
/// - `HttpStatus` if the server answers with anything other than 200
/// - `IoError` if the file cannot be created, written, or renamed
pub async fn download_image(
    client: &reqwest::Client,
    task: &DownloadTask<'_>,
    config: &ResolvedConfig,
) -> AppResult<u64> {
    let url = build_image_url(task.source_url, &config.query)?;
    debug!(url = %url, file = %task.file_name(), "Requesting image");

    let mut response = client.get(url).send().await?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(AppError::HttpStatus {
            status: status.as_u16(),
        });
    }

    let tmp_path = task.partial_path();
    let result = async {
        let bytes = stream_to_file(&mut response, &tmp_path).await?;
        fs::rename(&tmp_path, &task.destination)
            .await
            .map_err(|e| {
                AppError::IoError(format!(
                    "Failed to rename temp file {} to {}: {}",
                    tmp_path.display(),
                    task.destination.display(),
                    e
                ))
            })?;
        Ok::<u64, AppError>(bytes)
    }
    .await;

    if result.is_err() {
        // Best-effort: the temp file may not exist if it was never created
        if let Err(e) = fs::remove_file(&tmp_path).await {
            debug!(
                file_path = %tmp_path.display(),
                error = %e,
                "Temp file not removed"
            );
        }
    }

    result
}

/// Copies the response body chunk by chunk into `path`.
///
/// The file handle is dropped (closed) before returning on every path.
async fn stream_to_file(response: &mut reqwest::Response, path: &Path) -> AppResult<u64> {
    let mut file = File::create(path).await.map_err(|e| {
        AppError::IoError(format!(
            "Failed to create temp file {}: {}",
            path.display(),
            e
        ))
    })?;

    let mut written: u64 = 0;
    while let Some(chunk) = response.chunk().await? {
        file.write_all(&chunk).await.map_err(|e| {
            AppError::IoError(format!(
                "Failed to write to temp file {}: {}",
                path.display(),
                e
            ))
        })?;
        written += chunk.len() as u64;
    }

    file.flush().await.map_err(|e| {
        AppError::IoError(format!("Failed to flush temp file {}: {}", path.display(), e))
    })?;

    Ok(written)
}

/// Downloads every image of `table` into the configured services directory.
///
/// Tasks run one at a time, in table order. Each failure (non-200 status, network
/// error, I/O error, bad URL) is logged, recorded in the summary and skipped; the
/// batch always runs to the end and emits a completion event.
///
/// # Errors
///
/// Returns `IoError` only if the services directory cannot be created.
pub async fn run_with_client(
    client: &reqwest::Client,
    table: &[CategorySources<'_>],
    config: &ResolvedConfig,
) -> AppResult<BatchSummary> {
    let services_dir = config.services_dir.as_path();
    fs::create_dir_all(services_dir).await.map_err(|e| {
        AppError::IoError(format!(
            "Failed to create directory {}: {}",
            services_dir.display(),
            e
        ))
    })?;

    let started = Instant::now();
    let mut summary = BatchSummary::default();

    for task in download_tasks(table, services_dir) {
        let file_name = task.file_name();
        match download_image(client, &task, config).await {
            Ok(bytes) => {
                info!(file = %file_name, bytes, "Downloaded image");
                summary.downloaded.push(DownloadedImage {
                    file: task.destination,
                    bytes,
                });
            }
            Err(AppError::HttpStatus { status }) => {
                warn!(file = %file_name, status, "Failed to download image");
                summary.failed.push(FailedDownload {
                    file: task.destination,
                    reason: AppError::HttpStatus { status }.to_string(),
                });
            }
            Err(e) => {
                warn!(file = %file_name, error = %e, "Error while downloading image");
                summary.failed.push(FailedDownload {
                    file: task.destination,
                    reason: e.to_string(),
                });
            }
        }
    }

    info!(
        downloaded = summary.downloaded.len(),
        failed = summary.failed.len(),
        size_kb = kb_from_bytes(summary.total_bytes()),
        elapsed = %format_duration(started.elapsed()),
        "Download finished"
    );

    Ok(summary)
}

/// Runs the batch with a fresh HTTP client. No request timeout is set.
pub async fn run(
    table: &[CategorySources<'_>],
    config: &ResolvedConfig,
) -> AppResult<BatchSummary> {
    let client = reqwest::Client::new();
    run_with_client(&client, table, config).await
}
