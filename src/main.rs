use demo_image_fetcher::{cli, errors, telemetry};
use errors::AppResult;

fn main() -> AppResult<()> {
    telemetry::init_tracing();

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| errors::AppError::IoError(e.to_string()))?;

    // Per-image failures are already logged; they do not affect the exit status.
    rt.block_on(cli::cli())?;
    Ok(())
}
