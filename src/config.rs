use crate::constants::{DEFAULT_FIT, DEFAULT_FORMAT, DEFAULT_QUALITY, DEFAULT_WIDTH, SERVICES_DIR};
use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Query parameters appended to every image URL.
///
/// Serialized in a fixed order: `w`, `q`, `fm`, `fit`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QueryParams {
    /// Width in pixels
    pub w: u32,
    /// JPEG quality
    pub q: u8,
    /// Output format
    pub fm: String,
    /// Crop strategy
    pub fit: String,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            w: DEFAULT_WIDTH,
            q: DEFAULT_QUALITY,
            fm: DEFAULT_FORMAT.to_string(),
            fit: DEFAULT_FIT.to_string(),
        }
    }
}

impl QueryParams {
    /// Key/value pairs in the order they are appended to the URL.
    pub fn pairs(&self) -> [(&'static str, String); 4] {
        [
            ("w", self.w.to_string()),
            ("q", self.q.to_string()),
            ("fm", self.fm.clone()),
            ("fit", self.fit.clone()),
        ]
    }
}

/// Resolved configuration with all values filled in (no Options).
///
/// `Default` reproduces the built-in destination and query parameters, so running
/// without a config file behaves exactly like the stock fetcher.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolvedConfig {
    /// Directory the images are written to
    pub services_dir: PathBuf,
    pub query: QueryParams,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            services_dir: PathBuf::from(SERVICES_DIR),
            query: QueryParams::default(),
        }
    }
}

impl ResolvedConfig {
    /// Loads and validates configuration from a TOML file.
    ///
    /// Missing keys fall back to the defaults. Unknown keys are rejected so typos
    /// are not silently ignored.
    ///
    /// # Errors
    ///
    /// Returns `IoError` if the file cannot be read, and `InvalidInput` if the TOML
    /// is malformed, has unknown keys, or sets `w = 0` or an empty `fm`/`fit`.
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path)?;
        let config: ResolvedConfig = toml::from_str(&contents)
            .map_err(|e| AppError::InvalidInput(format!("Failed to parse config: {e}")))?;

        if config.query.w == 0 {
            return Err(AppError::InvalidInput(
                "Image width must be greater than 0".into(),
            ));
        }
        if config.query.fm.trim().is_empty() {
            return Err(AppError::InvalidInput("Image format must not be empty".into()));
        }
        if config.query.fit.trim().is_empty() {
            return Err(AppError::InvalidInput("Fit mode must not be empty".into()));
        }

        Ok(config)
    }
}
