use crate::config::QueryParams;
use crate::errors::AppResult;
use crate::models::{CategorySources, DownloadTask};
use std::path::Path;
use url::Url;

/// Lazily enumerates the download tasks for a category table.
///
/// Categories are visited in table order and URLs in list order, with indices
/// starting at 1 inside each category. Nothing is allocated up front; the
/// iterator is rebuilt from the table on every run.
pub fn download_tasks<'a>(
    table: &'a [CategorySources<'a>],
    services_dir: &'a Path,
) -> impl Iterator<Item = DownloadTask<'a>> + 'a {
    table.iter().flat_map(move |category| {
        category
            .urls
            .iter()
            .copied()
            .enumerate()
            .map(move |(i, url)| DownloadTask::new(services_dir, category.name, i + 1, url))
    })
}

/// Appends the query parameters to a source URL.
///
/// Pairs are appended in `w`, `q`, `fm`, `fit` order. An existing query string is
/// kept and extended with `&`.
///
/// # Errors
///
/// Returns `UrlError` if `source` is not an absolute URL.
pub fn build_image_url(source: &str, params: &QueryParams) -> AppResult<Url> {
    let mut url = Url::parse(source)?;
    {
        let mut query = url.query_pairs_mut();
        for (key, value) in params.pairs() {
            query.append_pair(key, &value);
        }
    }
    Ok(url)
}
