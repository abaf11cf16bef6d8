use reqwest::blocking::Client;
use tracing::debug;

use crate::error::FetchError;
use crate::settings::Settings;

pub fn build_client(settings: &Settings) -> Result<Client, FetchError> {
    let client = Client::builder()
        .timeout(settings.timeout())
        .user_agent(settings.user_agent.clone())
        .build()?;
    Ok(client)
}

/// GET `url` and return the body. Non-2xx statuses are errors; there is no retry.
pub fn fetch_page(client: &Client, url: &str) -> Result<String, FetchError> {
    debug!(url, "fetching page");
    let response = client.get(url).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }
    Ok(response.text()?)
}

/// Fetch pages lazily, one after another, in URL order.
#[cfg(not(feature = "rayon"))]
pub fn fetch_all<'a>(
    client: &'a Client,
    urls: &'a [String],
) -> impl Iterator<Item = Result<String, FetchError>> + 'a {
    urls.iter().map(move |url| fetch_page(client, url))
}

/// Fetch every page in parallel up front. Results still come back in URL
/// order so the merge downstream stays deterministic.
#[cfg(feature = "rayon")]
pub fn fetch_all<'a>(
    client: &'a Client,
    urls: &'a [String],
) -> impl Iterator<Item = Result<String, FetchError>> + 'a {
    use rayon::prelude::*;

    let pages: Vec<_> = urls.par_iter().map(|url| fetch_page(client, url)).collect();
    pages.into_iter()
}
