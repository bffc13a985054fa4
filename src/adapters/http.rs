//! Shared HTTP plumbing for the provider adapters

use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Client;
use thiserror::Error;

/// Errors when constructing an adapter
#[derive(Debug, Error)]
pub enum SetupError {
    /// HTTP client could not be built
    #[error("could not build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    /// Configured base URL is unusable
    #[error("invalid base URL {url:?}: {reason}")]
    BaseUrl {
        /// Configured value
        url: String,
        /// What is wrong with it
        reason: String,
    },
}

/// Build a blocking client
///
/// `timeout` of `None` disables the per-request timeout entirely.
pub fn build_client(timeout: Option<Duration>) -> Result<Client, SetupError> {
    Ok(Client::builder()
        .timeout(timeout)
        .user_agent(concat!("bankmatch/", env!("CARGO_PKG_VERSION")))
        .build()?)
}

/// Parse a base URL, assuming `https://` when no scheme is given
pub fn parse_base_url(raw: &str) -> Result<Url, SetupError> {
    let with_scheme =
        if raw.contains("://") { raw.to_string() } else { format!("https://{raw}") };

    let url = Url::parse(&with_scheme).map_err(|e| SetupError::BaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    if url.cannot_be_a_base() {
        return Err(SetupError::BaseUrl {
            url: raw.to_string(),
            reason: "cannot be used as a base".to_string(),
        });
    }
    Ok(url)
}

/// Append `segments` to the path of `base`, ending with a slash
#[must_use]
pub fn endpoint(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments).push("");
    }
    url
}
