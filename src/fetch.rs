//! Remote retrieval of GIF bytes.
//!
//! Only absolute `http`/`https` URLs are accepted. Oversized bodies are
//! refused twice: once on the declared `Content-Length`, and again while
//! reading, so a missing or lying header cannot grow memory past the cap.

use std::{io::Read, time::Duration};

use url::Url;

use crate::foundation::error::FetchError;

/// Largest body the fetcher will hand to the parser (10 MiB).
pub const MAX_GIF_BYTES: usize = 10 * 1024 * 1024;

/// Fetcher settings.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Value sent in the `User-Agent` header.
    pub user_agent: String,
    /// Overall request timeout; `None` leaves it to the transport.
    pub timeout_secs: Option<u64>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("gifspan/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: None,
        }
    }
}

/// Check that `raw` is a usable absolute `http`/`https` URL.
///
/// Performs no network access.
pub fn validate_url(raw: &str) -> Result<Url, FetchError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FetchError::MissingInput);
    }
    let url = Url::parse(raw).map_err(|_| FetchError::InvalidUrl)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(FetchError::DisallowedScheme(other.to_string())),
    }
}

/// Blocking HTTP client that retrieves bounded byte buffers.
///
/// One outbound request per [`Fetcher::fetch`] call; no retries, no caching.
#[derive(Clone, Debug)]
pub struct Fetcher {
    agent: ureq::Agent,
    config: FetchConfig,
}

impl Fetcher {
    /// Build a fetcher from `config`.
    pub fn new(config: FetchConfig) -> Self {
        let mut builder = ureq::AgentBuilder::new();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Self {
            agent: builder.build(),
            config,
        }
    }

    /// Settings this fetcher was built with.
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Retrieve the body at `raw_url`.
    pub fn fetch(&self, raw_url: &str) -> Result<Vec<u8>, FetchError> {
        let url = validate_url(raw_url)?;
        tracing::debug!(url = %url, "fetching");

        let response = match self
            .agent
            .request_url("GET", &url)
            .set("User-Agent", &self.config.user_agent)
            .call()
        {
            Ok(response) => response,
            Err(ureq::Error::Status(status, _)) => {
                return Err(FetchError::FetchFailed { status });
            }
            Err(ureq::Error::Transport(err)) => {
                return Err(FetchError::Transport(err.to_string()));
            }
        };

        let status = response.status();
        if !(200..300).contains(&status) {
            return Err(FetchError::FetchFailed { status });
        }

        let declared_len = response
            .header("Content-Length")
            .and_then(|s| s.trim().parse::<u64>().ok());
        if let Some(len) = declared_len {
            if len > MAX_GIF_BYTES as u64 {
                tracing::warn!(url = %url, len, "declared body exceeds cap");
                return Err(FetchError::TooLarge);
            }
        }

        let capacity = declared_len.map_or(0, |len| len as usize);
        let mut bytes = Vec::with_capacity(capacity);
        response
            .into_reader()
            .take(MAX_GIF_BYTES as u64 + 1)
            .read_to_end(&mut bytes)
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        check_body_len(bytes.len())?;
        tracing::debug!(url = %url, bytes = bytes.len(), "fetched");
        Ok(bytes)
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new(FetchConfig::default())
    }
}

pub(crate) fn check_body_len(len: usize) -> Result<(), FetchError> {
    if len > MAX_GIF_BYTES {
        tracing::warn!(len, "body exceeds cap");
        return Err(FetchError::TooLarge);
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/fetch.rs"]
mod tests;
