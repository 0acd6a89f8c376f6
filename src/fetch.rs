//! Single-attempt HTTP retrieval for pages and resources.

use url::Url;

use crate::error::{PageMirrorError, Result};

/// Thin wrapper around a shared [`reqwest::Client`].
///
/// One attempt per fetch, no retries. The client carries the configured
/// timeout and user agent for every request the pipeline issues, so a hung
/// origin stalls a single job for at most the timeout. Dropping a fetch
/// future cancels the request in flight.
#[derive(Clone)]
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    pub(crate) fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Fetch the target page as text.
    ///
    /// Any transport failure or non-success status maps to
    /// [`PageMirrorError::FetchFailed`], which is fatal for the request.
    pub async fn fetch_page(&self, url: &Url) -> Result<String> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|source| PageMirrorError::FetchFailed {
                url: url.to_string(),
                source,
            })?;
        response
            .text()
            .await
            .map_err(|source| PageMirrorError::FetchFailed {
                url: url.to_string(),
                source,
            })
    }

    /// Fetch a single resource as raw bytes, along with the content type
    /// the origin reported.
    ///
    /// Failures map to [`PageMirrorError::ResourceFetchFailed`] and are
    /// caught at the job boundary; they never abort sibling fetches or the
    /// surrounding request.
    pub async fn fetch_resource(&self, url: &Url) -> Result<(Vec<u8>, Option<String>)> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|source| PageMirrorError::ResourceFetchFailed {
                url: url.to_string(),
                source,
            })?;
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let bytes = response
            .bytes()
            .await
            .map_err(|source| PageMirrorError::ResourceFetchFailed {
                url: url.to_string(),
                source,
            })?;
        Ok((bytes.to_vec(), content_type))
    }
}
