//! Builder for configuring a [`PageMirror`] pipeline.

use std::time::Duration;

use crate::error::{PageMirrorError, Result};
use crate::fetch::Fetcher;
use crate::pipeline::PageMirror;
use crate::storage::Storage;

/// Builder for configuring and assembling a [`PageMirror`].
///
/// Provides a fluent API for setting the public base path, the proxy
/// endpoint, the fetch concurrency limit, the per-fetch timeout and the
/// user agent.
///
/// # Example
///
/// ```rust,no_run
/// use page_mirror::{FsStorage, PageMirrorBuilder};
/// use std::time::Duration;
///
/// # fn example() -> page_mirror::Result<()> {
/// let mirror = PageMirrorBuilder::new(FsStorage::new("static/resources"))
///     .public_base("/static/resources")
///     .proxy_endpoint("/proxy")
///     .concurrency(8)
///     .timeout(Duration::from_secs(15))
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct PageMirrorBuilder<S: Storage> {
    storage: S,
    public_base: String,
    proxy_endpoint: String,
    concurrency: usize,
    timeout: Duration,
    user_agent: String,
}

impl<S: Storage> PageMirrorBuilder<S> {
    /// Create a new builder with the given storage backend and sensible
    /// defaults.
    ///
    /// Defaults: public base `/static/resources`, proxy endpoint `/proxy`,
    /// concurrency 16, timeout 30 s.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            public_base: "/static/resources".to_string(),
            proxy_endpoint: "/proxy".to_string(),
            concurrency: 16,
            timeout: Duration::from_secs(30),
            user_agent: concat!("page_mirror/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Web path under which the shell serves the storage root read-only.
    /// Mirrored references become `{public_base}/{workspace}/{filename}`.
    pub fn public_base(mut self, base: impl Into<String>) -> Self {
        self.public_base = base.into();
        while self.public_base.ends_with('/') {
            self.public_base.pop();
        }
        self
    }

    /// Endpoint internal navigation is rewritten to. The shell must route
    /// `{proxy_endpoint}?url=...` back into [`PageMirror::render`].
    pub fn proxy_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.proxy_endpoint = endpoint.into();
        self
    }

    /// Maximum number of concurrent resource fetches per request.
    pub fn concurrency(mut self, limit: usize) -> Self {
        self.concurrency = limit;
        self
    }

    /// Per-fetch timeout applied to every request the pipeline issues.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// User agent presented to origin servers.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Construct the HTTP client and assemble the pipeline.
    pub fn build(self) -> Result<PageMirror<S>> {
        if self.concurrency == 0 {
            return Err(PageMirrorError::Config(
                "concurrency must be at least 1".to_string(),
            ));
        }
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .build()
            .map_err(|e| PageMirrorError::Config(e.to_string()))?;
        Ok(PageMirror::new(
            Fetcher::new(client),
            self.storage,
            self.public_base,
            self.proxy_endpoint,
            self.concurrency,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::FsStorage;

    #[test]
    fn build_with_defaults_succeeds() {
        let result = PageMirrorBuilder::new(FsStorage::new("/tmp/mirror")).build();
        assert!(result.is_ok());
    }

    #[test]
    fn zero_concurrency_is_rejected() {
        let result = PageMirrorBuilder::new(FsStorage::new("/tmp/mirror"))
            .concurrency(0)
            .build();
        assert!(matches!(result, Err(PageMirrorError::Config(_))));
    }

    #[test]
    fn public_base_trailing_slash_is_trimmed() {
        let builder =
            PageMirrorBuilder::new(FsStorage::new("/tmp/mirror")).public_base("/assets/");
        assert_eq!(builder.public_base, "/assets");
    }
}
