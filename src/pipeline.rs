//! The page pipeline: fetch, rewrite navigation, mirror resources.

use url::Url;

use crate::document::Document;
use crate::error::{PageMirrorError, Result};
use crate::fetch::Fetcher;
use crate::mirror::{self, MirrorContext};
use crate::resolve;
use crate::rewrite;
use crate::storage::Storage;

/// A configured page-mirroring pipeline.
///
/// Built by [`PageMirrorBuilder`](crate::PageMirrorBuilder). One instance
/// serves any number of requests; every [`render`](Self::render) call is
/// fully request-scoped (own base origin, own workspace, no shared mutable
/// state), so a `PageMirror` can be shared freely behind the HTTP shell.
pub struct PageMirror<S: Storage> {
    fetcher: Fetcher,
    storage: S,
    public_base: String,
    proxy_endpoint: String,
    concurrency: usize,
}

impl<S: Storage> PageMirror<S> {
    pub(crate) fn new(
        fetcher: Fetcher,
        storage: S,
        public_base: String,
        proxy_endpoint: String,
        concurrency: usize,
    ) -> Self {
        Self {
            fetcher,
            storage,
            public_base,
            proxy_endpoint,
            concurrency,
        }
    }

    /// Produce the reconstructed markup for `url`.
    ///
    /// Both the initial "download site" request and every subsequent
    /// `{proxy_endpoint}?url=...` navigation map to this one entry point;
    /// the only difference is how the shell obtained `url`.
    ///
    /// Fails with [`PageMirrorError::MissingInput`] on an empty URL and
    /// [`PageMirrorError::InvalidUrl`] on an unparsable one, both before
    /// any network activity, and with [`PageMirrorError::FetchFailed`]
    /// when the page itself cannot be retrieved -- no partial page is
    /// produced. Individual resource failures are logged and leave their
    /// reference untouched; they never fail the request. No step retries.
    pub async fn render(&self, url: &str) -> Result<String> {
        let url = url.trim();
        if url.is_empty() {
            return Err(PageMirrorError::MissingInput);
        }
        let page_url = Url::parse(url).map_err(|source| PageMirrorError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        let base = resolve::origin_of(&page_url);

        tracing::info!("Rendering {page_url}");
        let html = self.fetcher.fetch_page(&page_url).await?;

        let mut document = Document::parse(&html);
        rewrite::rewrite_navigation(&mut document, &base, &self.proxy_endpoint);
        let markup = mirror::mirror_resources(
            &mut document,
            &base,
            &MirrorContext {
                fetcher: &self.fetcher,
                storage: &self.storage,
                proxy_endpoint: &self.proxy_endpoint,
                public_base: &self.public_base,
                concurrency: self.concurrency,
            },
        )
        .await;
        Ok(markup)
    }
}
