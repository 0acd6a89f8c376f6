//! Rewrites navigational references to route through the proxy endpoint.

use std::sync::LazyLock;

use scraper::Selector;
use url::Url;

use crate::document::{Document, link_attr};
use crate::resolve::{self, Resolved};

/// Anchor, stylesheet-link, script, image and form elements carry the
/// references the pipeline considers.
static NAVIGATION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a, link, script, img, form").expect("hard-coded selector"));

/// Point every internal reference on the allowlist at the proxy endpoint.
///
/// Following a rewritten reference re-enters the pipeline against the
/// resolved target, which is what makes navigation recursive. External
/// references are left untouched, preserving outbound links to third-party
/// sites; empty references are skipped entirely.
pub fn rewrite_navigation(document: &mut Document, base: &Url, endpoint: &str) {
    let mut rewrites = Vec::new();

    for element in document.select(&NAVIGATION) {
        let attr = link_attr(element.value().name());
        let Some(reference) = document.attr(element, attr) else {
            continue;
        };
        if let Some(Resolved::Internal(absolute)) = resolve::resolve(base, reference) {
            rewrites.push((element.id(), attr, resolve::proxy_reference(endpoint, &absolute)));
        }
    }

    tracing::debug!("Rewriting {} navigational references", rewrites.len());
    for (id, attr, value) in rewrites {
        document.set_attr(id, attr, value);
    }
}
