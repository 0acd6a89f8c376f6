//! Base-origin URL resolution and reference classification.

use url::Url;

/// Classification of a link reference found in a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolved {
    /// The reference already carries an absolute `http`/`https` scheme,
    /// pointing at a third-party site. Externals are never rewritten or
    /// mirrored.
    External,
    /// The reference was relative and resolves to this absolute URL under
    /// the page's own origin.
    Internal(Url),
}

/// Reduce a page URL to the base origin used for resolving its references:
/// scheme and host (plus any non-default port), nothing else.
pub fn origin_of(page_url: &Url) -> Url {
    let mut origin = page_url.clone();
    origin.set_path("/");
    origin.set_query(None);
    origin.set_fragment(None);
    let _ = origin.set_username("");
    let _ = origin.set_password(None);
    origin
}

/// Resolve a reference string against a base origin.
///
/// Returns `None` for empty references (nothing to rewrite, no job to
/// create) and for references the base cannot join.
pub fn resolve(base: &Url, reference: &str) -> Option<Resolved> {
    let reference = reference.trim();
    if reference.is_empty() {
        return None;
    }
    if reference.starts_with("http") {
        return Some(Resolved::External);
    }
    match base.join(reference) {
        Ok(absolute) => Some(Resolved::Internal(absolute)),
        Err(e) => {
            tracing::debug!("Skipping unresolvable reference {reference}: {e}");
            None
        }
    }
}

/// Build the proxy-endpoint reference for an internal target:
/// `{endpoint}?url=<urlencoded absolute url>`.
pub fn proxy_reference(endpoint: &str, target: &Url) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("url", target.as_str())
        .finish();
    format!("{endpoint}?{query}")
}

/// Recover the absolute URL embedded in a reference previously produced by
/// [`proxy_reference`]. Returns `None` for anything else.
pub fn proxy_target(reference: &str, endpoint: &str) -> Option<Url> {
    let query = reference.strip_prefix(endpoint)?.strip_prefix('?')?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "url")
        .and_then(|(_, value)| Url::parse(&value).ok())
}
