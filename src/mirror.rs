//! Concurrent resource mirroring into a per-request workspace.

use std::sync::LazyLock;

use ego_tree::NodeId;
use scraper::Selector;
use tokio::sync::Semaphore;
use url::Url;
use uuid::Uuid;

use crate::document::{Document, link_attr};
use crate::fetch::Fetcher;
use crate::naming::{NameAllocator, safe_name};
use crate::resolve::{self, Resolved};
use crate::storage::Storage;

/// Stylesheet-link, script and image elements reference fetchable
/// resources. Anchors and forms are navigational and are not mirrored.
static RESOURCES: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("link, script, img").expect("hard-coded selector"));

/// Fallback content type when the origin does not report one.
const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// One discovered resource reference. Created during the scan, consumed
/// once, discarded with the request.
struct ResourceJob {
    node: NodeId,
    attr: &'static str,
    url: Url,
    filename: String,
}

/// Request-scoped collaborators and knobs for one mirroring pass.
pub(crate) struct MirrorContext<'a, S> {
    pub fetcher: &'a Fetcher,
    pub storage: &'a S,
    pub proxy_endpoint: &'a str,
    pub public_base: &'a str,
    pub concurrency: usize,
}

/// Fetch every referenced resource into a fresh workspace and rewrite the
/// successful references to web-servable local paths, then serialize.
///
/// Fetches run concurrently, bounded by the configured limit, but results
/// are applied in discovery order so the output markup is deterministic
/// regardless of completion order. A failed fetch or store leaves its
/// reference exactly as the navigation rewriter left it; it never aborts
/// sibling jobs or the request.
pub(crate) async fn mirror_resources<S: Storage>(
    document: &mut Document,
    base: &Url,
    ctx: &MirrorContext<'_, S>,
) -> String {
    let workspace = Uuid::new_v4().to_string();
    let mut names = NameAllocator::new();
    let mut jobs = Vec::new();

    for element in document.select(&RESOURCES) {
        let attr = link_attr(element.value().name());
        let Some(reference) = document.attr(element, attr) else {
            continue;
        };
        // The navigation rewriter runs first, so internal references
        // usually arrive as proxy-endpoint URLs. Unwrap those back to the
        // real target before resolving the remainder.
        let target = match resolve::proxy_target(reference, ctx.proxy_endpoint) {
            Some(url) => url,
            None => match resolve::resolve(base, reference) {
                Some(Resolved::Internal(url)) => url,
                Some(Resolved::External) | None => continue,
            },
        };
        let filename = names.claim(&safe_name(&target));
        jobs.push(ResourceJob {
            node: element.id(),
            attr,
            url: target,
            filename,
        });
    }

    tracing::debug!(
        "Mirroring {} resources into workspace {workspace}",
        jobs.len()
    );

    let limit = Semaphore::new(ctx.concurrency);
    let fetches = jobs.iter().map(|job| {
        let limit = &limit;
        let fetcher = ctx.fetcher;
        async move {
            let _permit = limit.acquire().await.expect("semaphore never closed");
            fetcher.fetch_resource(&job.url).await
        }
    });
    let results = futures::future::join_all(fetches).await;

    for (job, result) in jobs.iter().zip(results) {
        let (bytes, content_type) = match result {
            Ok(fetched) => fetched,
            Err(e) => {
                tracing::warn!("{e}; leaving reference untouched");
                continue;
            }
        };
        let key = format!("{workspace}/{}", job.filename);
        let content_type = content_type.as_deref().unwrap_or(DEFAULT_CONTENT_TYPE);
        if let Err(e) = ctx.storage.put(&key, &bytes, content_type).await {
            tracing::warn!("Failed to store {key}: {e}; leaving reference untouched");
            continue;
        }
        document.set_attr(job.node, job.attr, format!("{}/{key}", ctx.public_base));
    }

    document.to_html()
}
