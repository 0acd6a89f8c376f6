//! Safe local filenames for mirrored resources.

use std::collections::HashSet;

use url::Url;

/// Fallback filename for URLs whose path yields nothing usable.
const FALLBACK_NAME: &str = "resource";

/// Map a resource URL to a safe local filename.
///
/// Takes the last path segment and keeps only ASCII alphanumerics plus
/// `-`, `_` and `.`. Falls back to `"resource"` when nothing survives.
/// Deterministic: the same URL always yields the same name.
pub fn safe_name(url: &Url) -> String {
    let base = url
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .unwrap_or("");
    let name: String = base
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        .collect();
    if name.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        name
    }
}

/// Allocates collision-free filenames within one request workspace.
///
/// Distinct resource URLs can sanitize to the same filename; without
/// disambiguation the later fetch would silently overwrite the earlier
/// one. The first claim of a name gets it verbatim, later claims get a
/// sequence suffix before the extension: `a.png`, `a-1.png`, `a-2.png`.
/// Claims happen in discovery order, so allocation is deterministic.
#[derive(Debug, Default)]
pub struct NameAllocator {
    taken: HashSet<String>,
}

impl NameAllocator {
    /// Create an empty allocator for a fresh workspace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a unique variant of `name` for the lifetime of this allocator.
    pub fn claim(&mut self, name: &str) -> String {
        if self.taken.insert(name.to_string()) {
            return name.to_string();
        }
        let (stem, ext) = match name.rfind('.') {
            Some(idx) if idx > 0 => name.split_at(idx),
            _ => (name, ""),
        };
        let mut n = 1u32;
        loop {
            let candidate = format!("{stem}-{n}{ext}");
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}
