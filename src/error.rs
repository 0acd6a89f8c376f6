//! Error types for the `page_mirror` crate.

/// All errors that can occur while mirroring a page.
#[derive(Debug, thiserror::Error)]
pub enum PageMirrorError {
    /// The target page itself could not be retrieved (transport failure or
    /// non-success status). Fatal for the whole request.
    #[error("Failed to fetch page {url}: {source}")]
    FetchFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A single referenced resource could not be retrieved. Isolated to
    /// that reference; the rest of the request proceeds.
    #[error("Failed to fetch resource {url}: {source}")]
    ResourceFetchFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The caller supplied no URL.
    #[error("Missing URL")]
    MissingInput,

    /// The supplied URL does not parse.
    #[error("Invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// A storage backend failed to persist a mirrored resource.
    #[error("Storage upload failed: {0}")]
    StorageUpload(Box<dyn std::error::Error + Send + Sync>),

    /// The builder configuration is invalid.
    #[error("Config error: {0}")]
    Config(String),
}

/// A type alias for `Result<T, PageMirrorError>`.
pub type Result<T> = std::result::Result<T, PageMirrorError>;
