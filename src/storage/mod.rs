//! Pluggable storage backends for mirrored resources.
//!
//! Every resource fetched for a request is written under a key of the form
//! `{workspace-id}/{sanitized-filename}`; the HTTP shell exposes the
//! storage root read-only at the configured public base path.
//!
//! Two backends ship with the crate:
//!
//! - [`FsStorage`] -- writes to the local filesystem.
//! - [`S3Storage`] -- writes to an Amazon S3 (or compatible) bucket, for
//!   deployments that serve mirrored resources from object storage
//!   (requires the `s3` feature).
//!
//! Implement the [`Storage`] trait to supply your own backend.

mod fs;
#[cfg(feature = "s3")]
mod s3;

#[cfg(feature = "s3")]
pub use aws_config::Region;
#[cfg(feature = "s3")]
pub use aws_sdk_s3::config::Credentials;
#[cfg(feature = "s3")]
pub use aws_sdk_s3::{Client as S3Client, Config as S3Config, config::Builder as S3ConfigBuilder};
pub use fs::FsStorage;
#[cfg(feature = "s3")]
pub use s3::S3Storage;

use crate::error::Result;

use std::future::Future;

/// Trait for backends that persist fetched resource bytes.
///
/// Implementations must be `Send + Sync + 'static` so one backend can be
/// shared by every request the pipeline serves.
///
/// # Implementing a custom backend
///
/// ```rust,no_run
/// use page_mirror::{Result, Storage};
///
/// struct MyStorage;
///
/// impl Storage for MyStorage {
///     async fn put(&self, key: &str, content: &[u8], content_type: &str) -> Result<()> {
///         // write content somewhere ...
///         Ok(())
///     }
/// }
/// ```
pub trait Storage: Send + Sync + 'static {
    /// Persist `content` under the given workspace-relative `key`.
    ///
    /// `content_type` is the MIME type the origin reported for the
    /// resource (`application/octet-stream` when it reported none);
    /// backends that serve content directly should forward it.
    fn put(
        &self,
        key: &str,
        content: &[u8],
        content_type: &str,
    ) -> impl Future<Output = Result<()>> + Send;
}
