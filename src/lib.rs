//! # page_mirror
//!
//! An async page-rewriting and resource-mirroring pipeline: fetch a web
//! page, route its internal navigation through a local proxy endpoint,
//! download the static resources it references into a per-request
//! workspace, and return the reconstructed markup.
//!
//! ## Overview
//!
//! [`PageMirror::render`] fetches the target page, rewrites every internal
//! reference on anchor, stylesheet-link, script, image and form elements
//! to `{proxy_endpoint}?url=<absolute-url>` (so following a link re-enters
//! the pipeline), concurrently fetches the referenced stylesheets, scripts
//! and images into a uniquely named workspace on a [`Storage`] backend
//! (local filesystem, S3, or your own implementation), rewrites the
//! successfully mirrored references to `{public_base}/{workspace}/{file}`,
//! and serializes the result.
//!
//! The crate is the pipeline only. It expects an HTTP shell around it that
//! routes `{proxy_endpoint}?url=...` back into [`PageMirror::render`] and
//! serves the storage root read-only at `{public_base}`.
//!
//! External references (those already carrying an `http`/`https` scheme)
//! are never rewritten or mirrored. A page that cannot be fetched fails
//! the whole request; a resource that cannot be fetched is logged and its
//! reference left untouched.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use page_mirror::{FsStorage, PageMirrorBuilder};
//!
//! # async fn example() -> page_mirror::Result<()> {
//! let mirror = PageMirrorBuilder::new(FsStorage::new("static/resources"))
//!     .public_base("/static/resources")
//!     .proxy_endpoint("/proxy")
//!     .build()?;
//!
//! let markup = mirror.render("http://example.com/").await?;
//! // Hand `markup` to the shell's template; serve `static/resources`
//! // read-only at `/static/resources`.
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `s3` | **yes** | Enables [`S3Storage`] and re-exports from `aws-sdk-s3` / `aws-config`. |
//! | `rustls-tls` | no | Use `rustls` instead of the platform TLS for the AWS SDK. |

pub mod config;
pub mod error;
pub mod pipeline;
pub mod storage;

mod document;
mod fetch;
mod mirror;
mod naming;
mod resolve;
mod rewrite;

pub use config::PageMirrorBuilder;
pub use error::{PageMirrorError, Result};
pub use pipeline::PageMirror;
#[cfg(feature = "s3")]
pub use storage::{Credentials, Region, S3Client, S3Config, S3ConfigBuilder, S3Storage};
pub use storage::{FsStorage, Storage};
