//! # contract: Storage provider interface
//!
//! This module defines a single trait (`ObjectStore`) and the plain request types
//! the reconciler hands to it. Everything provider-specific (authentication,
//! retries, region, transport) lives behind the trait in the implementor.
//!
//! ## Interface & Extensibility
//! - Implement [`ObjectStore`] to deploy to a new provider (the CLI crate ships an S3 client).
//! - All methods are async and return [`BoxError`] on failure.
//! - Calls are issued strictly one at a time by the reconciler; implementors need no
//!   internal ordering guarantees of their own.
//!
//! ## Mocking & Testing
//! - The trait is annotated for `mockall`, so consumers get `MockObjectStore` with
//!   the `test-export-mocks` feature (on by default).

use std::path::PathBuf;

use async_trait::async_trait;

#[cfg(any(test, feature = "test-export-mocks"))]
use mockall::automock;

pub use crate::error::BoxError;

/// Everything needed to write one local file to the bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutObjectRequest {
    pub bucket: String,
    /// Bucket-relative key; always the basename of `path`.
    pub key: String,
    /// Local file to stream as the object body. Opened by the implementor right before the write.
    pub path: PathBuf,
    pub content_type: String,
    pub cache_control: String,
}

/// Trait for the four storage operations a deploy consumes.
///
/// Listings are treated as point-in-time snapshots. A successful `put_object`
/// is expected to be visible to a subsequent `list_objects` in the same run.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Names of all buckets accessible to the current credentials.
    async fn list_buckets(&self) -> Result<Vec<String>, BoxError>;

    /// Keys of every object currently in `bucket`, in listing order.
    async fn list_objects(&self, bucket: String) -> Result<Vec<String>, BoxError>;

    /// Upload a file. Returns the location reported by the provider, if any.
    async fn put_object(&self, req: PutObjectRequest) -> Result<Option<String>, BoxError>;

    /// Delete a single object by key.
    async fn delete_object(&self, bucket: String, key: String) -> Result<(), BoxError>;
}
