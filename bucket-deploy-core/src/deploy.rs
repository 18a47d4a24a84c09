//! High-level pipeline: validate bucket → enumerate files → upload → prune.
//!
//! This module makes the bucket's contents match the source directory:
//!   - Confirms the target bucket exists before touching anything else
//!   - Uploads every local file under its basename, with content-type and cache headers
//!   - Lists the bucket again and deletes every key that has no local counterpart
//!
//! # Responsibilities
//! - Strictly sequential: one storage call in flight at a time, in enumeration/listing order
//! - Fail-fast: the first error of any kind ends the run; nothing is retried or rolled back
//! - Console progress through [`ProgressReporter`], structured logs through `tracing`
//!
//! # Error Handling
//! Every step returns a [`DeployError`]; callers log it and surface it to the operator.
//! The bar of the phase that failed is left as last drawn.
//!
//! # Navigation
//! - Main entrypoint: [`deploy`]
//! - Phases: [`validate_bucket`], [`upload_all`], [`prune_unused`]

use std::collections::HashSet;
use std::io::Write;

use serde::Serialize;
use tracing::{debug, error, info};

use crate::config::DeployConfig;
use crate::contract::{ObjectStore, PutObjectRequest};
use crate::error::DeployError;
use crate::local_files::{list_local_files, LocalFile};
use crate::progress::{inclusive_fraction, ProgressReporter};

/// Outcome of a completed run.
#[derive(Debug, Clone, Serialize)]
pub struct DeployReport {
    pub bucket: String,
    pub uploaded: Vec<UploadedObject>,
    pub deleted: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UploadedObject {
    pub key: String,
    pub content_type: String,
    pub cache_control: String,
    pub location: Option<String>,
}

/// Runs a full deploy of `config.source_dir` into `config.bucket`, drawing progress to `out`.
pub async fn deploy<S, W>(
    config: &DeployConfig,
    store: &S,
    out: W,
) -> Result<DeployReport, DeployError>
where
    S: ObjectStore + ?Sized,
    W: Write,
{
    info!(
        bucket = %config.bucket,
        source_dir = %config.source_dir.display(),
        "[DEPLOY] Starting deploy"
    );
    let mut reporter = ProgressReporter::new(out);

    validate_bucket(store, &config.bucket).await?;

    let files = list_local_files(&config.source_dir)?;

    emit(
        &mut reporter,
        &format!(
            "Deploy from {} to {}\nFiles to upload: {}\nStarting in {} seconds, press Ctrl+C to abort",
            config.source_dir.display(),
            config.bucket,
            files.len(),
            config.start_delay.as_secs()
        ),
    );
    if !config.start_delay.is_zero() {
        info!(delay_secs = config.start_delay.as_secs(), "[DEPLOY] Waiting before upload");
        tokio::time::sleep(config.start_delay).await;
    }

    let uploaded = upload_all(store, &config.bucket, &files, &mut reporter).await?;
    let deleted = prune_unused(store, &config.bucket, &files, &mut reporter).await?;

    emit(&mut reporter, "\nDeployed successfully!\n");

    let report = DeployReport {
        bucket: config.bucket.clone(),
        uploaded,
        deleted,
    };
    info!(
        uploaded = report.uploaded.len(),
        deleted = report.deleted.len(),
        "[DEPLOY] Deploy complete"
    );
    match serde_json::to_string_pretty(&report) {
        Ok(json) => debug!(json = %json, "[DEPLOY][DEBUG] Report as JSON"),
        Err(e) => error!(error = ?e, "[DEPLOY][DEBUG] Failed to serialize report as JSON"),
    }
    Ok(report)
}

/// Fails with [`DeployError::Configuration`] unless `bucket` is visible to the store's credentials.
pub async fn validate_bucket<S>(store: &S, bucket: &str) -> Result<(), DeployError>
where
    S: ObjectStore + ?Sized,
{
    let buckets = store.list_buckets().await.map_err(|e| {
        error!(error = ?e, "[DEPLOY][ERROR] list_buckets failed");
        DeployError::transfer("list buckets", None, e)
    })?;

    if !buckets.iter().any(|b| b == bucket) {
        error!(bucket, available = buckets.len(), "[DEPLOY][ERROR] Bucket does not exist");
        return Err(DeployError::Configuration(format!(
            "Bucket {bucket} does not exist!"
        )));
    }

    info!(bucket, "[DEPLOY] Bucket found");
    Ok(())
}

/// Uploads every file in order, stopping at the first failure.
///
/// After each upload the bar shows `index / total`; a final full bar is always drawn,
/// even when `files` is empty.
pub async fn upload_all<S, W>(
    store: &S,
    bucket: &str,
    files: &[LocalFile],
    reporter: &mut ProgressReporter<W>,
) -> Result<Vec<UploadedObject>, DeployError>
where
    S: ObjectStore + ?Sized,
    W: Write,
{
    let total = files.len();
    let mut uploaded = Vec::with_capacity(total);

    for (index, file) in files.iter().enumerate() {
        let req = PutObjectRequest {
            bucket: bucket.to_string(),
            key: file.key().to_string(),
            path: file.path.clone(),
            content_type: file.content_type().to_string(),
            cache_control: file.cache_control().to_string(),
        };
        info!(
            key = %req.key,
            content_type = %req.content_type,
            cache_control = %req.cache_control,
            "[DEPLOY][UPLOAD] Uploading file"
        );

        let location = store.put_object(req.clone()).await.map_err(|e| {
            error!(key = %req.key, error = ?e, "[DEPLOY][ERROR][UPLOAD] put_object failed");
            DeployError::transfer("upload", Some(req.key.as_str()), e)
        })?;

        uploaded.push(UploadedObject {
            key: req.key,
            content_type: req.content_type,
            cache_control: req.cache_control,
            location,
        });
        draw(reporter, "Uploading", index as f64 / total as f64);
    }

    draw(reporter, "Uploading", 1.0);
    info!(count = uploaded.len(), "[DEPLOY][UPLOAD] All files uploaded");
    Ok(uploaded)
}

/// Keys in `objects` with no matching local basename, in listing order.
///
/// Presence is all that counts: a key that exists locally is never returned, whatever its content.
pub fn unused_keys(objects: &[String], files: &[LocalFile]) -> Vec<String> {
    let local: HashSet<&str> = files.iter().map(LocalFile::key).collect();
    objects
        .iter()
        .filter(|key| !local.contains(key.as_str()))
        .cloned()
        .collect()
}

/// Lists the bucket after uploads and deletes every object absent from `files`.
pub async fn prune_unused<S, W>(
    store: &S,
    bucket: &str,
    files: &[LocalFile],
    reporter: &mut ProgressReporter<W>,
) -> Result<Vec<String>, DeployError>
where
    S: ObjectStore + ?Sized,
    W: Write,
{
    let objects = store.list_objects(bucket.to_string()).await.map_err(|e| {
        error!(bucket, error = ?e, "[DEPLOY][ERROR][PRUNE] list_objects failed");
        DeployError::transfer("list objects", None, e)
    })?;

    let unused = unused_keys(&objects, files);
    info!(
        objects = objects.len(),
        unused = unused.len(),
        "[DEPLOY][PRUNE] Computed unused objects"
    );
    if unused.is_empty() {
        return Ok(unused);
    }

    emit(reporter, &format!("\nUnused objects to remove: {}\n", unused.len()));

    let count = unused.len();
    for (index, key) in unused.iter().enumerate() {
        info!(key = %key, "[DEPLOY][PRUNE] Deleting object");
        store
            .delete_object(bucket.to_string(), key.clone())
            .await
            .map_err(|e| {
                error!(key = %key, error = ?e, "[DEPLOY][ERROR][PRUNE] delete_object failed");
                DeployError::transfer("delete", Some(key.as_str()), e)
            })?;
        draw(reporter, "Cleaning", inclusive_fraction(index, count));
    }

    Ok(unused)
}

// Console output is cosmetic; a broken stdout must not fail the deploy.
fn draw<W: Write>(reporter: &mut ProgressReporter<W>, label: &str, fraction: f64) {
    if let Err(e) = reporter.redraw(label, fraction) {
        debug!(error = ?e, "Failed to draw progress bar");
    }
}

fn emit<W: Write>(reporter: &mut ProgressReporter<W>, text: &str) {
    if let Err(e) = reporter.write_str(text) {
        debug!(error = ?e, "Failed to write console message");
    }
}
