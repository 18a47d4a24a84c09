#![doc = "S3 integration: implements the core `ObjectStore` trait on top of `aws-sdk-s3`."]
//
//! # S3 client
//!
//! [`S3Store`] is the concrete [`ObjectStore`] used by the CLI. Credentials come from
//! the provider's default chain; the region is an explicit value handed over at
//! construction rather than process-wide state.
//!
//! Each method issues exactly one logical request (listings follow pagination
//! until exhausted) and never retries on its own beyond what the SDK does.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;

use bucket_deploy_core::contract::{BoxError, ObjectStore, PutObjectRequest};

pub struct S3Store {
    client: Client,
    region: String,
}

impl S3Store {
    /// Builds a client for `region`, resolving credentials from the environment.
    pub async fn connect(region: &str) -> Self {
        let shared = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;
        tracing::info!(region, "Initialized S3 client");
        S3Store {
            client: Client::new(&shared),
            region: region.to_string(),
        }
    }
}

/// Virtual-hosted-style URL of an object.
pub fn object_url(bucket: &str, region: &str, key: &str) -> String {
    format!("https://{bucket}.s3.{region}.amazonaws.com/{key}")
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn list_buckets(&self) -> Result<Vec<String>, BoxError> {
        tracing::info!("Listing buckets");
        let resp = self.client.list_buckets().send().await.map_err(|e| {
            tracing::error!(error = ?e, "Failed to list buckets");
            e
        })?;
        let names: Vec<String> = resp
            .buckets()
            .iter()
            .filter_map(|b| b.name().map(str::to_owned))
            .collect();
        tracing::info!(count = names.len(), "Fetched bucket names");
        Ok(names)
    }

    async fn list_objects(&self, bucket: String) -> Result<Vec<String>, BoxError> {
        tracing::info!(bucket = %bucket, "Listing objects in bucket");
        let mut pages = self
            .client
            .list_objects_v2()
            .bucket(&bucket)
            .into_paginator()
            .send();

        let mut keys = Vec::new();
        while let Some(page) = pages.next().await {
            let page = page.map_err(|e| {
                tracing::error!(bucket = %bucket, error = ?e, "Failed to list objects");
                e
            })?;
            keys.extend(
                page.contents()
                    .iter()
                    .filter_map(|obj| obj.key().map(str::to_owned)),
            );
        }
        tracing::info!(bucket = %bucket, count = keys.len(), "Fetched object keys");
        Ok(keys)
    }

    async fn put_object(&self, req: PutObjectRequest) -> Result<Option<String>, BoxError> {
        tracing::info!(
            bucket = %req.bucket,
            key = %req.key,
            path = %req.path.display(),
            "Uploading object"
        );
        let body = ByteStream::from_path(&req.path).await.map_err(|e| {
            tracing::error!(
                error = ?e,
                path = %req.path.display(),
                "Failed to open file for upload"
            );
            e
        })?;

        self.client
            .put_object()
            .bucket(&req.bucket)
            .key(&req.key)
            .body(body)
            .content_type(&req.content_type)
            .cache_control(&req.cache_control)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = ?e, key = %req.key, "API error uploading object");
                e
            })?;

        let location = object_url(&req.bucket, &self.region, &req.key);
        tracing::info!(location = %location, "Successfully uploaded object");
        Ok(Some(location))
    }

    async fn delete_object(&self, bucket: String, key: String) -> Result<(), BoxError> {
        tracing::info!(bucket = %bucket, key = %key, "Deleting object");
        self.client
            .delete_object()
            .bucket(&bucket)
            .key(&key)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = ?e, key = %key, "API error deleting object");
                e
            })?;
        tracing::info!(key = %key, "Successfully deleted object");
        Ok(())
    }
}
