#![doc = "bucket-deploy-core: core logic library for bucket-deploy."]

//! This crate holds the provider-agnostic parts of a static-site deploy:
//! local file enumeration, header policy, progress rendering and the
//! upload/prune reconciliation against an [`contract::ObjectStore`].
//!
//! # Usage
//! Implement [`contract::ObjectStore`] for a storage provider and call [`deploy::deploy`].

pub mod config;
pub mod contract;
pub mod deploy;
pub mod error;
pub mod headers;
pub mod local_files;
pub mod progress;
