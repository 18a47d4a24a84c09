//! # bucket-deploy CLI Interface
//!
//! Argument parsing and the async entrypoint for the `bucket-deploy` binary.
//! All deploy logic (enumeration, headers, reconciliation, progress) lives in
//! `bucket-deploy-core`; this module wires it to the S3 client and the console.
//!
//! - Entry struct [`Cli`] defines the user-facing arguments.
//! - [`run`] is shared by `main` and the integration tests.
use crate::load_config::load_config;
use crate::s3::S3Store;
use anyhow::Result;
use bucket_deploy_core::config::DEFAULT_REGION;
use bucket_deploy_core::deploy::deploy;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

/// Deploy a directory of static build artifacts to an S3 bucket.
///
/// Every file in `DIST` is uploaded under its basename; objects in the bucket
/// with no matching local file are removed afterwards.
#[derive(Debug, Parser)]
#[clap(name = "bucket-deploy", version)]
pub struct Cli {
    /// Location of directory containing the app files
    pub dist: Option<PathBuf>,

    /// Name of the S3 bucket to upload files to
    pub bucket: Option<String>,

    /// Region of the bucket
    #[clap(long, env = "AWS_REGION", default_value = DEFAULT_REGION)]
    pub region: String,

    /// Seconds to wait before uploading, giving a chance to abort with Ctrl+C
    #[clap(long, env = "BUCKET_DEPLOY_DELAY_SECS", default_value_t = 5)]
    pub delay_secs: u64,
}

/// Extracted async CLI logic entrypoint for integration tests and main()
///
/// Errors are returned, not printed; `main` reports them.
pub async fn run(cli: Cli) -> Result<()> {
    tracing::info!("trace_initialised");

    let Some(config) = load_config(&cli)? else {
        tracing::info!("Source directory or bucket missing, printing usage");
        Cli::command().print_help()?;
        return Ok(());
    };

    let store = S3Store::connect(&config.region).await;
    let report = deploy(&config, &store, std::io::stdout()).await?;
    tracing::info!(
        command = "deploy",
        uploaded = report.uploaded.len(),
        deleted = report.deleted.len(),
        "Deploy complete"
    );
    Ok(())
}
