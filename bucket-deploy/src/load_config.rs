//! `load_config` module: turns parsed CLI arguments (with their environment fallbacks)
//! into a [`DeployConfig`].
//!
//! There is no configuration file. Region and start delay come from flags or from
//! `AWS_REGION` / `BUCKET_DEPLOY_DELAY_SECS`, which `main` may have populated from `.env`.
//!
//! # Errors
//! Uses `anyhow::Error`; failures surface at the CLI boundary.
use crate::cli::Cli;
use anyhow::Result;
use bucket_deploy_core::config::DeployConfig;
use std::time::Duration;
use tracing::{error, info};

/// Returns `Ok(None)` when the source directory or the bucket was not supplied (or is empty).
pub fn load_config(cli: &Cli) -> Result<Option<DeployConfig>> {
    let (dist, bucket) = match (&cli.dist, &cli.bucket) {
        (Some(dist), Some(bucket)) if !dist.as_os_str().is_empty() && !bucket.is_empty() => {
            (dist, bucket)
        }
        _ => {
            info!(
                dist = ?cli.dist,
                bucket = ?cli.bucket,
                "Positional arguments incomplete"
            );
            return Ok(None);
        }
    };

    if cli.region.trim().is_empty() {
        error!("Region is empty");
        anyhow::bail!("Region must not be empty");
    }

    let config = DeployConfig {
        source_dir: dist.clone(),
        bucket: bucket.clone(),
        region: cli.region.clone(),
        start_delay: Duration::from_secs(cli.delay_secs),
    };
    config.trace_loaded();
    Ok(Some(config))
}
