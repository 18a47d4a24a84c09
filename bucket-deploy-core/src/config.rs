use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

pub const DEFAULT_REGION: &str = "eu-west-1";
pub const DEFAULT_START_DELAY: Duration = Duration::from_secs(5);

/// Inputs for a single deploy run.
#[derive(Debug, Clone)]
pub struct DeployConfig {
    /// Directory holding the build artifacts.
    pub source_dir: PathBuf,
    pub bucket: String,
    /// Provider region, handed to the storage client at construction.
    pub region: String,
    /// Pause before the first upload so the operator can still abort.
    pub start_delay: Duration,
}

impl DeployConfig {
    pub fn new(source_dir: impl Into<PathBuf>, bucket: impl Into<String>) -> Self {
        DeployConfig {
            source_dir: source_dir.into(),
            bucket: bucket.into(),
            region: DEFAULT_REGION.to_string(),
            start_delay: DEFAULT_START_DELAY,
        }
    }

    pub fn trace_loaded(&self) {
        info!(
            source_dir = %self.source_dir.display(),
            bucket = %self.bucket,
            region = %self.region,
            start_delay_secs = self.start_delay.as_secs(),
            "Loaded DeployConfig"
        );
        debug!(?self, "DeployConfig loaded (full debug)");
    }
}
