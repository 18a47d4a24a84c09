//! Enumerates the files to deploy from the source directory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use crate::error::DeployError;
use crate::headers;

/// A file in the source directory. Its object key is its basename; directory structure is not kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    pub name: String,
    pub path: PathBuf,
}

impl LocalFile {
    /// Builds a `LocalFile` keyed by the basename of `path`.
    ///
    /// Two paths with the same basename map to the same key, whatever directory they live in.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self, DeployError> {
        let path = path.into();
        let name = match path.file_name() {
            Some(name) => name.to_str().map(str::to_owned).ok_or_else(|| {
                error!(path = %path.display(), "File name is not valid UTF-8");
                DeployError::filesystem(
                    &path,
                    std::io::Error::new(
                        std::io::ErrorKind::InvalidData,
                        "file name is not valid UTF-8",
                    ),
                )
            })?,
            None => {
                error!(path = %path.display(), "Path has no file name");
                return Err(DeployError::filesystem(
                    &path,
                    std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name"),
                ));
            }
        };
        Ok(LocalFile { name, path })
    }

    pub fn key(&self) -> &str {
        &self.name
    }

    pub fn content_type(&self) -> &'static str {
        headers::content_type_for(&self.path)
    }

    pub fn cache_control(&self) -> &'static str {
        headers::cache_control_for(&self.path)
    }
}

/// Lists the entries directly inside `dir`, sorted by name.
///
/// No recursion and no filtering: a subdirectory is returned like any other entry
/// and fails later at upload time.
pub fn list_local_files(dir: &Path) -> Result<Vec<LocalFile>, DeployError> {
    info!(dir = %dir.display(), "Enumerating local files");

    let entries = fs::read_dir(dir).map_err(|e| {
        error!(dir = %dir.display(), error = ?e, "Failed to read source directory");
        DeployError::filesystem(dir, e)
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            error!(dir = %dir.display(), error = ?e, "Failed to read directory entry");
            DeployError::filesystem(dir, e)
        })?;
        let file = LocalFile::from_path(entry.path())?;
        debug!(name = %file.name, "Found local file");
        files.push(file);
    }
    files.sort_by(|a, b| a.name.cmp(&b.name));

    info!(count = files.len(), "Local files enumerated");
    Ok(files)
}
