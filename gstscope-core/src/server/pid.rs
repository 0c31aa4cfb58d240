use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A pid file written by this process.
#[derive(Debug)]
pub struct PidFile {
    path: PathBuf,
}

impl PidFile {
    pub fn write(path: &Path) -> Result<Self> {
        fs::write(path, std::process::id().to_string())
            .with_context(|| format!("failed to write pid file {}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Best-effort removal.
    pub fn remove(&self) {
        if let Err(e) = fs::remove_file(&self.path) {
            tracing::debug!(error = %e, pid_file = %self.path.display(), "pid file not removed");
        }
    }
}
