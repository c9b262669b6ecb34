//! Temporary staging of uploaded documents.

use std::path::{Path, PathBuf};

use tracing::warn;
use uuid::Uuid;

/// A staged upload on disk, exclusively owned by the one in-flight request
/// that created it.
///
/// The file is removed exactly once: explicitly via [`StagedFile::remove`]
/// once the forwarding outcome is known, or by the `Drop` backstop on any
/// path that never gets there. Removal failures are logged and swallowed;
/// they never replace the forwarding outcome.
pub struct StagedFile {
    path: PathBuf,
    removed: bool,
}

impl StagedFile {
    /// Write `bytes` to a uniquely-named file under `dir`, creating the
    /// directory if needed.
    pub async fn create(dir: &Path, bytes: &[u8]) -> std::io::Result<Self> {
        tokio::fs::create_dir_all(dir).await?;
        let path = dir.join(format!("upload-{}.pdf", Uuid::new_v4()));
        tokio::fs::write(&path, bytes).await?;
        Ok(Self {
            path,
            removed: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the staged file now that the outcome of the forwarding call
    /// is known.
    pub fn remove(mut self) {
        self.removed = true;
        remove_logged(&self.path);
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        if !self.removed {
            self.removed = true;
            remove_logged(&self.path);
        }
    }
}

fn remove_logged(path: &Path) {
    if let Err(err) = std::fs::remove_file(path) {
        warn!(path = %path.display(), error = %err, "failed to remove staged upload");
    }
}
