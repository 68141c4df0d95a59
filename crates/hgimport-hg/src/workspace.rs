use crate::error::{HgError, HgResult};
use std::path::Path;

/// Check that `dir` holds the workspace marker directory (`.hg` for Mercurial).
pub fn ensure_workspace_root(dir: &Path, marker: &str) -> HgResult<()> {
    if dir.join(marker).is_dir() {
        Ok(())
    } else {
        Err(HgError::NotWorkspaceRoot {
            dir: dir.to_path_buf(),
            marker: marker.to_string(),
        })
    }
}
