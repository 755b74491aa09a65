//! Writing generated scripts to disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ToolpickError};

/// File name suggested when the user saves a script.
pub const DEFAULT_SCRIPT_NAME: &str = "install-dev-env.sh";

/// Write `content` to `path` and mark it executable on Unix.
///
/// # Errors
///
/// Returns `ScriptWriteError` if the file cannot be created or written.
/// A failure to set the executable bit is logged, not returned: the script
/// is on disk and can still be run with `bash <path>`.
pub fn write_script(path: &Path, content: &str) -> Result<PathBuf> {
    fs::write(path, content).map_err(|e| ToolpickError::ScriptWriteError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if let Err(e) = make_executable(path) {
        tracing::warn!("Could not mark {} executable: {}", path.display(), e);
    }

    tracing::info!("Wrote script to {}", path.display());
    Ok(path.to_path_buf())
}

#[cfg(unix)]
fn make_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
