use crate::error::{TaskError, TaskResult};
use std::env;
use std::io;
use std::path::PathBuf;

/// Resolves the workspace root directory.
pub fn workspace_root() -> TaskResult<PathBuf> {
    let manifest_dir = env::var_os("CARGO_MANIFEST_DIR").ok_or_else(|| {
        TaskError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            "CARGO_MANIFEST_DIR environment variable is not set",
        ))
    })?;
    let mut path = PathBuf::from(manifest_dir);
    if !path.pop() {
        return Err(TaskError::Io(io::Error::other(
            "failed to locate workspace root",
        )));
    }
    Ok(path)
}
