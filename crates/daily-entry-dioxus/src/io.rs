use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Entry path is a directory: {0}")]
    IsDirectory(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read the markdown that seeds the entry editor.
///
/// A missing file is not an error; the editor simply starts empty.
pub fn read_entry(path: &Path) -> Result<Option<String>, IoError> {
    if !path.exists() {
        return Ok(None);
    }
    if path.is_dir() {
        return Err(IoError::IsDirectory(path.to_path_buf()));
    }
    Ok(Some(fs::read_to_string(path)?))
}
