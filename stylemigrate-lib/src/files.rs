use crate::error::{MigrateError, Result};
use std::fs;
use std::path::Path;

/// Reads a whole file as UTF-8 text.
pub fn read_text(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|source| MigrateError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("read {} ({} bytes)", path.display(), content.len());
    Ok(content)
}

/// Overwrites a whole file with `content`.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| MigrateError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("wrote {} ({} bytes)", path.display(), content.len());
    Ok(())
}
