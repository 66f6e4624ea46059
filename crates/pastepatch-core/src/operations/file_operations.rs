use crate::error::{PatchError, PatchResult};
use anyhow::Context;
use std::fs;
use std::path::Path;

pub fn ensure_parent_exists(path: &Path) -> PatchResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {:?}", parent))?;
    }
    Ok(())
}

pub fn require_existing(path: &Path) -> PatchResult<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(PatchError::NotFound {
            path: path.to_path_buf(),
        })
    }
}

pub fn read_text(path: &Path) -> PatchResult<String> {
    require_existing(path)?;
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))?;
    Ok(content)
}

pub fn write_text(path: &Path, content: &str) -> PatchResult<()> {
    ensure_parent_exists(path)?;
    fs::write(path, content).with_context(|| format!("Failed to write file {:?}", path))?;
    Ok(())
}

pub fn remove_regular_file(path: &Path) -> PatchResult<()> {
    require_existing(path)?;
    if path.is_dir() {
        return Err(PatchError::IsDirectory {
            path: path.to_path_buf(),
        });
    }
    fs::remove_file(path).with_context(|| format!("Failed to remove file {:?}", path))?;
    Ok(())
}
