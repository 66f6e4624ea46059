use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatchError {
    #[error("no content block found")]
    NoContentBlock,

    #[error("no replace pairs found")]
    NoReplacePairs,

    #[error("cannot resolve '{raw_path}': no tracked roots and path is not absolute")]
    Unresolvable { raw_path: String },

    #[error("file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("is a directory, refusing to delete: {}", .path.display())]
    IsDirectory { path: PathBuf },

    #[error(
        "search block not found for edit {} of {total} ({applied} applied)",
        join_indices(.failed)
    )]
    SearchNotFound {
        failed: Vec<usize>,
        total: usize,
        applied: usize,
    },

    #[error("{0:#}")]
    Io(anyhow::Error),
}

impl From<anyhow::Error> for PatchError {
    fn from(err: anyhow::Error) -> Self {
        PatchError::Io(err)
    }
}

pub type PatchResult<T> = Result<T, PatchError>;

fn join_indices(indices: &[usize]) -> String {
    indices
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
