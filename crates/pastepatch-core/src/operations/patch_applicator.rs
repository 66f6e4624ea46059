use super::file_operations::{read_text, remove_regular_file, require_existing, write_text};
use crate::error::{PatchError, PatchResult};
use crate::matcher::substitute;
use crate::types::{ChangeRecord, Edit};
use std::path::Path;

pub fn apply_record(record: &ChangeRecord, target: &Path) -> PatchResult<String> {
    match record {
        ChangeRecord::Create { content, .. } => create_file(target, content),
        ChangeRecord::Delete { .. } => delete_file(target),
        ChangeRecord::Modify { edits, .. } => modify_file(target, edits),
    }
}

pub fn create_file(target: &Path, content: &str) -> PatchResult<String> {
    write_text(target, content)?;
    Ok(format!("created {} ({} bytes)", target.display(), content.len()))
}

pub fn delete_file(target: &Path) -> PatchResult<String> {
    remove_regular_file(target)?;
    Ok(format!("deleted {}", target.display()))
}

pub fn modify_file(target: &Path, edits: &[Edit]) -> PatchResult<String> {
    require_existing(target)?;

    let mut failed = Vec::new();
    for (i, edit) in edits.iter().enumerate() {
        let content = read_text(target)?;
        let Some(sub) = substitute(&content, &edit.search, &edit.replace) else {
            log::debug!("Edit {}/{} on {:?}: search block not found", i + 1, edits.len(), target);
            failed.push(i + 1);
            continue;
        };

        log::debug!(
            "Edit {}/{} on {:?}: {} occurrence(s), {} match",
            i + 1,
            edits.len(),
            target,
            sub.occurrences,
            sub.tier
        );
        write_text(target, &sub.content)?;
    }

    if !failed.is_empty() {
        return Err(PatchError::SearchNotFound {
            applied: edits.len() - failed.len(),
            total: edits.len(),
            failed,
        });
    }

    Ok(format!(
        "modified {} ({} edit{})",
        target.display(),
        edits.len(),
        if edits.len() == 1 { "" } else { "s" }
    ))
}
