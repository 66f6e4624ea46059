use crate::error::PatchResult;
use crate::operations::apply_record;
use crate::parser::{parse, ParsedSegment};
use crate::resolver::resolve;
use crate::types::{ChangeRecord, OperationKind, OutcomeEntry, TrackedRoot};

pub const PHASES: [OperationKind; 3] = [
    OperationKind::Create,
    OperationKind::Delete,
    OperationKind::Modify,
];

pub fn apply_patch_text(text: &str, roots: &[TrackedRoot]) -> Vec<OutcomeEntry> {
    let parsed = parse(text);
    if parsed.is_empty() {
        log::info!("No recognizable operations in input");
        return Vec::new();
    }
    apply_parsed(&parsed, roots)
}

pub fn apply_parsed(parsed: &[ParsedSegment], roots: &[TrackedRoot]) -> Vec<OutcomeEntry> {
    let mut outcomes = Vec::with_capacity(parsed.len());

    for phase in PHASES {
        for item in parsed.iter().filter(|p| p.segment.kind == phase) {
            let result = match &item.record {
                Ok(record) => apply_one(record, roots).map_err(|e| e.to_string()),
                Err(e) => Err(e.to_string()),
            };

            let (success, detail) = match result {
                Ok(detail) => {
                    log::info!("{} {}: {}", phase, item.segment.raw_path, detail);
                    (true, detail)
                }
                Err(detail) => {
                    log::warn!("{} {} failed: {}", phase, item.segment.raw_path, detail);
                    (false, detail)
                }
            };
            outcomes.push(OutcomeEntry {
                raw_path: item.segment.raw_path.clone(),
                kind: phase,
                success,
                detail,
            });
        }
    }

    outcomes
}

fn apply_one(record: &ChangeRecord, roots: &[TrackedRoot]) -> PatchResult<String> {
    let resolved = resolve(record.path(), roots)?;
    apply_record(record, resolved.as_path())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_empty_input_yields_no_outcomes() {
        let dir = tempdir().unwrap();
        let roots = vec![TrackedRoot::from_path(dir.path())];
        assert!(apply_patch_text("", &roots).is_empty());
        assert!(apply_patch_text("Sure! Nothing to change here.", &roots).is_empty());
    }

    #[test]
    fn test_outcomes_follow_phase_order() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("old.txt"), "bye").unwrap();
        fs::write(dir.path().join("keep.txt"), "v1\n").unwrap();
        let roots = vec![TrackedRoot::from_path(dir.path())];

        let text = "Updated path: keep.txt\nReplace:\n```\nv1\n```\nWith:\n```\nv2\n```\n\
                    Delete: old.txt\n\
                    New: fresh.txt\nContent:\n```\nhi\n```\n";
        let outcomes = apply_patch_text(text, &roots);

        let kinds: Vec<OperationKind> = outcomes.iter().map(|o| o.kind).collect();
        assert_eq!(
            kinds,
            vec![
                OperationKind::Create,
                OperationKind::Delete,
                OperationKind::Modify
            ]
        );
        assert!(outcomes.iter().all(|o| o.success), "{:?}", outcomes);
        assert_eq!(fs::read_to_string(dir.path().join("keep.txt")).unwrap(), "v2\n");
        assert!(!dir.path().join("old.txt").exists());
        assert_eq!(fs::read_to_string(dir.path().join("fresh.txt")).unwrap(), "hi\n");
    }

    #[test]
    fn test_failure_does_not_abort_batch() {
        let dir = tempdir().unwrap();
        let roots = vec![TrackedRoot::from_path(dir.path())];

        let text = "Delete: missing.txt\nNew: made.txt\nContent:\n```\nok\n```\nNew: broken.txt\n";
        let outcomes = apply_patch_text(text, &roots);

        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[0].success);
        assert_eq!(outcomes[0].raw_path, "made.txt");
        assert!(!outcomes[1].success);
        assert_eq!(outcomes[1].detail, "no content block found");
        assert!(!outcomes[2].success);
        assert!(outcomes[2].detail.contains("not found"));
        assert!(dir.path().join("made.txt").exists());
    }

    #[test]
    fn test_relative_path_without_roots() {
        let outcomes = apply_patch_text("New: x.txt\nContent:\n```\nx\n```\n", &[]);
        assert_eq!(outcomes.len(), 1);
        assert!(!outcomes[0].success);
        assert!(outcomes[0].detail.contains("no tracked roots"));
    }
}
