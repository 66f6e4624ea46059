use super::fence::{read_fenced_block, read_introduced_block, skip_blank_lines};
use crate::error::{PatchError, PatchResult};
use crate::types::{ChangeRecord, Edit, OperationKind, Segment};

pub const INTRO_CONTENT: &str = "Content:";
pub const INTRO_REPLACE: &str = "Replace:";
pub const INTRO_WITH: &str = "With:";

pub fn parse_segment(input: &str, segment: &Segment) -> PatchResult<ChangeRecord> {
    let lines: Vec<&str> = segment.text(input).split_inclusive('\n').collect();
    // lines[0] is the header itself.
    let body = 1.min(lines.len());
    let path = segment.raw_path.clone();

    match segment.kind {
        OperationKind::Delete => Ok(ChangeRecord::Delete { path }),
        OperationKind::Create => {
            let content = parse_create_body(&lines, body).ok_or(PatchError::NoContentBlock)?;
            Ok(ChangeRecord::Create { path, content })
        }
        OperationKind::Modify => {
            let edits = parse_replace_pairs(&lines, body);
            if edits.is_empty() {
                return Err(PatchError::NoReplacePairs);
            }
            Ok(ChangeRecord::Modify { path, edits })
        }
    }
}

fn parse_create_body(lines: &[&str], start: usize) -> Option<String> {
    let intro = (start..lines.len()).find(|&i| lines[i].trim() == INTRO_CONTENT)?;
    let fence_idx = skip_blank_lines(lines, intro + 1);
    read_fenced_block(lines, fence_idx).map(|(content, _)| content)
}

fn parse_replace_pairs(lines: &[&str], start: usize) -> Vec<Edit> {
    let mut edits = Vec::new();
    let mut idx = start;

    while idx < lines.len() {
        if lines[idx].trim() != INTRO_REPLACE {
            idx += 1;
            continue;
        }

        let pair = read_introduced_block(lines, idx, INTRO_REPLACE).and_then(|(search, next)| {
            read_introduced_block(lines, next, INTRO_WITH)
                .map(|(replace, after)| (Edit { search, replace }, after))
        });

        match pair {
            Some((edit, after)) => {
                edits.push(edit);
                idx = after;
            }
            None => {
                log::debug!("Incomplete replace pair at segment line {}", idx + 1);
                idx += 1;
            }
        }
    }

    edits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::segmenter::segment;

    fn parse_one(input: &str) -> PatchResult<ChangeRecord> {
        let segments = segment(input);
        assert_eq!(segments.len(), 1);
        parse_segment(input, &segments[0])
    }

    #[test]
    fn test_parse_create() {
        let input = "New: src/new.py\nContent:\n```python\ndef f():\n    return 1\n```\n";
        let record = parse_one(input).unwrap();
        assert_eq!(
            record,
            ChangeRecord::Create {
                path: "src/new.py".to_string(),
                content: "def f():\n    return 1\n".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_create_without_block() {
        let input = "New: src/new.py\nContent:\nno fence here\n";
        assert!(matches!(parse_one(input), Err(PatchError::NoContentBlock)));

        let input = "New: src/new.py\n```\ncontent without introducer\n```\n";
        assert!(matches!(parse_one(input), Err(PatchError::NoContentBlock)));
    }

    #[test]
    fn test_parse_delete() {
        let record = parse_one("Delete: /tmp/proj/old.py").unwrap();
        assert_eq!(
            record,
            ChangeRecord::Delete {
                path: "/tmp/proj/old.py".to_string()
            }
        );
    }

    #[test]
    fn test_parse_modify_multiple_pairs() {
        let input = "Updated path: a.rs\n\
                     Replace:\n```rust\nold_one\n```\nWith:\n```rust\nnew_one\n```\n\
                     Some commentary.\n\
                     Replace:\n\n```\nold_two\n```\n\nWith:\n```\nnew_two\n```\n";
        let record = parse_one(input).unwrap();
        let ChangeRecord::Modify { path, edits } = record else {
            panic!("Expected Modify record");
        };
        assert_eq!(path, "a.rs");
        assert_eq!(
            edits,
            vec![
                Edit {
                    search: "old_one\n".to_string(),
                    replace: "new_one\n".to_string()
                },
                Edit {
                    search: "old_two\n".to_string(),
                    replace: "new_two\n".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_parse_modify_skips_incomplete_pair() {
        let input = "Updated path: a.rs\n\
                     Replace:\n```\norphan\n```\nno with here\n\
                     Replace:\n```\nold\n```\nWith:\n```\nnew\n```\n";
        let ChangeRecord::Modify { edits, .. } = parse_one(input).unwrap() else {
            panic!("Expected Modify record");
        };
        assert_eq!(edits.len(), 1);
        assert_eq!(edits[0].search, "old\n");
    }

    #[test]
    fn test_parse_modify_without_pairs() {
        let input = "Updated path: a.rs\nI changed the function signature.\n";
        assert!(matches!(parse_one(input), Err(PatchError::NoReplacePairs)));
    }
}
