use crate::types::{OperationKind, Segment};

pub const HEADER_CREATE: &str = "New:";
pub const HEADER_DELETE: &str = "Delete:";
pub const HEADER_MODIFY: &str = "Updated path:";

const HEADERS: [(&str, OperationKind); 3] = [
    (HEADER_MODIFY, OperationKind::Modify),
    (HEADER_CREATE, OperationKind::Create),
    (HEADER_DELETE, OperationKind::Delete),
];

pub fn parse_header(line: &str) -> Option<(OperationKind, &str)> {
    HEADERS.iter().find_map(|(prefix, kind)| {
        let path = line.strip_prefix(prefix)?.trim();
        if path.is_empty() {
            None
        } else {
            Some((*kind, path))
        }
    })
}

pub fn segment(content: &str) -> Vec<Segment> {
    let mut headers = Vec::new();
    let mut offset = 0;

    for line in content.split_inclusive('\n') {
        if let Some((kind, path)) = parse_header(line) {
            headers.push((offset, kind, path.to_string()));
        }
        offset += line.len();
    }

    let mut segments = Vec::with_capacity(headers.len());
    for (i, (start, kind, raw_path)) in headers.iter().enumerate() {
        let end = headers
            .get(i + 1)
            .map(|(next_start, _, _)| *next_start)
            .unwrap_or(content.len());
        segments.push(Segment {
            kind: *kind,
            raw_path: raw_path.clone(),
            byte_range: *start..end,
        });
    }

    log::debug!("Segmented input into {} operation(s)", segments.len());
    segments
}
