pub mod fence;
pub mod record_parser;
pub mod segmenter;

use crate::error::PatchResult;
use crate::types::{ChangeRecord, Segment};

#[derive(Debug)]
pub struct ParsedSegment {
    pub segment: Segment,
    pub record: PatchResult<ChangeRecord>,
}

pub fn parse(content: &str) -> Vec<ParsedSegment> {
    segmenter::segment(content)
        .into_iter()
        .map(|segment| {
            let record = record_parser::parse_segment(content, &segment);
            if let Err(e) = &record {
                log::debug!("{} '{}' failed to parse: {}", segment.kind, segment.raw_path, e);
            }
            ParsedSegment { segment, record }
        })
        .collect()
}
