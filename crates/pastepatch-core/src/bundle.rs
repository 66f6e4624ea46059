use crate::parser::fence::FENCE;
use crate::parser::record_parser::{INTRO_CONTENT, INTRO_REPLACE, INTRO_WITH};
use crate::parser::segmenter::{HEADER_CREATE, HEADER_DELETE, HEADER_MODIFY};
use std::fs;
use std::path::Path;

pub fn system_prompt() -> String {
    format!(
        "Code changes should be formatted like so:\n\
         {HEADER_MODIFY} /home/example/path.py\n\
         {INTRO_REPLACE}\n\
         {FENCE}\n<original exact code block here>\n{FENCE}\n\
         {INTRO_WITH}\n\
         {FENCE}\n<new code block that replaces original>\n{FENCE}\n\n\
         Several {INTRO_REPLACE}/{INTRO_WITH} pairs may follow one {HEADER_MODIFY} line.\n\n\
         File deletions should be formatted like:\n\
         {HEADER_DELETE} /home/example/path.py\n\n\
         New files like:\n\
         {HEADER_CREATE} /home/example/path.py\n\
         {INTRO_CONTENT}\n\
         {FENCE}\n<new file code block here>\n{FENCE}\n\n\
         Start every header at the beginning of its own line. \
         Make sure all indentation and formatting is correct within old and new code blocks."
    )
}

pub fn build_bundle<P: AsRef<Path>>(context: &str, files: &[P]) -> String {
    let mut output = Vec::new();

    let context = context.trim();
    if !context.is_empty() {
        output.push(format!("Context:\n{}\n", context));
    }

    output.push("Files:".to_string());
    for file in files {
        let path = file.as_ref();
        let shown = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        match fs::read_to_string(path) {
            Ok(content) => {
                output.push(format!(
                    "File: {}\n{FENCE}\n{}\n{FENCE}\n",
                    shown.display(),
                    content
                ));
            }
            Err(e) => {
                log::warn!("Skipping unreadable file {:?}: {}", path, e);
                output.push(format!(
                    "File: {} (Error reading file: {})\n",
                    shown.display(),
                    e
                ));
            }
        }
    }

    output.join("\n")
}
