pub const FENCE: &str = "```";

pub fn is_opening_fence(line: &str) -> bool {
    match line.trim().strip_prefix(FENCE) {
        Some(tag) => tag.chars().all(|c| c.is_alphanumeric() || c == '_'),
        None => false,
    }
}

/// Any line starting with three backticks closes a block, including ones that
/// were meant as a nested opening fence.
pub fn is_closing_fence(line: &str) -> bool {
    line.trim_start().starts_with(FENCE)
}

pub fn skip_blank_lines(lines: &[&str], mut idx: usize) -> usize {
    while idx < lines.len() && lines[idx].trim().is_empty() {
        idx += 1;
    }
    idx
}

pub fn read_fenced_block(lines: &[&str], start: usize) -> Option<(String, usize)> {
    if !lines.get(start).is_some_and(|l| is_opening_fence(l)) {
        return None;
    }

    let body_start = start + 1;
    let close = lines[body_start..]
        .iter()
        .position(|l| is_closing_fence(l))
        .map(|offset| body_start + offset)?;

    Some((lines[body_start..close].concat(), close + 1))
}

pub fn read_introduced_block(
    lines: &[&str],
    start: usize,
    introducer: &str,
) -> Option<(String, usize)> {
    let idx = skip_blank_lines(lines, start);
    if lines.get(idx).map(|l| l.trim()) != Some(introducer) {
        return None;
    }
    let fence_idx = skip_blank_lines(lines, idx + 1);
    read_fenced_block(lines, fence_idx)
}
