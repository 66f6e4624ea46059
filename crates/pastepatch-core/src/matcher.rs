use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    Exact,
    NormalizedLineEndings,
    NormalizedTrimmed,
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MatchTier::Exact => "exact",
            MatchTier::NormalizedLineEndings => "line-endings normalized",
            MatchTier::NormalizedTrimmed => "normalized and trimmed",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub content: String,
    pub tier: MatchTier,
    pub occurrences: usize,
}

// Tiers 2 and 3 return CRLF-normalized content.
pub fn substitute(content: &str, search: &str, replace: &str) -> Option<Substitution> {
    if let Some(sub) = replace_all(content, search, replace, MatchTier::Exact) {
        return Some(sub);
    }

    let norm_content = normalize_line_endings(content);
    let norm_search = normalize_line_endings(search);
    if let Some(sub) = replace_all(
        &norm_content,
        &norm_search,
        replace,
        MatchTier::NormalizedLineEndings,
    ) {
        return Some(sub);
    }

    replace_all(
        &norm_content,
        norm_search.trim(),
        replace,
        MatchTier::NormalizedTrimmed,
    )
}

pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n")
}

fn replace_all(content: &str, search: &str, replace: &str, tier: MatchTier) -> Option<Substitution> {
    // An empty needle matches everywhere; treat it as no match.
    if search.is_empty() {
        return None;
    }
    let occurrences = content.matches(search).count();
    if occurrences == 0 {
        return None;
    }
    Some(Substitution {
        content: content.replace(search, replace),
        tier,
        occurrences,
    })
}
