use std::fmt;
use std::ops::Range;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Create,
    Delete,
    Modify,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperationKind::Create => "Create",
            OperationKind::Delete => "Delete",
            OperationKind::Modify => "Modify",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedRoot {
    pub name: String,
    pub path: PathBuf,
}

impl TrackedRoot {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self { name, path }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub search: String,
    pub replace: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeRecord {
    Create { path: String, content: String },
    Delete { path: String },
    Modify { path: String, edits: Vec<Edit> },
}

impl ChangeRecord {
    pub fn path(&self) -> &str {
        match self {
            ChangeRecord::Create { path, .. }
            | ChangeRecord::Delete { path }
            | ChangeRecord::Modify { path, .. } => path,
        }
    }

    pub fn kind(&self) -> OperationKind {
        match self {
            ChangeRecord::Create { .. } => OperationKind::Create,
            ChangeRecord::Delete { .. } => OperationKind::Delete,
            ChangeRecord::Modify { .. } => OperationKind::Modify,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub kind: OperationKind,
    pub raw_path: String,
    pub byte_range: Range<usize>,
}

impl Segment {
    pub fn text<'a>(&self, input: &'a str) -> &'a str {
        &input[self.byte_range.clone()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionTier {
    AbsoluteExists,
    RootRelativeExists,
    AbsolutePrefixMatch,
    AbsoluteTrusted,
    DefaultRoot,
}

impl fmt::Display for ResolutionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResolutionTier::AbsoluteExists => "absolute-exists",
            ResolutionTier::RootRelativeExists => "root-relative-exists",
            ResolutionTier::AbsolutePrefixMatch => "absolute-prefix-match",
            ResolutionTier::AbsoluteTrusted => "absolute-trusted",
            ResolutionTier::DefaultRoot => "default-root",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    pub path: PathBuf,
    pub tier: ResolutionTier,
}

impl ResolvedPath {
    pub fn as_path(&self) -> &Path {
        &self.path
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeEntry {
    pub raw_path: String,
    pub kind: OperationKind,
    pub success: bool,
    pub detail: String,
}

impl fmt::Display for OutcomeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.success { "[OK]" } else { "[FAILED]" };
        write!(
            f,
            "{:<8} {} {}: {}",
            status, self.kind, self.raw_path, self.detail
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl Summary {
    pub fn from_outcomes(outcomes: &[OutcomeEntry]) -> Self {
        let succeeded = outcomes.iter().filter(|o| o.success).count();
        Self {
            total: outcomes.len(),
            succeeded,
            failed: outcomes.len() - succeeded,
        }
    }
}
