pub mod bundle;
pub mod error;
pub mod matcher;
pub mod operations;
pub mod orchestrator;
pub mod parser;
pub mod resolver;
pub mod types;

pub use bundle::{build_bundle, system_prompt};
pub use error::{PatchError, PatchResult};
pub use orchestrator::apply_patch_text;
pub use parser::parse;
pub use resolver::resolve;
pub use types::{
    ChangeRecord, Edit, OperationKind, OutcomeEntry, ResolutionTier, ResolvedPath, Segment,
    Summary, TrackedRoot,
};
