use crate::error::{PatchError, PatchResult};
use crate::types::{ResolutionTier, ResolvedPath, TrackedRoot};
use std::path::{Path, PathBuf};

/// Earlier tiers prefer files that already exist; later tiers decide where a
/// file that does not exist yet should land. Ties between roots go to the
/// first-added root.
pub fn resolve(raw_path: &str, roots: &[TrackedRoot]) -> PatchResult<ResolvedPath> {
    let normalized = raw_path.trim().replace('\\', "/");
    let candidate = PathBuf::from(&normalized);
    let is_absolute = candidate.is_absolute();

    let resolved = |path: PathBuf, tier: ResolutionTier| {
        log::debug!("Resolved '{}' to {:?} ({})", raw_path, path, tier);
        Ok(ResolvedPath { path, tier })
    };

    if is_absolute && candidate.exists() {
        return resolved(candidate, ResolutionTier::AbsoluteExists);
    }

    for root in roots {
        let joined = root.path.join(&candidate);
        if joined.exists() {
            return resolved(joined, ResolutionTier::RootRelativeExists);
        }
    }

    // Also reached with zero roots: an absolute path is trusted even then.
    if is_absolute {
        if roots.iter().any(|root| is_under(&candidate, &root.path)) {
            return resolved(candidate, ResolutionTier::AbsolutePrefixMatch);
        }
        return resolved(candidate, ResolutionTier::AbsoluteTrusted);
    }

    match roots.first() {
        Some(first) => resolved(first.path.join(&candidate), ResolutionTier::DefaultRoot),
        None => Err(PatchError::Unresolvable {
            raw_path: raw_path.to_string(),
        }),
    }
}

fn is_under(path: &Path, root: &Path) -> bool {
    path.starts_with(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_absolute_existing_path_is_verbatim() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("x.txt");
        fs::write(&file, "x").unwrap();

        let r = resolve(file.to_str().unwrap(), &[]).unwrap();
        assert_eq!(r.path, file);
        assert_eq!(r.tier, ResolutionTier::AbsoluteExists);
    }

    #[test]
    fn test_first_added_root_wins() {
        let a = tempdir().unwrap();
        let b = tempdir().unwrap();
        fs::write(a.path().join("x.txt"), "a").unwrap();
        fs::write(b.path().join("x.txt"), "b").unwrap();
        let roots = vec![
            TrackedRoot::from_path(a.path()),
            TrackedRoot::from_path(b.path()),
        ];

        let r = resolve("x.txt", &roots).unwrap();
        assert_eq!(r.path, a.path().join("x.txt"));
        assert_eq!(r.tier, ResolutionTier::RootRelativeExists);
    }

    #[test]
    fn test_relative_existing_under_second_root() {
        let a = tempdir().unwrap();
        let b = tempdir().unwrap();
        fs::create_dir_all(b.path().join("src")).unwrap();
        fs::write(b.path().join("src/lib.rs"), "").unwrap();
        let roots = vec![
            TrackedRoot::from_path(a.path()),
            TrackedRoot::from_path(b.path()),
        ];

        let r = resolve("src\\lib.rs", &roots).unwrap();
        assert_eq!(r.path, b.path().join("src/lib.rs"));
    }

    #[test]
    fn test_absolute_new_file_under_root() {
        let a = tempdir().unwrap();
        let roots = vec![TrackedRoot::from_path(a.path())];
        let target = a.path().join("new/file.rs");

        let r = resolve(target.to_str().unwrap(), &roots).unwrap();
        assert_eq!(r.path, target);
        assert_eq!(r.tier, ResolutionTier::AbsolutePrefixMatch);
    }

    #[test]
    fn test_absolute_outside_roots_is_trusted() {
        let a = tempdir().unwrap();
        let elsewhere = tempdir().unwrap();
        let target = elsewhere.path().join("missing.txt");
        let roots = vec![TrackedRoot::from_path(a.path())];

        let r = resolve(target.to_str().unwrap(), &roots).unwrap();
        assert_eq!(r.path, target);
        assert_eq!(r.tier, ResolutionTier::AbsoluteTrusted);

        let r = resolve(target.to_str().unwrap(), &[]).unwrap();
        assert_eq!(r.tier, ResolutionTier::AbsoluteTrusted);
    }

    #[test]
    fn test_relative_new_file_defaults_to_first_root() {
        let a = tempdir().unwrap();
        let b = tempdir().unwrap();
        let roots = vec![
            TrackedRoot::from_path(a.path()),
            TrackedRoot::from_path(b.path()),
        ];

        let r = resolve("  pkg/new.py ", &roots).unwrap();
        assert_eq!(r.path, a.path().join("pkg/new.py"));
        assert_eq!(r.tier, ResolutionTier::DefaultRoot);
    }

    #[test]
    fn test_relative_without_roots_fails() {
        let err = resolve("pkg/new.py", &[]).unwrap_err();
        assert!(matches!(err, PatchError::Unresolvable { .. }));
    }
}
