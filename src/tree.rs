//! Tag propagation across the directory tree
//!
//! Two operations mutate tag sets in bulk: applying tags to a whole subtree,
//! and inheriting a parent's tags. Both run as an explicit two-phase
//! algorithm: first the subtree is enumerated into a plain list of paths via
//! the [`SubtreeWalker`] collaborator, then registration and union are
//! applied in a second pass. The registry is never mutated while an iterator
//! derived from it is live, and the end state is the same no matter what
//! order the walker yields paths in.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::registry::{Registry, RegistryError};

type Result<T> = std::result::Result<T, RegistryError>;

/// Enumerates the descendant directories of a root path.
///
/// The filesystem walk is a collaborator, not core logic, so it sits behind
/// a trait; tests substitute a fixed list of paths.
pub trait SubtreeWalker {
    /// Every directory path strictly below `root` (the root itself excluded)
    fn descendants(&self, root: &Path) -> Vec<PathBuf>;
}

/// [`SubtreeWalker`] backed by a real filesystem walk
#[derive(Debug, Default, Clone, Copy)]
pub struct FsWalker;

impl SubtreeWalker for FsWalker {
    fn descendants(&self, root: &Path) -> Vec<PathBuf> {
        WalkDir::new(root)
            .min_depth(1)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|entry| entry.file_type().is_dir())
            .map(walkdir::DirEntry::into_path)
            .collect()
    }
}

/// Apply `tags` to every descendant of `root`.
///
/// Descendants already registered get the tags unioned into their sets;
/// unknown descendants are materialized with exactly `tags`. Directories
/// outside the subtree are untouched.
pub fn apply_tags_to_subtree(
    registry: &mut Registry,
    walker: &dyn SubtreeWalker,
    root: &Path,
    tags: &BTreeSet<String>,
) {
    // Phase one: enumerate. Phase two: mutate.
    let descendants = walker.descendants(root);

    for path in descendants {
        if registry.lookup(&path).is_some() {
            // Path is known to be present; the merge cannot fail.
            let _ = registry.merge_tags(&path, tags);
        } else {
            registry.register(path, tags);
        }
    }
}

/// Union the parent directory's tags into the directory at `path`.
///
/// The parent must already be registered; ancestors are never created
/// implicitly. With `recursive` set, the parent's tags also propagate through
/// the whole subtree below `path`.
///
/// # Errors
/// Returns [`RegistryError::NotFound`] if `path` itself is not registered,
/// and [`RegistryError::ParentNotRegistered`] if its direct parent is not.
/// On error no tag set has been touched.
pub fn inherit_parent_tags(
    registry: &mut Registry,
    walker: &dyn SubtreeWalker,
    path: &Path,
    recursive: bool,
) -> Result<()> {
    registry.get(path)?;

    let parent = path
        .parent()
        .and_then(|parent_path| registry.lookup(parent_path))
        .ok_or_else(|| RegistryError::ParentNotRegistered(path.display().to_string()))?;

    let parent_tags = parent.tags().clone();
    registry.merge_tags(path, &parent_tags)?;

    if recursive {
        apply_tags_to_subtree(registry, walker, path, &parent_tags);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Walker returning a canned subtree, independent of any real filesystem
    struct FixedWalker(Vec<PathBuf>);

    impl SubtreeWalker for FixedWalker {
        fn descendants(&self, root: &Path) -> Vec<PathBuf> {
            self.0
                .iter()
                .filter(|path| path.starts_with(root) && path.as_path() != root)
                .cloned()
                .collect()
        }
    }

    fn tags(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn subtree_apply_reaches_known_and_unknown_descendants() {
        let mut registry = Registry::new();
        registry.register("/root", ["top"]);
        registry.register("/root/a", ["existing"]);
        registry.register("/elsewhere", ["other"]);

        let walker = FixedWalker(vec![
            PathBuf::from("/root/a"),
            PathBuf::from("/root/b"),
            PathBuf::from("/root/a/deep"),
        ]);

        apply_tags_to_subtree(&mut registry, &walker, Path::new("/root"), &tags(&["x"]));

        // Known descendant: union.
        let a = registry.lookup("/root/a").unwrap();
        assert!(a.tags().contains("existing"));
        assert!(a.tags().contains("x"));
        // Unknown descendants: materialized with exactly the applied tags.
        assert_eq!(registry.lookup("/root/b").unwrap().tags(), &tags(&["x"]));
        assert_eq!(registry.lookup("/root/a/deep").unwrap().tags(), &tags(&["x"]));
        // Outside the subtree: untouched.
        assert_eq!(registry.lookup("/elsewhere").unwrap().tags(), &tags(&["other"]));
        assert!(!registry.lookup("/root").unwrap().tags().contains("x"));
    }

    #[test]
    fn subtree_apply_end_state_is_order_independent() {
        let forward = FixedWalker(vec![PathBuf::from("/r/a"), PathBuf::from("/r/a/b")]);
        let backward = FixedWalker(vec![PathBuf::from("/r/a/b"), PathBuf::from("/r/a")]);

        let mut first = Registry::new();
        first.register("/r", ["seed"]);
        let mut second = first.clone();

        apply_tags_to_subtree(&mut first, &forward, Path::new("/r"), &tags(&["t"]));
        apply_tags_to_subtree(&mut second, &backward, Path::new("/r"), &tags(&["t"]));

        assert_eq!(first.entries(), second.entries());
    }

    #[test]
    fn inherit_unions_parent_tags() {
        let mut registry = Registry::new();
        registry.register("/p", ["inherited"]);
        registry.register("/p/child", ["own"]);

        let walker = FixedWalker(vec![]);
        inherit_parent_tags(&mut registry, &walker, Path::new("/p/child"), false).unwrap();

        let child = registry.lookup("/p/child").unwrap();
        assert!(child.tags().contains("own"));
        assert!(child.tags().contains("inherited"));
    }

    #[test]
    fn inherit_is_idempotent() {
        let mut registry = Registry::new();
        registry.register("/p", ["a", "b"]);
        registry.register("/p/child", ["c"]);

        let walker = FixedWalker(vec![]);
        inherit_parent_tags(&mut registry, &walker, Path::new("/p/child"), false).unwrap();
        let once = registry.lookup("/p/child").unwrap().tags().clone();

        inherit_parent_tags(&mut registry, &walker, Path::new("/p/child"), false).unwrap();
        assert_eq!(registry.lookup("/p/child").unwrap().tags(), &once);
    }

    #[test]
    fn inherit_without_registered_parent_fails_cleanly() {
        let mut registry = Registry::new();
        registry.register("/orphan/child", ["own"]);
        let before = registry.lookup("/orphan/child").unwrap().tags().clone();

        let walker = FixedWalker(vec![]);
        let result = inherit_parent_tags(&mut registry, &walker, Path::new("/orphan/child"), true);

        assert!(matches!(result, Err(RegistryError::ParentNotRegistered(_))));
        // No partial mutation.
        assert_eq!(registry.lookup("/orphan/child").unwrap().tags(), &before);
    }

    #[test]
    fn recursive_inherit_propagates_parent_tags_down_the_subtree() {
        let mut registry = Registry::new();
        registry.register("/p", ["fam"]);
        registry.register("/p/child", Vec::<String>::new());

        let walker = FixedWalker(vec![PathBuf::from("/p/child/grand")]);
        inherit_parent_tags(&mut registry, &walker, Path::new("/p/child"), true).unwrap();

        assert!(registry.lookup("/p/child").unwrap().tags().contains("fam"));
        assert!(registry.lookup("/p/child/grand").unwrap().tags().contains("fam"));
    }
}
