use std::path::{Path, PathBuf};

use crate::enumerator::{FileEnumerator, FileTypes, FolderSearchPolicy};
use crate::error::ErrorCallback;

// ---------------------------------------------------------------------------
// EnumeratorBuilder
// ---------------------------------------------------------------------------

/// Entry point for configuring a [`FileEnumerator`].
///
/// Created via [`direnum::enumerate()`](crate::enumerate). Configure with
/// chained builder methods, then call [`build()`](EnumeratorBuilder::build).
///
/// # Example
///
/// ```rust,ignore
/// let mut files = direnum::enumerate("photos")
///     .recursive(true)
///     .pattern("*.jpg")
///     .folder_policy(FolderSearchPolicy::All)
///     .build();
/// ```
pub struct EnumeratorBuilder {
    root: PathBuf,
    recursive: bool,
    types: FileTypes,
    pattern: Option<String>,
    policy: FolderSearchPolicy,
    on_error: Option<ErrorCallback>,
}

impl EnumeratorBuilder {
    pub(crate) fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            recursive: false,
            types: FileTypes::default(),
            pattern: None,
            policy: FolderSearchPolicy::default(),
            on_error: None,
        }
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    /// Also enumerate subdirectories. Off by default.
    ///
    /// Traversal is breadth-first: all entries of one directory are
    /// returned before any entry of its subdirectories.
    pub fn recursive(mut self, yes: bool) -> Self {
        self.recursive = yes;
        self
    }

    /// Which entry kinds to emit. Defaults to [`FileTypes::files_only`].
    ///
    /// This gates results only — recursion descends into directories even
    /// when `dirs` is unset.
    pub fn file_types(mut self, types: FileTypes) -> Self {
        self.types = types;
        self
    }

    // ── Matching ──────────────────────────────────────────────────────────

    /// Only emit entries whose name matches this shell-glob pattern, e.g.
    /// `"*.txt"` or `"Foo???.doc"`. `*` and `?` are wildcards; everything
    /// else matches literally. Unset (or empty) matches all entries.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// How the pattern interacts with recursion. Defaults to
    /// [`FolderSearchPolicy::MatchOnly`], where non-matching directory
    /// names are not descended into.
    pub fn folder_policy(mut self, policy: FolderSearchPolicy) -> Self {
        self.policy = policy;
        self
    }

    // ── Observation ───────────────────────────────────────────────────────

    /// Register a callback for directories skipped as unreadable.
    ///
    /// Enumeration degrades silently by default; the callback adds
    /// visibility without changing traversal behavior.
    pub fn on_error(mut self, cb: ErrorCallback) -> Self {
        self.on_error = Some(cb);
        self
    }

    // ── Build ─────────────────────────────────────────────────────────────

    /// Construct the enumerator.
    ///
    /// Never fails: a root that does not exist or is not a directory is
    /// detected lazily, on the first [`next_path`] call, which then simply
    /// returns `None`.
    ///
    /// [`next_path`]: FileEnumerator::next_path
    pub fn build(self) -> FileEnumerator {
        FileEnumerator::new(
            self.root,
            self.recursive,
            self.types,
            self.pattern,
            self.policy,
            self.on_error,
        )
    }
}
