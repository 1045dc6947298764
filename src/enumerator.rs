use std::path::PathBuf;

use crate::error::ErrorCallback;
use crate::info::FileInfo;
use crate::pattern::glob_match;
use crate::reader::{DirectoryReader, PlatformReader};

// ---------------------------------------------------------------------------
// Filter types
// ---------------------------------------------------------------------------

/// Which entry kinds the enumerator emits as results.
///
/// `files`/`dirs` select what reaches the caller; they never affect which
/// directories are recursed into. `include_dot_dot` adds one synthetic `..`
/// entry per enumerated directory. `show_sym_links` makes symbolic links
/// visible as leaf entries; they are skipped entirely when unset.
#[derive(Debug, Clone, Copy)]
pub struct FileTypes {
    pub files: bool,
    pub dirs: bool,
    pub include_dot_dot: bool,
    pub show_sym_links: bool,
}

impl Default for FileTypes {
    fn default() -> Self {
        Self::files_only()
    }
}

impl FileTypes {
    /// Emit only regular files.
    pub fn files_only() -> Self {
        Self {
            files: true,
            dirs: false,
            include_dot_dot: false,
            show_sym_links: false,
        }
    }

    /// Emit only directories.
    pub fn dirs_only() -> Self {
        Self {
            files: false,
            dirs: true,
            include_dot_dot: false,
            show_sym_links: false,
        }
    }

    /// Emit both files and directories.
    pub fn all() -> Self {
        Self {
            files: true,
            dirs: true,
            include_dot_dot: false,
            show_sym_links: false,
        }
    }

    /// Also emit a synthetic `..` entry per enumerated directory.
    pub fn with_dot_dot(mut self) -> Self {
        self.include_dot_dot = true;
        self
    }

    /// Also emit symbolic links as leaf entries.
    pub fn with_sym_links(mut self) -> Self {
        self.show_sym_links = true;
        self
    }
}

/// How the glob pattern interacts with recursion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FolderSearchPolicy {
    /// Recursion only descends into directories whose names match the
    /// pattern; the interior of a non-matching directory is never visited.
    #[default]
    MatchOnly,

    /// Recursion descends into every directory; the pattern only decides
    /// which entries are emitted.
    All,
}

// ---------------------------------------------------------------------------
// FileEnumerator
// ---------------------------------------------------------------------------

/// Blocking, pull-based enumerator over the entries beneath a root path.
///
/// Created via [`enumerate()`](crate::enumerate). Each call to
/// [`next_path`](Self::next_path) may perform blocking I/O; do not drive
/// one from a latency-sensitive thread. One instance is single-caller;
/// independent instances share no state.
///
/// Traversal is breadth-first per directory: every entry of the currently
/// open directory is returned before any entry of a subdirectory. Within
/// one directory, order is whatever the platform's directory read yields.
pub struct FileEnumerator {
    recursive: bool,
    types: FileTypes,
    pattern: Option<String>,
    policy: FolderSearchPolicy,
    on_error: Option<ErrorCallback>,

    /// Directories discovered but not yet opened. LIFO; combined with the
    /// exhaust-before-descend loop this still yields breadth-first output.
    pending: Vec<PathBuf>,
    current: Option<OpenDir>,
    info: FileInfo,
}

/// The one directory currently being read.
struct OpenDir {
    path: PathBuf,
    reader: PlatformReader,
}

impl FileEnumerator {
    pub(crate) fn new(
        root: PathBuf,
        recursive: bool,
        types: FileTypes,
        pattern: Option<String>,
        policy: FolderSearchPolicy,
        on_error: Option<ErrorCallback>,
    ) -> Self {
        // A normalized empty pattern means match-all; drop it so the hot
        // loop tests a single Option.
        let pattern = pattern.filter(|p| !p.is_empty());
        Self {
            recursive,
            types,
            pattern,
            policy,
            on_error,
            pending: vec![root],
            current: None,
            info: FileInfo::default(),
        }
    }

    /// Return the next matching path, or `None` when enumeration is
    /// finished. Exhaustion is terminal and idempotent: once `None` is
    /// returned, every further call returns `None`.
    ///
    /// Returned paths incorporate the root passed to the builder
    /// (`<root>/sub/name`); if the root was absolute, so are the results.
    ///
    /// A root that does not exist or cannot be read is not an error — the
    /// first call simply returns `None`. Unreadable subdirectories are
    /// skipped and traversal continues.
    pub fn next_path(&mut self) -> Option<PathBuf> {
        loop {
            let pulled = match self.current.as_mut() {
                // Pull from the open directory, building the full path
                // while the directory is at hand.
                Some(cur) => match cur.reader.read_next() {
                    Some(entry) => {
                        let full = crate::append(&cur.path, entry.name());
                        Some((entry, full))
                    }
                    None => None,
                },
                // Nothing open: move to the next pending directory, or
                // finish.
                None => {
                    let Some(dir) = self.pending.pop() else {
                        // Terminal: reset the captured info to the sentinel
                        // so info() is consistent from here on.
                        self.info = FileInfo::default();
                        return None;
                    };
                    let reader = PlatformReader::new(
                        dir.clone(),
                        self.types.include_dot_dot,
                        self.on_error.clone(),
                    );
                    self.current = Some(OpenDir { path: dir, reader });
                    continue;
                }
            };

            let Some((entry, full)) = pulled else {
                self.current = None;
                continue;
            };

            if entry.is_symlink() && !self.types.show_sym_links {
                continue;
            }

            let is_dot_dot = entry.name() == "..";

            // Directories are queued regardless of the type filter; only
            // MatchOnly lets the pattern prune the descent. `..` is never
            // queued — recursing upward would not terminate.
            if self.recursive && entry.is_directory() && !is_dot_dot {
                let descend = match self.policy {
                    FolderSearchPolicy::All => true,
                    FolderSearchPolicy::MatchOnly => self.pattern_matched(entry.name()),
                };
                if descend {
                    self.pending.push(full.clone());
                }
            }

            let type_matched = if entry.is_directory() {
                self.types.dirs
            } else {
                self.types.files
            };
            if type_matched && self.pattern_matched(entry.name()) {
                self.info = entry;
                return Some(full);
            }
        }
    }

    /// Info captured for the most recently returned path.
    ///
    /// Before the first successful [`next_path`](Self::next_path) and after
    /// exhaustion this returns the empty sentinel (`FileInfo::default()`,
    /// for which [`FileInfo::is_empty`] is true); it never fails.
    pub fn info(&self) -> &FileInfo {
        &self.info
    }

    fn pattern_matched(&self, name: &str) -> bool {
        match &self.pattern {
            Some(pat) => glob_match(pat, name),
            None => true,
        }
    }
}

impl Iterator for FileEnumerator {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        self.next_path()
    }
}
