//! # direnum
//!
//! Blocking breadth-first filesystem enumerator — lazy, embeddable, zero opinions.
//!
//! direnum walks the entries under a root path, optionally recursing into
//! subdirectories, filtering by entry kind ([`FileTypes`]) and shell-glob
//! pattern (`*`, `?`, literals). It is a pull-based iterator: each call to
//! [`FileEnumerator::next_path`] does just enough blocking I/O to produce
//! the next match. Intended for batch and background use — do not drive it
//! from a latency-sensitive or UI thread.
//!
//! Result order is breadth-first per directory: every entry of one
//! directory is returned before any entry of a subdirectory. Order *within*
//! a directory is whatever the platform's directory read yields.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! for path in direnum::enumerate("photos").recursive(true).pattern("*.jpg").build() {
//!     println!("{}", path.display());
//! }
//! ```
//!
//! # Entry metadata
//!
//! [`FileEnumerator::info`] returns the [`FileInfo`] snapshot captured for
//! the most recently returned path:
//!
//! ```rust,no_run
//! let mut e = direnum::enumerate("logs").build();
//! while let Some(path) = e.next_path() {
//!     println!("{} ({} bytes)", path.display(), e.info().size());
//! }
//! ```
//!
//! # Error handling
//!
//! Enumeration degrades rather than aborts: an unreadable directory
//! (permission denied, deleted mid-walk, not a directory — the root
//! included) enumerates as empty and traversal continues. Callers that
//! want visibility register a callback:
//!
//! ```rust
//! use std::sync::Arc;
//!
//! let mut e = direnum::enumerate("/definitely/not/here")
//!     .on_error(Arc::new(|path, err| {
//!         eprintln!("skipped {}: {err}", path.display());
//!     }))
//!     .build();
//! assert_eq!(e.next_path(), None);
//! ```

#![forbid(unsafe_code)]

mod builder;
mod enumerator;
mod error;
mod info;
mod pattern;
mod reader;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::EnumeratorBuilder;
pub use enumerator::{FileEnumerator, FileTypes, FolderSearchPolicy};
pub use error::{EnumError, ErrorCallback};
pub use info::{FileInfo, RawMetadata};

use std::path::{Path, PathBuf};

// ── Entry points ──────────────────────────────────────────────────────────────

/// Create a new [`EnumeratorBuilder`] rooted at `root`.
///
/// `root` may or may not end in a separator; it is not inspected until the
/// first [`next_path`](FileEnumerator::next_path) call.
///
/// # Example
///
/// ```rust,no_run
/// use direnum::{FileTypes, FolderSearchPolicy};
///
/// let docs = direnum::enumerate("docs")
///     .recursive(true)
///     .file_types(FileTypes::files_only())
///     .pattern("*.md")
///     .folder_policy(FolderSearchPolicy::All)
///     .build();
///
/// let count = docs.count();
/// println!("{count} markdown files");
/// ```
pub fn enumerate(root: impl AsRef<Path>) -> EnumeratorBuilder {
    EnumeratorBuilder::new(root)
}

/// Join one component onto a base path.
///
/// This is the same join the enumerator uses to build returned paths
/// (`<base>/<component>`), exposed for callers assembling comparison paths.
///
/// ```rust
/// use std::path::Path;
///
/// let joined = direnum::append("a/b", "c.txt");
/// assert_eq!(joined, Path::new("a/b").join("c.txt"));
/// ```
pub fn append(base: impl AsRef<Path>, component: impl AsRef<Path>) -> PathBuf {
    base.as_ref().join(component)
}
