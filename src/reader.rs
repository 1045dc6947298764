//! Platform directory-reading backends.
//!
//! The traversal logic in [`FileEnumerator`](crate::FileEnumerator) is
//! platform-agnostic; only the act of reading one directory is delegated
//! here. Two backends implement the same contract and one is selected at
//! build time:
//!
//! - **Windows**: the directory scan itself reports each entry's metadata,
//!   so the reader takes size and type straight from the scan record.
//! - **POSIX**: the scan reports names only; the reader issues a
//!   link-aware `lstat` per entry.
//!
//! Both open lazily (construction just stores the path), degrade to an
//! empty directory when the path cannot be read, and release the OS handle
//! on drop, so abandoning enumeration early cannot leak handles.

use std::fs::{self, ReadDir};
use std::path::{Path, PathBuf};

use crate::error::{EnumError, ErrorCallback};
use crate::info::{FileInfo, RawMetadata};

/// Produces the ordered sequence of entries for exactly one directory.
///
/// Entry order is whatever the underlying directory read returns —
/// platform and filesystem dependent, deliberately unspecified.
pub(crate) trait DirectoryReader {
    /// Pull the next entry, or `None` at end-of-directory.
    ///
    /// A directory that cannot be opened yields end-of-directory on the
    /// first call; individual entries that cannot be inspected are
    /// skipped. Failures are reported through the error callback, never
    /// propagated.
    fn read_next(&mut self) -> Option<FileInfo>;
}

#[cfg(windows)]
pub(crate) use find::FindHandleReader as PlatformReader;
#[cfg(not(windows))]
pub(crate) use stat::StatReader as PlatformReader;

enum State {
    Unopened,
    Open(ReadDir),
    Done,
}

/// Report a skipped path through the callback, if one is registered.
fn report(on_error: Option<&ErrorCallback>, err: &EnumError) {
    tracing::debug!(path = %err.path().display(), error = %err, "skipping unreadable path");
    if let Some(cb) = on_error {
        cb(err.path(), err);
    }
}

/// Open `dir` for reading, reporting failure as an empty directory.
fn open_dir(dir: &Path, on_error: Option<&ErrorCallback>) -> Option<ReadDir> {
    match fs::read_dir(dir) {
        Ok(rd) => {
            tracing::trace!(path = %dir.display(), "opened directory");
            Some(rd)
        }
        Err(e) => {
            report(on_error, &EnumError::from_io(dir.to_path_buf(), e));
            None
        }
    }
}

/// Synthesize the `..` entry for an opened directory.
///
/// Metadata comes from inspecting the parent itself; if that fails the
/// entry still appears, with [`RawMetadata::Empty`].
fn dot_dot_entry(dir: &Path, wrap: fn(fs::Metadata) -> RawMetadata) -> FileInfo {
    let (size, raw) = match fs::symlink_metadata(dir.join("..")) {
        Ok(md) => (md.len(), wrap(md)),
        Err(_) => (0, RawMetadata::Empty),
    };
    FileInfo {
        name: "..".to_string(),
        is_dir: true,
        is_symlink: false,
        size,
        raw,
    }
}

#[cfg(windows)]
mod find {
    use super::*;

    /// Windows-style backend: iterate the directory's find handle and read
    /// each entry's metadata out of the scan record — no extra syscall per
    /// entry.
    pub(crate) struct FindHandleReader {
        dir: PathBuf,
        yield_dot_dot: bool,
        on_error: Option<ErrorCallback>,
        state: State,
    }

    impl FindHandleReader {
        pub(crate) fn new(
            dir: PathBuf,
            yield_dot_dot: bool,
            on_error: Option<ErrorCallback>,
        ) -> Self {
            Self {
                dir,
                yield_dot_dot,
                on_error,
                state: State::Unopened,
            }
        }
    }

    impl DirectoryReader for FindHandleReader {
        fn read_next(&mut self) -> Option<FileInfo> {
            loop {
                match &mut self.state {
                    State::Unopened => {
                        self.state = match open_dir(&self.dir, self.on_error.as_ref()) {
                            Some(rd) => State::Open(rd),
                            None => State::Done,
                        };
                        if matches!(self.state, State::Open(_)) && self.yield_dot_dot {
                            return Some(dot_dot_entry(&self.dir, RawMetadata::FindData));
                        }
                    }
                    State::Open(rd) => match rd.next() {
                        Some(Ok(entry)) => {
                            // On Windows the scan record already carries
                            // the metadata; this does not hit the disk
                            // again and does not follow links.
                            let md = match entry.metadata() {
                                Ok(md) => md,
                                Err(e) => {
                                    report(
                                        self.on_error.as_ref(),
                                        &EnumError::from_io(entry.path(), e),
                                    );
                                    continue;
                                }
                            };
                            return Some(FileInfo {
                                name: entry.file_name().to_string_lossy().into_owned(),
                                is_dir: md.is_dir(),
                                is_symlink: md.file_type().is_symlink(),
                                size: md.len(),
                                raw: RawMetadata::FindData(md),
                            });
                        }
                        Some(Err(e)) => {
                            report(
                                self.on_error.as_ref(),
                                &EnumError::from_io(self.dir.clone(), e),
                            );
                        }
                        None => {
                            self.state = State::Done;
                        }
                    },
                    State::Done => return None,
                }
            }
        }
    }
}

#[cfg(not(windows))]
mod stat {
    use super::*;

    /// POSIX-style backend: read entry names from the open directory
    /// handle, then `lstat` each one for type and size. Links are
    /// classified without being followed.
    pub(crate) struct StatReader {
        dir: PathBuf,
        yield_dot_dot: bool,
        on_error: Option<ErrorCallback>,
        state: State,
    }

    impl StatReader {
        pub(crate) fn new(
            dir: PathBuf,
            yield_dot_dot: bool,
            on_error: Option<ErrorCallback>,
        ) -> Self {
            Self {
                dir,
                yield_dot_dot,
                on_error,
                state: State::Unopened,
            }
        }
    }

    impl DirectoryReader for StatReader {
        fn read_next(&mut self) -> Option<FileInfo> {
            loop {
                match &mut self.state {
                    State::Unopened => {
                        self.state = match open_dir(&self.dir, self.on_error.as_ref()) {
                            Some(rd) => State::Open(rd),
                            None => State::Done,
                        };
                        if matches!(self.state, State::Open(_)) && self.yield_dot_dot {
                            return Some(dot_dot_entry(&self.dir, RawMetadata::Stat));
                        }
                    }
                    State::Open(rd) => match rd.next() {
                        Some(Ok(entry)) => {
                            let path = entry.path();
                            // lstat: classify the link itself, never the
                            // target. Entries deleted mid-scan just drop
                            // out here.
                            let md = match fs::symlink_metadata(&path) {
                                Ok(md) => md,
                                Err(e) => {
                                    report(
                                        self.on_error.as_ref(),
                                        &EnumError::from_io(path, e),
                                    );
                                    continue;
                                }
                            };
                            return Some(FileInfo {
                                name: entry.file_name().to_string_lossy().into_owned(),
                                is_dir: md.is_dir(),
                                is_symlink: md.file_type().is_symlink(),
                                size: md.len(),
                                raw: RawMetadata::Stat(md),
                            });
                        }
                        Some(Err(e)) => {
                            report(
                                self.on_error.as_ref(),
                                &EnumError::from_io(self.dir.clone(), e),
                            );
                        }
                        None => {
                            self.state = State::Done;
                        }
                    },
                    State::Done => return None,
                }
            }
        }
    }
}
