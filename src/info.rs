use std::fs::Metadata;

/// Snapshot of one directory entry, captured at the moment the entry was
/// read. Immutable after construction; cheap to clone.
///
/// `name` holds the entry's base name only — no path information. This is
/// in contrast to the value returned by [`FileEnumerator::next_path`],
/// which incorporates the root path passed to the builder.
///
/// [`FileEnumerator::next_path`]: crate::FileEnumerator::next_path
#[derive(Clone, Debug, Default)]
pub struct FileInfo {
    pub(crate) name: String,
    pub(crate) is_dir: bool,
    pub(crate) is_symlink: bool,
    pub(crate) size: u64,
    pub(crate) raw: RawMetadata,
}

impl FileInfo {
    /// The entry's base name.
    ///
    /// Empty for the sentinel value returned by
    /// [`FileEnumerator::info`](crate::FileEnumerator::info) before any
    /// successful `next_path()` and after exhaustion.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_directory(&self) -> bool {
        self.is_dir
    }

    /// Whether the entry is a symbolic link. Links are classified without
    /// following them, so a link to a directory reports `false` from
    /// [`is_directory`](Self::is_directory).
    pub fn is_symlink(&self) -> bool {
        self.is_symlink
    }

    /// Byte length for files; platform-defined for directories.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// The raw platform metadata captured alongside the entry.
    pub fn raw_metadata(&self) -> &RawMetadata {
        &self.raw
    }

    /// True for the empty sentinel (no entry has been captured).
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

/// Platform-native metadata record carried by a [`FileInfo`].
///
/// Exactly one platform shape is compiled per target, mirroring the
/// one-record-per-platform layout of native directory scans. Advanced
/// callers reach the full record through [`metadata`](Self::metadata) and
/// the `std::os` extension traits.
#[derive(Clone, Debug, Default)]
pub enum RawMetadata {
    /// No metadata captured. Carried by the sentinel `FileInfo` and by
    /// synthetic `..` entries whose parent could not be inspected.
    #[default]
    Empty,

    /// Record taken from the directory scan itself, as the Windows
    /// find-handle iteration reports it.
    #[cfg(windows)]
    FindData(Metadata),

    /// Record from a per-entry `lstat` on POSIX-like targets.
    #[cfg(not(windows))]
    Stat(Metadata),
}

impl RawMetadata {
    /// The captured metadata record, if any.
    pub fn metadata(&self) -> Option<&Metadata> {
        match self {
            Self::Empty => None,
            #[cfg(windows)]
            Self::FindData(m) => Some(m),
            #[cfg(not(windows))]
            Self::Stat(m) => Some(m),
        }
    }
}
