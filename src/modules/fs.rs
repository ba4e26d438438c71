//! File-system seam.
//!
//! The host owns the file system. The module cache and the path completer
//! only see this trait, so an editor can hand in its own virtual file system
//! and tests can count reads.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Arc;
use std::time::SystemTime;

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

pub trait FileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Last modification time. Missing files report `NotFound`.
    fn modified(&self, path: &Path) -> io::Result<SystemTime>;

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>>;
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn modified(&self, path: &Path) -> io::Result<SystemTime> {
        std::fs::metadata(path)?.modified()
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            // Follows symlinks so a linked directory lists as a directory
            let is_dir = std::fs::metadata(entry.path())
                .map(|meta| meta.is_dir())
                .unwrap_or(false);
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir,
            });
        }
        Ok(entries)
    }
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        (**self).read_to_string(path)
    }

    fn modified(&self, path: &Path) -> io::Result<SystemTime> {
        (**self).modified(path)
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        (**self).read_dir(path)
    }
}

impl<T: FileSystem + ?Sized> FileSystem for Rc<T> {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        (**self).read_to_string(path)
    }

    fn modified(&self, path: &Path) -> io::Result<SystemTime> {
        (**self).modified(path)
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        (**self).read_dir(path)
    }
}

impl<T: FileSystem + ?Sized> FileSystem for Arc<T> {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        (**self).read_to_string(path)
    }

    fn modified(&self, path: &Path) -> io::Result<SystemTime> {
        (**self).modified(path)
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        (**self).read_dir(path)
    }
}

#[derive(Debug, Clone)]
struct MemoryFile {
    content: String,
    modified: SystemTime,
}

/// In-memory [`FileSystem`] for unsaved editor buffers and tests.
///
/// Directories exist implicitly as ancestors of stored files. Every
/// successful `read_to_string` is counted.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    files: RefCell<BTreeMap<PathBuf, MemoryFile>>,
    reads: Cell<usize>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or replace a file.
    pub fn write(&self, path: impl Into<PathBuf>, content: impl Into<String>, modified: SystemTime) {
        self.files.borrow_mut().insert(
            path.into(),
            MemoryFile {
                content: content.into(),
                modified,
            },
        );
    }

    /// Change only the modification time. Returns false if the file is missing.
    pub fn touch(&self, path: &Path, modified: SystemTime) -> bool {
        match self.files.borrow_mut().get_mut(path) {
            Some(file) => {
                file.modified = modified;
                true
            }
            None => false,
        }
    }

    pub fn remove(&self, path: &Path) -> bool {
        self.files.borrow_mut().remove(path).is_some()
    }

    /// Number of file reads served so far.
    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    fn not_found(path: &Path) -> io::Error {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} does not exist", path.display()),
        )
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let files = self.files.borrow();
        let file = files.get(path).ok_or_else(|| Self::not_found(path))?;
        self.reads.set(self.reads.get() + 1);
        Ok(file.content.clone())
    }

    fn modified(&self, path: &Path) -> io::Result<SystemTime> {
        self.files
            .borrow()
            .get(path)
            .map(|file| file.modified)
            .ok_or_else(|| Self::not_found(path))
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let files = self.files.borrow();
        let mut dirs = BTreeSet::new();
        let mut entries = Vec::new();

        for file_path in files.keys() {
            let Ok(rest) = file_path.strip_prefix(path) else {
                continue;
            };
            let mut components = rest.components();
            let Some(first) = components.next() else {
                continue;
            };
            let name = first.as_os_str().to_string_lossy().into_owned();
            if components.next().is_some() {
                dirs.insert(name);
            } else {
                entries.push(DirEntry {
                    name,
                    is_dir: false,
                });
            }
        }

        if entries.is_empty() && dirs.is_empty() {
            return Err(Self::not_found(path));
        }

        entries.extend(dirs.into_iter().map(|name| DirEntry { name, is_dir: true }));
        Ok(entries)
    }
}
