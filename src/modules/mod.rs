//! Module resolution: file-system access, path handling and the export
//! table cache.

pub mod cache;
pub mod error;
pub mod fs;
pub mod paths;

pub use cache::ModuleCache;
pub use error::{ResolveError, ResolveResult};
pub use fs::{DirEntry, FileSystem, MemoryFileSystem, StdFileSystem};
