//! Completion of relative paths inside `import ... from '...'` literals.

use std::path::Path;

use crate::modules::FileSystem;
use crate::modules::paths::{MODULE_EXTENSION, normalize_path, split_partial_path};
use crate::types::CompletionEntry;

/// Entries of the directory named by `typed` (relative to `document_dir`)
/// that start with the part after the last `/`.
///
/// Directories are tagged `dir`, `.js` files `file`; everything else is
/// left out. The kind comes from the listing's directory flag, not from the
/// name, so `v1.2/` is a directory and an extensionless file is skipped.
/// Hidden entries only show up once the typed prefix starts with a dot.
/// An unreadable directory yields nothing.
pub fn complete_module_path(
    fs: &dyn FileSystem,
    document_dir: &Path,
    typed: &str,
) -> Vec<CompletionEntry> {
    let (dir_part, prefix) = split_partial_path(typed);
    let dir = normalize_path(&document_dir.join(dir_part));

    let mut entries = match fs.read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!("[paths] cannot list {}: {e}", dir.display());
            return Vec::new();
        }
    };
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    entries
        .into_iter()
        .filter(|entry| entry.name.starts_with(prefix))
        .filter(|entry| prefix.starts_with('.') || !entry.name.starts_with('.'))
        .filter_map(|entry| {
            if entry.is_dir {
                Some(CompletionEntry::new(format!("{}\tdir", entry.name), entry.name))
            } else if entry.name.ends_with(MODULE_EXTENSION) {
                Some(CompletionEntry::new(format!("{}\tfile", entry.name), entry.name))
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::MemoryFileSystem;
    use std::time::SystemTime;

    fn project() -> MemoryFileSystem {
        let fs = MemoryFileSystem::new();
        let now = SystemTime::now();
        fs.write("/p/src/app.js", "", now);
        fs.write("/p/src/sub.js", "", now);
        fs.write("/p/src/sub/inner.js", "", now);
        fs.write("/p/src/style.css", "", now);
        fs.write("/p/src/.hidden/x.js", "", now);
        fs.write("/p/lib/util.js", "", now);
        fs
    }

    fn labels(entries: &[CompletionEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.label()).collect()
    }

    #[test]
    fn test_prefix_filters_dirs_and_files() {
        let fs = project();
        let entries = complete_module_path(&fs, Path::new("/p/src"), "./su");
        assert_eq!(labels(&entries), vec!["sub\tdir", "sub.js\tfile"]);
        assert_eq!(entries[0].insert_text(), "sub");
        assert_eq!(entries[1].insert_text(), "sub.js");
    }

    #[test]
    fn test_directory_listing_skips_other_files_and_hidden() {
        let fs = project();
        let entries = complete_module_path(&fs, Path::new("/p/src"), "./");
        assert_eq!(labels(&entries), vec!["app.js\tfile", "sub\tdir", "sub.js\tfile"]);

        let hidden = complete_module_path(&fs, Path::new("/p/src"), "./.h");
        assert_eq!(labels(&hidden), vec![".hidden\tdir"]);
    }

    #[test]
    fn test_parent_and_nested_directories() {
        let fs = project();
        let entries = complete_module_path(&fs, Path::new("/p/src"), "../lib/");
        assert_eq!(labels(&entries), vec!["util.js\tfile"]);

        let nested = complete_module_path(&fs, Path::new("/p/src"), "./sub/in");
        assert_eq!(labels(&nested), vec!["inner.js\tfile"]);
    }

    #[test]
    fn test_kind_comes_from_directory_flag() {
        let fs = project();
        fs.write("/p/src/v1.2/api.js", "", SystemTime::now());
        fs.write("/p/src/Makefile", "", SystemTime::now());

        let entries = complete_module_path(&fs, Path::new("/p/src"), "./");
        assert_eq!(
            labels(&entries),
            vec!["app.js\tfile", "sub\tdir", "sub.js\tfile", "v1.2\tdir"]
        );
    }

    #[test]
    fn test_missing_directory_yields_nothing() {
        let fs = project();
        assert!(complete_module_path(&fs, Path::new("/p/src"), "./nope/").is_empty());
    }
}
