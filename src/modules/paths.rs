//! Path utilities for import resolution
//!
//! Import paths are resolved lexically against the importing document's
//! directory. `..` components are folded without touching the file system
//! so that the same module always maps to the same cache key.

use regex::Regex;
use std::path::{Component, Path, PathBuf};
use std::sync::OnceLock;

/// Extension every importable module must carry.
pub const MODULE_EXTENSION: &str = ".js";

static IMPORT_PATH: OnceLock<Regex> = OnceLock::new();

fn import_path_regex() -> &'static Regex {
    IMPORT_PATH.get_or_init(|| Regex::new(r"^\.\.?/.+\.js$").expect("import path regex is valid"))
}

/// Whether `path` is a relative path to a `.js` module (`./x.js`, `../x.js`).
pub fn is_valid_import_path(path: &str) -> bool {
    import_path_regex().is_match(path)
}

/// Fold `.` and `..` components without consulting the file system.
///
/// `..` above the root is dropped, matching how `/..` resolves.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Absolute location of `import_path` as seen from `document_dir`.
pub fn resolve_import(document_dir: &Path, import_path: &str) -> PathBuf {
    normalize_path(&document_dir.join(import_path))
}

/// Display name used in completion labels: the file's basename.
pub fn module_display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Split a partially typed path into its directory part and the prefix of
/// the entry being typed: `./lib/ut` -> (`./lib/`, `ut`).
pub fn split_partial_path(typed: &str) -> (&str, &str) {
    match typed.rfind('/') {
        Some(idx) => typed.split_at(idx + 1),
        None => ("", typed),
    }
}
