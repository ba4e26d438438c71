//! Export tables memoized per module file.
//!
//! Entries are keyed by the resolved absolute path and tagged with the
//! file's modification time. A lookup whose stored time equals the file's
//! current time is served without reading or parsing. Any other time, even
//! an older one, triggers a full reparse that replaces the entry.
//!
//! Failures are never cached: a missing file that appears later, or a
//! syntax error that gets fixed, is picked up by the next lookup.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use crate::diagnostics::{Diagnostics, ImportDiagnostic};
use crate::modules::error::{ResolveError, ResolveResult};
use crate::modules::fs::FileSystem;
use crate::modules::paths::{is_valid_import_path, module_display_name, resolve_import};
use crate::parsing::{JavaScriptParser, ModuleParser, ParseError, extract_exports};
use crate::types::{ExportTable, Span};

#[derive(Debug)]
struct CacheEntry {
    modified: SystemTime,
    exports: Arc<ExportTable>,
}

pub struct ModuleCache<P = JavaScriptParser> {
    parser: P,
    entries: HashMap<PathBuf, CacheEntry>,
}

impl ModuleCache<JavaScriptParser> {
    /// Cache backed by the tree-sitter JavaScript parser.
    pub fn javascript() -> Result<Self, ParseError> {
        Ok(Self::with_parser(JavaScriptParser::new()?))
    }
}

impl<P: ModuleParser> ModuleCache<P> {
    pub fn with_parser(parser: P) -> Self {
        Self {
            parser,
            entries: HashMap::new(),
        }
    }

    /// Export table for `import_path` as written in a document living in
    /// `document_dir`.
    ///
    /// Failures are recorded in `diagnostics` under the import path, located
    /// at `span`, and yield an empty table. Success clears any diagnostic
    /// previously recorded for the import path.
    pub fn resolve(
        &mut self,
        fs: &dyn FileSystem,
        document_dir: &Path,
        import_path: &str,
        span: Span,
        diagnostics: &mut Diagnostics,
    ) -> Arc<ExportTable> {
        match self.try_resolve(fs, document_dir, import_path) {
            Ok(exports) => {
                diagnostics.clear(import_path);
                exports
            }
            Err(err) => {
                tracing::warn!("[modules] cannot resolve '{import_path}': {err:?}");
                diagnostics.report(
                    import_path,
                    ImportDiagnostic {
                        span,
                        kind: err.kind(),
                        message: err.to_string(),
                    },
                );
                Arc::new(ExportTable::new())
            }
        }
    }

    /// Like [`resolve`](Self::resolve) but returns the failure instead of
    /// recording it.
    pub fn try_resolve(
        &mut self,
        fs: &dyn FileSystem,
        document_dir: &Path,
        import_path: &str,
    ) -> ResolveResult<Arc<ExportTable>> {
        if !is_valid_import_path(import_path) {
            return Err(ResolveError::InvalidImportPath {
                import_path: import_path.to_string(),
            });
        }

        let path = resolve_import(document_dir, import_path);
        self.load(fs, path)
    }

    /// Export table for a module at an absolute path, bypassing import-path
    /// validation.
    pub fn load(&mut self, fs: &dyn FileSystem, path: PathBuf) -> ResolveResult<Arc<ExportTable>> {
        let modified = fs
            .modified(&path)
            .map_err(|e| ResolveError::from_io(path.clone(), e))?;

        if let Some(entry) = self.entries.get(&path) {
            if entry.modified == modified {
                tracing::debug!("[modules] cache hit: {}", path.display());
                return Ok(Arc::clone(&entry.exports));
            }
            tracing::debug!("[modules] stale entry: {}", path.display());
        } else {
            tracing::debug!("[modules] cache miss: {}", path.display());
        }

        let content = fs
            .read_to_string(&path)
            .map_err(|e| ResolveError::from_io(path.clone(), e))?;

        let module = self
            .parser
            .parse_module(&content)
            .map_err(|source| ResolveError::ParseFailure {
                path: path.clone(),
                source,
            })?;

        let exports = Arc::new(extract_exports(&module, &module_display_name(&path)));
        crate::debug_event!(
            "modules",
            "parsed",
            "{} ({} exports)",
            path.display(),
            exports.len()
        );

        self.entries.insert(
            path,
            CacheEntry {
                modified,
                exports: Arc::clone(&exports),
            },
        );
        Ok(exports)
    }

    /// Drop the entry for an absolute module path.
    pub fn invalidate(&mut self, path: &Path) -> bool {
        self.entries.remove(path).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
