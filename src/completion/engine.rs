//! The completion entry point.
//!
//! One call to [`CompletionEngine::complete`] serves one completion request
//! from the host. The engine owns every piece of process-wide state: the
//! module cache, the ambient registry and the diagnostics store. Requests
//! are expected one at a time from a single thread.

use regex::Regex;
use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use crate::completion::paths::complete_module_path;
use crate::completion::{CompletionError, CompletionResponse, Document, EngineError};
use crate::config::CompletionConfig;
use crate::diagnostics::{Diagnostics, ImportDiagnostic};
use crate::imports::{AmbientBindings, ImportBinding, ImportBindings, ImportScanner};
use crate::modules::{FileSystem, ModuleCache};
use crate::parsing::{JavaScriptParser, ModuleParser};
use crate::types::{CompletionEntry, ExportTable};

static IMPORT_PATH_LITERAL: OnceLock<Regex> = OnceLock::new();
static MEMBER_ACCESS: OnceLock<Regex> = OnceLock::new();

/// An `import` line whose last quote is still open: balanced quote pairs,
/// then an opening quote and the path typed so far.
fn import_path_literal_regex() -> &'static Regex {
    IMPORT_PATH_LITERAL.get_or_init(|| {
        Regex::new(r#"^\s*import\b[^'"]*(?:['"][^'"]*['"][^'"]*)*['"]([^'"]*)$"#)
            .expect("import path literal regex is valid")
    })
}

fn member_access_regex() -> &'static Regex {
    MEMBER_ACCESS.get_or_init(|| {
        Regex::new(r"(\w+)(\.?)(\w*)$").expect("member access regex is valid")
    })
}

/// What the text before the cursor asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorContext<'a> {
    /// Inside an unterminated import path literal
    ModulePath { typed: &'a str },
    /// `Name.partial` or `Name.`
    Member { module: &'a str, export: &'a str },
    /// A bare word that may be the start of an alias
    AliasPrefix { prefix: &'a str },
    None,
}

/// Classify the text of a line up to the cursor.
pub fn classify_line(line: &str) -> CursorContext<'_> {
    if let Some(typed) = import_path_literal_regex()
        .captures(line)
        .and_then(|captures| captures.get(1))
    {
        return CursorContext::ModulePath {
            typed: typed.as_str(),
        };
    }

    let Some(captures) = member_access_regex().captures(line) else {
        return CursorContext::None;
    };
    let (Some(module), Some(dot), Some(export)) = (captures.get(1), captures.get(2), captures.get(3))
    else {
        return CursorContext::None;
    };

    if dot.as_str().is_empty() {
        CursorContext::AliasPrefix {
            prefix: module.as_str(),
        }
    } else {
        CursorContext::Member {
            module: module.as_str(),
            export: export.as_str(),
        }
    }
}

/// Text of the line containing `offset`, up to `offset`.
fn line_before(text: &str, offset: usize) -> Result<&str, CompletionError> {
    if offset > text.len() {
        return Err(CompletionError::OffsetOutOfBounds {
            offset,
            len: text.len(),
        });
    }
    if !text.is_char_boundary(offset) {
        return Err(CompletionError::NotCharBoundary { offset });
    }
    let start = text[..offset].rfind('\n').map(|i| i + 1).unwrap_or(0);
    Ok(&text[start..offset])
}

fn alias_completions(bindings: &ImportBindings, prefix: &str) -> Vec<CompletionEntry> {
    bindings
        .keys()
        .filter(|alias| alias.starts_with(prefix))
        .map(|alias| CompletionEntry::new(format!("{alias}\tmodule"), alias.as_str()))
        .collect()
}

fn export_completions(exports: &ExportTable, prefix: &str) -> Vec<CompletionEntry> {
    exports
        .iter()
        .filter(|(name, _)| name.starts_with(prefix))
        .map(|(_, entry)| entry.clone())
        .collect()
}

pub struct CompletionEngine<P = JavaScriptParser> {
    fs: Box<dyn FileSystem>,
    cache: ModuleCache<P>,
    scanner: ImportScanner,
    ambient: Arc<AmbientBindings>,
    diagnostics: Diagnostics,
}

impl CompletionEngine<JavaScriptParser> {
    /// Engine with the JavaScript parser, default lookahead and the bundled
    /// ambient bindings.
    pub fn new(fs: impl FileSystem + 'static) -> Result<Self, EngineError> {
        Ok(Self::with_parts(
            fs,
            ModuleCache::javascript()?,
            ImportScanner::default(),
            AmbientBindings::bundled(),
        ))
    }

    /// Engine configured from the `[completion]` settings section.
    pub fn from_config(
        config: &CompletionConfig,
        fs: impl FileSystem + 'static,
    ) -> Result<Self, EngineError> {
        let ambient = if !config.ambient_enabled {
            Arc::new(AmbientBindings::empty())
        } else if let Some(path) = &config.ambient_path {
            Arc::new(AmbientBindings::from_file(path)?)
        } else {
            AmbientBindings::bundled()
        };

        Ok(Self::with_parts(
            fs,
            ModuleCache::javascript()?,
            ImportScanner::new(config.import_lookahead),
            ambient,
        ))
    }
}

impl<P: ModuleParser> CompletionEngine<P> {
    pub fn with_parts(
        fs: impl FileSystem + 'static,
        cache: ModuleCache<P>,
        scanner: ImportScanner,
        ambient: Arc<AmbientBindings>,
    ) -> Self {
        Self {
            fs: Box::new(fs),
            cache,
            scanner,
            ambient,
            diagnostics: Diagnostics::new(),
        }
    }

    /// Serve one completion request.
    ///
    /// Never fails: an internal error is logged and answered with an empty
    /// response, leaving diagnostics as they were before the request.
    pub fn complete(&mut self, document: &Document<'_>, offsets: &[usize]) -> CompletionResponse {
        let before = self.diagnostics.clone();

        match self.try_complete(document, offsets) {
            Ok((items, inhibit_other_completions)) => {
                let diagnostic_events = self.diagnostics.diff(&before);
                CompletionResponse {
                    items,
                    inhibit_other_completions,
                    diagnostic_events,
                }
            }
            Err(e) => {
                tracing::error!(
                    "[completion] request for {} failed: {e}",
                    document.path.display()
                );
                self.diagnostics = before;
                CompletionResponse::default()
            }
        }
    }

    /// Completion without the top-level error barrier.
    ///
    /// Returns the items and whether the host should hide its own
    /// completions.
    pub fn try_complete(
        &mut self,
        document: &Document<'_>,
        offsets: &[usize],
    ) -> Result<(Vec<CompletionEntry>, bool), CompletionError> {
        let document_dir = document.directory()?;
        let bindings = self.scanner.scan(document.text, &self.ambient);

        let live_paths: HashSet<&str> = bindings
            .values()
            .filter_map(|binding| match binding {
                ImportBinding::File(reference) => Some(reference.path.as_str()),
                ImportBinding::Ambient(_) => None,
            })
            .collect();
        self.diagnostics.retain_paths(&live_paths);

        let mut items = Vec::new();
        let mut inhibit = false;

        for &offset in offsets {
            let line = line_before(document.text, offset)?;
            match classify_line(line) {
                CursorContext::ModulePath { typed } => {
                    items.extend(complete_module_path(&*self.fs, document_dir, typed));
                    inhibit = true;
                }
                CursorContext::Member { module, export } => {
                    items.extend(self.complete_member(&bindings, document_dir, module, export));
                }
                CursorContext::AliasPrefix { prefix } => {
                    items.extend(alias_completions(&bindings, prefix));
                }
                CursorContext::None => {}
            }
        }

        crate::debug_event!(
            "completion",
            "served",
            "{} items for {} offsets",
            items.len(),
            offsets.len()
        );
        Ok((items, inhibit))
    }

    fn complete_member(
        &mut self,
        bindings: &ImportBindings,
        document_dir: &Path,
        module: &str,
        export: &str,
    ) -> Vec<CompletionEntry> {
        let exports = match bindings.get(module) {
            None => return alias_completions(bindings, module),
            Some(ImportBinding::Ambient(table)) => Arc::clone(table),
            Some(ImportBinding::File(reference)) => self.cache.resolve(
                &*self.fs,
                document_dir,
                &reference.path,
                reference.span,
                &mut self.diagnostics,
            ),
        };
        export_completions(&exports, export)
    }

    /// Current diagnostics, keyed by import path.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Diagnostic under `offset`, for hover text.
    pub fn diagnostic_at(&self, offset: usize) -> Option<&ImportDiagnostic> {
        self.diagnostics.diagnostic_at(offset)
    }

    pub fn cache(&self) -> &ModuleCache<P> {
        &self.cache
    }

    pub fn cache_mut(&mut self) -> &mut ModuleCache<P> {
        &mut self.cache
    }

    pub fn ambient(&self) -> &AmbientBindings {
        &self.ambient
    }
}
