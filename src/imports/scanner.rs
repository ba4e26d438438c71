//! Import scanner.
//!
//! Finds `import * as Name from './path.js'` statements in the head of a
//! document. Imports are expected near the top of a module, so only the
//! first `lookahead` characters are searched; anything later is not seen.

use indexmap::IndexMap;
use regex::Regex;
use std::sync::{Arc, OnceLock};

use crate::imports::ambient::AmbientBindings;
use crate::types::{ExportTable, Span};

/// Default number of characters searched for imports.
pub const DEFAULT_IMPORT_LOOKAHEAD: usize = 1000;

static NAMESPACE_IMPORT: OnceLock<Regex> = OnceLock::new();

fn namespace_import_regex() -> &'static Regex {
    NAMESPACE_IMPORT.get_or_init(|| {
        Regex::new(r#"import\s+\*\s+as\s+(\w+)\s+from\s+['"](.+?)['"];?"#)
            .expect("namespace import regex is valid")
    })
}

/// An import path as written in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReference {
    pub path: String,
    /// Location of the path text, without quotes
    pub span: Span,
}

/// What an alias in scope refers to.
#[derive(Debug, Clone, PartialEq)]
pub enum ImportBinding {
    /// Needs resolution through the module cache
    File(ImportReference),
    /// Pre-built table, no resolution needed
    Ambient(Arc<ExportTable>),
}

/// Alias -> binding, rebuilt for every request.
pub type ImportBindings = IndexMap<String, ImportBinding>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportScanner {
    lookahead: usize,
}

impl Default for ImportScanner {
    fn default() -> Self {
        Self::new(DEFAULT_IMPORT_LOOKAHEAD)
    }
}

impl ImportScanner {
    pub fn new(lookahead: usize) -> Self {
        Self { lookahead }
    }

    pub fn lookahead(&self) -> usize {
        self.lookahead
    }

    /// Namespace imports in the document head, by alias.
    ///
    /// A later import with the same alias replaces an earlier one.
    pub fn scan_file_imports(&self, text: &str) -> IndexMap<String, ImportReference> {
        let head = head(text, self.lookahead);
        let mut imports = IndexMap::new();

        for captures in namespace_import_regex().captures_iter(head) {
            let (Some(alias), Some(path)) = (captures.get(1), captures.get(2)) else {
                continue;
            };
            imports.insert(
                alias.as_str().to_string(),
                ImportReference {
                    path: path.as_str().to_string(),
                    span: Span::new(path.start(), path.end()),
                },
            );
        }

        imports
    }

    /// File imports followed by ambient bindings.
    ///
    /// An ambient name shadows a file import with the same alias.
    pub fn scan(&self, text: &str, ambient: &AmbientBindings) -> ImportBindings {
        let mut bindings: ImportBindings = self
            .scan_file_imports(text)
            .into_iter()
            .map(|(alias, reference)| (alias, ImportBinding::File(reference)))
            .collect();

        for (name, table) in ambient.iter() {
            bindings.insert(name.to_string(), ImportBinding::Ambient(Arc::clone(table)));
        }

        bindings
    }
}

/// First `chars` characters of `text`, never splitting a character.
fn head(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
