//! Import diagnostics surfaced to the host editor.
//!
//! One entry per import path string. The host renders each entry as an
//! underline over the path literal and shows the message on hover.
//!
//! The completion engine updates the store transactionally: it snapshots
//! the store before a request, lets resolution and pruning mutate it, then
//! hands the host the difference as [`DiagnosticEvent`]s.

use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashSet;

use crate::types::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    InvalidImportPath,
    ModuleNotFound,
    ParseFailure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportDiagnostic {
    /// Location of the path literal in the importing document
    pub span: Span,
    pub kind: DiagnosticKind,
    pub message: String,
}

/// Change to the diagnostic set produced by one request.
///
/// `Added` replaces any diagnostic the host holds for the same path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DiagnosticEvent {
    Added {
        path: String,
        diagnostic: ImportDiagnostic,
    },
    Removed {
        path: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: IndexMap<String, ImportDiagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for `path`, replacing any previous one.
    pub fn report(&mut self, path: impl Into<String>, diagnostic: ImportDiagnostic) {
        let path = path.into();
        tracing::debug!(
            "[diagnostics] {path}: {} ({:?})",
            diagnostic.message,
            diagnostic.kind
        );
        self.entries.insert(path, diagnostic);
    }

    /// Forget the diagnostic for `path`. Returns whether one existed.
    pub fn clear(&mut self, path: &str) -> bool {
        self.entries.shift_remove(path).is_some()
    }

    /// Drop diagnostics whose import path is no longer in the document.
    pub fn retain_paths(&mut self, live_paths: &HashSet<&str>) {
        self.entries.retain(|path, _| {
            let keep = live_paths.contains(path.as_str());
            if !keep {
                tracing::debug!("[diagnostics] pruning stale diagnostic for {path}");
            }
            keep
        });
    }

    pub fn get(&self, path: &str) -> Option<&ImportDiagnostic> {
        self.entries.get(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ImportDiagnostic)> {
        self.entries.iter().map(|(path, diag)| (path.as_str(), diag))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Diagnostic whose span contains `offset`, for hover text.
    pub fn diagnostic_at(&self, offset: usize) -> Option<&ImportDiagnostic> {
        self.entries.values().find(|diag| diag.span.contains(offset))
    }

    /// Events that turn `before` into `self`.
    pub fn diff(&self, before: &Diagnostics) -> Vec<DiagnosticEvent> {
        let mut events = Vec::new();

        for path in before.entries.keys() {
            if !self.entries.contains_key(path) {
                events.push(DiagnosticEvent::Removed { path: path.clone() });
            }
        }

        for (path, diagnostic) in &self.entries {
            if before.entries.get(path) != Some(diagnostic) {
                events.push(DiagnosticEvent::Added {
                    path: path.clone(),
                    diagnostic: diagnostic.clone(),
                });
            }
        }

        events
    }
}
