//! Completion for ES module imports.
//!
//! Given a document containing `import * as X from './path.js'`, offers
//! `X.<export>` completions built from the imported module's named exports,
//! and completes relative paths inside import string literals.

pub mod cli;
pub mod completion;
pub mod config;
pub mod diagnostics;
pub mod imports;
pub mod logging;
pub mod modules;
pub mod parsing;
pub mod types;

pub use completion::{CompletionEngine, CompletionError, CompletionResponse, Document, EngineError};
pub use config::Settings;
pub use diagnostics::{DiagnosticEvent, DiagnosticKind, Diagnostics, ImportDiagnostic};
pub use imports::{AmbientBindings, ImportBinding, ImportReference, ImportScanner};
pub use modules::{FileSystem, MemoryFileSystem, ModuleCache, ResolveError, StdFileSystem};
pub use parsing::{JavaScriptParser, extract_exports};
pub use types::{CompletionEntry, ExportTable, Span};
