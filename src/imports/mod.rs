//! Per-document import discovery and the ambient binding registry.

pub mod ambient;
pub mod scanner;

pub use ambient::{AmbientBindings, AmbientError};
pub use scanner::{
    DEFAULT_IMPORT_LOOKAHEAD, ImportBinding, ImportBindings, ImportReference, ImportScanner,
};
