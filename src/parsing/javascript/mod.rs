//! JavaScript language support: parsing, export extraction and signature
//! formatting.

pub mod exports;
pub mod parser;
pub mod signature;

pub use exports::{RootBinding, extract_exports};
pub use parser::JavaScriptParser;
pub use signature::{format_function, format_value};
