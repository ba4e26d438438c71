//! Module parser trait
//!
//! The module cache only needs "source text in, AST out". Keeping that
//! behind a trait lets the cache run against the tree-sitter parser in
//! production and against scripted parsers in tests.

use thiserror::Error;

use crate::parsing::ast::Module;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Failed to initialize parser: {0}")]
    Init(String),

    #[error("Parser produced no tree")]
    NoTree,

    #[error("Syntax error at line {line}, column {column}")]
    Syntax { line: usize, column: usize },
}

/// Common interface for module parsers
pub trait ModuleParser {
    /// Parse module source into its top-level statements
    fn parse_module(&mut self, code: &str) -> Result<Module, ParseError>;
}
