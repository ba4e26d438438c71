//! Closed AST for the slice of ES module syntax the export extractor reads.
//!
//! Only top-level statements are modelled. Anything the extractor has no
//! use for collapses into an `Other` variant instead of being dropped, so
//! statement order is preserved.

/// A parsed module: its top-level statements in document order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Module {
    pub body: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `export function ...`, `export const ...`, `export { a as b }`
    ExportNamed(ExportNamedDeclaration),
    /// Root-level `var`/`let`/`const`
    Variable(VariableDeclaration),
    /// Root-level `function f() {}` without `export`
    Function(FunctionDeclaration),
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExportNamedDeclaration {
    pub declaration: Option<Declaration>,
    pub specifiers: Vec<ExportSpecifier>,
    /// Module specifier of `export { .. } from '...'`
    pub source: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Function(FunctionDeclaration),
    Variable(VariableDeclaration),
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSpecifier {
    pub local: String,
    pub exported: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDeclaration {
    pub id: Option<String>,
    pub params: Vec<Pattern>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableKind {
    Var,
    Let,
    Const,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDeclaration {
    pub kind: VariableKind,
    pub declarations: Vec<VariableDeclarator>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDeclarator {
    pub id: Pattern,
    pub init: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    ArrowFunction { params: Vec<Pattern> },
    FunctionExpression { params: Vec<Pattern> },
    Other,
}

impl Expression {
    /// Parameter list when the expression is function-valued.
    pub fn function_params(&self) -> Option<&[Pattern]> {
        match self {
            Expression::ArrowFunction { params } | Expression::FunctionExpression { params } => {
                Some(params)
            }
            Expression::Other => None,
        }
    }
}

/// Binding targets, used both for declarators and function parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    Identifier(String),
    /// `left = default`; the default value itself is not retained.
    Assignment(Box<Pattern>),
    Rest(Box<Pattern>),
    Object,
    Array,
    Other,
}

impl Pattern {
    pub fn identifier(&self) -> Option<&str> {
        match self {
            Pattern::Identifier(name) => Some(name),
            _ => None,
        }
    }
}
