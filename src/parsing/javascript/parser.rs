//! JavaScript parser implementation
//!
//! **Tree-sitter ABI Version**: ABI-14 (tree-sitter-javascript 0.25)
//!
//! Lowers the tree-sitter concrete syntax tree into the closed AST in
//! [`crate::parsing::ast`]. Only top-level statements are visited; function
//! bodies are never entered.
//!
//! Tree-sitter recovers from syntax errors instead of failing. A tree that
//! contains any `ERROR` or `MISSING` node is reported as a syntax error so
//! that broken modules surface as a diagnostic instead of half an export
//! table.

use tree_sitter::{Language, Node, Parser};

use crate::parsing::ast::{
    Declaration, ExportNamedDeclaration, ExportSpecifier, Expression, FunctionDeclaration, Module,
    Pattern, Statement, VariableDeclaration, VariableDeclarator, VariableKind,
};
use crate::parsing::parser::{ModuleParser, ParseError};

/// JavaScript language parser
pub struct JavaScriptParser {
    parser: Parser,
}

impl JavaScriptParser {
    /// Create a new JavaScript parser
    pub fn new() -> Result<Self, ParseError> {
        let mut parser = Parser::new();
        let language: Language = tree_sitter_javascript::LANGUAGE.into();
        parser
            .set_language(&language)
            .map_err(|e| ParseError::Init(format!("Failed to set JavaScript language: {e}")))?;

        Ok(Self { parser })
    }

    /// Parse JavaScript module source into its top-level statements
    pub fn parse(&mut self, code: &str) -> Result<Module, ParseError> {
        let tree = self.parser.parse(code, None).ok_or(ParseError::NoTree)?;
        let root = tree.root_node();

        if root.has_error() {
            let (line, column) = first_error(root)
                .map(|n| (n.start_position().row + 1, n.start_position().column + 1))
                .unwrap_or((1, 1));
            tracing::debug!("[javascript] syntax error at {line}:{column}");
            return Err(ParseError::Syntax { line, column });
        }

        let mut cursor = root.walk();
        let body = root
            .named_children(&mut cursor)
            .map(|node| lower_statement(node, code))
            .collect();

        Ok(Module { body })
    }
}

impl ModuleParser for JavaScriptParser {
    fn parse_module(&mut self, code: &str) -> Result<Module, ParseError> {
        self.parse(code)
    }
}

/// Depth-first search for the first error or missing node.
///
/// Walks with a cursor instead of recursing so that deeply nested input
/// cannot exhaust the stack. Subtrees without errors are skipped.
fn first_error(root: Node) -> Option<Node> {
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        if node.has_error() && cursor.goto_first_child() {
            continue;
        }
        while !cursor.goto_next_sibling() {
            if !cursor.goto_parent() {
                return None;
            }
        }
    }
}

fn text<'a>(node: Node, code: &'a str) -> &'a str {
    &code[node.byte_range()]
}

/// Contents of a string literal, or the raw text for identifiers.
fn name_or_string(node: Node, code: &str) -> String {
    if node.kind() == "string" {
        let raw = text(node, code);
        raw.trim_matches(|c| c == '\'' || c == '"').to_string()
    } else {
        text(node, code).to_string()
    }
}

fn lower_statement(node: Node, code: &str) -> Statement {
    match node.kind() {
        "export_statement" => lower_export(node, code),
        "lexical_declaration" | "variable_declaration" => {
            Statement::Variable(lower_variable_declaration(node, code))
        }
        "function_declaration" | "generator_function_declaration" => {
            Statement::Function(lower_function_declaration(node, code))
        }
        _ => Statement::Other,
    }
}

fn lower_export(node: Node, code: &str) -> Statement {
    let mut cursor = node.walk();
    let children: Vec<Node> = node.children(&mut cursor).collect();

    // Default exports are not completed
    if children.iter().any(|c| c.kind() == "default") {
        return Statement::Other;
    }

    let declaration = node
        .child_by_field_name("declaration")
        .map(|d| lower_declaration(d, code));
    let source = node
        .child_by_field_name("source")
        .map(|s| name_or_string(s, code));

    let mut specifiers = Vec::new();
    let mut has_clause = false;
    for child in &children {
        if child.kind() != "export_clause" {
            continue;
        }
        has_clause = true;
        let mut clause_cursor = child.walk();
        for spec in child.named_children(&mut clause_cursor) {
            if spec.kind() != "export_specifier" {
                continue;
            }
            let Some(name) = spec.child_by_field_name("name") else {
                continue;
            };
            let local = name_or_string(name, code);
            let exported = spec
                .child_by_field_name("alias")
                .map(|alias| name_or_string(alias, code))
                .unwrap_or_else(|| local.clone());
            specifiers.push(ExportSpecifier { local, exported });
        }
    }

    // `export * from '...'` and friends
    if declaration.is_none() && !has_clause {
        return Statement::Other;
    }

    Statement::ExportNamed(ExportNamedDeclaration {
        declaration,
        specifiers,
        source,
    })
}

fn lower_declaration(node: Node, code: &str) -> Declaration {
    match node.kind() {
        "function_declaration" | "generator_function_declaration" => {
            Declaration::Function(lower_function_declaration(node, code))
        }
        "lexical_declaration" | "variable_declaration" => {
            Declaration::Variable(lower_variable_declaration(node, code))
        }
        _ => Declaration::Other,
    }
}

fn lower_function_declaration(node: Node, code: &str) -> FunctionDeclaration {
    FunctionDeclaration {
        id: node
            .child_by_field_name("name")
            .map(|n| text(n, code).to_string()),
        params: lower_parameters(node, code),
    }
}

fn lower_variable_declaration(node: Node, code: &str) -> VariableDeclaration {
    let kind = match node.child(0).map(|c| c.kind()) {
        Some("const") => VariableKind::Const,
        Some("let") => VariableKind::Let,
        _ => VariableKind::Var,
    };

    let mut cursor = node.walk();
    let declarations = node
        .named_children(&mut cursor)
        .filter(|child| child.kind() == "variable_declarator")
        .filter_map(|declarator| {
            let id = lower_pattern(declarator.child_by_field_name("name")?, code);
            let init = declarator
                .child_by_field_name("value")
                .map(|value| lower_expression(value, code));
            Some(VariableDeclarator { id, init })
        })
        .collect();

    VariableDeclaration { kind, declarations }
}

fn lower_expression(node: Node, code: &str) -> Expression {
    let mut node = node;
    // `((f))` nests one node per pair; unwrap in a loop
    while node.kind() == "parenthesized_expression" {
        let mut cursor = node.walk();
        let inner = node
            .named_children(&mut cursor)
            .find(|child| child.kind() != "comment");
        match inner {
            Some(inner) => node = inner,
            None => return Expression::Other,
        }
    }

    match node.kind() {
        "arrow_function" => Expression::ArrowFunction {
            params: lower_parameters(node, code),
        },
        "function_expression" | "function" | "generator_function" => {
            Expression::FunctionExpression {
                params: lower_parameters(node, code),
            }
        }
        _ => Expression::Other,
    }
}

/// Parameters of a function-like node.
///
/// Arrow functions with a single bare parameter (`x => x`) expose it through
/// the `parameter` field instead of a `formal_parameters` list.
fn lower_parameters(node: Node, code: &str) -> Vec<Pattern> {
    if let Some(single) = node.child_by_field_name("parameter") {
        return vec![lower_pattern(single, code)];
    }

    let Some(params) = node.child_by_field_name("parameters") else {
        return Vec::new();
    };

    let mut cursor = params.walk();
    params
        .named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .map(|child| lower_pattern(child, code))
        .collect()
}

fn lower_pattern(node: Node, code: &str) -> Pattern {
    match node.kind() {
        "identifier" | "undefined" => Pattern::Identifier(text(node, code).to_string()),
        "assignment_pattern" => match node.child_by_field_name("left") {
            Some(left) => Pattern::Assignment(Box::new(lower_pattern(left, code))),
            None => Pattern::Other,
        },
        "rest_pattern" => {
            let mut cursor = node.walk();
            let inner = node.named_children(&mut cursor).next();
            match inner {
                Some(inner) => Pattern::Rest(Box::new(lower_pattern(inner, code))),
                None => Pattern::Other,
            }
        }
        "object_pattern" => Pattern::Object,
        "array_pattern" => Pattern::Array,
        _ => Pattern::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(code: &str) -> Module {
        let mut parser = JavaScriptParser::new().expect("Failed to create parser");
        parser.parse(code).expect("Failed to parse")
    }

    #[test]
    fn test_export_function_declaration() {
        let module = parse("export function add(a, b = 1, ...rest) { return a + b; }");
        assert_eq!(module.body.len(), 1);

        let Statement::ExportNamed(export) = &module.body[0] else {
            panic!("Expected export statement, got {:?}", module.body[0]);
        };
        let Some(Declaration::Function(func)) = &export.declaration else {
            panic!("Expected function declaration");
        };
        assert_eq!(func.id.as_deref(), Some("add"));
        assert_eq!(
            func.params,
            vec![
                Pattern::Identifier("a".to_string()),
                Pattern::Assignment(Box::new(Pattern::Identifier("b".to_string()))),
                Pattern::Rest(Box::new(Pattern::Identifier("rest".to_string()))),
            ]
        );
    }

    #[test]
    fn test_const_vs_let_vs_var() {
        let module = parse("const a = 1;\nlet b = 2;\nvar c = 3;");
        let kinds: Vec<VariableKind> = module
            .body
            .iter()
            .filter_map(|s| match s {
                Statement::Variable(v) => Some(v.kind),
                _ => None,
            })
            .collect();
        assert_eq!(
            kinds,
            vec![VariableKind::Const, VariableKind::Let, VariableKind::Var]
        );
    }

    #[test]
    fn test_arrow_function_forms() {
        let module = parse("const f = x => x;\nconst g = (a, {b}) => a;\nconst h = (() => 1);");
        let inits: Vec<Expression> = module
            .body
            .iter()
            .filter_map(|s| match s {
                Statement::Variable(v) => v.declarations[0].init.clone(),
                _ => None,
            })
            .collect();

        assert_eq!(
            inits,
            vec![
                Expression::ArrowFunction {
                    params: vec![Pattern::Identifier("x".to_string())]
                },
                Expression::ArrowFunction {
                    params: vec![Pattern::Identifier("a".to_string()), Pattern::Object]
                },
                Expression::ArrowFunction { params: vec![] },
            ]
        );
    }

    #[test]
    fn test_function_expression_initializer() {
        let module = parse("export const run = function (task, retries) {};");
        let Statement::ExportNamed(export) = &module.body[0] else {
            panic!("Expected export statement");
        };
        let Some(Declaration::Variable(decl)) = &export.declaration else {
            panic!("Expected variable declaration");
        };
        assert_eq!(
            decl.declarations[0].init,
            Some(Expression::FunctionExpression {
                params: vec![
                    Pattern::Identifier("task".to_string()),
                    Pattern::Identifier("retries".to_string()),
                ]
            })
        );
    }

    #[test]
    fn test_export_clause_with_alias() {
        let module = parse("const f = () => {};\nexport { f as g, f };");
        let Statement::ExportNamed(export) = &module.body[1] else {
            panic!("Expected export statement");
        };
        assert!(export.declaration.is_none());
        assert!(export.source.is_none());
        assert_eq!(
            export.specifiers,
            vec![
                ExportSpecifier {
                    local: "f".to_string(),
                    exported: "g".to_string()
                },
                ExportSpecifier {
                    local: "f".to_string(),
                    exported: "f".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_reexport_records_source() {
        let module = parse("export { a as b } from './other.js';");
        let Statement::ExportNamed(export) = &module.body[0] else {
            panic!("Expected export statement");
        };
        assert_eq!(export.source.as_deref(), Some("./other.js"));
    }

    #[test]
    fn test_default_and_star_exports_are_other() {
        let module = parse("export default function () {}\nexport * from './all.js';");
        assert_eq!(module.body, vec![Statement::Other, Statement::Other]);
    }

    #[test]
    fn test_syntax_error_is_reported() {
        let mut parser = JavaScriptParser::new().expect("Failed to create parser");
        let err = parser.parse("export function (").unwrap_err();
        assert!(matches!(err, ParseError::Syntax { line: 1, .. }), "got {err:?}");
    }

    #[test]
    fn test_deeply_nested_parentheses() {
        let depth = 50_000;
        let code = format!(
            "export const f = {}() => 1{};",
            "(".repeat(depth),
            ")".repeat(depth)
        );
        let module = parse(&code);

        let Statement::ExportNamed(export) = &module.body[0] else {
            panic!("Expected export statement");
        };
        let Some(Declaration::Variable(decl)) = &export.declaration else {
            panic!("Expected variable declaration");
        };
        assert_eq!(
            decl.declarations[0].init,
            Some(Expression::ArrowFunction { params: vec![] })
        );
    }

    #[test]
    fn test_syntax_error_inside_deep_nesting() {
        let depth = 10_000;
        let code = format!(
            "export const f = {}1 +{};",
            "(".repeat(depth),
            ")".repeat(depth)
        );
        let mut parser = JavaScriptParser::new().expect("Failed to create parser");
        let err = parser.parse(&code).unwrap_err();
        assert!(matches!(err, ParseError::Syntax { line: 1, .. }), "got {err:?}");
    }

    #[test]
    fn test_empty_module() {
        assert!(parse("").body.is_empty());
        assert_eq!(parse("// just a comment\n").body, vec![Statement::Other]);
    }
}
