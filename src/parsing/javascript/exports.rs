//! Export table extraction.
//!
//! A single pass over the module's top-level statements. Root-level
//! `var`/`let`/`const` bindings are remembered as [`RootBinding`] records so
//! that a later `export { local as exported }` can be formatted with the
//! local binding's parameter list. The exported name is what appears in the
//! label and insert text.
//!
//! Specifiers of `export { .. } from '...'` are skipped: they name bindings
//! of another module, which is never resolved from here.
//!
//! Later occurrences of a name overwrite earlier ones.

use std::collections::HashMap;

use crate::parsing::ast::{
    Declaration, ExportNamedDeclaration, Module, Pattern, Statement, VariableDeclaration,
};
use crate::parsing::javascript::signature::{format_function, format_value};
use crate::types::{CompletionEntry, ExportTable};

/// What a root-level binding would complete to if it were re-exported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootBinding {
    Function { params: Vec<Pattern> },
    Value,
}

impl RootBinding {
    /// Format this binding under the name it is exported as.
    pub fn entry(&self, module_name: &str, exported: &str) -> CompletionEntry {
        match self {
            RootBinding::Function { params } => format_function(module_name, exported, params),
            RootBinding::Value => format_value(module_name, exported),
        }
    }
}

/// Build the export table for a parsed module.
///
/// `module_name` is the display name used in labels, normally the file's
/// basename.
pub fn extract_exports(module: &Module, module_name: &str) -> ExportTable {
    let mut exports = ExportTable::new();
    let mut root_bindings: HashMap<&str, RootBinding> = HashMap::new();

    for statement in &module.body {
        match statement {
            Statement::ExportNamed(export) => {
                collect_named_export(export, module_name, &root_bindings, &mut exports);
            }
            Statement::Variable(declaration) => {
                register_root_bindings(declaration, &mut root_bindings);
            }
            Statement::Function(_) | Statement::Other => {}
        }
    }

    exports
}

fn collect_named_export(
    export: &ExportNamedDeclaration,
    module_name: &str,
    root_bindings: &HashMap<&str, RootBinding>,
    exports: &mut ExportTable,
) {
    match &export.declaration {
        Some(Declaration::Function(func)) => {
            if let Some(name) = &func.id {
                exports.insert(name.clone(), format_function(module_name, name, &func.params));
            }
        }
        Some(Declaration::Variable(declaration)) => {
            for declarator in &declaration.declarations {
                let Some(name) = declarator.id.identifier() else {
                    continue;
                };
                let entry = match declarator.init.as_ref().and_then(|e| e.function_params()) {
                    Some(params) => format_function(module_name, name, params),
                    None => format_value(module_name, name),
                };
                exports.insert(name.to_string(), entry);
            }
        }
        Some(Declaration::Other) | None => {}
    }

    // `export { .. } from '...'` names bindings of another module
    if export.source.is_some() {
        return;
    }

    for specifier in &export.specifiers {
        match root_bindings.get(specifier.local.as_str()) {
            Some(binding) => {
                exports.insert(
                    specifier.exported.clone(),
                    binding.entry(module_name, &specifier.exported),
                );
            }
            None => {
                tracing::trace!(
                    "[exports] dropping '{}': no root binding '{}' in {module_name}",
                    specifier.exported,
                    specifier.local
                );
            }
        }
    }
}

fn register_root_bindings<'a>(
    declaration: &'a VariableDeclaration,
    root_bindings: &mut HashMap<&'a str, RootBinding>,
) {
    for declarator in &declaration.declarations {
        let Some(name) = declarator.id.identifier() else {
            continue;
        };
        let binding = match declarator.init.as_ref().and_then(|e| e.function_params()) {
            Some(params) => RootBinding::Function {
                params: params.to_vec(),
            },
            None => RootBinding::Value,
        };
        root_bindings.insert(name, binding);
    }
}
