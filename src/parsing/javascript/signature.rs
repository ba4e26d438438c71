//! Completion entries for functions and plain bindings.

use crate::parsing::ast::Pattern;
use crate::types::CompletionEntry;

/// Argument names that can be shown in a signature.
///
/// Plain identifiers and defaulted identifiers contribute their name.
/// Destructuring and rest parameters are skipped.
pub fn argument_names(params: &[Pattern]) -> Vec<&str> {
    params
        .iter()
        .filter_map(|param| match param {
            Pattern::Identifier(name) => Some(name.as_str()),
            Pattern::Assignment(left) => left.identifier(),
            _ => None,
        })
        .collect()
}

/// Build the entry for a function-valued export.
///
/// Label: `name(a, b)\tmodule.js`. Insert text: `name(${1:a}, ${2:b})`.
pub fn format_function(module_name: &str, name: &str, params: &[Pattern]) -> CompletionEntry {
    let args = argument_names(params);

    let label = format!("{name}({})\t{module_name}", args.join(", "));
    let placeholders: Vec<String> = args
        .iter()
        .enumerate()
        .map(|(i, arg)| format!("${{{}:{arg}}}", i + 1))
        .collect();
    let insert_text = format!("{name}({})", placeholders.join(", "));

    CompletionEntry::new(label, insert_text)
}

/// Build the entry for a non-function export: completes to its bare name.
pub fn format_value(module_name: &str, name: &str) -> CompletionEntry {
    CompletionEntry::new(format!("{name}\t{module_name}"), name)
}
