//! Complete command - one completion request against a document on disk.
//!
//! Stands in for an editor host: reads the document, runs the engine at the
//! given offsets and prints items plus the diagnostics the request left.

use anyhow::{Context, Result};
use serde_json::json;
use std::path::Path;

use crate::completion::{CompletionEngine, Document};
use crate::config::Settings;
use crate::modules::StdFileSystem;

pub fn run(settings: &Settings, document: &Path, offsets: &[usize], json: bool) -> Result<()> {
    let path = std::path::absolute(document)
        .with_context(|| format!("Cannot resolve {}", document.display()))?;
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("Cannot read {}", path.display()))?;

    let mut engine = CompletionEngine::from_config(&settings.completion, StdFileSystem)?;
    let response = engine.complete(&Document::new(&path, &text), offsets);

    if json {
        let diagnostics: Vec<_> = engine
            .diagnostics()
            .iter()
            .map(|(import_path, diag)| json!({ "path": import_path, "diagnostic": diag }))
            .collect();
        let output = json!({
            "items": response.items,
            "inhibit_other_completions": response.inhibit_other_completions,
            "diagnostics": diagnostics,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for item in &response.items {
        println!("{}\t{}", item.label().replace('\t', "  "), item.insert_text());
    }
    for (import_path, diag) in engine.diagnostics().iter() {
        eprintln!(
            "{}:{}-{}: {import_path}: {}",
            path.display(),
            diag.span.start,
            diag.span.end,
            diag.message
        );
    }
    Ok(())
}
