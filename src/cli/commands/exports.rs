//! Exports command - print the export table of one module.

use anyhow::{Context, Result};
use std::path::Path;

use crate::modules::paths::module_display_name;
use crate::parsing::{JavaScriptParser, extract_exports};

pub fn run(file: &Path, json: bool) -> Result<()> {
    let code = std::fs::read_to_string(file)
        .with_context(|| format!("Cannot read {}", file.display()))?;

    let mut parser = JavaScriptParser::new()?;
    let module = parser
        .parse(&code)
        .with_context(|| format!("Failed parsing module {}", file.display()))?;
    let exports = extract_exports(&module, &module_display_name(file));

    if json {
        println!("{}", serde_json::to_string_pretty(&exports)?);
        return Ok(());
    }

    for (name, entry) in &exports {
        println!("{name}\t{}\t{}", entry.label().replace('\t', "  "), entry.insert_text());
    }
    Ok(())
}
