//! Ambient bindings: names completable without an import.
//!
//! Backed by a JSON document mapping each name to an export-table-shaped
//! object (`{ "console": { "log": ["log(data)\tconsole", "log(${1:data})"] } }`).
//! The bundled table is compiled into the binary and parsed once per process.

use indexmap::IndexMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use thiserror::Error;

use crate::types::ExportTable;

const BUNDLED_JSON: &str = include_str!("../../resources/ambient_completions.json");

static BUNDLED: OnceLock<Arc<AmbientBindings>> = OnceLock::new();

#[derive(Error, Debug)]
pub enum AmbientError {
    #[error("Cannot read ambient completions from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid ambient completions: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read-only registry of ambient name -> export table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmbientBindings {
    tables: IndexMap<String, Arc<ExportTable>>,
}

impl AmbientBindings {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, AmbientError> {
        let raw: IndexMap<String, ExportTable> = serde_json::from_str(json)?;
        Ok(Self {
            tables: raw
                .into_iter()
                .map(|(name, table)| (name, Arc::new(table)))
                .collect(),
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, AmbientError> {
        let json = std::fs::read_to_string(path).map_err(|source| AmbientError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The table shipped with the crate, parsed on first use.
    pub fn bundled() -> Arc<AmbientBindings> {
        Arc::clone(BUNDLED.get_or_init(|| match Self::from_json(BUNDLED_JSON) {
            Ok(bindings) => {
                tracing::debug!("[ambient] loaded {} bundled bindings", bindings.len());
                Arc::new(bindings)
            }
            Err(e) => {
                tracing::error!("[ambient] bundled completions are unusable: {e}");
                Arc::new(Self::empty())
            }
        }))
    }

    pub fn get(&self, name: &str) -> Option<&Arc<ExportTable>> {
        self.tables.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<ExportTable>)> {
        self.tables.iter().map(|(name, table)| (name.as_str(), table))
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
