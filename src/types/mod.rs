use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Byte range into a document's text, half-open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Inclusive on both ends, so a cursor resting right after the last
    /// character still counts as inside.
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset <= self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A single completion: what the list shows and what gets inserted.
///
/// `insert_text` may carry snippet placeholders such as `${1:a}`.
/// Serializes as a two-element array `[label, insertText]`, which is also
/// the shape used by the ambient completions resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct CompletionEntry {
    label: String,
    insert_text: String,
}

impl CompletionEntry {
    pub fn new(label: impl Into<String>, insert_text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            insert_text: insert_text.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn insert_text(&self) -> &str {
        &self.insert_text
    }
}

impl From<(String, String)> for CompletionEntry {
    fn from((label, insert_text): (String, String)) -> Self {
        Self { label, insert_text }
    }
}

impl From<CompletionEntry> for (String, String) {
    fn from(entry: CompletionEntry) -> Self {
        (entry.label, entry.insert_text)
    }
}

/// Exported name -> completion entry for one module.
pub type ExportTable = IndexMap<String, CompletionEntry>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_contains_is_inclusive() {
        let span = Span::new(4, 10);
        assert!(span.contains(4));
        assert!(span.contains(10));
        assert!(!span.contains(3));
        assert!(!span.contains(11));
        assert_eq!(span.len(), 6);
    }

    #[test]
    fn test_completion_entry_serializes_as_pair() {
        let entry = CompletionEntry::new("add(a, b)\tmath.js", "add(${1:a}, ${2:b})");
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"["add(a, b)\tmath.js","add(${1:a}, ${2:b})"]"#);

        let back: CompletionEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
