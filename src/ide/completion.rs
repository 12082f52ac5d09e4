//! Member completion after `Type.`.

use std::sync::Arc;

use crate::config::ResolveOptions;
use crate::project::Corpus;

use super::QueryError;
use super::attributes::inherited_attributes;

/// Kind of completion item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionKind {
    Attribute,
}

impl CompletionKind {
    /// Convert to LSP completion item kind number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            CompletionKind::Attribute => 5, // Field
        }
    }
}

/// A completion suggestion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionItem {
    /// The text to insert.
    pub label: Arc<str>,
    pub kind: CompletionKind,
    /// Detail text (shown after label).
    pub detail: Option<Arc<str>>,
    /// Sort priority (lower = higher priority).
    pub sort_priority: u32,
}

impl CompletionItem {
    pub fn new(label: impl Into<Arc<str>>, kind: CompletionKind) -> Self {
        Self {
            label: label.into(),
            kind,
            detail: None,
            sort_priority: 100,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<Arc<str>>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_priority(mut self, priority: u32) -> Self {
        self.sort_priority = priority;
        self
    }
}

/// Attribute names available on `word`, nearest declaration first.
pub fn completions(
    corpus: &Corpus,
    word: &str,
    options: &ResolveOptions,
) -> Result<Vec<CompletionItem>, QueryError> {
    let attributes = inherited_attributes(corpus, word, options)?;
    Ok(attributes
        .iter()
        .enumerate()
        .map(|(i, (name, cardinality))| {
            CompletionItem::new(name, CompletionKind::Attribute)
                .with_detail(cardinality)
                .with_priority(i as u32)
        })
        .collect())
}
