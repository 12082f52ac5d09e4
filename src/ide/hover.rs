//! Hover information implementation.

use crate::config::ResolveOptions;
use crate::project::Corpus;

use super::QueryError;
use super::attributes::inherited_attributes;

/// Result of a hover request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverResult {
    /// The hovered type name.
    pub type_name: String,
    /// One `"lower..upper name"` line per attribute.
    pub lines: Vec<String>,
}

impl HoverResult {
    /// The hover content, one attribute per line.
    pub fn contents(&self) -> String {
        self.lines.join("\n")
    }
}

/// Attributes of the type under the cursor. `None` when it has none.
pub fn hover(
    corpus: &Corpus,
    word: &str,
    options: &ResolveOptions,
) -> Result<Option<HoverResult>, QueryError> {
    let attributes = inherited_attributes(corpus, word, options)?;
    if attributes.is_empty() {
        return Ok(None);
    }

    let lines = attributes
        .iter()
        .map(|(name, cardinality)| format!("{} {}", cardinality, name))
        .collect();
    Ok(Some(HoverResult {
        type_name: word.trim().to_string(),
        lines,
    }))
}
