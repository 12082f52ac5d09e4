//! The "get inherited attributes" query.

use std::fmt;

use crate::config::ResolveOptions;
use crate::hir::{InheritanceResolver, InheritedAttributes};
use crate::project::Corpus;

use super::QueryError;

/// One entry of the attribute picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeChoice {
    pub name: String,
    pub cardinality: String,
}

impl AttributeChoice {
    /// What the editor inserts after the type name, `.name`.
    pub fn insert_text(&self) -> String {
        format!(".{}", self.name)
    }
}

impl fmt::Display for AttributeChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.cardinality)
    }
}

/// Every attribute `identifier` declares or inherits.
pub fn inherited_attributes(
    corpus: &Corpus,
    identifier: &str,
    options: &ResolveOptions,
) -> Result<InheritedAttributes, QueryError> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return Err(QueryError::EmptyIdentifier);
    }
    let attributes = InheritanceResolver::with_options(corpus, options.clone()).resolve(identifier)?;
    Ok(attributes)
}

/// Picker entries, one per attribute, in resolution order.
pub fn attribute_choices(attributes: &InheritedAttributes) -> Vec<AttributeChoice> {
    attributes
        .iter()
        .map(|(name, cardinality)| AttributeChoice {
            name: name.to_string(),
            cardinality: cardinality.to_string(),
        })
        .collect()
}
