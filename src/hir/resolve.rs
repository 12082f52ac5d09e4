//! Inherited-attribute resolution.
//!
//! Given a type name, find its definition, record every field as
//! `name -> "lower..upper"`, then follow the parent reference and repeat.
//! The nearest declaration of a name wins: a key, once recorded, is never
//! overwritten, so a subtype's field shadows an ancestor's.

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use smol_str::SmolStr;
use thiserror::Error;
use tracing::{debug, trace};

use super::navigator::field_attribute;
use crate::base::{LineCol, TextRange};
use crate::config::{CyclePolicy, ResolveOptions};
use crate::parser::{AstNode, TypeDef};
use crate::project::{Corpus, ParsedFile};

/// Errors from walking a parent chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The parent chain of `type_name` loops back on itself.
    #[error("Cyclic inheritance for '{type_name}': {}", .chain.join(" -> "))]
    CyclicInheritance {
        type_name: SmolStr,
        /// Every type visited, ending with the one seen twice.
        chain: Vec<SmolStr>,
    },
}

/// Attribute name to cardinality, in the order the walk found them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InheritedAttributes {
    map: IndexMap<SmolStr, SmolStr>,
}

impl InheritedAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `name` unless an earlier definition already did.
    pub fn insert_if_absent(&mut self, name: SmolStr, cardinality: SmolStr) -> bool {
        if self.map.contains_key(&name) {
            return false;
        }
        self.map.insert(name, cardinality);
        true
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.map.get(name).map(SmolStr::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(SmolStr::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// A type definition found in the corpus.
#[derive(Debug, Clone)]
pub struct DefinitionMatch<'a> {
    pub file: &'a ParsedFile,
    pub definition: TypeDef,
}

impl DefinitionMatch<'_> {
    /// Range of the definition's name token.
    pub fn name_range(&self) -> Option<TextRange> {
        let name = self.file.navigator().simple_name(&self.definition)?;
        Some(name.syntax().text_range())
    }

    /// Start of the name token, or of the definition when it has no name.
    pub fn line_col(&self) -> LineCol {
        let offset = self
            .name_range()
            .unwrap_or_else(|| self.definition.syntax().text_range())
            .start();
        self.file.line_index().line_col(offset)
    }
}

/// The first definition named `name`, scanning files in corpus order.
pub fn find_definition<'a>(corpus: &'a Corpus, name: &str) -> Option<DefinitionMatch<'a>> {
    corpus.files().find_map(|file| {
        let navigator = file.navigator();
        let source = file.source_file()?;
        navigator
            .definitions(&source)
            .into_iter()
            .find(|def| {
                navigator
                    .simple_name(def)
                    .and_then(|n| n.text())
                    .is_some_and(|text| text == name)
            })
            .map(|definition| DefinitionMatch { file, definition })
    })
}

/// Walks parent chains over one corpus.
pub struct InheritanceResolver<'a> {
    corpus: &'a Corpus,
    options: ResolveOptions,
}

impl<'a> InheritanceResolver<'a> {
    pub fn new(corpus: &'a Corpus) -> Self {
        Self::with_options(corpus, ResolveOptions::default())
    }

    pub fn with_options(corpus: &'a Corpus, options: ResolveOptions) -> Self {
        Self { corpus, options }
    }

    /// Every attribute `type_name` declares or inherits.
    ///
    /// An unknown type yields an empty set.
    pub fn resolve(&self, type_name: &str) -> Result<InheritedAttributes, ResolveError> {
        let mut attributes = InheritedAttributes::new();
        self.resolve_into(type_name, &mut attributes)?;
        Ok(attributes)
    }

    /// Like [`resolve`](Self::resolve), adding to an existing set.
    pub fn resolve_into(
        &self,
        type_name: &str,
        attributes: &mut InheritedAttributes,
    ) -> Result<(), ResolveError> {
        let mut visited: FxHashSet<SmolStr> = FxHashSet::default();
        let mut chain: Vec<SmolStr> = Vec::new();
        let mut current = SmolStr::new(type_name);

        loop {
            chain.push(current.clone());
            if !visited.insert(current.clone()) {
                debug!(
                    "Parent chain of {} revisits {}: {}",
                    type_name,
                    current,
                    chain.join(" -> ")
                );
                return match self.options.cycle_policy {
                    CyclePolicy::Error => Err(ResolveError::CyclicInheritance {
                        type_name: SmolStr::new(type_name),
                        chain,
                    }),
                    CyclePolicy::Stop => Ok(()),
                };
            }

            let Some(found) = find_definition(self.corpus, &current) else {
                trace!("No definition for {}", current);
                return Ok(());
            };
            let navigator = found.file.navigator();

            for field in navigator.fields(&found.definition) {
                match field_attribute(&field) {
                    Some((name, cardinality)) => {
                        attributes.insert_if_absent(name, cardinality);
                    }
                    None => debug!(
                        "Skipping field '{}' of {} in {}",
                        field.syntax().text().to_string().trim(),
                        current,
                        found.file.path().display()
                    ),
                }
            }

            let parent = navigator
                .parent_reference(&found.definition)
                .and_then(|name| name.last_segment());
            match parent {
                Some(token) => current = SmolStr::new(token.text()),
                None => return Ok(()),
            }
        }
    }
}

/// Resolve `type_name` against `corpus` with default options.
pub fn resolve_inherited_attributes(
    corpus: &Corpus,
    type_name: &str,
) -> Result<InheritedAttributes, ResolveError> {
    InheritanceResolver::new(corpus).resolve(type_name)
}
