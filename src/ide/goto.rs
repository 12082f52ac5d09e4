//! Go-to-definition.

use std::path::PathBuf;

use smol_str::SmolStr;

use super::QueryError;
use crate::base::{LineCol, TextRange};
use crate::hir::find_definition;
use crate::parser::DefinitionVariant;
use crate::project::Corpus;

/// Where a type is defined.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DefinitionLocation {
    pub file: PathBuf,
    pub name: SmolStr,
    pub variant: DefinitionVariant,
    /// Start of the name token (0-indexed).
    pub position: LineCol,
    /// Byte range of the name token.
    pub range: TextRange,
}

impl DefinitionLocation {
    /// 1-based line of the name, as editors display it.
    pub fn line_number(&self) -> u32 {
        self.position.line_one_indexed()
    }
}

/// Find the first type definition named `identifier` in corpus order.
pub fn goto_definition(corpus: &Corpus, identifier: &str) -> Result<DefinitionLocation, QueryError> {
    let found = find_definition(corpus, identifier).ok_or_else(|| QueryError::not_found(identifier))?;
    let range = found
        .name_range()
        .ok_or_else(|| QueryError::not_found(identifier))?;

    Ok(DefinitionLocation {
        file: found.file.path().to_path_buf(),
        name: SmolStr::new(identifier),
        variant: found.file.navigator().variant(&found.definition),
        position: found.line_col(),
        range,
    })
}
