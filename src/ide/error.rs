//! Error types for editor queries.

use smol_str::SmolStr;
use thiserror::Error;

use crate::hir::ResolveError;
use crate::project::LoadError;

/// Why a query produced no answer.
#[derive(Debug, Error)]
pub enum QueryError {
    /// No workspace roots to load a corpus from.
    #[error("No files in workspace.")]
    NoWorkspace,

    /// The identifier to look up is empty.
    #[error("No text selected.")]
    EmptyIdentifier,

    /// No type definition carries the identifier.
    #[error("No definition found for '{0}'")]
    NotFound(SmolStr),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Load(#[from] LoadError),
}

impl QueryError {
    pub fn not_found(name: impl Into<SmolStr>) -> Self {
        Self::NotFound(name.into())
    }

    /// Lookup misses, as opposed to failures worth an error message.
    pub fn is_miss(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
