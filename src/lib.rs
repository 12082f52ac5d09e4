//! # cimpl-base
//!
//! Core library for navigating CIMPL data element schemas: parsing of the
//! 5.0 and 6.0 grammars, corpus loading and inherited attribute resolution.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → Queries and editor commands (goto, hover, completion, attributes)
//!   ↓
//! hir       → Tree navigators, inheritance resolver
//!   ↓
//! project   → Workspace walking, file classification, corpus
//!   ↓
//! parser    → Logos lexer, recursive-descent parsers, typed AST
//!   ↓
//! base      → Primitives (TextRange, LineIndex, Grammar, constants)
//! ```
//!
//! `config` holds the load and resolve options shared by `project`, `hir`
//! and `ide`.

// ============================================================================
// MODULES (dependency order: base → parser → project → hir → ide)
// ============================================================================

/// Foundation types: TextRange, LineIndex, Grammar
pub mod base;

/// Load and resolve options
pub mod config;

/// Parser: Logos lexer, recursive-descent parser, typed AST
pub mod parser;

/// High-level IR: tree navigation and inheritance
pub mod hir;

/// IDE features: goto-definition, hover, completion, inherited attributes
pub mod ide;

/// Project management: workspace loading and classification
pub mod project;

// Re-export foundation types
pub use base::{Grammar, GrammarVersion, LineCol, LineIndex, Position, Span, TextRange, TextSize};
pub use config::{AnalysisConfig, CyclePolicy, LoadOptions, ResolveOptions};
pub use hir::{InheritedAttributes, ResolveError, resolve_inherited_attributes};
pub use project::{Corpus, LoadError, load_corpus};
