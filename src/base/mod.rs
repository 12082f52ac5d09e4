//! Foundation types for the CIMPL toolchain.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`LineCol`], [`LineIndex`] - Line/column conversion
//! - [`Position`], [`Span`] - Editor-facing line/character positions
//! - [`Grammar`], [`GrammarVersion`] - The two CIMPL grammar dialects
//! - Domain constants (file extensions, header dialect names)
//!
//! This module has NO dependencies on other cimpl modules.

pub mod constants;
mod grammar;
mod position;
mod span;
pub mod text_utils;

pub use grammar::{Grammar, GrammarVersion, UnknownGrammarVersion};
pub use position::{Position, Span};
pub use span::{LineCol, LineIndex, TextRange, TextSize};

// Re-export text-size types for convenience
pub use text_size;
