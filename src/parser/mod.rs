//! Rowan-based parser for CIMPL data element files
//!
//! This module provides a lossless parser using:
//! - **logos** for fast lexing
//! - **rowan** for the CST (Concrete Syntax Tree)
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with SyntaxKind
//!     ↓
//! Parser (5.0 or 6.0 grammar) → GreenNode tree
//!     ↓
//! SyntaxNode (rowan) → CST with parent pointers
//!     ↓
//! AST layer → Typed wrappers over SyntaxNode
//!     ↓
//! HIR → Tree navigation and inheritance resolution
//! ```
//!
//! Both grammars share one token vocabulary. The grammar a file is parsed with
//! is decided by the caller, usually from the file's `Grammar:` header.

#[allow(clippy::module_inception)]
mod parser;

pub mod ast;
pub mod grammar;
mod lexer;
mod syntax_kind;

pub use ast::*;
pub use lexer::{Lexer, Token, tokenize};
pub use parser::{Parse, SyntaxError, parse, parse_v5, parse_v6};
pub use syntax_kind::{CimplLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};

/// Re-export rowan types for convenience
pub use rowan::{GreenNode, TextRange, TextSize};
