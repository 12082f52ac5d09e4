//! Parser tests
//!
//! Tests for:
//! - Lossless parsing and recovery
//! - Typed AST accessors

pub mod tests_ast;
