//! HIR tests
//!
//! Tests for:
//! - Tree navigation over both grammars
//! - Inherited attribute resolution

pub mod tests_navigator;
pub mod tests_resolve;
