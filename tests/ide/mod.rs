//! IDE feature tests
//!
//! Tests for:
//! - Go to definition
//! - Hover and completion
//! - Editor command flows

pub mod tests_commands;
pub mod tests_goto;
pub mod tests_hover;
