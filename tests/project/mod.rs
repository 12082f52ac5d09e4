//! Project tests
//!
//! Tests for:
//! - File classification by header
//! - Loading corpora from workspace roots

pub mod tests_classify;
