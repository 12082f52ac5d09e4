//! Shared test helpers.

#![allow(dead_code)]

pub mod corpus_helpers;
pub mod source_fixtures;
