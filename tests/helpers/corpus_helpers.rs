//! Helpers for building corpora in memory and on disk.

use std::fs;
use std::path::Path;

use cimpl::base::{Grammar, GrammarVersion};
use cimpl::project::Corpus;
use tempfile::TempDir;

/// An in-memory corpus, files inserted in the given order.
pub fn corpus_from(files: &[(&str, &str, Grammar)]) -> Corpus {
    let mut corpus = Corpus::new(GrammarVersion::Auto);
    for (path, text, grammar) in files {
        corpus.insert_source(*path, text, *grammar);
    }
    corpus
}

/// A temporary workspace holding `files` (relative paths, parents created).
pub fn workspace(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    write_files(dir.path(), files);
    dir
}

pub fn write_files(root: &Path, files: &[(&str, &str)]) {
    for (name, content) in files {
        let path = root.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
}

/// A 6.0 element named `name` with optional parent and fields.
pub fn v6_element(name: &str, parent: Option<&str>, fields: &[(&str, &str)]) -> String {
    let mut out = format!("Element: {}\n", name);
    if let Some(parent) = parent {
        out.push_str(&format!("Parent: {}\n", parent));
    }
    for (field, count) in fields {
        out.push_str(&format!("Property: {} {}\n", field, count));
    }
    out
}

/// A 5.0 element named `name` with optional parent and fields.
pub fn v5_element(name: &str, parent: Option<&str>, fields: &[(&str, &str)]) -> String {
    let mut out = format!("Element: {}\n", name);
    if let Some(parent) = parent {
        out.push_str(&format!("Based on: {}\n", parent));
    }
    for (field, count) in fields {
        out.push_str(&format!("{} {}\n", count, field));
    }
    out
}

/// `(name, cardinality)` pairs in resolution order.
pub fn pairs(attributes: &cimpl::hir::InheritedAttributes) -> Vec<(String, String)> {
    attributes
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
