//! The declaration corpus: every parsed data element file of one load.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use super::classify::FilesByType;
use crate::base::{Grammar, GrammarVersion, LineIndex};
use crate::hir::{TreeNavigator, navigator_for};
use crate::parser::{AstNode, Parse, SourceFile, parse};

/// One parsed declaration file.
pub struct ParsedFile {
    path: PathBuf,
    grammar: Grammar,
    parse: Parse,
    line_index: LineIndex,
    navigator: &'static dyn TreeNavigator,
}

impl ParsedFile {
    /// Parse `text` with `grammar` and pick the matching navigator.
    pub fn new(path: impl Into<PathBuf>, text: &str, grammar: Grammar) -> Self {
        Self {
            path: path.into(),
            grammar,
            parse: parse(text, grammar),
            line_index: LineIndex::new(text),
            navigator: navigator_for(grammar),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn grammar(&self) -> Grammar {
        self.grammar
    }

    pub fn parse(&self) -> &Parse {
        &self.parse
    }

    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }

    pub fn navigator(&self) -> &'static dyn TreeNavigator {
        self.navigator
    }

    pub fn source_file(&self) -> Option<SourceFile> {
        SourceFile::cast(self.parse.syntax())
    }
}

impl std::fmt::Debug for ParsedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParsedFile")
            .field("path", &self.path)
            .field("grammar", &self.grammar)
            .field("errors", &self.parse.errors.len())
            .finish()
    }
}

/// Parsed files keyed by path, iterated in load order.
#[derive(Debug, Default)]
pub struct Corpus {
    files: IndexMap<PathBuf, ParsedFile>,
    inventory: FilesByType,
    grammar_version: GrammarVersion,
}

impl Corpus {
    pub fn new(grammar_version: GrammarVersion) -> Self {
        Self {
            grammar_version,
            ..Self::default()
        }
    }

    /// The grammar version this corpus was loaded for.
    pub fn grammar_version(&self) -> GrammarVersion {
        self.grammar_version
    }

    /// Add a file. A path already present keeps its first tree; returns
    /// whether the file was added.
    pub fn insert(&mut self, file: ParsedFile) -> bool {
        if self.files.contains_key(&file.path) {
            return false;
        }
        self.files.insert(file.path.clone(), file);
        true
    }

    /// Parse `text` and add it under `path`.
    pub fn insert_source(&mut self, path: impl Into<PathBuf>, text: &str, grammar: Grammar) -> bool {
        self.insert(ParsedFile::new(path, text, grammar))
    }

    pub fn get(&self, path: &Path) -> Option<&ParsedFile> {
        self.files.get(path)
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    pub fn files(&self) -> impl Iterator<Item = &ParsedFile> {
        self.files.values()
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.files.keys().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Every file the load classified, parsed or not.
    pub fn inventory(&self) -> &FilesByType {
        &self.inventory
    }

    pub(crate) fn inventory_mut(&mut self) -> &mut FilesByType {
        &mut self.inventory
    }
}
