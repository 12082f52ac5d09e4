//! AnalysisHost and Analysis: one entry point for every query.
//!
//! `AnalysisHost` remembers the workspace roots and configuration. Each call
//! to [`AnalysisHost::analysis`] walks the roots again and returns an
//! `Analysis` snapshot over the freshly loaded corpus.
//!
//! ## Usage
//!
//! ```ignore
//! let host = AnalysisHost::new(vec![root], AnalysisConfig::default());
//!
//! let analysis = host.analysis()?;
//! let location = analysis.goto_definition("Person")?;
//! let hover = analysis.hover("Person")?;
//! ```

use std::path::PathBuf;

use crate::config::AnalysisConfig;
use crate::hir::InheritedAttributes;
use crate::project::{Corpus, CorpusLoader};

use super::{
    CompletionItem, DefinitionLocation, HoverResult, QueryError, completion, goto, hover,
    inherited_attributes,
};

/// Workspace roots plus configuration.
#[derive(Debug, Clone, Default)]
pub struct AnalysisHost {
    roots: Vec<PathBuf>,
    config: AnalysisConfig,
}

impl AnalysisHost {
    pub fn new(roots: Vec<PathBuf>, config: AnalysisConfig) -> Self {
        Self { roots, config }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn set_roots(&mut self, roots: Vec<PathBuf>) {
        self.roots = roots;
    }

    pub fn set_config(&mut self, config: AnalysisConfig) {
        self.config = config;
    }

    /// Load the corpus from the current roots.
    ///
    /// Fails with [`QueryError::NoWorkspace`] when there are no roots.
    pub fn analysis(&self) -> Result<Analysis, QueryError> {
        if self.roots.is_empty() {
            return Err(QueryError::NoWorkspace);
        }
        let corpus = CorpusLoader::new(self.config.load.clone()).load(self.roots.as_slice())?;
        Ok(Analysis::new(corpus, self.config.clone()))
    }

    pub fn goto_definition(&self, identifier: &str) -> Result<DefinitionLocation, QueryError> {
        self.analysis()?.goto_definition(identifier)
    }

    pub fn inherited_attributes(&self, identifier: &str) -> Result<InheritedAttributes, QueryError> {
        self.analysis()?.inherited_attributes(identifier)
    }

    pub fn completions(&self, word: &str) -> Result<Vec<CompletionItem>, QueryError> {
        self.analysis()?.completions(word)
    }

    pub fn hover(&self, word: &str) -> Result<Option<HoverResult>, QueryError> {
        self.analysis()?.hover(word)
    }
}

/// A loaded corpus and the options queries run with.
#[derive(Debug)]
pub struct Analysis {
    corpus: Corpus,
    config: AnalysisConfig,
}

impl Analysis {
    pub fn new(corpus: Corpus, config: AnalysisConfig) -> Self {
        Self { corpus, config }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn goto_definition(&self, identifier: &str) -> Result<DefinitionLocation, QueryError> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(QueryError::EmptyIdentifier);
        }
        goto::goto_definition(&self.corpus, identifier)
    }

    pub fn inherited_attributes(&self, identifier: &str) -> Result<InheritedAttributes, QueryError> {
        inherited_attributes(&self.corpus, identifier, &self.config.resolve)
    }

    pub fn completions(&self, word: &str) -> Result<Vec<CompletionItem>, QueryError> {
        completion::completions(&self.corpus, word, &self.config.resolve)
    }

    pub fn hover(&self, word: &str) -> Result<Option<HoverResult>, QueryError> {
        hover::hover(&self.corpus, word, &self.config.resolve)
    }
}
