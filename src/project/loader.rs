use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;
use tracing::{debug, trace, warn};
use walkdir::WalkDir;

use super::classify::{FileCategory, classify, is_candidate_file};
use super::corpus::{Corpus, ParsedFile};
use super::error::LoadError;
use crate::config::LoadOptions;

/// Builds a [`Corpus`] from workspace root directories.
pub struct CorpusLoader {
    options: LoadOptions,
}

impl CorpusLoader {
    pub fn new(options: LoadOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    /// Walks every root in order and parses each data element file that
    /// belongs to the requested grammar version.
    ///
    /// Files are visited sorted by name, so the corpus order is stable across
    /// runs. A path reached from two roots is read once, from the first.
    pub fn load<P: AsRef<Path>>(&self, roots: &[P]) -> Result<Corpus, LoadError> {
        let mut corpus = Corpus::new(self.options.grammar_version);
        let mut visited: FxHashSet<PathBuf> = FxHashSet::default();

        for root in roots {
            let root = root.as_ref();
            if !root.is_dir() {
                return Err(LoadError::root_not_found(root));
            }
            self.load_root(root, &mut corpus, &mut visited)?;
        }

        debug!(
            files = corpus.len(),
            classified = corpus.inventory().len(),
            grammar = %self.options.grammar_version,
            "corpus loaded"
        );
        Ok(corpus)
    }

    fn load_root(
        &self,
        root: &Path,
        corpus: &mut Corpus,
        visited: &mut FxHashSet<PathBuf>,
    ) -> Result<(), LoadError> {
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => return Err(LoadError::walk(root, err)),
                Err(err) => {
                    warn!("Skipping unreadable entry under {}: {}", root.display(), err);
                    continue;
                }
            };

            let path = entry.path();
            if !entry.file_type().is_file() || !is_candidate_file(path) {
                continue;
            }
            if !visited.insert(path.to_path_buf()) {
                trace!("Already visited {}", path.display());
                continue;
            }
            self.load_file(path, corpus);
        }
        Ok(())
    }

    fn load_file(&self, path: &Path, corpus: &mut Corpus) {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                warn!("Failed to read {}: {}", path.display(), err);
                return;
            }
        };

        let Some(classification) = classify(path, &text, self.options.grammar_version) else {
            trace!("Not part of this load: {}", path.display());
            return;
        };
        corpus
            .inventory_mut()
            .push(classification.category, path.to_path_buf());

        if classification.category != FileCategory::DataElement {
            trace!(
                "Classified {} as {:?}, not parsed",
                path.display(),
                classification.category
            );
            return;
        }

        let file = ParsedFile::new(path, &text, classification.grammar);
        let errors = &file.parse().errors;
        if !errors.is_empty() {
            debug!(
                "{} syntax error(s) in {} (grammar {}), first: {}",
                errors.len(),
                path.display(),
                classification.grammar,
                errors[0].message
            );
            if self.options.skip_files_with_errors {
                debug!("Skipping {}", path.display());
                return;
            }
        }

        trace!("Parsed {} with grammar {}", path.display(), classification.grammar);
        corpus.insert(file);
    }
}

/// Load a corpus from `roots` with `options`.
pub fn load_corpus<P: AsRef<Path>>(roots: &[P], options: &LoadOptions) -> Result<Corpus, LoadError> {
    CorpusLoader::new(options.clone()).load(roots)
}
