//! Workspace loading: file discovery, classification and the parsed corpus.

mod classify;
mod corpus;
mod error;
mod loader;

pub use classify::{
    Classification, FileCategory, FilesByType, GrammarHeader, classify, find_header,
    is_candidate_file, is_config_file, parse_header_line,
};
pub use corpus::{Corpus, ParsedFile};
pub use error::LoadError;
pub use loader::{CorpusLoader, load_corpus};
