//! File classification by name and `Grammar:` header.

use std::path::{Path, PathBuf};

use crate::base::constants::{
    CONFIG_FILE_SUFFIXES, DECLARATION_EXTENSIONS, DIALECT_CONTENT_PROFILE, DIALECT_DATA_ELEMENT,
    DIALECT_MAP, DIALECT_VALUE_SET, GRAMMAR_HEADER_PREFIX,
};
use crate::base::{Grammar, GrammarVersion};

/// What a declaration file contains, per its header dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileCategory {
    ContentProfile,
    DataElement,
    Map,
    ValueSet,
    Config,
}

impl FileCategory {
    pub fn from_dialect(dialect: &str) -> Option<Self> {
        match dialect {
            DIALECT_DATA_ELEMENT => Some(Self::DataElement),
            DIALECT_MAP => Some(Self::Map),
            DIALECT_VALUE_SET => Some(Self::ValueSet),
            DIALECT_CONTENT_PROFILE => Some(Self::ContentProfile),
            _ => None,
        }
    }
}

/// The words of a `Grammar:` header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrammarHeader<'a> {
    pub dialect: &'a str,
    pub version: Option<&'a str>,
}

/// Read a `Grammar: <dialect> [<version>]` line.
///
/// Leading whitespace is allowed; at least one blank must follow the colon.
pub fn parse_header_line(line: &str) -> Option<GrammarHeader<'_>> {
    let rest = line.trim_start().strip_prefix(GRAMMAR_HEADER_PREFIX)?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let mut words = rest.split_whitespace();
    let dialect = words.next()?;
    Some(GrammarHeader {
        dialect,
        version: words.next(),
    })
}

/// The first header line of a file, if any.
pub fn find_header(text: &str) -> Option<GrammarHeader<'_>> {
    text.lines().find_map(parse_header_line)
}

fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or("")
}

pub fn is_config_file(path: &Path) -> bool {
    let name = file_name(path);
    CONFIG_FILE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

/// Whether the loader should look inside this file at all.
pub fn is_candidate_file(path: &Path) -> bool {
    let has_extension = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| DECLARATION_EXTENSIONS.contains(&ext));
    has_extension || is_config_file(path)
}

/// A file the loader keeps, and the grammar it would be parsed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub category: FileCategory,
    pub grammar: Grammar,
}

/// Decide whether a file belongs to a load for `requested`, and how.
///
/// Returns `None` for files the load leaves out: a version token that does
/// not match the requested grammar, an unknown dialect or version, or no
/// header on a file that is not a config file.
pub fn classify(path: &Path, text: &str, requested: GrammarVersion) -> Option<Classification> {
    let Some(header) = find_header(text) else {
        return is_config_file(path).then(|| Classification {
            category: FileCategory::Config,
            grammar: requested.grammar().unwrap_or(Grammar::LATEST),
        });
    };

    let category = FileCategory::from_dialect(header.dialect)?;
    let grammar = match header.version {
        Some(token) => {
            let declared = Grammar::from_header_token(token)?;
            match requested.grammar() {
                Some(wanted) if wanted != declared => return None,
                _ => declared,
            }
        }
        None => requested.grammar().unwrap_or(Grammar::LATEST),
    };

    Some(Classification { category, grammar })
}

/// Every file a load classified, grouped by category in load order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilesByType {
    pub content_profiles: Vec<PathBuf>,
    pub data_elements: Vec<PathBuf>,
    pub maps: Vec<PathBuf>,
    pub value_sets: Vec<PathBuf>,
    pub configs: Vec<PathBuf>,
}

impl FilesByType {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, category: FileCategory, path: PathBuf) {
        self.bucket_mut(category).push(path);
    }

    pub fn get(&self, category: FileCategory) -> &[PathBuf] {
        match category {
            FileCategory::ContentProfile => &self.content_profiles,
            FileCategory::DataElement => &self.data_elements,
            FileCategory::Map => &self.maps,
            FileCategory::ValueSet => &self.value_sets,
            FileCategory::Config => &self.configs,
        }
    }

    fn bucket_mut(&mut self, category: FileCategory) -> &mut Vec<PathBuf> {
        match category {
            FileCategory::ContentProfile => &mut self.content_profiles,
            FileCategory::DataElement => &mut self.data_elements,
            FileCategory::Map => &mut self.maps,
            FileCategory::ValueSet => &mut self.value_sets,
            FileCategory::Config => &mut self.configs,
        }
    }

    pub fn len(&self) -> usize {
        self.content_profiles.len()
            + self.data_elements.len()
            + self.maps.len()
            + self.value_sets.len()
            + self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
