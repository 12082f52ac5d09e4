//! The two CIMPL grammar dialects.

use std::fmt;
use std::str::FromStr;

use super::constants::{GRAMMAR_V5_TOKEN, GRAMMAR_V6_TOKEN};

/// A concrete grammar a file is parsed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Grammar {
    /// CIMPL 5.0: `Element:`/`EntryElement:`, `Based on:`, count-first fields.
    V5,
    /// CIMPL 6.0: `Entry:`/`Element:`/`Group:`/`Abstract:`, `Parent:`, `Property:` fields.
    V6,
}

impl Grammar {
    /// The grammar assumed when a header carries no version token.
    pub const LATEST: Grammar = Grammar::V6;

    /// The version token this grammar is written as in a `Grammar:` header.
    pub fn header_token(self) -> &'static str {
        match self {
            Grammar::V5 => GRAMMAR_V5_TOKEN,
            Grammar::V6 => GRAMMAR_V6_TOKEN,
        }
    }

    /// Map a header version token (`5.0`, `6.0`) to a grammar.
    pub fn from_header_token(token: &str) -> Option<Self> {
        match token {
            GRAMMAR_V5_TOKEN => Some(Grammar::V5),
            GRAMMAR_V6_TOKEN => Some(Grammar::V6),
            _ => None,
        }
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header_token())
    }
}

/// The grammar version a corpus load is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GrammarVersion {
    #[cfg_attr(feature = "serde", serde(rename = "5.0", alias = "v5"))]
    V5,
    #[cfg_attr(feature = "serde", serde(rename = "6.0", alias = "v6"))]
    V6,
    /// Accept every file and parse each with the grammar its header names.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "auto"))]
    Auto,
}

impl GrammarVersion {
    /// The concrete grammar requested, if any.
    pub fn grammar(self) -> Option<Grammar> {
        match self {
            GrammarVersion::V5 => Some(Grammar::V5),
            GrammarVersion::V6 => Some(Grammar::V6),
            GrammarVersion::Auto => None,
        }
    }
}

impl From<Grammar> for GrammarVersion {
    fn from(grammar: Grammar) -> Self {
        match grammar {
            Grammar::V5 => GrammarVersion::V5,
            Grammar::V6 => GrammarVersion::V6,
        }
    }
}

impl fmt::Display for GrammarVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.grammar() {
            Some(grammar) => grammar.fmt(f),
            None => f.write_str("auto"),
        }
    }
}

/// Error returned when a grammar version string is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown grammar version '{0}' (expected 5.0, 6.0 or auto)")]
pub struct UnknownGrammarVersion(pub String);

impl FromStr for GrammarVersion {
    type Err = UnknownGrammarVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "5" | "5.0" | "v5" | "V5" => Ok(GrammarVersion::V5),
            "6" | "6.0" | "v6" | "V6" => Ok(GrammarVersion::V6),
            "auto" | "AUTO" | "Auto" => Ok(GrammarVersion::Auto),
            other => Err(UnknownGrammarVersion(other.to_string())),
        }
    }
}
