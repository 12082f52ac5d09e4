//! Analysis settings.
//!
//! Everything a query needs besides the identifier and the workspace roots:
//! which grammar to load the corpus with and how the resolver treats a
//! parent cycle. With the `serde` feature the settings can be read straight
//! from an editor's settings JSON:
//!
//! ```json
//! { "load": { "grammar_version": "6.0", "skip_files_with_errors": false },
//!   "resolve": { "cycle_policy": "error" } }
//! ```

use crate::base::GrammarVersion;

/// What the resolver does when a parent chain loops back on itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CyclePolicy {
    /// Fail with `ResolveError::CyclicInheritance`.
    #[default]
    Error,
    /// Stop at the revisited type and keep what was collected.
    Stop,
}

/// Options for building a declaration corpus.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoadOptions {
    pub grammar_version: GrammarVersion,
    /// Leave out files whose parse reported syntax errors.
    pub skip_files_with_errors: bool,
}

impl LoadOptions {
    pub fn new(grammar_version: GrammarVersion) -> Self {
        Self {
            grammar_version,
            ..Self::default()
        }
    }

    pub fn with_grammar_version(mut self, grammar_version: GrammarVersion) -> Self {
        self.grammar_version = grammar_version;
        self
    }

    pub fn with_skip_files_with_errors(mut self, skip: bool) -> Self {
        self.skip_files_with_errors = skip;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ResolveOptions {
    pub cycle_policy: CyclePolicy,
}

impl ResolveOptions {
    pub fn with_cycle_policy(mut self, cycle_policy: CyclePolicy) -> Self {
        self.cycle_policy = cycle_policy;
        self
    }
}

/// Load and resolve settings for one query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnalysisConfig {
    pub load: LoadOptions,
    pub resolve: ResolveOptions,
}

impl AnalysisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_grammar_version(mut self, grammar_version: GrammarVersion) -> Self {
        self.load.grammar_version = grammar_version;
        self
    }

    pub fn with_skip_files_with_errors(mut self, skip: bool) -> Self {
        self.load.skip_files_with_errors = skip;
        self
    }

    pub fn with_cycle_policy(mut self, cycle_policy: CyclePolicy) -> Self {
        self.resolve.cycle_policy = cycle_policy;
        self
    }
}
