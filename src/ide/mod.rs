//! IDE features: high-level queries for editor integrations.
//!
//! Each query is a pure function of the corpus and an identifier. The
//! [`commands`] module wires them to an editor through [`EditorHost`].
//!
//! ## Usage
//!
//! ```ignore
//! use cimpl::ide::AnalysisHost;
//!
//! let host = AnalysisHost::new(vec!["schemas".into()], Default::default());
//! let analysis = host.analysis()?;
//! let attributes = analysis.inherited_attributes("Person")?;
//! ```

mod analysis;
mod attributes;
pub mod commands;
mod completion;
mod error;
mod goto;
mod hover;

pub use analysis::{Analysis, AnalysisHost};
pub use attributes::{AttributeChoice, attribute_choices, inherited_attributes};
pub use commands::{Commands, EditorDocument, EditorHost};
pub use completion::{CompletionItem, CompletionKind, completions};
pub use error::QueryError;
pub use goto::{DefinitionLocation, goto_definition};
pub use hover::{HoverResult, hover};
