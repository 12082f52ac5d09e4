//! Editor command flows.
//!
//! An editor integration implements [`EditorHost`]; [`Commands`] then runs
//! go-to-definition, the inherited attribute picker, completion and hover
//! against it. Input problems are reported through the host and end the flow.

use std::path::PathBuf;

use tracing::debug;

use crate::base::text_utils::{extract_word_before_cursor, find_word_boundaries_near};
use crate::base::{Position, Span};
use crate::config::AnalysisConfig;

use super::{
    AnalysisHost, AttributeChoice, CompletionItem, DefinitionLocation, HoverResult, QueryError,
    attribute_choices,
};

pub const NO_ACTIVE_EDITOR: &str = "No active editor.";
pub const NO_TEXT_SELECTED: &str = "No text selected.";
pub const NO_FILES_IN_WORKSPACE: &str = "No files in workspace.";
pub const NO_INHERITED_ATTRIBUTES: &str = "No inherited attributes.";

/// The document in the focused editor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorDocument {
    pub path: PathBuf,
    pub text: String,
    /// Current selection; empty when only a cursor is placed.
    pub selection: Span,
}

impl EditorDocument {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>, selection: Span) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
            selection,
        }
    }

    /// A document with a bare cursor at `cursor`.
    pub fn with_cursor(path: impl Into<PathBuf>, text: impl Into<String>, cursor: Position) -> Self {
        Self::new(path, text, Span::empty(cursor))
    }

    /// Text of line `line` without its terminator.
    pub fn line(&self, line: usize) -> Option<&str> {
        self.text
            .split('\n')
            .nth(line)
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
    }

    /// The selected text, or `None` for an empty selection.
    pub fn selected_text(&self) -> Option<String> {
        if self.selection.is_empty() {
            return None;
        }
        let Span { start, end } = self.selection;
        let mut out = String::new();
        for line in start.line..=end.line {
            let text = self.line(line)?;
            let from = if line == start.line { start.column } else { 0 };
            let to = if line == end.line { end.column } else { usize::MAX };
            if line > start.line {
                out.push('\n');
            }
            out.extend(text.chars().skip(from).take(to.saturating_sub(from)));
        }
        Some(out)
    }

    /// Range of the identifier under or just before `position`.
    pub fn word_range_at(&self, position: Position) -> Option<Span> {
        let chars: Vec<char> = self.line(position.line)?.chars().collect();
        let (start, end) = find_word_boundaries_near(&chars, position.column)?;
        Some(Span::from_coords(position.line, start, position.line, end))
    }

    pub fn word_at(&self, position: Position) -> Option<String> {
        let range = self.word_range_at(position)?;
        let chars = self.line(position.line)?.chars();
        Some(
            chars
                .skip(range.start.column)
                .take(range.end.column - range.start.column)
                .collect(),
        )
    }

    /// The identifier a command acts on, and where `.attribute` goes after it.
    ///
    /// A non-empty selection wins; otherwise the word under the cursor is used.
    pub fn target(&self) -> Option<(String, Position)> {
        match self.selected_text() {
            Some(text) => Some((text.trim().to_string(), self.selection.end)),
            None => {
                let cursor = self.selection.end;
                let range = self.word_range_at(cursor)?;
                Some((self.word_at(cursor)?.trim().to_string(), range.end))
            }
        }
    }
}

/// The editor side of every command.
pub trait EditorHost {
    fn active_document(&self) -> Option<EditorDocument>;

    fn workspace_roots(&self) -> Vec<PathBuf>;

    fn show_error(&mut self, message: &str);

    fn show_info(&mut self, message: &str);

    /// Offer `choices` and return the index picked, `None` when dismissed.
    fn quick_pick(&mut self, choices: &[AttributeChoice]) -> Option<usize>;

    fn insert(&mut self, position: Position, text: &str);

    fn set_cursor(&mut self, position: Position);
}

/// Runs editor commands with one configuration.
#[derive(Debug, Clone, Default)]
pub struct Commands {
    config: AnalysisConfig,
}

impl Commands {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    fn analysis_host(&self, host: &dyn EditorHost) -> AnalysisHost {
        AnalysisHost::new(host.workspace_roots(), self.config.clone())
    }

    /// Definition of the word at `position` in the active document.
    pub fn goto_definition(&self, host: &dyn EditorHost, position: Position) -> Option<DefinitionLocation> {
        let document = host.active_document()?;
        let word = document.word_at(position)?;
        match self.analysis_host(host).goto_definition(&word) {
            Ok(location) => Some(location),
            Err(err) => {
                debug!("goto definition for '{}': {}", word, err);
                None
            }
        }
    }

    /// Pick one of the inherited attributes of the selected type and append
    /// it as `.name`. Returns the picked attribute.
    pub fn get_inherited_attributes(&self, host: &mut dyn EditorHost) -> Option<AttributeChoice> {
        let Some(document) = host.active_document() else {
            host.show_error(NO_ACTIVE_EDITOR);
            return None;
        };

        let (identifier, insert_at) = match document.target() {
            Some((identifier, at)) if !identifier.is_empty() => (identifier, at),
            _ => {
                host.show_error(NO_TEXT_SELECTED);
                return None;
            }
        };

        let attributes = match self.analysis_host(host).inherited_attributes(&identifier) {
            Ok(attributes) => attributes,
            Err(QueryError::NoWorkspace) => {
                host.show_error(NO_FILES_IN_WORKSPACE);
                return None;
            }
            Err(err) => {
                host.show_error(&err.to_string());
                return None;
            }
        };

        if attributes.is_empty() {
            host.show_info(NO_INHERITED_ATTRIBUTES);
            return None;
        }

        let choices = attribute_choices(&attributes);
        let picked = choices.get(host.quick_pick(&choices)?)?.clone();

        let insert_text = picked.insert_text();
        host.insert(insert_at, &insert_text);

        let line_len = document
            .line(insert_at.line)
            .map_or(0, |line| line.chars().count());
        host.set_cursor(Position::new(insert_at.line, line_len + insert_text.chars().count()));

        Some(picked)
    }

    /// Attribute candidates for `Type.` typed before `position`.
    pub fn completions(&self, host: &dyn EditorHost, position: Position) -> Vec<CompletionItem> {
        let Some(document) = host.active_document() else {
            return Vec::new();
        };
        let word = document
            .line(position.line)
            .and_then(|line| extract_word_before_cursor(line, position.column))
            .or_else(|| document.word_at(position));
        let Some(word) = word else {
            return Vec::new();
        };

        self.analysis_host(host)
            .completions(&word)
            .unwrap_or_else(|err| {
                debug!("completions for '{}': {}", word, err);
                Vec::new()
            })
    }

    /// Hover lines for the word at `position`.
    pub fn hover(&self, host: &dyn EditorHost, position: Position) -> Option<HoverResult> {
        let document = host.active_document()?;
        let word = document.word_at(position)?;
        self.analysis_host(host).hover(&word).unwrap_or_else(|err| {
            debug!("hover for '{}': {}", word, err);
            None
        })
    }
}
