//! Editor command flows against a recording host.

use std::path::PathBuf;

use cimpl::base::{Position, Span};
use cimpl::config::AnalysisConfig;
use cimpl::ide::commands::{
    NO_ACTIVE_EDITOR, NO_FILES_IN_WORKSPACE, NO_INHERITED_ATTRIBUTES, NO_TEXT_SELECTED,
};
use cimpl::ide::{AttributeChoice, Commands, EditorDocument, EditorHost};

use crate::helpers::corpus_helpers::*;
use crate::helpers::source_fixtures::*;

#[derive(Default)]
struct RecordingHost {
    document: Option<EditorDocument>,
    roots: Vec<PathBuf>,
    pick: Option<usize>,
    errors: Vec<String>,
    infos: Vec<String>,
    offered: Vec<String>,
    inserts: Vec<(Position, String)>,
    cursor: Option<Position>,
}

impl EditorHost for RecordingHost {
    fn active_document(&self) -> Option<EditorDocument> {
        self.document.clone()
    }

    fn workspace_roots(&self) -> Vec<PathBuf> {
        self.roots.clone()
    }

    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    fn show_info(&mut self, message: &str) {
        self.infos.push(message.to_string());
    }

    fn quick_pick(&mut self, choices: &[AttributeChoice]) -> Option<usize> {
        self.offered = choices.iter().map(|c| c.to_string()).collect();
        self.pick
    }

    fn insert(&mut self, position: Position, text: &str) {
        self.inserts.push((position, text.to_string()));
    }

    fn set_cursor(&mut self, position: Position) {
        self.cursor = Some(position);
    }
}

const EDITING: &str = "Element: Visit\nProperty: Patient 1..1\n";

fn host_with(text: &str, selection: Span, roots: Vec<PathBuf>) -> RecordingHost {
    RecordingHost {
        document: Some(EditorDocument::new("visit.txt", text, selection)),
        roots,
        pick: Some(1),
        ..Default::default()
    }
}

// =============================================================================
// INHERITED ATTRIBUTES
// =============================================================================

#[test]
fn test_pick_inserts_after_word_and_moves_cursor() {
    let dir = workspace(&[("person.txt", V6_PERSON), ("patient.txt", V6_PATIENT)]);
    // Cursor inside "Patient" on line 1
    let mut host = host_with(
        EDITING,
        Span::empty(Position::new(1, 12)),
        vec![dir.path().to_path_buf()],
    );

    let picked = Commands::default().get_inherited_attributes(&mut host).unwrap();
    assert_eq!(picked.name, "BirthDate");

    assert_eq!(host.offered, vec!["Deceased: 0..1", "BirthDate: 1..1", "Name: 1..*"]);
    assert_eq!(host.inserts, vec![(Position::new(1, 17), ".BirthDate".to_string())]);
    // "Property: Patient.BirthDate 1..1"
    assert_eq!(host.cursor, Some(Position::new(1, 32)));
    assert!(host.errors.is_empty());
}

#[test]
fn test_selection_is_trimmed_and_end_is_used() {
    let dir = workspace(&[("person.txt", V6_PERSON), ("patient.txt", V6_PATIENT)]);
    let mut host = host_with(
        EDITING,
        Span::from_coords(1, 9, 1, 17),
        vec![dir.path().to_path_buf()],
    );
    host.pick = Some(0);

    let picked = Commands::default().get_inherited_attributes(&mut host).unwrap();
    assert_eq!(picked.name, "Deceased");
    assert_eq!(host.inserts, vec![(Position::new(1, 17), ".Deceased".to_string())]);
}

#[test]
fn test_dismissed_pick_changes_nothing() {
    let dir = workspace(&[("person.txt", V6_PERSON)]);
    let text = "Element: X\nProperty: Person 0..1\n";
    let mut host = host_with(text, Span::empty(Position::new(1, 10)), vec![dir.path().to_path_buf()]);
    host.pick = None;

    assert!(Commands::default().get_inherited_attributes(&mut host).is_none());
    assert_eq!(host.offered.len(), 2);
    assert!(host.inserts.is_empty());
    assert_eq!(host.cursor, None);
}

#[test]
fn test_no_active_editor() {
    let mut host = RecordingHost::default();
    assert!(Commands::default().get_inherited_attributes(&mut host).is_none());
    assert_eq!(host.errors, vec![NO_ACTIVE_EDITOR]);
}

#[test]
fn test_no_text_selected() {
    let mut host = host_with("Element: X\n\n", Span::empty(Position::new(1, 0)), Vec::new());
    assert!(Commands::default().get_inherited_attributes(&mut host).is_none());
    assert_eq!(host.errors, vec![NO_TEXT_SELECTED]);

    let mut blank = host_with("   \n", Span::from_coords(0, 0, 0, 3), Vec::new());
    assert!(Commands::default().get_inherited_attributes(&mut blank).is_none());
    assert_eq!(blank.errors, vec![NO_TEXT_SELECTED]);
}

#[test]
fn test_no_files_in_workspace() {
    let mut host = host_with(EDITING, Span::empty(Position::new(1, 12)), Vec::new());
    assert!(Commands::default().get_inherited_attributes(&mut host).is_none());
    assert_eq!(host.errors, vec![NO_FILES_IN_WORKSPACE]);
}

#[test]
fn test_no_inherited_attributes() {
    let dir = workspace(&[("person.txt", V6_PERSON)]);
    let mut host = host_with(EDITING, Span::empty(Position::new(1, 12)), vec![dir.path().to_path_buf()]);

    assert!(Commands::default().get_inherited_attributes(&mut host).is_none());
    assert!(host.errors.is_empty());
    assert_eq!(host.infos, vec![NO_INHERITED_ATTRIBUTES]);
}

#[test]
fn test_cycle_is_reported_by_name() {
    let dir = workspace(&[("cycle.txt", V6_CYCLE)]);
    let mut host = host_with("0..1 A\n", Span::empty(Position::new(0, 5)), vec![dir.path().to_path_buf()]);

    assert!(Commands::default().get_inherited_attributes(&mut host).is_none());
    assert_eq!(host.errors.len(), 1);
    assert!(host.errors[0].contains("'A'"), "{}", host.errors[0]);
}

// =============================================================================
// PROVIDERS
// =============================================================================

#[test]
fn test_goto_definition_provider() {
    let dir = workspace(&[("patient.txt", V6_PATIENT)]);
    let host = host_with(EDITING, Span::empty(Position::new(1, 10)), vec![dir.path().to_path_buf()]);
    let commands = Commands::new(AnalysisConfig::default());

    let location = commands.goto_definition(&host, Position::new(1, 10)).unwrap();
    assert_eq!(location.file, dir.path().join("patient.txt"));
    assert_eq!(location.line_number(), 4);

    // On whitespace
    assert!(commands.goto_definition(&host, Position::new(1, 30)).is_none());
}

#[test]
fn test_goto_definition_non_ascii_name() {
    let source = "Grammar: DataElement 6.0\nNamespace: shr.demo\n\nElement: Café\nProperty: Menü 0..1\n";
    let dir = workspace(&[("cafe.txt", source)]);
    let text = "Element: Visit\nProperty: Café 1..1\n";
    // Cursor on the accented letter
    let host = host_with(text, Span::empty(Position::new(1, 13)), vec![dir.path().to_path_buf()]);
    let commands = Commands::default();

    let location = commands.goto_definition(&host, Position::new(1, 13)).unwrap();
    assert_eq!(location.file, dir.path().join("cafe.txt"));
    assert_eq!(location.line_number(), 4);

    let hover = commands.hover(&host, Position::new(1, 13)).unwrap();
    assert_eq!(hover.lines, vec!["0..1 Menü"]);
}

#[test]
fn test_completion_provider_after_dot() {
    let dir = workspace(&[("person.txt", V6_PERSON)]);
    let text = "Element: X\nProperty: Person.\n";
    let host = host_with(text, Span::empty(Position::new(1, 17)), vec![dir.path().to_path_buf()]);

    let labels: Vec<_> = Commands::default()
        .completions(&host, Position::new(1, 17))
        .iter()
        .map(|i| i.label.to_string())
        .collect();
    assert_eq!(labels, vec!["BirthDate", "Name"]);
}

#[test]
fn test_hover_provider() {
    let dir = workspace(&[("person.txt", V6_PERSON)]);
    let text = "Element: X\nProperty: Person 0..1\n";
    let host = host_with(text, Span::empty(Position::new(1, 12)), vec![dir.path().to_path_buf()]);

    let hover = Commands::default().hover(&host, Position::new(1, 12)).unwrap();
    assert_eq!(hover.lines, vec!["0..1 BirthDate", "1..* Name"]);

    let empty = host_with(text, Span::empty(Position::new(1, 12)), Vec::new());
    assert!(Commands::default().hover(&empty, Position::new(1, 12)).is_none());
}
