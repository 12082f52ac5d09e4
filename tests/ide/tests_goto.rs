//! Go to definition over a loaded workspace.

use cimpl::base::GrammarVersion;
use cimpl::config::AnalysisConfig;
use cimpl::ide::{AnalysisHost, QueryError};
use cimpl::parser::DefinitionVariant;

use crate::helpers::corpus_helpers::*;
use crate::helpers::source_fixtures::*;

#[test]
fn test_goto_definition_in_workspace() {
    let dir = workspace(&[("person.txt", V6_PERSON), ("patient.txt", V6_PATIENT)]);
    let host = AnalysisHost::new(vec![dir.path().to_path_buf()], AnalysisConfig::default());

    let location = host.goto_definition("Patient").unwrap();
    assert_eq!(location.file, dir.path().join("patient.txt"));
    assert_eq!(location.variant, DefinitionVariant::Entry);
    // "Entry: Patient" is line 4 of the fixture
    assert_eq!(location.line_number(), 4);
    assert_eq!(location.position.col, 7);
}

#[test]
fn test_goto_definition_respects_grammar_version() {
    let dir = workspace(&[("foo5.txt", V5_FOO), ("foo6.txt", V6_FOO)]);
    let roots = vec![dir.path().to_path_buf()];

    let v6 = AnalysisHost::new(roots.clone(), AnalysisConfig::new().with_grammar_version(GrammarVersion::V6));
    assert_eq!(v6.goto_definition("Foo").unwrap().file, dir.path().join("foo6.txt"));

    let v5 = AnalysisHost::new(roots, AnalysisConfig::new().with_grammar_version(GrammarVersion::V5));
    assert_eq!(v5.goto_definition("Foo").unwrap().file, dir.path().join("foo5.txt"));
}

#[test]
fn test_goto_definition_misses() {
    let dir = workspace(&[("person.txt", V6_PERSON)]);
    let host = AnalysisHost::new(vec![dir.path().to_path_buf()], AnalysisConfig::default());

    assert!(host.goto_definition("Nobody").unwrap_err().is_miss());
    assert!(matches!(host.goto_definition(""), Err(QueryError::EmptyIdentifier)));
    assert!(matches!(
        AnalysisHost::default().goto_definition("Person"),
        Err(QueryError::NoWorkspace)
    ));
}
