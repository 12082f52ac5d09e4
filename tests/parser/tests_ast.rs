//! Typed accessors over parsed files.

use cimpl::base::Grammar;
use cimpl::parser::{AstNode, ConstraintKind, SourceFile, TypeDef, parse};

fn source(text: &str, grammar: Grammar) -> SourceFile {
    SourceFile::cast(parse(text, grammar).syntax()).unwrap()
}

#[test]
fn test_file_header() {
    let file = source(
        "Grammar: DataElement 6.0\nNamespace: shr.demo\nUses: shr.core, shr.base\nDescription: \"Demo.\"\n",
        Grammar::V6,
    );
    let header = file.header().unwrap();

    let grammar = header.grammar().unwrap();
    assert_eq!(grammar.dialect().as_deref(), Some("DataElement"));
    assert_eq!(grammar.version().as_deref(), Some("6.0"));

    let namespace = header.namespace().and_then(|n| n.name()).unwrap();
    assert_eq!(namespace.to_string(), "shr.demo");

    let uses: Vec<_> = header.uses().iter().map(|n| n.to_string()).collect();
    assert_eq!(uses, vec!["shr.core", "shr.base"]);

    assert_eq!(
        header.description().and_then(|d| d.text()).as_deref(),
        Some("Demo.")
    );
}

#[test]
fn test_concepts() {
    let file = source("Element: Coded\nConcept: MTH#C0001, SCT#123\n", Grammar::V6);
    let def = file.definitions().next().unwrap();

    let concept = def
        .props()
        .into_iter()
        .flat_map(|p| p.props().collect::<Vec<_>>())
        .filter_map(|p| p.property())
        .find_map(|p| match p {
            cimpl::parser::Property::Concept(c) => Some(c),
            _ => None,
        })
        .unwrap();
    assert!(!concept.is_tbd());
    let codes: Vec<_> = concept
        .concepts()
        .map(|c| (c.system().unwrap(), c.code().unwrap()))
        .collect();
    assert_eq!(
        codes,
        vec![
            ("MTH".to_string(), "C0001".to_string()),
            ("SCT".to_string(), "123".to_string()),
        ]
    );
}

#[test]
fn test_field_constraints() {
    let file = source(
        "Element: Obs\nStatus from http://example.org/vs (required) 1..1\n",
        Grammar::V6,
    );
    let def = file.definitions().next().unwrap();
    assert!(matches!(def, TypeDef::Element(_)));

    let field = def.direct_fields().next().unwrap();
    assert_eq!(field.count().and_then(|c| c.cardinality()).as_deref(), Some("1..1"));

    let wrapper = field
        .field_type()
        .and_then(|t| t.element_with_constraint())
        .unwrap();
    assert_eq!(
        wrapper.qualified_name().map(|n| n.to_string()).as_deref(),
        Some("Status")
    );
    let kinds: Vec<_> = wrapper.constraints().map(|c| c.kind()).collect();
    assert_eq!(kinds.len(), 1);
    match &kinds[0] {
        Some(ConstraintKind::ValueSet(vs)) => {
            assert_eq!(vs.value_set().as_deref(), Some("http://example.org/vs"));
            assert_eq!(vs.strength().as_deref(), Some("required"));
        }
        other => panic!("unexpected constraint {:?}", other),
    }
}
