//! Navigator tests: the same declarations seen through both grammars.

use cimpl::base::Grammar;
use cimpl::hir::{TreeNavigator, field_attribute, navigator_for};
use cimpl::parser::{AstNode, DefinitionVariant, SourceFile, parse};
use rstest::rstest;

use crate::helpers::source_fixtures::*;

fn first_definition_attributes(text: &str, grammar: Grammar) -> Vec<(String, String)> {
    let navigator = navigator_for(grammar);
    let source = SourceFile::cast(parse(text, grammar).syntax()).unwrap();
    let definition = navigator.definitions(&source).into_iter().next().unwrap();
    navigator
        .fields(&definition)
        .iter()
        .filter_map(field_attribute)
        .map(|(name, count)| (name.to_string(), count.to_string()))
        .collect()
}

#[rstest]
#[case::v5(V5_PERSON, Grammar::V5)]
#[case::v6(V6_PERSON, Grammar::V6)]
fn test_fields_agree_across_grammars(#[case] text: &str, #[case] grammar: Grammar) {
    assert_eq!(
        first_definition_attributes(text, grammar),
        vec![
            ("BirthDate".to_string(), "0..1".to_string()),
            ("Name".to_string(), "1..*".to_string()),
        ]
    );
}

#[rstest]
#[case::v5(V5_PATIENT, Grammar::V5, DefinitionVariant::Entry)]
#[case::v6(V6_PATIENT, Grammar::V6, DefinitionVariant::Entry)]
fn test_parent_reference(
    #[case] text: &str,
    #[case] grammar: Grammar,
    #[case] variant: DefinitionVariant,
) {
    let navigator = navigator_for(grammar);
    assert_eq!(navigator.grammar(), grammar);

    let source = SourceFile::cast(parse(text, grammar).syntax()).unwrap();
    let definition = navigator.definitions(&source).into_iter().next().unwrap();

    assert_eq!(navigator.variant(&definition), variant);
    assert_eq!(
        navigator
            .simple_name(&definition)
            .and_then(|n| n.text())
            .as_deref(),
        Some("Patient")
    );
    assert_eq!(
        navigator
            .parent_reference(&definition)
            .map(|name| name.to_string()),
        Some("Person".to_string())
    );
}

#[test]
fn test_value_lines_are_not_attributes() {
    let text = "Element: Coded\nValue: concept\n0..1 Status\n";
    assert_eq!(
        first_definition_attributes(text, Grammar::V5),
        vec![("Status".to_string(), "0..1".to_string())]
    );
}

#[test]
fn test_ref_and_constrained_fields() {
    let text = "\
Element: Order
Property: ref(Practitioner) 1..1
Property: Priority from http://example.org/vs/priority (required) 0..1
Item[Medication].Dose 0..*
Status
";
    assert_eq!(
        first_definition_attributes(text, Grammar::V6),
        vec![
            ("Practitioner".to_string(), "1..1".to_string()),
            ("Priority".to_string(), "0..1".to_string()),
            ("Dose".to_string(), "0..*".to_string()),
        ]
    );
}
