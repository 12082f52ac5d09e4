//! Inherited attribute resolution across files and grammars.

use cimpl::base::Grammar;
use cimpl::config::{CyclePolicy, ResolveOptions};
use cimpl::hir::{InheritanceResolver, InheritedAttributes, ResolveError, resolve_inherited_attributes};
use proptest::prelude::*;
use rstest::rstest;

use crate::helpers::corpus_helpers::*;
use crate::helpers::source_fixtures::*;

// =============================================================================
// CHAINS
// =============================================================================

#[rstest]
#[case::v5(Grammar::V5)]
#[case::v6(Grammar::V6)]
fn test_chain_accumulation(#[case] grammar: Grammar) {
    let element = match grammar {
        Grammar::V5 => v5_element,
        Grammar::V6 => v6_element,
    };
    let child = element("Child", Some("Parent"), &[("b", "1..1")]);
    let parent = element("Parent", None, &[("a", "0..1")]);
    let corpus = corpus_from(&[("child.txt", child.as_str(), grammar), ("parent.txt", parent.as_str(), grammar)]);

    let attributes = resolve_inherited_attributes(&corpus, "Child").unwrap();
    assert_eq!(
        pairs(&attributes),
        vec![
            ("b".to_string(), "1..1".to_string()),
            ("a".to_string(), "0..1".to_string()),
        ]
    );
}

#[test]
fn test_fixture_chain_v6() {
    let corpus = corpus_from(&[
        ("patient.txt", V6_PATIENT, Grammar::V6),
        ("person.txt", V6_PERSON, Grammar::V6),
    ]);

    let attributes = resolve_inherited_attributes(&corpus, "Patient").unwrap();
    assert_eq!(
        attributes.keys().collect::<Vec<_>>(),
        vec!["Deceased", "BirthDate", "Name"]
    );
    assert_eq!(attributes.get("BirthDate"), Some("1..1"));
    assert_eq!(attributes.get("Name"), Some("1..*"));
}

#[test]
fn test_qualified_parent_uses_last_segment() {
    let child = v6_element("Child", Some("shr.core.Base"), &[]);
    let base = v6_element("Base", None, &[("ns.sub.Widget", "0..*")]);
    let corpus = corpus_from(&[("a.txt", child.as_str(), Grammar::V6), ("b.txt", base.as_str(), Grammar::V6)]);

    let attributes = resolve_inherited_attributes(&corpus, "Child").unwrap();
    assert_eq!(pairs(&attributes), vec![("Widget".to_string(), "0..*".to_string())]);
}

#[test]
fn test_miss_returns_empty() {
    let corpus = corpus_from(&[("person.txt", V6_PERSON, Grammar::V6)]);
    assert!(resolve_inherited_attributes(&corpus, "Unknown").unwrap().is_empty());
}

#[test]
fn test_first_definition_in_corpus_order_wins() {
    let corpus = corpus_from(&[
        ("a.txt", "Element: Dup\nProperty: First 0..1\n", Grammar::V6),
        ("b.txt", "Element: Dup\nProperty: Second 0..1\n", Grammar::V6),
    ]);
    let attributes = resolve_inherited_attributes(&corpus, "Dup").unwrap();
    assert_eq!(attributes.keys().collect::<Vec<_>>(), vec!["First"]);
}

// =============================================================================
// CYCLES
// =============================================================================

#[test]
fn test_cycle_is_reported() {
    let corpus = corpus_from(&[("cycle.txt", V6_CYCLE, Grammar::V6)]);

    let err = resolve_inherited_attributes(&corpus, "A").unwrap_err();
    let ResolveError::CyclicInheritance { type_name, chain } = &err;
    assert_eq!(type_name, "A");
    assert_eq!(chain.iter().map(|s| s.as_str()).collect::<Vec<_>>(), vec!["A", "B", "A"]);
    assert!(err.to_string().contains("'A'"));
}

#[test]
fn test_cycle_stop_policy_keeps_attributes() {
    let corpus = corpus_from(&[("cycle.txt", V6_CYCLE, Grammar::V6)]);
    let options = ResolveOptions::default().with_cycle_policy(CyclePolicy::Stop);

    let attributes = InheritanceResolver::with_options(&corpus, options)
        .resolve("B")
        .unwrap();
    assert_eq!(attributes.keys().collect::<Vec<_>>(), vec!["Beta", "Alpha"]);
}

#[test]
fn test_self_parent_is_a_cycle() {
    let corpus = corpus_from(&[("a.txt", "Element: Loop\nParent: Loop\n", Grammar::V6)]);
    assert!(resolve_inherited_attributes(&corpus, "Loop").is_err());
}

// =============================================================================
// PROPERTIES
// =============================================================================

fn count() -> impl Strategy<Value = String> {
    (
        0u32..3,
        prop_oneof![Just("*".to_string()), (1u32..4).prop_map(|n| n.to_string())],
    )
        .prop_map(|(lower, upper)| format!("{}..{}", lower, upper))
}

fn level_fields() -> impl Strategy<Value = Vec<(usize, String)>> {
    prop::collection::vec((0usize..5, count()), 0..6)
}

fn expected(levels: &[&[(usize, String)]]) -> InheritedAttributes {
    let mut attributes = InheritedAttributes::new();
    for fields in levels {
        for (index, count) in fields.iter() {
            attributes.insert_if_absent(format!("f{}", index).into(), count.as_str().into());
        }
    }
    attributes
}

fn declare(name: &str, parent: Option<&str>, fields: &[(usize, String)]) -> String {
    let fields: Vec<(String, String)> = fields
        .iter()
        .map(|(index, count)| (format!("f{}", index), count.clone()))
        .collect();
    let borrowed: Vec<(&str, &str)> = fields
        .iter()
        .map(|(f, c)| (f.as_str(), c.as_str()))
        .collect();
    v6_element(name, parent, &borrowed)
}

proptest! {
    #[test]
    fn first_seen_wins_along_the_chain(
        grand in level_fields(),
        parent in level_fields(),
        child in level_fields(),
    ) {
        let text = format!(
            "{}\n{}\n{}",
            declare("Child", Some("Parent"), &child),
            declare("Parent", Some("Grand"), &parent),
            declare("Grand", None, &grand),
        );
        let corpus = corpus_from(&[("chain.txt", text.as_str(), Grammar::V6)]);

        let attributes = resolve_inherited_attributes(&corpus, "Child").unwrap();
        let want = expected(&[child.as_slice(), parent.as_slice(), grand.as_slice()]);
        prop_assert_eq!(pairs(&attributes), pairs(&want));
    }

    #[test]
    fn resolution_is_idempotent(fields in level_fields(), parent_fields in level_fields()) {
        let text = format!(
            "{}\n{}",
            declare("Child", Some("Parent"), &fields),
            declare("Parent", None, &parent_fields),
        );
        let corpus = corpus_from(&[("a.txt", text.as_str(), Grammar::V6)]);

        let first = resolve_inherited_attributes(&corpus, "Child").unwrap();
        let second = resolve_inherited_attributes(&corpus, "Child").unwrap();
        prop_assert_eq!(first, second);
    }
}
