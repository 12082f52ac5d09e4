//! Classification by `Grammar:` header and file name.

use std::path::Path;

use cimpl::base::{Grammar, GrammarVersion};
use cimpl::project::{FileCategory, classify, is_candidate_file};
use rstest::rstest;

use crate::helpers::source_fixtures::*;

#[rstest]
#[case::v6_under_auto(V6_PERSON, GrammarVersion::Auto, Some((FileCategory::DataElement, Grammar::V6)))]
#[case::v6_under_v6(V6_PERSON, GrammarVersion::V6, Some((FileCategory::DataElement, Grammar::V6)))]
#[case::v6_under_v5(V6_PERSON, GrammarVersion::V5, None)]
#[case::v5_under_v5(V5_PERSON, GrammarVersion::V5, Some((FileCategory::DataElement, Grammar::V5)))]
#[case::v5_under_v6(V5_PERSON, GrammarVersion::V6, None)]
#[case::value_set(VALUE_SET_FILE, GrammarVersion::Auto, Some((FileCategory::ValueSet, Grammar::V6)))]
#[case::map(MAP_FILE, GrammarVersion::V6, Some((FileCategory::Map, Grammar::V6)))]
#[case::unknown_dialect("Grammar: Widget 6.0\n", GrammarVersion::Auto, None)]
#[case::no_header("Element: Foo\n", GrammarVersion::Auto, None)]
fn test_classify_declaration(
    #[case] text: &str,
    #[case] requested: GrammarVersion,
    #[case] expected: Option<(FileCategory, Grammar)>,
) {
    let result = classify(Path::new("shr_demo.txt"), text, requested)
        .map(|c| (c.category, c.grammar));
    assert_eq!(result, expected);
}

#[test]
fn test_config_without_header() {
    let result = classify(Path::new("demo_config.json"), CONFIG_JSON, GrammarVersion::V5).unwrap();
    assert_eq!(result.category, FileCategory::Config);
}

#[rstest]
#[case("shr_demo.txt", true)]
#[case("shr_demo.shr", true)]
#[case("config.json", true)]
#[case("demo_config.txt", true)]
#[case("notes.json", false)]
#[case("README.md", false)]
fn test_candidate_files(#[case] name: &str, #[case] expected: bool) {
    assert_eq!(is_candidate_file(Path::new(name)), expected);
}
