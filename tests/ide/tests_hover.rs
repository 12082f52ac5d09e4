//! Hover and completion over a loaded workspace.

use cimpl::config::{AnalysisConfig, CyclePolicy};
use cimpl::ide::{AnalysisHost, QueryError};

use crate::helpers::corpus_helpers::*;
use crate::helpers::source_fixtures::*;

fn host(files: &[(&str, &str)]) -> (tempfile::TempDir, AnalysisHost) {
    let dir = workspace(files);
    let host = AnalysisHost::new(vec![dir.path().to_path_buf()], AnalysisConfig::default());
    (dir, host)
}

#[test]
fn test_hover_lists_inherited_attributes() {
    let (_dir, host) = host(&[("person.txt", V5_PERSON), ("patient.txt", V5_PATIENT)]);

    let hover = host.hover("Patient").unwrap().unwrap();
    assert_eq!(hover.type_name, "Patient");
    assert_eq!(
        hover.contents(),
        "0..1 Deceased\n1..1 BirthDate\n1..* Name"
    );
}

#[test]
fn test_hover_on_unknown_type() {
    let (_dir, host) = host(&[("person.txt", V6_PERSON)]);
    assert_eq!(host.hover("Nobody").unwrap(), None);
}

#[test]
fn test_completion_labels_and_details() {
    let (_dir, host) = host(&[("person.txt", V6_PERSON), ("patient.txt", V6_PATIENT)]);

    let items = host.completions("Patient").unwrap();
    let labels: Vec<_> = items.iter().map(|i| i.label.as_ref()).collect();
    assert_eq!(labels, vec!["Deceased", "BirthDate", "Name"]);

    let details: Vec<_> = items.iter().map(|i| i.detail.as_deref()).collect();
    assert_eq!(details, vec![Some("0..1"), Some("1..1"), Some("1..*")]);

    let mut sorted = items.clone();
    sorted.sort_by_key(|i| i.sort_priority);
    assert_eq!(sorted, items);
}

#[test]
fn test_cycle_surfaces_as_query_error() {
    let (_dir, host) = host(&[("cycle.txt", V6_CYCLE)]);
    assert!(matches!(host.hover("A"), Err(QueryError::Resolve(_))));

    let stop = AnalysisHost::new(
        host.roots().to_vec(),
        AnalysisConfig::new().with_cycle_policy(CyclePolicy::Stop),
    );
    let hover = stop.hover("A").unwrap().unwrap();
    assert_eq!(hover.lines, vec!["0..1 Alpha", "0..1 Beta"]);
}
