//! CIMPL 6.0 definitions
//!
//! ```text
//! Entry: Name | Element: Name | Group: Name | Abstract: Name
//! Parent: Parent
//! Concept: ... / Description: "..."
//! Value: Type (or Type)* Count?
//! Property: Type 0..1
//! Path.To.Field 1..1
//! ```
//!
//! Unlike 5.0, fields are direct children of the definition node.

use super::common::{self, at_definition_start, at_keyword_line, at_name_start, describe_current};
use super::{CimplParser, DEFINITION_KEYWORDS};
use crate::parser::syntax_kind::SyntaxKind;

const PROP_KEYWORDS: &[SyntaxKind] = &[
    SyntaxKind::PARENT_KW,
    SyntaxKind::CONCEPT_KW,
    SyntaxKind::DESCRIPTION_KW,
];

const BODY_RECOVERY: &[SyntaxKind] = &[
    SyntaxKind::PROPERTY_KW,
    SyntaxKind::VALUE_KW,
    SyntaxKind::ELEMENT_KW,
    SyntaxKind::ENTRY_ELEMENT_KW,
    SyntaxKind::ENTRY_KW,
    SyntaxKind::GROUP_KW,
    SyntaxKind::ABSTRACT_KW,
];

/// Parse a 6.0 data element file.
pub fn parse_file<P: CimplParser>(p: &mut P) {
    common::parse_source_file(p, parse_definition);
}

fn parse_definition<P: CimplParser>(p: &mut P) {
    let (def, header) = match p.current_kind() {
        SyntaxKind::ENTRY_KW => (SyntaxKind::ENTRY_DEF, SyntaxKind::ENTRY_HEADER),
        SyntaxKind::ELEMENT_KW => (SyntaxKind::ELEMENT_DEF, SyntaxKind::ELEMENT_HEADER),
        SyntaxKind::GROUP_KW => (SyntaxKind::GROUP_DEF, SyntaxKind::GROUP_HEADER),
        SyntaxKind::ABSTRACT_KW => (SyntaxKind::ABSTRACT_DEF, SyntaxKind::ABSTRACT_HEADER),
        _ => {
            let got = describe_current(p);
            p.error_recover(
                format!("{} does not start a definition in a 6.0 file", got),
                DEFINITION_KEYWORDS,
            );
            return;
        }
    };

    p.start_node(def);

    // Header = Keyword ':' SimpleName
    p.start_node(header);
    common::bump_keyword_colon(p);
    common::parse_simple_name(p);
    p.finish_node();
    p.skip_trivia();

    p.start_node(SyntaxKind::PROPS);
    while p.at_any(PROP_KEYWORDS) {
        p.start_node(SyntaxKind::PROP);
        parse_prop(p);
        p.finish_node();
        p.skip_trivia();
    }
    p.finish_node();

    parse_body(p);

    p.finish_node();
}

fn parse_prop<P: CimplParser>(p: &mut P) {
    match p.current_kind() {
        SyntaxKind::PARENT_KW => {
            p.start_node(SyntaxKind::PARENT_PROP);
            common::bump_keyword_colon(p);
            common::parse_qualified_name(p);
            p.finish_node();
        }
        SyntaxKind::CONCEPT_KW => common::parse_concept_prop(p),
        SyntaxKind::DESCRIPTION_KW => common::parse_description_prop(p),
        _ => {
            let got = describe_current(p);
            p.error(format!("expected a property, found {}", got));
        }
    }
}

/// Body = (Value | PropertyField | Field)*
fn parse_body<P: CimplParser>(p: &mut P) {
    loop {
        p.skip_trivia();
        if p.at_eof() || at_definition_start(p) {
            break;
        }
        let start = p.get_pos();

        match p.current_kind() {
            SyntaxKind::VALUE_KW if at_keyword_line(p, SyntaxKind::VALUE_KW) => {
                common::parse_value(p, true)
            }
            SyntaxKind::PROPERTY_KW if at_keyword_line(p, SyntaxKind::PROPERTY_KW) => {
                p.start_node(SyntaxKind::PROPERTY_FIELD);
                common::bump_keyword_colon(p);
                parse_field(p);
                p.finish_node();
            }
            SyntaxKind::REF_KW => parse_field(p),
            _ if at_name_start(p) => parse_field(p),
            _ => {
                let got = describe_current(p);
                p.error_recover(
                    format!("unexpected {} in definition body", got),
                    BODY_RECOVERY,
                );
            }
        }

        if p.get_pos() == start && !p.at_eof() {
            p.bump();
        }
    }
}

/// Field = FieldType Count?
fn parse_field<P: CimplParser>(p: &mut P) {
    p.start_node(SyntaxKind::FIELD);
    common::parse_field_type(p);
    if p.peek_kind(0) == SyntaxKind::INTEGER {
        p.skip_trivia();
        common::parse_count(p);
    }
    p.finish_node();
}
