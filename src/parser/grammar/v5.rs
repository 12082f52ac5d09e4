//! CIMPL 5.0 definitions
//!
//! ```text
//! Element: Name | EntryElement: Name | Abstract Element: Name
//! Based on: Parent
//! Concept: TBD | SYS#code, ...
//! Description: "..."
//! Value: Type (or Type)*
//! 0..1 Type
//! Type constraint...
//! ```

use super::common::{self, at_definition_start, at_keyword_line, at_name_start, describe_current};
use super::{CimplParser, DEFINITION_KEYWORDS};
use crate::parser::syntax_kind::SyntaxKind;

const PROP_KEYWORDS: &[SyntaxKind] = &[
    SyntaxKind::BASED_ON_KW,
    SyntaxKind::CONCEPT_KW,
    SyntaxKind::DESCRIPTION_KW,
];

const BODY_RECOVERY: &[SyntaxKind] = &[
    SyntaxKind::INTEGER,
    SyntaxKind::VALUE_KW,
    SyntaxKind::ELEMENT_KW,
    SyntaxKind::ENTRY_ELEMENT_KW,
    SyntaxKind::ENTRY_KW,
    SyntaxKind::GROUP_KW,
    SyntaxKind::ABSTRACT_KW,
];

/// Parse a 5.0 data element file.
pub fn parse_file<P: CimplParser>(p: &mut P) {
    common::parse_source_file(p, parse_definition);
}

fn parse_definition<P: CimplParser>(p: &mut P) {
    match p.current_kind() {
        SyntaxKind::ELEMENT_KW => parse_def(
            p,
            SyntaxKind::ELEMENT_DEF,
            SyntaxKind::ELEMENT_HEADER,
            SyntaxKind::ELEMENT_PROPS,
            SyntaxKind::ELEMENT_PROP,
        ),
        SyntaxKind::ABSTRACT_KW => parse_def(
            p,
            SyntaxKind::ABSTRACT_DEF,
            SyntaxKind::ELEMENT_HEADER,
            SyntaxKind::ELEMENT_PROPS,
            SyntaxKind::ELEMENT_PROP,
        ),
        SyntaxKind::ENTRY_ELEMENT_KW => parse_def(
            p,
            SyntaxKind::ENTRY_DEF,
            SyntaxKind::ENTRY_HEADER,
            SyntaxKind::ENTRY_PROPS,
            SyntaxKind::ENTRY_PROP,
        ),
        _ => {
            let got = describe_current(p);
            p.error_recover(
                format!("{} does not start a definition in a 5.0 file", got),
                DEFINITION_KEYWORDS,
            );
        }
    }
}

/// Def = Header Props Values
fn parse_def<P: CimplParser>(
    p: &mut P,
    def: SyntaxKind,
    header: SyntaxKind,
    props: SyntaxKind,
    prop: SyntaxKind,
) {
    p.start_node(def);

    parse_header(p, header);
    p.skip_trivia();

    p.start_node(props);
    while p.at_any(PROP_KEYWORDS) {
        p.start_node(prop);
        parse_prop(p);
        p.finish_node();
        p.skip_trivia();
    }
    p.finish_node();

    parse_values(p);

    p.finish_node();
}

/// Header = 'Abstract'? ('Element' | 'EntryElement') ':' SimpleName
fn parse_header<P: CimplParser>(p: &mut P, kind: SyntaxKind) {
    p.start_node(kind);
    if p.eat(SyntaxKind::ABSTRACT_KW) {
        p.skip_trivia();
        p.expect(SyntaxKind::ELEMENT_KW);
    } else {
        p.bump();
    }
    p.skip_trivia();
    p.expect(SyntaxKind::COLON);
    p.skip_trivia();
    common::parse_simple_name(p);
    p.finish_node();
}

fn parse_prop<P: CimplParser>(p: &mut P) {
    match p.current_kind() {
        SyntaxKind::BASED_ON_KW => {
            p.start_node(SyntaxKind::BASED_ON_PROP);
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

/// Values = (Value | Field | ConstraintLine)*
fn parse_values<P: CimplParser>(p: &mut P) {
    p.start_node(SyntaxKind::VALUES);
    loop {
        p.skip_trivia();
        if p.at_eof() || at_definition_start(p) {
            break;
        }
        let start = p.get_pos();

        match p.current_kind() {
            SyntaxKind::VALUE_KW if at_keyword_line(p, SyntaxKind::VALUE_KW) => {
                common::parse_value(p, false)
            }
            SyntaxKind::INTEGER => parse_field(p),
            _ if at_name_start(p) => {
                p.start_node(SyntaxKind::FIELD);
                common::parse_field_type(p);
                p.finish_node();
            }
            _ => {
                let got = describe_current(p);
                p.error_recover(
                    format!("unexpected {} in element body", got),
                    BODY_RECOVERY,
                );
            }
        }

        if p.get_pos() == start && !p.at_eof() {
            p.bump();
        }
    }
    p.finish_node();
}

/// Field = Count FieldType
fn parse_field<P: CimplParser>(p: &mut P) {
    p.start_node(SyntaxKind::FIELD);
    common::parse_count(p);
    p.skip_trivia();
    common::parse_field_type(p);
    p.finish_node();
}
