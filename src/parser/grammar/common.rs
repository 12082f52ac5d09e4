//! Constructs shared by both CIMPL grammars
//!
//! - File layout: `FILE_HEADER` followed by `DATA_DEFS`
//! - Header lines (`Grammar:`, `Namespace:`, `Uses:`, `Path:`, `Description:`)
//! - Names: simple, qualified (`shr.core.Person`), element paths
//!   (`Person.Name`) and bracketed paths (`Value[Quantity]`)
//! - Field types with their `ref(...)` and with-constraint wrappers
//! - Constraints, counts, concepts and descriptions

use super::{CimplParser, DEFINITION_KEYWORDS};
use crate::parser::syntax_kind::SyntaxKind;

/// How a dotted name at the cursor should be wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NameShape {
    /// `Person` or `shr.core.Person`: every non-final segment is lowercase.
    Qualified,
    /// `Person.Name.Family`: walks into the fields of an element.
    ElementPath,
    /// `Value[Quantity].Units`: selects a choice before walking on.
    BracketedPath,
}

// =============================================================================
// File
// =============================================================================

/// SourceFile = FileHeader DataDefs
pub fn parse_source_file<P: CimplParser>(p: &mut P, parse_definition: fn(&mut P)) {
    p.start_node(SyntaxKind::SOURCE_FILE);
    p.skip_trivia();

    parse_file_header(p);

    p.start_node(SyntaxKind::DATA_DEFS);
    loop {
        p.skip_trivia();
        if p.at_eof() {
            break;
        }
        let start = p.get_pos();

        if p.at_any(DEFINITION_KEYWORDS) {
            parse_definition(p);
        } else {
            let got = describe_current(p);
            p.error_recover(
                format!("unexpected {} outside of a definition", got),
                DEFINITION_KEYWORDS,
            );
        }

        // Safety: if we didn't make progress, force-skip a token
        if p.get_pos() == start && !p.at_eof() {
            p.bump();
        }
    }
    p.finish_node();

    p.finish_node();
}

/// FileHeader = (GrammarDecl | NamespaceDecl | UsesDecl | PathDecl | DescriptionProp)*
fn parse_file_header<P: CimplParser>(p: &mut P) {
    p.start_node(SyntaxKind::FILE_HEADER);
    loop {
        match p.current_kind() {
            _ if p.at_eof() => break,
            SyntaxKind::GRAMMAR_KW => parse_grammar_decl(p),
            SyntaxKind::NAMESPACE_KW => {
                p.start_node(SyntaxKind::NAMESPACE_DECL);
                bump_keyword_colon(p);
                parse_qualified_name(p);
                p.finish_node();
            }
            SyntaxKind::USES_KW => {
                p.start_node(SyntaxKind::USES_DECL);
                bump_keyword_colon(p);
                parse_qualified_name(p);
                while p.peek_kind(0) == SyntaxKind::COMMA {
                    p.skip_trivia();
                    p.bump();
                    p.skip_trivia();
                    parse_qualified_name(p);
                }
                p.finish_node();
            }
            SyntaxKind::PATH_KW => {
                p.start_node(SyntaxKind::PATH_DECL);
                bump_keyword_colon(p);
                if !p.eat(SyntaxKind::URL) && !p.eat(SyntaxKind::STRING) {
                    p.error("expected a URL after 'Path:'".to_string());
                }
                p.finish_node();
            }
            SyntaxKind::DESCRIPTION_KW => parse_description_prop(p),
            _ => break,
        }
        p.skip_trivia();
    }
    p.finish_node();
}

/// GrammarDecl = 'Grammar' ':' Dialect Version?
fn parse_grammar_decl<P: CimplParser>(p: &mut P) {
    p.start_node(SyntaxKind::GRAMMAR_DECL);
    bump_keyword_colon(p);
    p.expect(SyntaxKind::IDENT);
    if matches!(p.peek_kind(0), SyntaxKind::DECIMAL | SyntaxKind::INTEGER) {
        p.skip_trivia();
        p.bump();
    }
    p.finish_node();
}

/// Consume `Keyword ':'` and the trivia around it.
pub fn bump_keyword_colon<P: CimplParser>(p: &mut P) {
    p.bump();
    p.skip_trivia();
    p.expect(SyntaxKind::COLON);
    p.skip_trivia();
}

pub fn describe_current<P: CimplParser>(p: &P) -> String {
    if p.at_eof() {
        "end of file".to_string()
    } else {
        format!("'{}'", p.current_text())
    }
}

// =============================================================================
// Names
// =============================================================================

/// Capitalised keywords that are also common type names (`Parent: Parent`,
/// `0..1 Value`).
const NAME_KEYWORDS: &[SyntaxKind] = &[
    SyntaxKind::GRAMMAR_KW,
    SyntaxKind::NAMESPACE_KW,
    SyntaxKind::USES_KW,
    SyntaxKind::PATH_KW,
    SyntaxKind::ELEMENT_KW,
    SyntaxKind::ENTRY_ELEMENT_KW,
    SyntaxKind::ENTRY_KW,
    SyntaxKind::GROUP_KW,
    SyntaxKind::ABSTRACT_KW,
    SyntaxKind::PARENT_KW,
    SyntaxKind::CONCEPT_KW,
    SyntaxKind::DESCRIPTION_KW,
    SyntaxKind::VALUE_KW,
    SyntaxKind::PROPERTY_KW,
];

/// A keyword used as a name: anything in [`NAME_KEYWORDS`] that does not
/// open a `Keyword:` line.
fn at_name_keyword<P: CimplParser>(p: &P) -> bool {
    p.at_any(NAME_KEYWORDS) && p.peek_kind(1) != SyntaxKind::COLON
}

/// Whether the current token opens a definition header (`Entry:`,
/// `Abstract Element:`). A definition keyword without the colon is a name.
pub fn at_definition_start<P: CimplParser>(p: &P) -> bool {
    if !p.at_any(DEFINITION_KEYWORDS) {
        return false;
    }
    match p.peek_kind(1) {
        SyntaxKind::COLON => true,
        SyntaxKind::ELEMENT_KW => {
            p.at(SyntaxKind::ABSTRACT_KW) && p.peek_kind(2) == SyntaxKind::COLON
        }
        _ => false,
    }
}

/// Whether the current token opens a `Keyword:` line.
pub fn at_keyword_line<P: CimplParser>(p: &P, keyword: SyntaxKind) -> bool {
    p.at(keyword) && p.peek_kind(1) == SyntaxKind::COLON
}

/// Whether the current token can begin a (possibly qualified) name.
pub fn at_name_start<P: CimplParser>(p: &P) -> bool {
    p.at(SyntaxKind::IDENT) || p.at(SyntaxKind::TBD_KW) || at_name_keyword(p)
}

/// Tokens allowed after a `.` inside a name; keywords are ordinary words there.
fn is_segment(kind: SyntaxKind) -> bool {
    kind == SyntaxKind::IDENT || (kind.is_keyword() && kind != SyntaxKind::BASED_ON_KW)
}

fn starts_uppercase(text: &str) -> bool {
    text.chars().next().is_some_and(char::is_uppercase)
}

/// Measure the name at the cursor without consuming it.
///
/// Returns the shape and the number of raw tokens it spans. Names never
/// contain trivia.
fn scan_name<P: CimplParser>(p: &P) -> (NameShape, usize) {
    let mut len = 1;
    let mut upper_before_last = false;
    let mut last_upper = starts_uppercase(p.raw_text(0));
    let mut bracketed = false;

    loop {
        match p.raw_kind(len) {
            SyntaxKind::DOT if is_segment(p.raw_kind(len + 1)) => {
                upper_before_last |= last_upper;
                last_upper = starts_uppercase(p.raw_text(len + 1));
                len += 2;
            }
            SyntaxKind::L_BRACKET
                if is_segment(p.raw_kind(len + 1)) && p.raw_kind(len + 2) == SyntaxKind::R_BRACKET =>
            {
                bracketed = true;
                len += 3;
            }
            _ => break,
        }
    }

    let shape = if bracketed {
        NameShape::BracketedPath
    } else if upper_before_last {
        NameShape::ElementPath
    } else {
        NameShape::Qualified
    };
    (shape, len)
}

fn bump_n<P: CimplParser>(p: &mut P, n: usize) {
    for _ in 0..n {
        p.bump();
    }
}

/// SimpleName = IDENT
pub fn parse_simple_name<P: CimplParser>(p: &mut P) {
    if p.at(SyntaxKind::IDENT) || at_name_keyword(p) {
        p.start_node(SyntaxKind::SIMPLE_NAME);
        p.bump();
        p.finish_node();
    } else {
        let got = describe_current(p);
        p.error(format!("expected a name, found {}", got));
    }
}

/// QualifiedName = Segment ('.' Segment)*
pub fn parse_qualified_name<P: CimplParser>(p: &mut P) {
    if !at_name_start(p) {
        let got = describe_current(p);
        p.error(format!("expected a type name, found {}", got));
        return;
    }

    p.start_node(SyntaxKind::QUALIFIED_NAME);
    p.bump();
    while p.raw_kind(0) == SyntaxKind::DOT && is_segment(p.raw_kind(1)) {
        p.bump();
        p.bump();
    }
    p.finish_node();
}

// =============================================================================
// Field types
// =============================================================================

/// FieldType = Ref Constraint*
///           | QualifiedName
///           | ElementWithConstraint
///
/// ElementWithConstraint = (QualifiedName | ElementPath | BracketedPath) Constraint*
///
/// Paths are always wrapped; a plain name only when a constraint follows it.
pub fn parse_field_type<P: CimplParser>(p: &mut P) {
    p.start_node(SyntaxKind::FIELD_TYPE);

    if p.at(SyntaxKind::REF_KW) {
        parse_ref(p);
        parse_constraints(p);
    } else if at_name_start(p) {
        let checkpoint = p.checkpoint();
        let (shape, len) = scan_name(p);
        let kind = match shape {
            NameShape::Qualified => SyntaxKind::QUALIFIED_NAME,
            NameShape::ElementPath => SyntaxKind::ELEMENT_PATH,
            NameShape::BracketedPath => SyntaxKind::BRACKETED_PATH,
        };
        p.start_node(kind);
        bump_n(p, len);
        p.finish_node();

        if shape != NameShape::Qualified || p.peek_kind(0).starts_constraint() {
            p.start_node_at(checkpoint, SyntaxKind::ELEMENT_WITH_CONSTRAINT);
            parse_constraints(p);
            p.finish_node();
        }
    } else {
        let got = describe_current(p);
        p.error(format!("expected a field type, found {}", got));
    }

    p.finish_node();
}

/// Ref = 'ref' '(' QualifiedName ')'
fn parse_ref<P: CimplParser>(p: &mut P) {
    p.start_node(SyntaxKind::REF);
    p.bump(); // ref
    p.skip_trivia();
    p.expect(SyntaxKind::L_PAREN);
    p.skip_trivia();
    parse_qualified_name(p);
    p.skip_trivia();
    p.expect(SyntaxKind::R_PAREN);
    p.finish_node();
}

// =============================================================================
// Constraints
// =============================================================================

fn parse_constraints<P: CimplParser>(p: &mut P) {
    while p.peek_kind(0).starts_constraint() {
        p.skip_trivia();
        parse_constraint(p);
    }
}

/// Constraint = 'from' ValueSet BindingStrength?
///            | 'substitute' QualifiedName
///            | 'only' QualifiedName ('or' QualifiedName)*
///            | ('is' | '=') FixedValue
///            | 'includes' Count QualifiedName
fn parse_constraint<P: CimplParser>(p: &mut P) {
    p.start_node(SyntaxKind::CONSTRAINT);
    match p.current_kind() {
        SyntaxKind::FROM_KW => {
            p.start_node(SyntaxKind::VALUE_SET_CONSTRAINT);
            p.bump();
            p.skip_trivia();
            if p.at(SyntaxKind::URL) || p.at(SyntaxKind::STRING) {
                p.bump();
            } else {
                parse_qualified_name(p);
            }
            if p.peek_kind(0) == SyntaxKind::L_PAREN {
                p.skip_trivia();
                p.start_node(SyntaxKind::BINDING_STRENGTH);
                p.bump();
                p.skip_trivia();
                p.expect(SyntaxKind::IDENT);
                p.skip_trivia();
                p.expect(SyntaxKind::R_PAREN);
                p.finish_node();
            }
            p.finish_node();
        }
        SyntaxKind::SUBSTITUTE_KW => {
            p.start_node(SyntaxKind::TYPE_CONSTRAINT);
            p.bump();
            p.skip_trivia();
            parse_qualified_name(p);
            p.finish_node();
        }
        SyntaxKind::ONLY_KW => {
            p.start_node(SyntaxKind::ONLY_CONSTRAINT);
            p.bump();
            p.skip_trivia();
            parse_qualified_name(p);
            while p.peek_kind(0) == SyntaxKind::OR_KW {
                p.skip_trivia();
                p.bump();
                p.skip_trivia();
                parse_qualified_name(p);
            }
            p.finish_node();
        }
        SyntaxKind::IS_KW | SyntaxKind::EQ => {
            p.start_node(SyntaxKind::FIXED_VALUE_CONSTRAINT);
            p.bump();
            p.skip_trivia();
            parse_fixed_value(p);
            p.finish_node();
        }
        SyntaxKind::INCLUDES_KW => {
            p.start_node(SyntaxKind::INCLUDES_CONSTRAINT);
            p.bump();
            p.skip_trivia();
            parse_count(p);
            p.skip_trivia();
            parse_qualified_name(p);
            p.finish_node();
        }
        _ => {
            let got = describe_current(p);
            p.error(format!("expected a constraint, found {}", got));
        }
    }
    p.finish_node();
}

/// FixedValue = CODE | (IDENT | URL) CODE | STRING | INTEGER | DECIMAL | IDENT | 'TBD'
fn parse_fixed_value<P: CimplParser>(p: &mut P) {
    match p.current_kind() {
        SyntaxKind::IDENT | SyntaxKind::URL if p.raw_kind(1) == SyntaxKind::CODE => {
            p.bump();
            p.bump();
        }
        SyntaxKind::CODE
        | SyntaxKind::STRING
        | SyntaxKind::INTEGER
        | SyntaxKind::DECIMAL
        | SyntaxKind::IDENT
        | SyntaxKind::TBD_KW
            if !p.at_eof() =>
        {
            p.bump();
        }
        _ => {
            let got = describe_current(p);
            p.error(format!("expected a fixed value, found {}", got));
        }
    }
}

// =============================================================================
// Counts, values, properties
// =============================================================================

/// Count = INTEGER '..' (INTEGER | '*')
pub fn parse_count<P: CimplParser>(p: &mut P) {
    p.start_node(SyntaxKind::COUNT);
    p.expect(SyntaxKind::INTEGER);
    if p.expect(SyntaxKind::DOT_DOT) && !p.eat(SyntaxKind::INTEGER) && !p.eat(SyntaxKind::STAR) {
        p.error("expected an upper bound or '*'".to_string());
    }
    p.finish_node();
}

/// Value = 'Value' ':' Count? FieldType ('or' FieldType)* Count?
///
/// The count leads in 5.0 and trails in 6.0.
pub fn parse_value<P: CimplParser>(p: &mut P, trailing_count: bool) {
    p.start_node(SyntaxKind::VALUE);
    bump_keyword_colon(p);

    if !trailing_count && p.at(SyntaxKind::INTEGER) {
        parse_count(p);
        p.skip_trivia();
    }

    parse_field_type(p);
    while p.peek_kind(0) == SyntaxKind::OR_KW {
        p.skip_trivia();
        p.bump();
        p.skip_trivia();
        parse_field_type(p);
    }

    if trailing_count && p.peek_kind(0) == SyntaxKind::INTEGER {
        p.skip_trivia();
        parse_count(p);
    }
    p.finish_node();
}

/// DescriptionProp = 'Description' ':' STRING
pub fn parse_description_prop<P: CimplParser>(p: &mut P) {
    p.start_node(SyntaxKind::DESCRIPTION_PROP);
    bump_keyword_colon(p);
    p.expect(SyntaxKind::STRING);
    p.finish_node();
}

/// ConceptProp = 'Concept' ':' ('TBD' | Concept (',' Concept)*)
pub fn parse_concept_prop<P: CimplParser>(p: &mut P) {
    p.start_node(SyntaxKind::CONCEPT_PROP);
    bump_keyword_colon(p);

    if !p.eat(SyntaxKind::TBD_KW) {
        parse_concept(p);
        while p.peek_kind(0) == SyntaxKind::COMMA {
            p.skip_trivia();
            p.bump();
            p.skip_trivia();
            parse_concept(p);
        }
    }
    p.finish_node();
}

/// Concept = (IDENT | URL)? CODE STRING?
fn parse_concept<P: CimplParser>(p: &mut P) {
    p.start_node(SyntaxKind::CONCEPT);
    if (p.at(SyntaxKind::IDENT) || p.at(SyntaxKind::URL)) && p.raw_kind(1) == SyntaxKind::CODE {
        p.bump();
    }
    p.expect(SyntaxKind::CODE);
    if p.peek_kind(0) == SyntaxKind::STRING {
        p.skip_trivia();
        p.bump();
    }
    p.finish_node();
}
