//! Syntax kinds for the Rowan-based CST
//!
//! This enum defines all possible node and token kinds in the syntax tree.
//! Both CIMPL grammar versions share one vocabulary; the shapes they build
//! out of it differ (see `grammar::v5` and `grammar::v6`).

/// All syntax kinds (tokens and nodes) in CIMPL data element files
///
/// Tokens are leaf nodes (identifiers, keywords, punctuation).
/// Nodes are composite (definitions, fields, properties).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (whitespace and comments - preserved but not semantically meaningful)
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,
    BLOCK_COMMENT,

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,   // Person, shr, string
    INTEGER, // 0
    DECIMAL, // 5.0
    STRING,  // "A human being."
    URL,     // http://hl7.org/fhir/ValueSet/foo
    CODE,    // #active

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_PAREN,   // (
    R_PAREN,   // )
    L_BRACKET, // [
    R_BRACKET, // ]
    COLON,     // :
    DOT,       // .
    DOT_DOT,   // ..
    COMMA,     // ,
    STAR,      // *
    EQ,        // =

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    // File header
    GRAMMAR_KW,
    NAMESPACE_KW,
    USES_KW,
    PATH_KW,

    // Definition headers
    ELEMENT_KW,
    ENTRY_ELEMENT_KW,
    ENTRY_KW,
    GROUP_KW,
    ABSTRACT_KW,

    // Properties
    BASED_ON_KW,
    PARENT_KW,
    CONCEPT_KW,
    DESCRIPTION_KW,
    VALUE_KW,
    PROPERTY_KW,

    // Field types and constraints
    REF_KW,
    OR_KW,
    FROM_KW,
    SUBSTITUTE_KW,
    ONLY_KW,
    IS_KW,
    INCLUDES_KW,
    TBD_KW,

    // =========================================================================
    // NODES
    // =========================================================================
    SOURCE_FILE,
    FILE_HEADER,
    GRAMMAR_DECL,
    NAMESPACE_DECL,
    USES_DECL,
    PATH_DECL,
    DATA_DEFS,

    // Type definitions
    ELEMENT_DEF,
    ENTRY_DEF,
    GROUP_DEF,
    ABSTRACT_DEF,
    ELEMENT_HEADER,
    ENTRY_HEADER,
    GROUP_HEADER,
    ABSTRACT_HEADER,
    SIMPLE_NAME,
    QUALIFIED_NAME,

    // Properties: V5 splits element/entry props, V6 has one shape
    ELEMENT_PROPS,
    ELEMENT_PROP,
    ENTRY_PROPS,
    ENTRY_PROP,
    PROPS,
    PROP,
    BASED_ON_PROP,
    PARENT_PROP,
    CONCEPT_PROP,
    CONCEPT,
    DESCRIPTION_PROP,

    // Values and fields
    VALUES,
    VALUE,
    FIELD,
    PROPERTY_FIELD,
    FIELD_TYPE,
    REF,
    ELEMENT_WITH_CONSTRAINT,
    ELEMENT_PATH,
    BRACKETED_PATH,
    COUNT,

    // Constraints
    CONSTRAINT,
    VALUE_SET_CONSTRAINT,
    BINDING_STRENGTH,
    TYPE_CONSTRAINT,
    ONLY_CONSTRAINT,
    FIXED_VALUE_CONSTRAINT,
    INCLUDES_CONSTRAINT,

    // Special
    ERROR,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::LINE_COMMENT | Self::BLOCK_COMMENT)
    }

    /// Check if this is a keyword
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::GRAMMAR_KW as u16) && (self as u16) <= (Self::TBD_KW as u16)
    }

    /// Check if this is a punctuation token
    pub fn is_punct(self) -> bool {
        (self as u16) >= (Self::L_PAREN as u16) && (self as u16) <= (Self::EQ as u16)
    }

    /// Check if this is a literal
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            Self::IDENT | Self::INTEGER | Self::DECIMAL | Self::STRING | Self::URL | Self::CODE
        )
    }

    /// Keywords that open a type definition in either grammar.
    pub fn starts_definition(self) -> bool {
        matches!(
            self,
            Self::ELEMENT_KW
                | Self::ENTRY_ELEMENT_KW
                | Self::ENTRY_KW
                | Self::GROUP_KW
                | Self::ABSTRACT_KW
        )
    }

    /// Keywords that introduce a constraint after a field type.
    pub fn starts_constraint(self) -> bool {
        matches!(
            self,
            Self::FROM_KW | Self::SUBSTITUTE_KW | Self::ONLY_KW | Self::IS_KW | Self::EQ | Self::INCLUDES_KW
        )
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CimplLanguage {}

impl rowan::Language for CimplLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<CimplLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<CimplLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<CimplLanguage>;
pub type SyntaxNodeChildren = rowan::SyntaxNodeChildren<CimplLanguage>;
