//! Logos-based lexer for CIMPL
//!
//! Fast tokenization using the logos crate. The same token set serves both
//! grammar versions; the parsers decide which keywords are meaningful.

use super::syntax_kind::SyntaxKind;
use logos::Logos;
use rowan::TextSize;

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            offset: 0,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r"//[^\n]*", allow_greedy = true)]
    LineComment,

    #[regex(r"/\*([^*]|\*[^/])*\*/")]
    BlockComment,

    // =========================================================================
    // LITERALS
    // =========================================================================
    // Same identifier characters the editor uses for the word under the cursor
    #[regex(r"[\p{XID_Start}_]\p{XID_Continue}*")]
    Ident,

    #[regex(r"[0-9]+")]
    Integer,

    #[regex(r"[0-9]+\.[0-9]+")]
    Decimal,

    #[regex(r#""([^"\\]|\\.)*""#)]
    String,

    #[regex(r"[a-zA-Z][a-zA-Z0-9+.\-]*://[^\s()]+")]
    Url,

    #[regex(r"#[a-zA-Z0-9_.\-]+")]
    Code,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    #[token("..")]
    DotDot,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(":")]
    Colon,
    #[token(".")]
    Dot,
    #[token(",")]
    Comma,
    #[token("*")]
    Star,
    #[token("=")]
    Eq,

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    #[token("Grammar")]
    GrammarKw,
    #[token("Namespace")]
    NamespaceKw,
    #[token("Uses")]
    UsesKw,
    #[token("Path")]
    PathKw,
    #[token("Element")]
    ElementKw,
    #[token("EntryElement")]
    EntryElementKw,
    #[token("Entry")]
    EntryKw,
    #[token("Group")]
    GroupKw,
    #[token("Abstract")]
    AbstractKw,
    #[regex(r"Based[ \t]+on")]
    BasedOnKw,
    #[token("Parent")]
    ParentKw,
    #[token("Concept")]
    ConceptKw,
    #[token("Description")]
    DescriptionKw,
    #[token("Value")]
    ValueKw,
    #[token("Property")]
    PropertyKw,
    #[token("ref")]
    RefKw,
    #[token("or")]
    OrKw,
    #[token("from")]
    FromKw,
    #[token("substitute")]
    SubstituteKw,
    #[token("only")]
    OnlyKw,
    #[token("is")]
    IsKw,
    #[token("includes")]
    IncludesKw,
    #[token("TBD")]
    TbdKw,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            // Trivia
            Whitespace => SyntaxKind::WHITESPACE,
            LineComment => SyntaxKind::LINE_COMMENT,
            BlockComment => SyntaxKind::BLOCK_COMMENT,

            // Literals
            Ident => SyntaxKind::IDENT,
            Integer => SyntaxKind::INTEGER,
            Decimal => SyntaxKind::DECIMAL,
            String => SyntaxKind::STRING,
            Url => SyntaxKind::URL,
            Code => SyntaxKind::CODE,

            // Punctuation
            DotDot => SyntaxKind::DOT_DOT,
            LParen => SyntaxKind::L_PAREN,
            RParen => SyntaxKind::R_PAREN,
            LBracket => SyntaxKind::L_BRACKET,
            RBracket => SyntaxKind::R_BRACKET,
            Colon => SyntaxKind::COLON,
            Dot => SyntaxKind::DOT,
            Comma => SyntaxKind::COMMA,
            Star => SyntaxKind::STAR,
            Eq => SyntaxKind::EQ,

            // Keywords
            GrammarKw => SyntaxKind::GRAMMAR_KW,
            NamespaceKw => SyntaxKind::NAMESPACE_KW,
            UsesKw => SyntaxKind::USES_KW,
            PathKw => SyntaxKind::PATH_KW,
            ElementKw => SyntaxKind::ELEMENT_KW,
            EntryElementKw => SyntaxKind::ENTRY_ELEMENT_KW,
            EntryKw => SyntaxKind::ENTRY_KW,
            GroupKw => SyntaxKind::GROUP_KW,
            AbstractKw => SyntaxKind::ABSTRACT_KW,
            BasedOnKw => SyntaxKind::BASED_ON_KW,
            ParentKw => SyntaxKind::PARENT_KW,
            ConceptKw => SyntaxKind::CONCEPT_KW,
            DescriptionKw => SyntaxKind::DESCRIPTION_KW,
            ValueKw => SyntaxKind::VALUE_KW,
            PropertyKw => SyntaxKind::PROPERTY_KW,
            RefKw => SyntaxKind::REF_KW,
            OrKw => SyntaxKind::OR_KW,
            FromKw => SyntaxKind::FROM_KW,
            SubstituteKw => SyntaxKind::SUBSTITUTE_KW,
            OnlyKw => SyntaxKind::ONLY_KW,
            IsKw => SyntaxKind::IS_KW,
            IncludesKw => SyntaxKind::INCLUDES_KW,
            TbdKw => SyntaxKind::TBD_KW,
        }
    }
}
