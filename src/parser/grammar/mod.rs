//! Grammar modules for CIMPL data element parsing
//!
//! This module contains the version-specific parsing logic:
//! - `common` - Constructs both grammars share (file header, names, field types,
//!   constraints, counts)
//! - `v5` - CIMPL 5.0 definitions (`Element:`, `EntryElement:`, `Based on:`,
//!   count-first fields nested in a values block)
//! - `v6` - CIMPL 6.0 definitions (`Entry:`, `Group:`, `Abstract:`, `Parent:`,
//!   `Property:` fields with a trailing count)
//!
//! The parsing functions are generic over [`CimplParser`] so they can be used
//! with any parser implementation.

pub mod common;
pub mod v5;
pub mod v6;

use crate::parser::syntax_kind::SyntaxKind;
use rowan::Checkpoint;

/// Trait for grammar parsing operations
///
/// This trait defines the interface between the grammar rules and the main parser.
/// The main parser implements this trait to provide the necessary infrastructure.
pub trait CimplParser {
    // Token inspection
    fn current_kind(&self) -> SyntaxKind;
    fn current_text(&self) -> &str;
    fn at(&self, kind: SyntaxKind) -> bool;
    fn at_any(&self, kinds: &[SyntaxKind]) -> bool;
    fn at_eof(&self) -> bool;

    // Position tracking
    fn get_pos(&self) -> usize;

    /// Peek at the kind of the nth token ahead (skipping trivia)
    fn peek_kind(&self, n: usize) -> SyntaxKind;

    /// Peek at the nth token ahead without skipping trivia
    fn raw_kind(&self, n: usize) -> SyntaxKind;
    fn raw_text(&self, n: usize) -> &str;

    // Token consumption
    fn bump(&mut self);
    fn eat(&mut self, kind: SyntaxKind) -> bool;
    fn expect(&mut self, kind: SyntaxKind) -> bool;

    // Trivia handling
    fn skip_trivia(&mut self);

    // Node building
    fn start_node(&mut self, kind: SyntaxKind);
    fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind);
    fn checkpoint(&self) -> Checkpoint;
    fn finish_node(&mut self);

    // Errors
    fn error(&mut self, message: String);
    fn error_recover(&mut self, message: String, recovery: &[SyntaxKind]);
}

/// Keywords that open a type definition in either grammar.
pub const DEFINITION_KEYWORDS: &[SyntaxKind] = &[
    SyntaxKind::ELEMENT_KW,
    SyntaxKind::ENTRY_ELEMENT_KW,
    SyntaxKind::ENTRY_KW,
    SyntaxKind::GROUP_KW,
    SyntaxKind::ABSTRACT_KW,
];
