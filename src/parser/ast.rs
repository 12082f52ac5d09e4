//! Typed AST wrappers over the untyped rowan CST.
//!
//! This module provides strongly-typed accessors for CIMPL syntax nodes.
//! Each struct wraps a SyntaxNode and provides methods to access children.
//! The wrappers are grammar-agnostic: a 5.0 tree simply has no `PROPS`
//! children and a 6.0 tree no `VALUES`.

use super::syntax_kind::SyntaxKind;
use super::{SyntaxNode, SyntaxToken};

/// Trait for AST nodes that wrap a SyntaxNode
pub trait AstNode: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;
    fn cast(node: SyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &SyntaxNode;
}

// ============================================================================
// Helper macros
// ============================================================================

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == SyntaxKind::$kind
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                if Self::can_cast(node.kind()) {
                    Some(Self(node))
                } else {
                    None
                }
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

/// An enum over several node wrappers, one variant per kind.
macro_rules! ast_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident($ty:ident) = $kind:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant($ty)),+
        }

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                matches!(kind, $(SyntaxKind::$kind)|+)
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                match node.kind() {
                    $(SyntaxKind::$kind => Some(Self::$variant($ty(node))),)+
                    _ => None,
                }
            }

            fn syntax(&self) -> &SyntaxNode {
                match self {
                    $(Self::$variant(n) => n.syntax(),)+
                }
            }
        }
    };
}

fn tokens(node: &SyntaxNode) -> impl Iterator<Item = SyntaxToken> + '_ {
    node.children_with_tokens().filter_map(|e| e.into_token())
}

fn token(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    tokens(node).find(|t| t.kind() == kind)
}

/// Name segments inside a name-like node: every token that is neither
/// punctuation nor trivia.
fn name_segments(node: &SyntaxNode) -> Vec<SyntaxToken> {
    tokens(node)
        .filter(|t| !t.kind().is_punct() && !t.kind().is_trivia())
        .collect()
}

fn unquote(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(text)
}

// ============================================================================
// Root and file header
// ============================================================================

ast_node!(SourceFile, SOURCE_FILE);

impl SourceFile {
    pub fn header(&self) -> Option<FileHeader> {
        self.0.children().find_map(FileHeader::cast)
    }

    /// Type definitions in source order.
    pub fn definitions(&self) -> impl Iterator<Item = TypeDef> + '_ {
        self.0
            .children()
            .find(|n| n.kind() == SyntaxKind::DATA_DEFS)
            .into_iter()
            .flat_map(|defs| defs.children())
            .filter_map(TypeDef::cast)
    }
}

ast_node!(FileHeader, FILE_HEADER);

impl FileHeader {
    pub fn grammar(&self) -> Option<GrammarDecl> {
        self.0.children().find_map(GrammarDecl::cast)
    }

    pub fn namespace(&self) -> Option<NamespaceDecl> {
        self.0.children().find_map(NamespaceDecl::cast)
    }

    /// Every namespace named on a `Uses:` line.
    pub fn uses(&self) -> Vec<QualifiedName> {
        self.0
            .children()
            .filter(|n| n.kind() == SyntaxKind::USES_DECL)
            .flat_map(|n| n.children().filter_map(QualifiedName::cast))
            .collect()
    }

    pub fn description(&self) -> Option<DescriptionProp> {
        self.0.children().find_map(DescriptionProp::cast)
    }
}

ast_node!(GrammarDecl, GRAMMAR_DECL);

impl GrammarDecl {
    /// `DataElement`, `Map`, `ValueSet`, ...
    pub fn dialect(&self) -> Option<String> {
        token(&self.0, SyntaxKind::IDENT).map(|t| t.text().to_string())
    }

    /// The version token (`5.0`, `6.0`), if written.
    pub fn version(&self) -> Option<String> {
        tokens(&self.0)
            .find(|t| matches!(t.kind(), SyntaxKind::DECIMAL | SyntaxKind::INTEGER))
            .map(|t| t.text().to_string())
    }
}

ast_node!(NamespaceDecl, NAMESPACE_DECL);

impl NamespaceDecl {
    pub fn name(&self) -> Option<QualifiedName> {
        self.0.children().find_map(QualifiedName::cast)
    }
}

// ============================================================================
// Type definitions
// ============================================================================

/// Which kind of declaration a type definition is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefinitionVariant {
    Element,
    Entry,
    Group,
    Abstract,
}

ast_node!(ElementDef, ELEMENT_DEF);
ast_node!(EntryDef, ENTRY_DEF);
ast_node!(GroupDef, GROUP_DEF);
ast_node!(AbstractDef, ABSTRACT_DEF);

ast_enum! {
    /// Any named type declaration.
    TypeDef {
        Element(ElementDef) = ELEMENT_DEF,
        Entry(EntryDef) = ENTRY_DEF,
        Group(GroupDef) = GROUP_DEF,
        Abstract(AbstractDef) = ABSTRACT_DEF,
    }
}

impl TypeDef {
    pub fn variant(&self) -> DefinitionVariant {
        match self {
            Self::Element(_) => DefinitionVariant::Element,
            Self::Entry(_) => DefinitionVariant::Entry,
            Self::Group(_) => DefinitionVariant::Group,
            Self::Abstract(_) => DefinitionVariant::Abstract,
        }
    }

    pub fn header(&self) -> Option<Header> {
        self.syntax().children().find_map(Header::cast)
    }

    /// 5.0 property block of an `Element:` or `Abstract Element:`.
    pub fn element_props(&self) -> Option<ElementProps> {
        self.syntax().children().find_map(ElementProps::cast)
    }

    /// 5.0 property block of an `EntryElement:`.
    pub fn entry_props(&self) -> Option<EntryProps> {
        self.syntax().children().find_map(EntryProps::cast)
    }

    /// 6.0 property block.
    pub fn props(&self) -> Option<Props> {
        self.syntax().children().find_map(Props::cast)
    }

    /// 5.0 body wrapper holding values and fields.
    pub fn values(&self) -> Option<Values> {
        self.syntax().children().find_map(Values::cast)
    }

    /// Fields written directly in the definition body (6.0).
    pub fn direct_fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.syntax().children().filter_map(Field::cast)
    }

    /// `Property:` lines in the definition body (6.0).
    pub fn property_fields(&self) -> impl Iterator<Item = PropertyField> + '_ {
        self.syntax().children().filter_map(PropertyField::cast)
    }

    /// `Value:` lines written directly in the definition body (6.0).
    pub fn value_lines(&self) -> impl Iterator<Item = Value> + '_ {
        self.syntax().children().filter_map(Value::cast)
    }
}

ast_node!(ElementHeader, ELEMENT_HEADER);
ast_node!(EntryHeader, ENTRY_HEADER);
ast_node!(GroupHeader, GROUP_HEADER);
ast_node!(AbstractHeader, ABSTRACT_HEADER);

ast_enum! {
    Header {
        Element(ElementHeader) = ELEMENT_HEADER,
        Entry(EntryHeader) = ENTRY_HEADER,
        Group(GroupHeader) = GROUP_HEADER,
        Abstract(AbstractHeader) = ABSTRACT_HEADER,
    }
}

impl Header {
    pub fn simple_name(&self) -> Option<SimpleName> {
        self.syntax().children().find_map(SimpleName::cast)
    }

    /// `Abstract Element:` in 5.0, `Abstract:` in 6.0.
    pub fn is_abstract(&self) -> bool {
        token(self.syntax(), SyntaxKind::ABSTRACT_KW).is_some()
    }
}

ast_node!(SimpleName, SIMPLE_NAME);

impl SimpleName {
    /// The name token; a capitalised keyword when one is used as a name.
    pub fn ident(&self) -> Option<SyntaxToken> {
        name_segments(&self.0).into_iter().next()
    }

    pub fn text(&self) -> Option<String> {
        self.ident().map(|t| t.text().to_string())
    }
}

// ============================================================================
// Properties
// ============================================================================

ast_node!(ElementProps, ELEMENT_PROPS);
ast_node!(ElementProp, ELEMENT_PROP);
ast_node!(EntryProps, ENTRY_PROPS);
ast_node!(EntryProp, ENTRY_PROP);
ast_node!(Props, PROPS);
ast_node!(Prop, PROP);

impl ElementProps {
    pub fn props(&self) -> impl Iterator<Item = ElementProp> + '_ {
        self.0.children().filter_map(ElementProp::cast)
    }
}

impl EntryProps {
    pub fn props(&self) -> impl Iterator<Item = EntryProp> + '_ {
        self.0.children().filter_map(EntryProp::cast)
    }
}

impl Props {
    pub fn props(&self) -> impl Iterator<Item = Prop> + '_ {
        self.0.children().filter_map(Prop::cast)
    }
}

impl ElementProp {
    pub fn property(&self) -> Option<Property> {
        self.0.children().find_map(Property::cast)
    }
}

impl EntryProp {
    pub fn property(&self) -> Option<Property> {
        self.0.children().find_map(Property::cast)
    }
}

impl Prop {
    pub fn property(&self) -> Option<Property> {
        self.0.children().find_map(Property::cast)
    }
}

ast_node!(BasedOnProp, BASED_ON_PROP);
ast_node!(ParentProp, PARENT_PROP);
ast_node!(ConceptProp, CONCEPT_PROP);
ast_node!(DescriptionProp, DESCRIPTION_PROP);

ast_enum! {
    /// One property line of a definition.
    Property {
        BasedOn(BasedOnProp) = BASED_ON_PROP,
        Parent(ParentProp) = PARENT_PROP,
        Concept(ConceptProp) = CONCEPT_PROP,
        Description(DescriptionProp) = DESCRIPTION_PROP,
    }
}

impl BasedOnProp {
    pub fn target(&self) -> Option<QualifiedName> {
        self.0.children().find_map(QualifiedName::cast)
    }
}

impl ParentProp {
    pub fn target(&self) -> Option<QualifiedName> {
        self.0.children().find_map(QualifiedName::cast)
    }
}

impl ConceptProp {
    pub fn is_tbd(&self) -> bool {
        token(&self.0, SyntaxKind::TBD_KW).is_some()
    }

    pub fn concepts(&self) -> impl Iterator<Item = Concept> + '_ {
        self.0.children().filter_map(Concept::cast)
    }
}

ast_node!(Concept, CONCEPT);

impl Concept {
    /// Code system prefix (`MTH` in `MTH#C0001`).
    pub fn system(&self) -> Option<String> {
        tokens(&self.0)
            .find(|t| matches!(t.kind(), SyntaxKind::IDENT | SyntaxKind::URL))
            .map(|t| t.text().to_string())
    }

    /// The code, without its leading `#`.
    pub fn code(&self) -> Option<String> {
        token(&self.0, SyntaxKind::CODE).map(|t| t.text().trim_start_matches('#').to_string())
    }
}

impl DescriptionProp {
    /// Description text with the surrounding quotes removed.
    pub fn text(&self) -> Option<String> {
        token(&self.0, SyntaxKind::STRING).map(|t| unquote(t.text()).to_string())
    }
}

// ============================================================================
// Values and fields
// ============================================================================

ast_node!(Values, VALUES);

impl Values {
    pub fn value_lines(&self) -> impl Iterator<Item = Value> + '_ {
        self.0.children().filter_map(Value::cast)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.children().filter_map(Field::cast)
    }
}

ast_node!(Value, VALUE);

impl Value {
    /// Each alternative of `Value: A or B`.
    pub fn field_types(&self) -> impl Iterator<Item = FieldType> + '_ {
        self.0.children().filter_map(FieldType::cast)
    }

    pub fn count(&self) -> Option<Count> {
        self.0.children().find_map(Count::cast)
    }
}

ast_node!(Field, FIELD);

impl Field {
    pub fn count(&self) -> Option<Count> {
        self.0.children().find_map(Count::cast)
    }

    pub fn field_type(&self) -> Option<FieldType> {
        self.0.children().find_map(FieldType::cast)
    }
}

ast_node!(PropertyField, PROPERTY_FIELD);

impl PropertyField {
    pub fn field(&self) -> Option<Field> {
        self.0.children().find_map(Field::cast)
    }
}

ast_node!(FieldType, FIELD_TYPE);

impl FieldType {
    /// A bare name directly on the field type.
    pub fn qualified_name(&self) -> Option<QualifiedName> {
        self.0.children().find_map(QualifiedName::cast)
    }

    pub fn reference(&self) -> Option<Ref> {
        self.0.children().find_map(Ref::cast)
    }

    pub fn element_with_constraint(&self) -> Option<ElementWithConstraint> {
        self.0.children().find_map(ElementWithConstraint::cast)
    }

    /// Constraints that follow a `ref(...)`.
    pub fn constraints(&self) -> impl Iterator<Item = Constraint> + '_ {
        self.0.children().filter_map(Constraint::cast)
    }
}

ast_node!(Ref, REF);

impl Ref {
    pub fn target(&self) -> Option<QualifiedName> {
        self.0.children().find_map(QualifiedName::cast)
    }
}

ast_node!(ElementWithConstraint, ELEMENT_WITH_CONSTRAINT);

impl ElementWithConstraint {
    pub fn qualified_name(&self) -> Option<QualifiedName> {
        self.0.children().find_map(QualifiedName::cast)
    }

    pub fn element_path(&self) -> Option<ElementPath> {
        self.0.children().find_map(ElementPath::cast)
    }

    pub fn bracketed_path(&self) -> Option<BracketedPath> {
        self.0.children().find_map(BracketedPath::cast)
    }

    pub fn constraints(&self) -> impl Iterator<Item = Constraint> + '_ {
        self.0.children().filter_map(Constraint::cast)
    }
}

// ============================================================================
// Names and paths
// ============================================================================

ast_node!(QualifiedName, QUALIFIED_NAME);

impl QualifiedName {
    /// Get all name segments
    pub fn segments(&self) -> Vec<String> {
        name_segments(&self.0)
            .iter()
            .map(|t| t.text().to_string())
            .collect()
    }

    /// The display name: `Widget` for `ns.sub.Widget`.
    pub fn last_segment(&self) -> Option<SyntaxToken> {
        name_segments(&self.0).pop()
    }
}

impl std::fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.segments().join("."))
    }
}

ast_node!(ElementPath, ELEMENT_PATH);

impl ElementPath {
    pub fn segments(&self) -> Vec<String> {
        name_segments(&self.0)
            .iter()
            .map(|t| t.text().to_string())
            .collect()
    }

    pub fn last_segment(&self) -> Option<SyntaxToken> {
        name_segments(&self.0).pop()
    }
}

ast_node!(BracketedPath, BRACKETED_PATH);

impl BracketedPath {
    /// Segments in source order, bracketed choices included.
    pub fn segments(&self) -> Vec<String> {
        name_segments(&self.0)
            .iter()
            .map(|t| t.text().to_string())
            .collect()
    }

    pub fn last_segment(&self) -> Option<SyntaxToken> {
        name_segments(&self.0).pop()
    }

    /// The type selected between brackets (`Quantity` in `Value[Quantity]`).
    pub fn choices(&self) -> Vec<String> {
        let mut choices = Vec::new();
        let mut inside = false;
        for t in tokens(&self.0) {
            match t.kind() {
                SyntaxKind::L_BRACKET => inside = true,
                SyntaxKind::R_BRACKET => inside = false,
                _ if inside => choices.push(t.text().to_string()),
                _ => {}
            }
        }
        choices
    }
}

// ============================================================================
// Count
// ============================================================================

ast_node!(Count, COUNT);

impl Count {
    /// Lower bound as written.
    pub fn lower(&self) -> Option<SyntaxToken> {
        tokens(&self.0)
            .take_while(|t| t.kind() != SyntaxKind::DOT_DOT)
            .find(|t| t.kind() == SyntaxKind::INTEGER)
    }

    /// Upper bound as written: an integer or `*`.
    pub fn upper(&self) -> Option<SyntaxToken> {
        tokens(&self.0)
            .skip_while(|t| t.kind() != SyntaxKind::DOT_DOT)
            .find(|t| matches!(t.kind(), SyntaxKind::INTEGER | SyntaxKind::STAR))
    }

    /// `"<lower>..<upper>"`, when both bounds are present.
    pub fn cardinality(&self) -> Option<String> {
        let lower = self.lower()?;
        let upper = self.upper()?;
        Some(format!("{}..{}", lower.text(), upper.text()))
    }
}

// ============================================================================
// Constraints
// ============================================================================

ast_node!(Constraint, CONSTRAINT);
ast_node!(ValueSetConstraint, VALUE_SET_CONSTRAINT);
ast_node!(TypeConstraint, TYPE_CONSTRAINT);
ast_node!(OnlyConstraint, ONLY_CONSTRAINT);
ast_node!(FixedValueConstraint, FIXED_VALUE_CONSTRAINT);
ast_node!(IncludesConstraint, INCLUDES_CONSTRAINT);

ast_enum! {
    ConstraintKind {
        ValueSet(ValueSetConstraint) = VALUE_SET_CONSTRAINT,
        Type(TypeConstraint) = TYPE_CONSTRAINT,
        Only(OnlyConstraint) = ONLY_CONSTRAINT,
        FixedValue(FixedValueConstraint) = FIXED_VALUE_CONSTRAINT,
        Includes(IncludesConstraint) = INCLUDES_CONSTRAINT,
    }
}

impl Constraint {
    pub fn kind(&self) -> Option<ConstraintKind> {
        self.0.children().find_map(ConstraintKind::cast)
    }
}

impl ValueSetConstraint {
    /// The value set as written: a URL, a string or a name.
    pub fn value_set(&self) -> Option<String> {
        if let Some(name) = self.0.children().find_map(QualifiedName::cast) {
            return Some(name.to_string());
        }
        tokens(&self.0)
            .find(|t| matches!(t.kind(), SyntaxKind::URL | SyntaxKind::STRING))
            .map(|t| unquote(t.text()).to_string())
    }

    /// `required`, `extensible`, ... from a trailing `(strength)`.
    pub fn strength(&self) -> Option<String> {
        self.0
            .children()
            .find(|n| n.kind() == SyntaxKind::BINDING_STRENGTH)
            .and_then(|n| token(&n, SyntaxKind::IDENT))
            .map(|t| t.text().to_string())
    }
}

impl TypeConstraint {
    pub fn target(&self) -> Option<QualifiedName> {
        self.0.children().find_map(QualifiedName::cast)
    }
}

impl OnlyConstraint {
    pub fn targets(&self) -> impl Iterator<Item = QualifiedName> + '_ {
        self.0.children().filter_map(QualifiedName::cast)
    }
}

impl FixedValueConstraint {
    /// The fixed value's source text, e.g. `#final` or `SCT#123`.
    pub fn value(&self) -> String {
        tokens(&self.0)
            .skip(1)
            .filter(|t| !t.kind().is_trivia())
            .map(|t| t.text().to_string())
            .collect()
    }
}

impl IncludesConstraint {
    pub fn count(&self) -> Option<Count> {
        self.0.children().find_map(Count::cast)
    }

    pub fn target(&self) -> Option<QualifiedName> {
        self.0.children().find_map(QualifiedName::cast)
    }
}
