//! Grammar-specific views over type definitions.
//!
//! The two grammars store the same facts in different places:
//!
//! | fact    | 5.0                                 | 6.0                                  |
//! |---------|-------------------------------------|--------------------------------------|
//! | fields  | `FIELD` inside `VALUES`             | `FIELD` or `PROPERTY_FIELD` children |
//! | props   | `ELEMENT_PROPS` / `ENTRY_PROPS`     | `PROPS`                              |
//! | parent  | `BASED_ON_PROP` (`Based on: X`)     | `PARENT_PROP` (`Parent: X`)          |
//!
//! A [`TreeNavigator`] hides that difference. Each parsed file carries the
//! navigator for its grammar.

use smol_str::SmolStr;

use crate::base::Grammar;
use crate::parser::{
    AstNode, DefinitionVariant, Field, FieldType, Header, Property, PropertyField, QualifiedName,
    SimpleName, SourceFile, TypeDef,
};

/// Accessors over the type definitions of one grammar.
pub trait TreeNavigator: Sync {
    fn grammar(&self) -> Grammar;

    /// Type definitions of a file in source order.
    fn definitions(&self, file: &SourceFile) -> Vec<TypeDef> {
        file.definitions().collect()
    }

    fn variant(&self, def: &TypeDef) -> DefinitionVariant {
        def.variant()
    }

    fn header(&self, def: &TypeDef) -> Option<Header> {
        def.header()
    }

    fn simple_name(&self, def: &TypeDef) -> Option<SimpleName> {
        self.header(def)?.simple_name()
    }

    /// Declared fields in source order.
    fn fields(&self, def: &TypeDef) -> Vec<Field>;

    fn props(&self, def: &TypeDef) -> Vec<Property>;

    /// The supertype named by the definition, if any. Only the first parent
    /// property counts.
    fn parent_reference(&self, def: &TypeDef) -> Option<QualifiedName>;
}

/// Navigator for CIMPL 5.0 trees.
#[derive(Debug, Clone, Copy, Default)]
pub struct V5Navigator;

/// Navigator for CIMPL 6.0 trees.
#[derive(Debug, Clone, Copy, Default)]
pub struct V6Navigator;

pub static V5_NAVIGATOR: V5Navigator = V5Navigator;
pub static V6_NAVIGATOR: V6Navigator = V6Navigator;

/// The navigator for trees parsed with `grammar`.
pub fn navigator_for(grammar: Grammar) -> &'static dyn TreeNavigator {
    match grammar {
        Grammar::V5 => &V5_NAVIGATOR,
        Grammar::V6 => &V6_NAVIGATOR,
    }
}

impl TreeNavigator for V5Navigator {
    fn grammar(&self) -> Grammar {
        Grammar::V5
    }

    fn fields(&self, def: &TypeDef) -> Vec<Field> {
        def.values()
            .map(|values| values.fields().collect())
            .unwrap_or_default()
    }

    fn props(&self, def: &TypeDef) -> Vec<Property> {
        if let Some(props) = def.element_props() {
            return props.props().filter_map(|p| p.property()).collect();
        }
        if let Some(props) = def.entry_props() {
            return props.props().filter_map(|p| p.property()).collect();
        }
        Vec::new()
    }

    fn parent_reference(&self, def: &TypeDef) -> Option<QualifiedName> {
        self.props(def).into_iter().find_map(|prop| match prop {
            Property::BasedOn(based_on) => based_on.target(),
            _ => None,
        })
    }
}

impl TreeNavigator for V6Navigator {
    fn grammar(&self) -> Grammar {
        Grammar::V6
    }

    fn fields(&self, def: &TypeDef) -> Vec<Field> {
        def.syntax()
            .children()
            .filter_map(|node| {
                if let Some(field) = Field::cast(node.clone()) {
                    return Some(field);
                }
                PropertyField::cast(node)?.field()
            })
            .collect()
    }

    fn props(&self, def: &TypeDef) -> Vec<Property> {
        def.props()
            .map(|props| props.props().filter_map(|p| p.property()).collect())
            .unwrap_or_default()
    }

    fn parent_reference(&self, def: &TypeDef) -> Option<QualifiedName> {
        self.props(def).into_iter().find_map(|prop| match prop {
            Property::Parent(parent) => parent.target(),
            _ => None,
        })
    }
}

/// The type name a field refers to, projected to its last segment.
///
/// Tried in order, first hit wins:
/// 1. a name directly on the field type
/// 2. the name inside `ref(...)`
/// 3. inside a with-constraint wrapper: a plain name, then an element path,
///    then a bracketed path
pub fn field_type_name(field_type: &FieldType) -> Option<SmolStr> {
    let token = field_type
        .qualified_name()
        .and_then(|name| name.last_segment())
        .or_else(|| field_type.reference()?.target()?.last_segment())
        .or_else(|| {
            let wrapped = field_type.element_with_constraint()?;
            wrapped
                .qualified_name()
                .and_then(|name| name.last_segment())
                .or_else(|| wrapped.element_path()?.last_segment())
                .or_else(|| wrapped.bracketed_path()?.last_segment())
        })?;
    Some(SmolStr::new(token.text()))
}

/// A field as `(name, "lower..upper")`, when both parts resolve.
pub fn field_attribute(field: &Field) -> Option<(SmolStr, SmolStr)> {
    let name = field_type_name(&field.field_type()?)?;
    let cardinality = field.count()?.cardinality()?;
    Some((name, SmolStr::new(cardinality)))
}
