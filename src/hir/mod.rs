//! High-level IR (HIR): navigation over parsed definitions and inheritance.
//!
//! ## Key Types
//!
//! - [`TreeNavigator`] - Grammar-specific accessors over a type definition
//! - [`V5Navigator`] / [`V6Navigator`] - One per grammar, chosen per file at load
//! - [`InheritanceResolver`] - Walks parent chains, collecting attributes
//! - [`InheritedAttributes`] - Ordered `name -> "lower..upper"` map
//!
//! ## Flow
//!
//! ```text
//! find_definition(corpus, name)   ← first match in corpus order
//!     │
//!     ▼
//! navigator.fields(def)           ← field_attribute() per field
//!     │
//!     ▼
//! navigator.parent_reference(def) ← last segment, loop until none or revisit
//! ```

mod navigator;
mod resolve;

pub use navigator::{
    TreeNavigator, V5_NAVIGATOR, V5Navigator, V6_NAVIGATOR, V6Navigator, field_attribute,
    field_type_name, navigator_for,
};
pub use resolve::{
    DefinitionMatch, InheritanceResolver, InheritedAttributes, ResolveError, find_definition,
    resolve_inherited_attributes,
};
