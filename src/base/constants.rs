//! Domain constants shared by the loader and the parsers.

/// Extensions of CIMPL declaration files.
pub const DECLARATION_EXTENSIONS: &[&str] = &["txt", "shr"];

/// File-name suffixes that mark a project configuration file.
pub const CONFIG_FILE_SUFFIXES: &[&str] = &["config.txt", "config.json"];

/// Prefix of the header line that names a file's dialect and grammar version.
pub const GRAMMAR_HEADER_PREFIX: &str = "Grammar:";

/// Dialect names accepted in the `Grammar:` header.
pub const DIALECT_DATA_ELEMENT: &str = "DataElement";
pub const DIALECT_MAP: &str = "Map";
pub const DIALECT_VALUE_SET: &str = "ValueSet";
pub const DIALECT_CONTENT_PROFILE: &str = "ContentProfile";

/// Version tokens written in the `Grammar:` header.
pub const GRAMMAR_V5_TOKEN: &str = "5.0";
pub const GRAMMAR_V6_TOKEN: &str = "6.0";
