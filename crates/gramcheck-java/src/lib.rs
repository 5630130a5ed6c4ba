//! Java grammar binding.
//!
//! Exposes the compiled Java grammar to the tree-sitter runtime together with
//! the queries that must compile against it.

use gramcheck_core::{BundledQuery, FnLoader, LanguageFn};

/// Name used when reporting on this grammar.
pub const NAME: &str = "Java";

/// The tree-sitter entry point for Java.
pub const LANGUAGE: LanguageFn = tree_sitter_java::LANGUAGE;

/// Local variable names, including `final` ones.
pub const VARIABLES_QUERY: &str = r#"
(local_variable_declaration
  declarator: (variable_declarator
    name: (identifier) @the-name))
"#;

/// Method declarations and their names.
pub const METHODS_QUERY: &str = r#"
(method_declaration
  name: (identifier) @method-name) @method
"#;

/// Class-level fields with an initializer.
pub const FIELDS_QUERY: &str = r#"
(field_declaration
  declarator: (variable_declarator
    name: (identifier) @the-name
    value: (_) @the-value))
"#;

pub const QUERIES: &[BundledQuery] = &[
    BundledQuery::new("variables", VARIABLES_QUERY),
    BundledQuery::new("methods", METHODS_QUERY),
    BundledQuery::new("fields", FIELDS_QUERY),
];

/// Loader for registering this grammar with a `GrammarRegistry`.
pub const fn loader() -> FnLoader {
    FnLoader::new("java", LANGUAGE)
        .with_display_name(NAME)
        .with_extensions(&["java"])
        .with_queries(QUERIES)
}
