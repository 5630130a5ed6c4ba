//! Grammars gramcheck knows about out of the box.

use gramcheck_core::{FnLoader, GrammarRegistry};

pub const RUST: FnLoader = FnLoader::new("rust", tree_sitter_rust::LANGUAGE)
    .with_display_name("Rust")
    .with_extensions(&["rs"]);

pub const CPP: FnLoader = FnLoader::new("cpp", tree_sitter_cpp::LANGUAGE)
    .with_display_name("C++")
    .with_extensions(&["cpp", "cc", "cxx", "hpp", "hh", "hxx", "h"]);

pub const PYTHON: FnLoader = FnLoader::new("python", tree_sitter_python::LANGUAGE)
    .with_display_name("Python")
    .with_extensions(&["py", "pyi"]);

pub const TYPESCRIPT: FnLoader =
    FnLoader::new("typescript", tree_sitter_typescript::LANGUAGE_TYPESCRIPT)
        .with_display_name("TypeScript")
        .with_extensions(&["ts", "mts", "cts"]);

pub const TSX: FnLoader = FnLoader::new("tsx", tree_sitter_typescript::LANGUAGE_TSX)
    .with_display_name("TSX")
    .with_extensions(&["tsx"]);

/// A registry holding the Java binding plus the registry grammars above.
pub fn builtin_registry() -> GrammarRegistry {
    GrammarRegistry::new()
        .with(gramcheck_java::loader())
        .with(RUST)
        .with(CPP)
        .with(PYTHON)
        .with(TYPESCRIPT)
        .with(TSX)
}
