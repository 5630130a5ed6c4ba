pub mod checks;
pub mod handle;
pub mod loader;
pub mod registry;
pub mod verify;

pub use checks::{check_abi, check_parser_accepts, check_query};
pub use gramcheck_error::{Error, ErrorKind, Result};
pub use handle::LanguageHandle;
pub use loader::{BundledQuery, FnLoader, GrammarLoader};
pub use registry::GrammarRegistry;
pub use tree_sitter::{LANGUAGE_VERSION, Language, MIN_COMPATIBLE_LANGUAGE_VERSION};
pub use tree_sitter_language::LanguageFn;
pub use verify::verify_grammar_loads;
