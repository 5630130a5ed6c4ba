//! Grammar loaders: the seam between gramcheck and a grammar crate's entry point.

use std::fmt;

use tree_sitter_language::LanguageFn;

use crate::handle::LanguageHandle;

/// A query shipped alongside a grammar binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BundledQuery {
    pub name: &'static str,
    pub source: &'static str,
}

impl BundledQuery {
    pub const fn new(name: &'static str, source: &'static str) -> Self {
        Self { name, source }
    }
}

/// Object-safe access to one compiled grammar.
pub trait GrammarLoader: Send + Sync {
    /// Lowercase registry key (e.g. "java", "typescript")
    fn name(&self) -> &'static str;

    /// Name used in user-facing messages (e.g. "Java", "TypeScript")
    fn display_name(&self) -> &'static str {
        self.name()
    }

    /// File extensions associated with the grammar
    fn extensions(&self) -> &'static [&'static str] {
        &[]
    }

    /// Queries that must compile against the grammar
    fn queries(&self) -> &'static [BundledQuery] {
        &[]
    }

    /// Call the grammar's entry point. `None` means the runtime returned null.
    fn load(&self) -> Option<LanguageHandle>;
}

/// A loader backed by a grammar crate's `LANGUAGE` constant.
#[derive(Clone, Copy)]
pub struct FnLoader {
    name: &'static str,
    display_name: &'static str,
    extensions: &'static [&'static str],
    queries: &'static [BundledQuery],
    entry: LanguageFn,
}

impl FnLoader {
    pub const fn new(name: &'static str, entry: LanguageFn) -> Self {
        Self {
            name,
            display_name: name,
            extensions: &[],
            queries: &[],
            entry,
        }
    }

    pub const fn with_display_name(mut self, display_name: &'static str) -> Self {
        self.display_name = display_name;
        self
    }

    pub const fn with_extensions(mut self, extensions: &'static [&'static str]) -> Self {
        self.extensions = extensions;
        self
    }

    pub const fn with_queries(mut self, queries: &'static [BundledQuery]) -> Self {
        self.queries = queries;
        self
    }
}

impl fmt::Debug for FnLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnLoader")
            .field("name", &self.name)
            .field("display_name", &self.display_name)
            .field("extensions", &self.extensions)
            .field("queries", &self.queries.len())
            .finish_non_exhaustive()
    }
}

impl GrammarLoader for FnLoader {
    fn name(&self) -> &'static str {
        self.name
    }

    fn display_name(&self) -> &'static str {
        self.display_name
    }

    fn extensions(&self) -> &'static [&'static str] {
        self.extensions
    }

    fn queries(&self) -> &'static [BundledQuery] {
        self.queries
    }

    fn load(&self) -> Option<LanguageHandle> {
        LanguageHandle::from_language_fn(self.name, self.entry)
    }
}
