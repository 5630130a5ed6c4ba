//! Validated language handles.
//!
//! A grammar crate exposes a C entry point that returns a pointer to its
//! parse tables, or null when nothing could be loaded. [`LanguageHandle`] is
//! only constructible from a non-null pointer, so holding one means the
//! grammar was present at the time it was requested.

use std::fmt;
use std::num::NonZeroUsize;

use tree_sitter::Language;
use tree_sitter_language::LanguageFn;

/// An opaque reference to a loaded grammar.
#[derive(Clone)]
pub struct LanguageHandle {
    name: &'static str,
    language: Language,
    address: NonZeroUsize,
}

impl LanguageHandle {
    /// Call `entry` and wrap the grammar it returns.
    ///
    /// Returns `None` when the entry point yields the null sentinel.
    pub fn from_language_fn(name: &'static str, entry: LanguageFn) -> Option<Self> {
        // SAFETY: grammar entry points take no arguments and return either null
        // or a pointer to a table with static lifetime.
        let raw = unsafe { (entry.into_raw())() };
        let address = NonZeroUsize::new(raw as usize)?;
        Some(Self {
            name,
            language: Language::new(entry),
            address,
        })
    }

    /// Registry name of the grammar this handle was loaded for.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn language(&self) -> &Language {
        &self.language
    }

    pub fn into_language(self) -> Language {
        self.language
    }

    /// Address of the grammar's parse tables. Never zero.
    pub fn address(&self) -> NonZeroUsize {
        self.address
    }

    pub fn abi_version(&self) -> usize {
        self.language.abi_version()
    }

    pub fn node_kind_count(&self) -> usize {
        self.language.node_kind_count()
    }

    pub fn field_count(&self) -> usize {
        self.language.field_count()
    }

    /// Whether both handles refer to the same compiled grammar.
    pub fn same_grammar(&self, other: &LanguageHandle) -> bool {
        self.address == other.address
    }
}

impl fmt::Debug for LanguageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageHandle")
            .field("name", &self.name)
            .field("abi_version", &self.abi_version())
            .field("address", &format_args!("{:#x}", self.address.get()))
            .finish()
    }
}
