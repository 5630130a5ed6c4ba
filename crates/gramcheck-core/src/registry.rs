//! Caller-owned registry of grammar loaders.
//!
//! Nothing registers itself: whoever runs checks builds a registry and adds
//! the loaders it wants, so each run sees exactly the grammars it was given.

use std::collections::HashMap;
use std::sync::Arc;

use gramcheck_error::{Error, Result};

use crate::loader::GrammarLoader;

/// Registry of available grammar loaders.
#[derive(Default, Clone)]
pub struct GrammarRegistry {
    /// Map from grammar name to loader
    loaders: HashMap<&'static str, Arc<dyn GrammarLoader>>,
    /// Map from extension to loader
    extension_map: HashMap<&'static str, Arc<dyn GrammarLoader>>,
}

impl GrammarRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a loader. A later loader with the same name replaces the earlier one.
    pub fn register(&mut self, loader: Arc<dyn GrammarLoader>) {
        let name = loader.name();
        if let Some(previous) = self.loaders.insert(name, loader.clone()) {
            self.extension_map
                .retain(|_, existing| !Arc::ptr_eq(existing, &previous));
        }
        for ext in loader.extensions() {
            self.extension_map.insert(*ext, loader.clone());
        }
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, loader: impl GrammarLoader + 'static) -> Self {
        self.register(Arc::new(loader));
        self
    }

    /// Get a loader by grammar name, ignoring ASCII case.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn GrammarLoader>> {
        if let Some(loader) = self.loaders.get(name) {
            return Some(loader.clone());
        }
        self.loaders
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, loader)| loader.clone())
    }

    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn GrammarLoader>> {
        self.extension_map.get(ext).cloned()
    }

    /// All registered grammar names, sorted.
    pub fn all_grammars(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.loaders.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Loaders for `names`, or every loader when `names` is empty. Either way
    /// the result is sorted by name and holds each loader once.
    pub fn resolve(&self, names: &[String]) -> Result<Vec<Arc<dyn GrammarLoader>>> {
        if names.is_empty() {
            return Ok(self
                .all_grammars()
                .into_iter()
                .filter_map(|name| self.loaders.get(name).cloned())
                .collect());
        }

        let mut resolved: Vec<Arc<dyn GrammarLoader>> = Vec::with_capacity(names.len());
        for name in names {
            let loader = self
                .get_by_name(name)
                .ok_or_else(|| Error::unsupported_grammar(name).with_operation("registry::resolve"))?;
            if !resolved.iter().any(|seen| Arc::ptr_eq(seen, &loader)) {
                resolved.push(loader);
            }
        }
        resolved.sort_unstable_by_key(|loader| loader.name());
        Ok(resolved)
    }

    pub fn is_empty(&self) -> bool {
        self.loaders.is_empty()
    }

    pub fn len(&self) -> usize {
        self.loaders.len()
    }
}
