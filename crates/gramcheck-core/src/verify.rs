//! The grammar load check.

use tracing::{debug, warn};

use gramcheck_error::{Error, Result};

use crate::handle::LanguageHandle;
use crate::loader::GrammarLoader;

/// Request a language handle from `loader` and confirm it is present.
///
/// Succeeds iff the entry point returned a non-null grammar. A null grammar
/// becomes a `LoadFailure` whose message names the grammar, e.g.
/// `Error loading Java grammar`. Failures are permanent and never retried.
pub fn verify_grammar_loads<L>(loader: &L) -> Result<LanguageHandle>
where
    L: GrammarLoader + ?Sized,
{
    match loader.load() {
        Some(handle) => {
            debug!(
                grammar = loader.name(),
                abi = handle.abi_version(),
                node_kinds = handle.node_kind_count(),
                "grammar loaded"
            );
            Ok(handle)
        }
        None => {
            warn!(grammar = loader.name(), "grammar entry point returned null");
            Err(Error::load_failure(loader.display_name()).with_operation("verify_grammar_loads"))
        }
    }
}
