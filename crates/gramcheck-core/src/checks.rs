//! Checks that run against a handle once it has loaded.

use tracing::debug;
use tree_sitter::{LANGUAGE_VERSION, MIN_COMPATIBLE_LANGUAGE_VERSION, Parser, Query};

use gramcheck_error::{Error, Result};

use crate::handle::LanguageHandle;

/// The grammar's ABI must be one the linked runtime can read.
pub fn check_abi(handle: &LanguageHandle) -> Result<()> {
    let abi = handle.abi_version();
    if (MIN_COMPATIBLE_LANGUAGE_VERSION..=LANGUAGE_VERSION).contains(&abi) {
        return Ok(());
    }
    Err(Error::abi_mismatch(
        handle.name(),
        abi,
        MIN_COMPATIBLE_LANGUAGE_VERSION,
        LANGUAGE_VERSION,
    )
    .with_operation("check_abi"))
}

/// A fresh parser must accept the grammar.
pub fn check_parser_accepts(handle: &LanguageHandle) -> Result<()> {
    let mut parser = Parser::new();
    parser.set_language(handle.language()).map_err(|err| {
        Error::parser_rejected(handle.name())
            .with_operation("check_parser_accepts")
            .set_source(err)
    })
}

/// Compile `source` against the grammar and return its capture names.
pub fn check_query(handle: &LanguageHandle, name: &str, source: &str) -> Result<Vec<String>> {
    let query = Query::new(handle.language(), source).map_err(|err| {
        Error::query_invalid(name, err.message.clone())
            .with_operation("check_query")
            .with_context("grammar", handle.name())
            .with_context("row", err.row.to_string())
            .with_context("column", err.column.to_string())
            .set_source(err)
    })?;

    let captures: Vec<String> = query
        .capture_names()
        .iter()
        .map(|capture| capture.to_string())
        .collect();
    debug!(
        grammar = handle.name(),
        query = name,
        patterns = query.pattern_count(),
        "query compiled"
    );
    Ok(captures)
}
