//! Shared CLI options for the `run` and `list` commands.

use clap::Args;

/// Which grammars and cases a command applies to.
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionOptions {
    /// Grammar to check (repeatable). Replaces the config file's list.
    #[arg(
        short = 'g',
        long = "grammar",
        value_name = "NAME",
        action = clap::ArgAction::Append
    )]
    pub grammars: Vec<String>,

    /// Only include cases whose id contains this substring.
    #[arg(long, value_name = "TEXT")]
    pub filter: Option<String>,
}

/// Options that only affect how checks execute.
#[derive(Args, Debug, Clone, Default)]
pub struct ExecutionOptions {
    /// Check grammars in parallel (also enabled by `parallel = true` in the config).
    #[arg(long)]
    pub parallel: bool,
}

impl SelectionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_grammar(mut self, grammar: impl Into<String>) -> Self {
        self.grammars.push(grammar.into());
        self
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }
}

impl ExecutionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
