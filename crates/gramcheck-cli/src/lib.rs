//! gramcheck command-line interface.
//!
pub mod options;

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use gramcheck_error::Result;
use gramcheck_runner::{CheckConfig, RunnerConfig, builtin_registry, list_cases, run_checks};

pub use options::{ExecutionOptions, SelectionOptions};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG: &str = "gramcheck.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Run,
    List,
}

/// Options for running gramcheck.
#[derive(Debug, Clone)]
pub struct GramcheckOptions {
    pub command: Command,
    /// Explicit config path; a missing explicit file is an error.
    pub config: Option<PathBuf>,
    pub selection: SelectionOptions,
    pub execution: ExecutionOptions,
}

/// Rendered output plus whether every case passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub success: bool,
}

/// Merge the config file (if any) with command-line overrides.
pub fn load_runner_config(opts: &GramcheckOptions) -> Result<RunnerConfig> {
    let file = match &opts.config {
        Some(path) => CheckConfig::from_path(path)?,
        None => {
            let path = Path::new(DEFAULT_CONFIG);
            if path.is_file() {
                CheckConfig::from_path(path)?
            } else {
                debug!("no {DEFAULT_CONFIG} found, using defaults");
                CheckConfig::default()
            }
        }
    };

    let mut config = file.into_runner_config();
    if !opts.selection.grammars.is_empty() {
        config.grammars = opts.selection.grammars.clone();
    }
    if opts.selection.filter.is_some() {
        config.filter = opts.selection.filter.clone();
    }
    config.parallel |= opts.execution.parallel;
    Ok(config)
}

/// Main entry point
pub fn run_main(opts: &GramcheckOptions) -> Result<CommandOutput> {
    let config = load_runner_config(opts)?;
    let registry = builtin_registry();
    info!(
        grammars = ?config.grammars,
        parallel = config.parallel,
        "starting gramcheck"
    );

    match opts.command {
        Command::Run => {
            let report = run_checks(&registry, &config)?;
            Ok(CommandOutput {
                text: report.render(),
                success: report.is_success(),
            })
        }
        Command::List => {
            let ids = list_cases(&registry, &config)?;
            Ok(CommandOutput {
                text: ids.join("\n"),
                success: true,
            })
        }
    }
}
