use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[cfg(target_env = "msvc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use gramcheck_cli::{Command, ExecutionOptions, GramcheckOptions, SelectionOptions, run_main};

#[derive(Parser, Debug)]
#[command(
    name = "gramcheck",
    about = "gramcheck: verify tree-sitter grammars load into the runtime",
    version
)]
pub struct Cli {
    /// Config file (defaults to ./gramcheck.toml when present)
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Run the grammar checks
    Run {
        #[command(flatten)]
        selection: SelectionOptions,
        #[command(flatten)]
        execution: ExecutionOptions,
    },
    /// List case ids without running them
    List {
        #[command(flatten)]
        selection: SelectionOptions,
    },
}

pub fn run(args: Cli) -> Result<()> {
    let total_start = Instant::now();

    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let opts = match args.command {
        CliCommand::Run {
            selection,
            execution,
        } => GramcheckOptions {
            command: Command::Run,
            config: args.config,
            selection,
            execution,
        },
        CliCommand::List { selection } => GramcheckOptions {
            command: Command::List,
            config: args.config,
            selection,
            execution: ExecutionOptions::default(),
        },
    };

    let output = run_main(&opts)
        .inspect_err(|e| tracing::error!(error = %e, "execution failed"))?;
    println!("{}", output.text);

    let total_secs = total_start.elapsed().as_secs_f64();
    tracing::info!(total_secs, "complete");

    if !output.success {
        anyhow::bail!("grammar checks failed");
    }
    Ok(())
}

pub fn main() -> Result<()> {
    let args = Cli::parse();
    run(args)
}
