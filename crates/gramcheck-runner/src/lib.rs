pub mod builtin;
pub mod config;
pub mod report;
pub mod runner;

pub use builtin::builtin_registry;
pub use config::{CheckConfig, QueryConfig};
pub use report::Report;
pub use runner::{CaseOutcome, CaseStatus, QuerySpec, RunnerConfig, list_cases, run_checks};
