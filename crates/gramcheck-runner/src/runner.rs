use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info};

use gramcheck_core::{
    GrammarLoader, GrammarRegistry, LanguageHandle, check_abi, check_parser_accepts, check_query,
    verify_grammar_loads,
};
use gramcheck_error::{Error, Result};

use crate::report::Report;

pub const CAN_LOAD_GRAMMAR: &str = "can_load_grammar";
pub const ABI_COMPATIBLE: &str = "abi_compatible";
pub const PARSER_ACCEPTS_LANGUAGE: &str = "parser_accepts_language";

/// A query supplied by configuration rather than bundled with a binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySpec {
    pub name: String,
    pub source: String,
}

#[derive(Debug, Clone, Default)]
pub struct RunnerConfig {
    /// Grammars to check; empty means all registered grammars.
    pub grammars: Vec<String>,
    /// Only run cases whose id contains this substring.
    pub filter: Option<String>,
    /// Check grammars concurrently on the rayon pool.
    pub parallel: bool,
    /// Extra queries as (grammar, query) pairs.
    pub queries: Vec<(String, QuerySpec)>,
}

impl RunnerConfig {
    pub fn with_grammars(mut self, grammars: Vec<String>) -> Self {
        self.grammars = grammars;
        self
    }

    pub fn with_filter(mut self, filter: Option<String>) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_query(
        mut self,
        grammar: impl Into<String>,
        name: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        self.queries.push((
            grammar.into(),
            QuerySpec {
                name: name.into(),
                source: source.into(),
            },
        ));
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStatus {
    Passed,
    Failed,
    /// Not run because the grammar did not load.
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseOutcome {
    pub id: String,
    pub status: CaseStatus,
    pub message: Option<String>,
}

impl CaseOutcome {
    fn passed(id: String) -> Self {
        Self {
            id,
            status: CaseStatus::Passed,
            message: None,
        }
    }

    fn failed(id: String, err: &Error) -> Self {
        Self {
            id,
            status: CaseStatus::Failed,
            message: Some(err.to_string()),
        }
    }

    fn skipped(id: String, reason: String) -> Self {
        Self {
            id,
            status: CaseStatus::Skipped,
            message: Some(reason),
        }
    }
}

enum Stage<'a> {
    Abi,
    Parser,
    Query { name: &'a str, source: &'a str },
}

impl Stage<'_> {
    fn case_name(&self) -> String {
        match self {
            Stage::Abi => ABI_COMPATIBLE.to_string(),
            Stage::Parser => PARSER_ACCEPTS_LANGUAGE.to_string(),
            Stage::Query { name, .. } => format!("query::{name}"),
        }
    }

    fn run(&self, handle: &LanguageHandle) -> Result<()> {
        match self {
            Stage::Abi => check_abi(handle),
            Stage::Parser => check_parser_accepts(handle),
            Stage::Query { name, source } => check_query(handle, name, source).map(|_| ()),
        }
    }
}

/// The selected cases for one grammar. The load check always runs when any
/// stage is selected, since every other stage needs the handle.
struct GrammarPlan<'a> {
    loader: Arc<dyn GrammarLoader>,
    report_load: bool,
    stages: Vec<Stage<'a>>,
}

impl GrammarPlan<'_> {
    fn load_id(&self) -> String {
        case_id(self.loader.name(), CAN_LOAD_GRAMMAR)
    }

    fn case_ids(&self) -> Vec<String> {
        let mut ids = Vec::with_capacity(self.stages.len() + 1);
        if self.report_load {
            ids.push(self.load_id());
        }
        ids.extend(
            self.stages
                .iter()
                .map(|stage| case_id(self.loader.name(), &stage.case_name())),
        );
        ids
    }

    fn run(&self) -> Vec<CaseOutcome> {
        let name = self.loader.name();
        let mut outcomes = Vec::with_capacity(self.stages.len() + 1);

        let handle = match verify_grammar_loads(self.loader.as_ref()) {
            Ok(handle) => {
                if self.report_load {
                    outcomes.push(CaseOutcome::passed(self.load_id()));
                }
                handle
            }
            Err(err) => {
                outcomes.push(CaseOutcome::failed(self.load_id(), &err));
                let reason = format!("{} grammar did not load", self.loader.display_name());
                outcomes.extend(self.stages.iter().map(|stage| {
                    CaseOutcome::skipped(case_id(name, &stage.case_name()), reason.clone())
                }));
                return outcomes;
            }
        };

        for stage in &self.stages {
            let id = case_id(name, &stage.case_name());
            match stage.run(&handle) {
                Ok(()) => outcomes.push(CaseOutcome::passed(id)),
                Err(err) => {
                    debug!(case = %id, error = %err, "case failed");
                    outcomes.push(CaseOutcome::failed(id, &err));
                }
            }
        }
        outcomes
    }
}

fn case_id(grammar: &str, case: &str) -> String {
    format!("{grammar}::{case}")
}

fn plan<'a>(registry: &GrammarRegistry, config: &'a RunnerConfig) -> Result<Vec<GrammarPlan<'a>>> {
    let loaders = registry.resolve(&config.grammars)?;

    // Case ids are keyed by query name, so a name may appear once per grammar.
    let mut configured: HashSet<(&'static str, &str)> = HashSet::new();
    for (grammar, query) in &config.queries {
        let Some(loader) = registry.get_by_name(grammar) else {
            return Err(Error::unsupported_grammar(grammar.clone())
                .with_operation("runner::plan")
                .with_context("query", query.name.clone()));
        };
        let bundled = loader.queries().iter().any(|b| b.name == query.name);
        if bundled || !configured.insert((loader.name(), query.name.as_str())) {
            return Err(Error::invalid_argument(format!(
                "query '{}' is defined more than once for grammar '{}'",
                query.name,
                loader.name()
            ))
            .with_operation("runner::plan")
            .with_context("grammar", loader.name())
            .with_context("query", query.name.clone()));
        }
    }

    let selected = |id: &str| match &config.filter {
        Some(term) => id.contains(term.as_str()),
        None => true,
    };

    let mut plans = Vec::with_capacity(loaders.len());
    for loader in loaders {
        let name = loader.name();

        let mut stages = vec![Stage::Abi, Stage::Parser];
        stages.extend(loader.queries().iter().map(|query| Stage::Query {
            name: query.name,
            source: query.source,
        }));
        stages.extend(
            config
                .queries
                .iter()
                .filter(|(grammar, _)| grammar.eq_ignore_ascii_case(name))
                .map(|(_, query)| Stage::Query {
                    name: &query.name,
                    source: &query.source,
                }),
        );
        stages.retain(|stage| selected(&case_id(name, &stage.case_name())));

        let report_load = selected(&case_id(name, CAN_LOAD_GRAMMAR));
        if report_load || !stages.is_empty() {
            plans.push(GrammarPlan {
                loader,
                report_load,
                stages,
            });
        }
    }

    if plans.is_empty() {
        let message = match &config.filter {
            Some(term) => format!("no gramcheck cases matched filter '{term}'"),
            None => "no grammars registered".to_string(),
        };
        return Err(Error::invalid_argument(message).with_operation("runner::plan"));
    }

    Ok(plans)
}

/// Run every selected case and collect the outcomes in grammar name order.
pub fn run_checks(registry: &GrammarRegistry, config: &RunnerConfig) -> Result<Report> {
    let start = Instant::now();
    let plans = plan(registry, config)?;

    let outcomes: Vec<Vec<CaseOutcome>> = if config.parallel {
        plans.par_iter().map(|plan| plan.run()).collect()
    } else {
        plans.iter().map(|plan| plan.run()).collect()
    };

    let report = Report::new(outcomes.into_iter().flatten().collect());
    info!(
        grammars = plans.len(),
        passed = report.passed(),
        failed = report.failed(),
        skipped = report.skipped(),
        secs = start.elapsed().as_secs_f64(),
        "checks complete"
    );
    Ok(report)
}

/// Ids of the cases `run_checks` would report, without loading anything.
pub fn list_cases(registry: &GrammarRegistry, config: &RunnerConfig) -> Result<Vec<String>> {
    Ok(plan(registry, config)?
        .iter()
        .flat_map(|plan| plan.case_ids())
        .collect())
}
