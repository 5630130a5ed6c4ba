use gramcheck_core::{ErrorKind, FnLoader, GrammarRegistry, LanguageFn};
use gramcheck_runner::builtin::RUST;
use gramcheck_runner::{CaseStatus, RunnerConfig, builtin_registry, list_cases, run_checks};
use pretty_assertions::assert_eq;

unsafe extern "C" fn absent_language() -> *const () {
    std::ptr::null()
}

const BROKEN: FnLoader = FnLoader::new(
    "broken",
    unsafe { LanguageFn::from_raw(absent_language) },
)
.with_display_name("Broken");

fn mixed_registry() -> GrammarRegistry {
    GrammarRegistry::new().with(RUST).with(BROKEN)
}

fn java_only() -> RunnerConfig {
    RunnerConfig::default().with_grammars(vec!["java".to_string()])
}

#[test]
fn java_binding_passes_every_stage() {
    let report = run_checks(&builtin_registry(), &java_only()).unwrap();

    let ids: Vec<&str> = report.outcomes().iter().map(|o| o.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "java::can_load_grammar",
            "java::abi_compatible",
            "java::parser_accepts_language",
            "java::query::variables",
            "java::query::methods",
            "java::query::fields",
        ]
    );
    assert!(report.is_success(), "{}", report.render());
    assert_eq!(report.passed(), 6);
}

#[test]
fn every_builtin_grammar_loads() {
    let report = run_checks(&builtin_registry(), &RunnerConfig::default()).unwrap();
    assert!(report.is_success(), "{}", report.render());
    for name in builtin_registry().all_grammars() {
        let id = format!("{name}::can_load_grammar");
        assert_eq!(report.outcome(&id).unwrap().status, CaseStatus::Passed);
    }
}

#[test]
fn null_grammar_fails_and_skips_its_later_stages() {
    let report = run_checks(&mixed_registry(), &RunnerConfig::default()).unwrap();

    let load = report.outcome("broken::can_load_grammar").unwrap();
    assert_eq!(load.status, CaseStatus::Failed);
    let message = load.message.as_deref().unwrap();
    assert!(message.contains("Error loading Broken grammar"), "{message}");

    for stage in ["abi_compatible", "parser_accepts_language"] {
        let outcome = report.outcome(&format!("broken::{stage}")).unwrap();
        assert_eq!(outcome.status, CaseStatus::Skipped);
        assert_eq!(outcome.message.as_deref(), Some("Broken grammar did not load"));
    }

    // The healthy grammar is unaffected.
    assert_eq!(
        report.outcome("rust::can_load_grammar").unwrap().status,
        CaseStatus::Passed
    );
    assert_eq!(report.failed(), 1);
    assert_eq!(report.skipped(), 2);
    assert_eq!(report.passed(), 3);
    assert!(report.render().contains("[FAIL] broken::can_load_grammar"));
}

#[test]
fn parallel_and_sequential_runs_agree() {
    let registry = builtin_registry().with(BROKEN);
    let sequential = run_checks(&registry, &RunnerConfig::default()).unwrap();
    let parallel = run_checks(&registry, &RunnerConfig::default().with_parallel(true)).unwrap();
    assert_eq!(sequential, parallel);
}

#[test]
fn repeated_runs_are_stable() {
    let registry = mixed_registry();
    let config = RunnerConfig::default();
    let first = run_checks(&registry, &config).unwrap();
    run_checks(&registry, &config).unwrap();
    let third = run_checks(&registry, &config).unwrap();
    assert_eq!(first, third);
}

#[test]
fn filter_selects_cases_by_substring() {
    let config = java_only().with_filter(Some("query::methods".to_string()));
    let report = run_checks(&builtin_registry(), &config).unwrap();
    let ids: Vec<&str> = report.outcomes().iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["java::query::methods"]);
    assert!(report.is_success());
}

#[test]
fn filtered_run_still_reports_load_failure() {
    let config = RunnerConfig::default().with_filter(Some("abi".to_string()));
    let report = run_checks(&mixed_registry(), &config).unwrap();
    let ids: Vec<&str> = report.outcomes().iter().map(|o| o.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "broken::can_load_grammar",
            "broken::abi_compatible",
            "rust::abi_compatible",
        ]
    );
    assert_eq!(report.failed(), 1);
}

#[test]
fn filter_without_matches_is_an_error() {
    let config = RunnerConfig::default().with_filter(Some("no-such-case".to_string()));
    let err = run_checks(&mixed_registry(), &config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(err.message().contains("'no-such-case'"), "{err}");
}

#[test]
fn empty_registry_reports_no_grammars() {
    let err = run_checks(&GrammarRegistry::new(), &RunnerConfig::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(err.message(), "no grammars registered");
}

#[test]
fn explicit_grammars_report_in_name_order() {
    let config = RunnerConfig::default()
        .with_grammars(vec!["rust".to_string(), "java".to_string()])
        .with_filter(Some("can_load".to_string()));

    let report = run_checks(&builtin_registry(), &config).unwrap();
    let ids: Vec<&str> = report.outcomes().iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["java::can_load_grammar", "rust::can_load_grammar"]);
    assert_eq!(list_cases(&builtin_registry(), &config).unwrap(), ids);
}

#[test]
fn unknown_grammar_is_an_error() {
    let config = RunnerConfig::default().with_grammars(vec!["cobol".to_string()]);
    let err = run_checks(&builtin_registry(), &config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedGrammar);
}

#[test]
fn configured_query_failure_is_isolated() {
    let config = java_only()
        .with_query("java", "jml", "(jml_invariant (_) @invariant)")
        .with_query("Java", "classes", "(class_declaration name: (identifier) @name)");
    let report = run_checks(&builtin_registry(), &config).unwrap();

    let jml = report.outcome("java::query::jml").unwrap();
    assert_eq!(jml.status, CaseStatus::Failed);
    assert!(jml.message.as_deref().unwrap().contains("QueryInvalid"));

    assert_eq!(
        report.outcome("java::query::classes").unwrap().status,
        CaseStatus::Passed
    );
    assert_eq!(report.failed(), 1);
    assert_eq!(report.skipped(), 0);
}

#[test]
fn configured_query_for_unregistered_grammar_is_an_error() {
    let config = RunnerConfig::default().with_query("cobol", "divisions", "(division) @d");
    let err = run_checks(&mixed_registry(), &config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedGrammar);
    assert_eq!(err.context_value("query"), Some("divisions"));
}

#[test]
fn list_cases_matches_run_ids() {
    let registry = builtin_registry();
    let config = java_only().with_query("java", "classes", "(class_declaration) @c");
    let listed = list_cases(&registry, &config).unwrap();
    let ran: Vec<String> = run_checks(&registry, &config)
        .unwrap()
        .outcomes()
        .iter()
        .map(|o| o.id.clone())
        .collect();
    assert_eq!(listed, ran);
    assert_eq!(listed.last().map(String::as_str), Some("java::query::classes"));
}

#[test]
fn configured_query_shadowing_a_bundled_one_is_an_error() {
    let config = java_only().with_query("java", "methods", "(jml_invariant) @x");
    let err = run_checks(&builtin_registry(), &config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(err.context_value("grammar"), Some("java"));
    assert_eq!(err.context_value("query"), Some("methods"));
}

#[test]
fn configured_query_names_must_be_unique_per_grammar() {
    let config = RunnerConfig::default()
        .with_query("rust", "functions", "(function_item) @fn")
        .with_query("Rust", "functions", "(struct_item) @s");
    let err = list_cases(&builtin_registry(), &config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(err.message().contains("'functions'"), "{err}");

    let distinct = RunnerConfig::default()
        .with_query("rust", "functions", "(function_item) @fn")
        .with_query("python", "functions", "(function_definition) @fn");
    assert!(list_cases(&builtin_registry(), &distinct).is_ok());
}
