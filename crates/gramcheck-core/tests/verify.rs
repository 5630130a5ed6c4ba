use gramcheck_core::{
    ErrorKind, FnLoader, GrammarLoader, LanguageFn, LanguageHandle, verify_grammar_loads,
};

unsafe extern "C" fn absent_language() -> *const () {
    std::ptr::null()
}

const ABSENT: LanguageFn = unsafe { LanguageFn::from_raw(absent_language) };

const RUST: FnLoader = FnLoader::new("rust", tree_sitter_rust::LANGUAGE).with_display_name("Rust");
const BROKEN: FnLoader = FnLoader::new("broken", ABSENT).with_display_name("Broken");

#[test]
fn loads_compiled_grammar() {
    let handle = verify_grammar_loads(&RUST).expect("rust grammar should load");
    assert_eq!(handle.name(), "rust");
    assert!(handle.node_kind_count() > 0);
}

#[test]
fn null_grammar_fails_with_named_message() {
    let err = verify_grammar_loads(&BROKEN).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::LoadFailure);
    assert_eq!(err.message(), "Error loading Broken grammar");
    assert_eq!(err.operation(), "verify_grammar_loads");
    assert!(!err.is_retryable());
}

#[test]
fn repeated_loads_agree() {
    let first = verify_grammar_loads(&RUST).unwrap();
    let second = verify_grammar_loads(&RUST).unwrap();
    assert!(first.same_grammar(&second));
    assert_eq!(first.abi_version(), second.abi_version());

    assert!(verify_grammar_loads(&BROKEN).is_err());
    assert!(verify_grammar_loads(&BROKEN).is_err());
}

#[test]
fn earlier_runs_do_not_change_later_outcomes() {
    let outcome = |loader: &dyn GrammarLoader| verify_grammar_loads(loader).is_ok();

    let baseline = (outcome(&RUST), outcome(&BROKEN));
    for _ in 0..2 {
        outcome(&RUST);
        outcome(&BROKEN);
    }
    assert_eq!((outcome(&RUST), outcome(&BROKEN)), baseline);
    assert_eq!(baseline, (true, false));
}

#[test]
fn handle_can_be_built_outside_a_loader() {
    assert!(LanguageHandle::from_language_fn("absent", ABSENT).is_none());
    let handle = LanguageHandle::from_language_fn("rust", tree_sitter_rust::LANGUAGE).unwrap();
    let language = handle.clone().into_language();
    assert_eq!(language.abi_version(), handle.abi_version());
}

#[test]
fn parallel_loads_are_independent() {
    let handles: Vec<_> = std::thread::scope(|scope| {
        let workers: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| verify_grammar_loads(&RUST).map(|h| h.address())))
            .collect();
        workers.into_iter().map(|w| w.join().unwrap()).collect()
    });
    let first = handles[0].as_ref().unwrap();
    assert!(handles.iter().all(|h| h.as_ref().ok() == Some(first)));
}
