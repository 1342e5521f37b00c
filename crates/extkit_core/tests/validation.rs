mod support;

use extkit_core::{check, discover, validate, Rejection, ValidationError};
use log::Level;
use support::{registry, Entry, Env, MemoryLog};

fn names(extensions: &[extkit_core::DiscoveredExtension<'_>]) -> Vec<String> {
    extensions.iter().map(|ext| ext.name().to_string()).collect()
}

#[test]
fn drops_name_mismatch_with_warning_naming_both() {
    let registry = registry(vec![Entry::ok("a"), Entry::ok("b").reporting("c")], &[]);
    let log = MemoryLog::new();

    let found = discover(&registry, &log).expect("discovery");
    let valid = validate(found, &log).expect("validation");

    assert_eq!(names(&valid), vec!["a"]);
    let warnings = log.messages_at(Level::Warn);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("(b)"));
    assert!(warnings[0].contains("(c)"));
    assert!(warnings[0].starts_with("Disabled extension b:"));
}

#[test]
fn drops_missing_dependency_at_info() {
    let registry = registry(
        vec![Entry::ok("a").requiring(&["libspot"]), Entry::ok("b")],
        &[],
    );
    let log = MemoryLog::new();

    let found = discover(&registry, &log).expect("discovery");
    let valid = validate(found, &log).expect("validation");

    assert_eq!(names(&valid), vec!["b"]);
    assert!(log.contains(Level::Info, "Disabled extension a: Dependency libspot not found"));
    assert!(log.messages_at(Level::Warn).is_empty());
}

#[test]
fn installed_dependencies_pass() {
    let registry = registry(vec![Entry::ok("a").requiring(&["libspot"])], &["libspot"]);
    let log = MemoryLog::new();

    let valid = validate(discover(&registry, &log).expect("discovery"), &log).expect("validation");
    assert_eq!(names(&valid), vec!["a"]);
}

#[test]
fn drops_unsupported_environment_at_info() {
    let registry = registry(
        vec![
            Entry::ok("a").with_env(Env::Unsupported("no audio device found")),
            Entry::ok("b"),
        ],
        &[],
    );
    let log = MemoryLog::new();

    let valid = validate(discover(&registry, &log).expect("discovery"), &log).expect("validation");

    assert_eq!(names(&valid), vec!["b"]);
    assert!(log.contains(Level::Info, "Disabled extension a: no audio device found"));
}

#[test]
fn environment_fault_propagates() {
    let registry = registry(
        vec![Entry::ok("a"), Entry::ok("b").with_env(Env::Fault("probe crashed"))],
        &[],
    );
    let log = MemoryLog::new();

    let err = validate(discover(&registry, &log).expect("discovery"), &log)
        .expect_err("environment fault must propagate");

    let ValidationError::Environment { name, source } = err;
    assert_eq!(name, "b");
    assert!(source.to_string().contains("probe crashed"));
}

#[test]
fn first_violated_rule_wins() {
    let registry = registry(
        vec![Entry::ok("b")
            .reporting("c")
            .requiring(&["libspot"])
            .with_env(Env::Unsupported("never reached"))],
        &[],
    );
    let log = MemoryLog::new();
    let found = discover(&registry, &log).expect("discovery");

    assert!(matches!(
        check(&found[0]).expect("check"),
        Some(Rejection::NameMismatch { .. })
    ));

    let valid = validate(found, &log).expect("validation");
    assert!(valid.is_empty());
    assert_eq!(log.messages_at(Level::Warn).len(), 1);
    assert!(!log
        .messages_at(Level::Info)
        .iter()
        .any(|message| message.starts_with("Disabled extension")));
}

#[test]
fn output_is_ordered_subset_of_input() {
    let registry = registry(
        vec![
            Entry::ok("e1"),
            Entry::ok("e2").requiring(&["gone"]),
            Entry::ok("e3"),
            Entry::ok("e4").reporting("other"),
            Entry::ok("e5").with_env(Env::Unsupported("nope")),
            Entry::ok("e6"),
        ],
        &[],
    );
    let log = MemoryLog::new();

    let valid = validate(discover(&registry, &log).expect("discovery"), &log).expect("validation");

    assert_eq!(names(&valid), vec!["e1", "e3", "e6"]);
    assert!(log.contains(Level::Debug, "Valid extensions: e1, e3, e6"));
    let drops = log
        .entries()
        .into_iter()
        .filter(|(_, message)| message.starts_with("Disabled extension"))
        .count();
    assert_eq!(drops, 3);
}

#[test]
fn duplicate_names_are_not_deduplicated() {
    let registry = registry(vec![Entry::ok("local"), Entry::ok("local")], &[]);
    let log = MemoryLog::new();

    let valid = validate(discover(&registry, &log).expect("discovery"), &log).expect("validation");
    assert_eq!(names(&valid), vec!["local", "local"]);
}

#[test]
fn check_reports_each_rejection_kind() {
    let registry = registry(
        vec![
            Entry::ok("a"),
            Entry::ok("b").requiring(&["libb"]),
            Entry::ok("c").with_env(Env::Unsupported("offline")),
        ],
        &[],
    );
    let log = MemoryLog::new();
    let found = discover(&registry, &log).expect("discovery");

    assert_eq!(check(&found[0]).expect("check a"), None);
    match check(&found[1]).expect("check b") {
        Some(Rejection::MissingDependency(missing)) => assert_eq!(missing.requirement(), "libb"),
        other => panic!("unexpected verdict: {other:?}"),
    }
    assert_eq!(
        check(&found[2]).expect("check c"),
        Some(Rejection::Environment("offline".to_string()))
    );
}
