//! End-to-End Demo Tests
//!
//! Runs the demonstrations the way the binary does, through the
//! DemoRunner, and checks the highest-level observable facts.

use flow_cli::{CliError, Console, DemoRunner};

#[test]
fn test_every_listed_demo_runs_and_prints() {
    for (name, _) in DemoRunner::list() {
        let (console, lines) = Console::capture();
        let runner = DemoRunner::with_console(console);
        runner.run(name).expect("listed demo should run");
        assert!(!lines.borrow().is_empty(), "demo '{}' printed nothing", name);
    }
}

#[test]
fn test_unknown_demo_reports_error() {
    let (console, _) = Console::capture();
    let runner = DemoRunner::with_console(console);
    match runner.run("nope") {
        Err(CliError::UnknownDemo(name)) => assert_eq!(name, "nope"),
        other => panic!("expected UnknownDemo, got {:?}", other),
    }
}

#[test]
fn test_run_all_surfaces_exactly_one_unhandled_rejection() {
    let (console, lines) = Console::capture();
    let runner = DemoRunner::with_console(console);
    runner.run_all();

    let collected = lines.borrow();
    let diagnostics: Vec<&String> = collected
        .iter()
        .filter(|line| line.starts_with("Unhandled rejection:"))
        .collect();

    // Only the rejections demo leaves a chain unobserved, and only once.
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].as_str(), "Unhandled rejection: Foo");
}

#[test]
fn test_run_all_keeps_demo_order() {
    let (console, lines) = Console::capture();
    let runner = DemoRunner::with_console(console);
    runner.run_all();

    let collected = lines.borrow();
    let banners: Vec<&String> = collected
        .iter()
        .filter(|line| line.starts_with("=== "))
        .collect();
    assert_eq!(
        banners,
        vec![
            "=== blocking ===",
            "=== callbacks ===",
            "=== futures ===",
            "=== rejections ===",
        ]
    );
}
