// Integration tests for the full front-end pipeline

use std::fs;
use std::path::Path;

use tacfront::equation::ExpressionTreeBuilder;
use tacfront::pipeline::Compilation;
use tacfront::tac::{to_lines, TacGenerator};
use tacfront::Error;

fn demo_source() -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/main.cpp");
    fs::read_to_string(path).expect("demo program is readable")
}

#[test]
fn test_demo_program_parses() {
    let run = Compilation::run(&demo_source(), None).expect("demo compiles");

    // #include, using namespace std, main
    assert_eq!(run.tree.children.len(), 3);
    assert!(!run.cleaned.contains("Sample program"));
    assert!(!run.cleaned.contains("Running totals"));
    assert!(run.tree.node_count() > run.tokens.len());
}

#[test]
fn test_demo_program_lowers_assignments_in_order() {
    let run = Compilation::run(&demo_source(), None).expect("demo compiles");

    assert_eq!(
        run.tac_lines(),
        vec![
            "a = 4",
            "b = 7",
            "scale = 2",
            "t0 = a * b",
            "t1 = t0 + 3",
            "total = t1",
            "i = 0",
            "t2 = i * scale",
            "t3 = total + t2",
            "total = t3",
            "t4 = a + b",
            "t5 = t4 / 2",
            "t6 = total - t5",
            "total = t6",
        ]
    );
}

#[test]
fn test_equation_run_replaces_program_lowering() {
    let run = Compilation::run(&demo_source(), Some("x=a*b+3")).expect("demo compiles");

    let tree = run.equation.as_ref().expect("equation tree is kept");
    assert_eq!(
        tree.edges(),
        vec!["= -> x", "= -> +", "+ -> *", "+ -> 3", "* -> a", "* -> b"]
    );
    assert_eq!(run.tac_lines(), vec!["t0 = a * b", "t1 = t0 + 3", "x = t1"]);
}

#[test]
fn test_temporaries_are_numbered_per_run() {
    let first = Compilation::run("x = a + b;", None).unwrap();
    let second = Compilation::run("y = c + d;", None).unwrap();

    assert_eq!(first.tac_lines(), vec!["t0 = a + b", "x = t0"]);
    assert_eq!(second.tac_lines(), vec!["t0 = c + d", "y = t0"]);
}

#[test]
fn test_every_binary_instruction_defines_a_fresh_temporary() {
    let tree = ExpressionTreeBuilder::build("r = a + b * c - d / e").unwrap();
    let lines = to_lines(&TacGenerator::generate(&tree).unwrap());

    let temps: Vec<&str> = lines
        .iter()
        .filter_map(|line| line.split(" = ").next())
        .filter(|dest| dest.starts_with('t'))
        .collect();
    assert_eq!(temps, vec!["t0", "t1", "t2", "t3"]);
    assert_eq!(lines.last().map(String::as_str), Some("r = t3"));
}

#[test]
fn test_errors_surface_with_stage_messages() {
    let parse = Compilation::run("int main() { x = 1;", None).unwrap_err();
    assert!(matches!(parse, Error::Parse(_)));
    assert!(parse.to_string().starts_with("Parse error"));

    let equation = Compilation::run("", Some("a + ")).unwrap_err();
    assert!(matches!(equation, Error::Equation(_)));
    assert!(equation.to_string().starts_with("Equation error:"));
}

#[test]
fn test_long_equation_and_deep_nesting_fail_or_finish_cleanly() {
    let equation = format!("total={}", vec!["x"; 10_000].join("+"));
    let run = Compilation::run("", Some(&equation)).unwrap();
    assert_eq!(run.instructions.len(), 10_000);
    assert_eq!(
        run.tac_lines().last().map(String::as_str),
        Some("total = t9998")
    );

    let source = format!("y = {}b{};", "( ".repeat(5_000), " )".repeat(5_000));
    let err = Compilation::run(&source, None).unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
    assert!(err.to_string().contains("nesting exceeds"));
}
