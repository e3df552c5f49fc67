//! Integration tests for the `sprout` binary.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use rhizome_sprout_desugar::synthesize_lookup;
use rhizome_sprout_ir::builders::*;
use rhizome_sprout_ir::{Program, TopLevel};

// =============================================================================
// Test Helpers
// =============================================================================

fn sprout() -> Command {
    Command::new(env!("CARGO_BIN_EXE_sprout"))
}

fn write_program(dir: &Path, name: &str, program: &Program) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_string(program).unwrap()).unwrap();
    path
}

fn write_config(dir: &Path, policy: &str) -> PathBuf {
    let path = dir.join("sprout.toml");
    std::fs::write(&path, format!("[desugar]\nvalue_policy = \"{}\"\n", policy)).unwrap();
    path
}

fn run(args: &[&str]) -> Output {
    sprout().args(args).output().expect("failed to run sprout")
}

fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "sprout failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn simple_dict() -> Program {
    Program::new(vec![TopLevel::Expr(dict(vec![(var("a"), num(1))]))])
}

fn computed_dict() -> Program {
    Program::new(vec![TopLevel::Expr(dict(vec![(
        var("a"),
        app(prim("+"), vec![num(1), num(2)]),
    )]))])
}

// =============================================================================
// desugar
// =============================================================================

#[test]
fn test_desugar_prints_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_program(dir.path(), "prog.json", &simple_dict());

    let stdout = stdout_of(&run(&["desugar", input.to_str().unwrap()]));
    let program: Program = serde_json::from_str(&stdout).unwrap();

    assert_eq!(program.forms.len(), 2);
    assert_eq!(program.forms[0], synthesize_lookup());
    assert_eq!(program.forms[1].to_string(), "(dict '((a . 1)))");
}

#[test]
fn test_desugar_scheme_prints_one_form_per_line() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_program(dir.path(), "prog.json", &simple_dict());

    let stdout = stdout_of(&run(&["desugar", "--scheme", input.to_str().unwrap()]));
    let lines: Vec<_> = stdout.lines().collect();

    assert_eq!(lines, [synthesize_lookup().to_string().as_str(), "(dict '((a . 1)))"]);
}

#[test]
fn test_config_sets_value_policy() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_program(dir.path(), "prog.json", &computed_dict());
    let config = write_config(dir.path(), "structural");

    let stdout = stdout_of(&run(&[
        "desugar",
        "--scheme",
        "--config",
        config.to_str().unwrap(),
        input.to_str().unwrap(),
    ]));
    assert_eq!(stdout.lines().nth(1), Some("(dict '((a + 1 2)))"));
}

#[test]
fn test_value_policy_flag_overrides_config() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_program(dir.path(), "prog.json", &computed_dict());
    let config = write_config(dir.path(), "literal");

    let output = run(&["desugar", "--config", config.to_str().unwrap(), input.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("NonLiteralValue"));

    let stdout = stdout_of(&run(&[
        "desugar",
        "--scheme",
        "--config",
        config.to_str().unwrap(),
        "--value-policy",
        "structural",
        input.to_str().unwrap(),
    ]));
    assert_eq!(stdout.lines().nth(1), Some("(dict '((a + 1 2)))"));
}

#[test]
fn test_desugar_rejects_malformed_key() {
    let dir = tempfile::tempdir().unwrap();
    let program = Program::new(vec![TopLevel::Expr(dict(vec![(num(1), num(2))]))]);
    let input = write_program(dir.path(), "prog.json", &program);

    let output = run(&["desugar", input.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("MalformedDictKey"));
}

// =============================================================================
// run
// =============================================================================

#[test]
fn test_run_prints_whole_program() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_program(dir.path(), "prog.json", &simple_dict());

    let stdout = stdout_of(&run(&["run", input.to_str().unwrap()]));
    assert_eq!(
        stdout.trim_end(),
        format!("(L32 {} (dict '((a . 1))))", synthesize_lookup())
    );
}

#[test]
fn test_run_reads_stdin() {
    let mut child = sprout()
        .args(["run", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run sprout");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(serde_json::to_string(&simple_dict()).unwrap().as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(stdout_of(&output).trim_end().ends_with("(dict '((a . 1))))"));
}

// =============================================================================
// unparse
// =============================================================================

fn js_program() -> Program {
    Program::new(vec![
        define("x", num(5)),
        TopLevel::Expr(if_(
            app(prim(">"), vec![var("x"), num(0)]),
            num(1),
            num(-1),
        )),
    ])
}

#[test]
fn test_unparse_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_program(dir.path(), "prog.json", &js_program());

    let stdout = stdout_of(&run(&["unparse", "--stdout", input.to_str().unwrap()]));
    assert_eq!(stdout.trim_end(), "const x = 5;\n(x > 0 ? 1 : -1)");
}

#[test]
fn test_unparse_writes_sibling_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_program(dir.path(), "prog.json", &js_program());

    stdout_of(&run(&["unparse", input.to_str().unwrap()]));

    let written = std::fs::read_to_string(dir.path().join("prog.js")).unwrap();
    assert_eq!(written, "const x = 5;\n(x > 0 ? 1 : -1)");
    assert!(input.exists());
}

#[test]
fn test_unparse_rejects_undesugared_dict() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_program(dir.path(), "prog.json", &simple_dict());

    let output = run(&["unparse", "--stdout", input.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("UnsupportedNode"));
}
