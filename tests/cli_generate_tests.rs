//! End-to-end tests for the `symforge` command line.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

/// Path to the symforge binary
fn symforge_bin() -> &'static str {
    env!("CARGO_BIN_EXE_symforge")
}

fn run(args: &[&str]) -> Output {
    Command::new(symforge_bin())
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn run_generate(symbols_dir: &Path, tests_dir: &Path, extra: &[&str]) -> Output {
    let mut args = vec![
        "generate",
        "--symbols-dir",
        symbols_dir.to_str().unwrap(),
        "--tests-dir",
        tests_dir.to_str().unwrap(),
    ];
    args.extend_from_slice(extra);
    run(&args)
}

#[test]
fn test_generate_writes_all_suites() {
    let dir = tempfile::tempdir().unwrap();
    let symbols_dir = dir.path().join("symbols");
    let tests_dir = dir.path().join("tests");

    let output = run_generate(&symbols_dir, &tests_dir, &[]);
    assert_eq!(
        output.status.code(),
        Some(0),
        "generation should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    for name in ["merge_modes", "merge_modes_x11", "merge_modes_xkbcommon"] {
        assert!(
            symbols_dir.join(name).exists(),
            "{name} should be created"
        );
    }
    for name in [
        "merge_modes_symbols.h",
        "merge_modes_symbols_x11.h",
        "merge_modes_symbols_xkbcommon.h",
    ] {
        assert!(tests_dir.join(name).exists(), "{name} should be created");
    }
}

#[test]
fn test_generate_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first");
    let second = dir.path().join("second");

    assert!(run_generate(&first.join("s"), &first.join("t"), &[]).status.success());
    assert!(run_generate(&second.join("s"), &second.join("t"), &[]).status.success());

    for name in ["merge_modes", "merge_modes_xkbcommon"] {
        let a = fs::read(first.join("s").join(name)).unwrap();
        let b = fs::read(second.join("s").join(name)).unwrap();
        assert_eq!(a, b, "{name} should be byte-identical across runs");
    }
    let a = fs::read(first.join("t").join("merge_modes_symbols.h")).unwrap();
    let b = fs::read(second.join("t").join("merge_modes_symbols.h")).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_generate_single_suite_selection() {
    let dir = tempfile::tempdir().unwrap();
    let symbols_dir = dir.path().join("symbols");
    let tests_dir = dir.path().join("tests");

    let output = run_generate(&symbols_dir, &tests_dir, &["--suite", "xkbcommon"]);
    assert!(output.status.success());

    assert!(symbols_dir.join("merge_modes_xkbcommon").exists());
    assert!(!symbols_dir.join("merge_modes").exists());
    assert!(!symbols_dir.join("merge_modes_x11").exists());
}

#[test]
fn test_generate_rejects_unknown_suite() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_generate(
        &dir.path().join("s"),
        &dir.path().join("t"),
        &["--suite", "wayland"],
    );
    assert_ne!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown suite"), "stderr: {stderr}");
}

#[test]
fn test_generate_honors_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("symforge.toml");
    let symbols_dir = dir.path().join("cfg-symbols");
    let tests_dir = dir.path().join("cfg-tests");
    fs::write(
        &config_path,
        format!(
            "[output]\nsymbols_dir = {:?}\ntests_dir = {:?}\n\n[suites]\nenabled = [\"x11\"]\n",
            symbols_dir.to_str().unwrap(),
            tests_dir.to_str().unwrap(),
        ),
    )
    .unwrap();

    let output = run(&["generate", "--config", config_path.to_str().unwrap()]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(symbols_dir.join("merge_modes_x11").exists());
    assert!(!symbols_dir.join("merge_modes").exists());
    assert!(tests_dir.join("merge_modes_symbols_x11.h").exists());
}

#[test]
fn test_debug_flag_adds_provenance_comments() {
    let dir = tempfile::tempdir().unwrap();
    let symbols_dir = dir.path().join("symbols");
    let tests_dir = dir.path().join("tests");

    assert!(run_generate(&symbols_dir, &tests_dir, &["--suite", "x11", "--debug"])
        .status
        .success());
    let contents = fs::read_to_string(symbols_dir.join("merge_modes_x11")).unwrap();
    assert!(contents.contains("pinned"));
}

#[test]
fn test_check_passes_on_shipped_catalog() {
    let output = run(&["check"]);
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("OK"), "stdout: {stdout}");
}

#[test]
fn test_inspect_json_is_well_formed() {
    let output = run(&["inspect", "--json"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let suites = value.as_array().unwrap();
    assert_eq!(suites.len(), 3);
    assert_eq!(suites[0]["name"], "common");
    // Every case reports all four expected outcomes.
    let case = &suites[0]["groups"][1]["cases"][0];
    for mode in ["update", "augment", "override", "replace"] {
        assert!(case["expected"][mode].is_object(), "missing {mode}");
    }
}

#[test]
fn test_inspect_single_suite_text() {
    let output = run(&["inspect", "--suite", "xkbcommon"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("suite xkbcommon"));
    assert!(!stdout.contains("suite common"));
    assert!(stdout.contains("augment:"));
}
