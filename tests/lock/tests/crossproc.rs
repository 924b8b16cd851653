//! Cross-process determinism.
//!
//! Spawns the `solve_fixture` binary under several environment variants and
//! asserts identical stdout. Solving must not depend on process-level state
//! (cwd, locale, hash seeds, log filters).

use std::process::Command;

use tessel_harness::config::SolverConfig;
use tessel_harness::puzzles::Puzzle;
use tessel_harness::runner::{run_solve, SolveRequest};
use tessel_search::heuristic::Heuristic;

/// `cargo test` puts test binaries in `target/<profile>/deps/`; the fixture
/// binary lives one level up.
fn binary_path() -> String {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push("solve_fixture");
    path.to_string_lossy().to_string()
}

fn run_variant(args: &[&str], work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path();
    let mut command = Command::new(&bin);
    command
        .args(args)
        .current_dir(work_dir)
        .env_remove("LC_ALL")
        .env_remove("LANG")
        .env_remove("RUST_LOG");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });
    assert!(
        output.status.success(),
        "solve_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

fn field<'a>(stdout: &'a str, key: &str) -> &'a str {
    stdout
        .lines()
        .find_map(|line| line.strip_prefix(key)?.strip_prefix('='))
        .unwrap_or_else(|| panic!("missing {key} in:\n{stdout}"))
}

#[test]
fn identical_output_across_env_variants() {
    let root = env!("CARGO_MANIFEST_DIR");
    let tmp = std::env::temp_dir();
    let tmp = tmp.to_str().expect("temp dir is UTF-8");

    for heuristic in ["uniform-cost", "misplaced-tiles", "manhattan-distance"] {
        let args = [heuristic, "default-start"];
        let baseline = run_variant(&args, root, &[]);
        let other_cwd = run_variant(&args, tmp, &[("LC_ALL", "C")]);
        let verbose = run_variant(
            &args,
            root,
            &[("LANG", "tr_TR.UTF-8"), ("RUST_LOG", "trace")],
        );
        assert_eq!(baseline, other_cwd, "{heuristic}: cwd/locale changed output");
        assert_eq!(baseline, verbose, "{heuristic}: log level changed output");
    }
}

#[test]
fn fixture_output_matches_in_process_run() {
    let stdout = run_variant(&[], env!("CARGO_MANIFEST_DIR"), &[]);
    assert_eq!(field(&stdout, "outcome"), "success");
    assert_eq!(field(&stdout, "depth"), "16");
    assert_eq!(field(&stdout, "nodes_expanded"), "96");
    assert_eq!(field(&stdout, "max_frontier_size"), "63");

    let report = run_solve(
        &SolveRequest::new(Puzzle::DefaultStart.grid().unwrap()),
        &SolverConfig::with_heuristic(Heuristic::ManhattanDistance),
    )
    .unwrap();
    assert_eq!(
        field(&stdout, "report_digest"),
        report.digest().unwrap().as_str()
    );
    assert_eq!(
        field(&stdout, "outcome_digest"),
        report.outcome_digest().unwrap().as_str()
    );
}

#[test]
fn numeric_heuristic_selector_matches_name() {
    let root = env!("CARGO_MANIFEST_DIR");
    assert_eq!(
        run_variant(&["1", "near-goal"], root, &[]),
        run_variant(&["uniform-cost", "near-goal"], root, &[])
    );
}
