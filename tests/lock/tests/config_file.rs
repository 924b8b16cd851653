//! Configuration files drive harness runs end to end.

use std::io::Write;

use tessel_harness::config::{ConfigError, SolverConfig};
use tessel_harness::puzzles::Puzzle;
use tessel_harness::runner::{run_solve, SolveRequest};
use tessel_kernel::board::grid::Grid;
use tessel_search::heuristic::Heuristic;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn file_selects_heuristic_and_goal() {
    let file = write_config(
        r#"
heuristic = "misplaced-tiles"
goal = [[1, 2, 3], [4, 5, 6], [7, 8, 0]]
"#,
    );
    let config = SolverConfig::load(file.path()).unwrap();
    assert_eq!(config.heuristic, Heuristic::MisplacedTiles);

    let report = run_solve(
        &SolveRequest::new(Puzzle::DefaultStart.grid().unwrap()),
        &config,
    )
    .unwrap();
    assert_eq!(report.heuristic, Heuristic::MisplacedTiles);
    assert_eq!(report.outcome.depth(), Some(16));
    assert_eq!(report.outcome.stats().nodes_expanded, 666);
}

#[test]
fn file_cap_stops_search() {
    let file = write_config("heuristic = \"uniform-cost\"\nmax_expansions = 100\n");
    let config = SolverConfig::load(file.path()).unwrap();
    let report = run_solve(
        &SolveRequest::new(Puzzle::DefaultStart.grid().unwrap()),
        &config,
    )
    .unwrap();
    assert_eq!(report.outcome.kind(), "budget_exhausted");
}

#[test]
fn file_with_four_by_four_goal() {
    let file = write_config(
        "goal = [[1, 2, 3, 4], [5, 6, 7, 8], [9, 10, 11, 12], [13, 14, 0, 15]]\n",
    );
    let config = SolverConfig::load(file.path()).unwrap();
    let report = run_solve(&SolveRequest::new(Grid::solved(4).unwrap()), &config).unwrap();
    assert_eq!(report.outcome.depth(), Some(1));
}

#[test]
fn invalid_goal_in_file_is_rejected() {
    let file = write_config("goal = [[1, 2, 3], [4, 5, 6], [7, 8, 9]]\n");
    assert!(matches!(
        SolverConfig::load(file.path()),
        Err(ConfigError::Toml(_))
    ));
}
