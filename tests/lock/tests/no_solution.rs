//! Unreachable goals exhaust the reachable component and report no solution.

use lock_tests::scramble::{is_reachable, random_permutation};
use tessel_kernel::board::grid::Grid;
use tessel_search::heuristic::Heuristic;
use tessel_search::outcome::SearchOutcome;
use tessel_search::policy::SearchPolicy;
use tessel_search::search::{search, solve};

#[test]
fn swapped_two_by_two_has_no_solution() {
    let start = Grid::from_rows(&[[2, 1], [3, 0]]).unwrap();
    let goal = Grid::solved(2).unwrap();
    for heuristic in Heuristic::ALL {
        let outcome = solve(&start, &goal, heuristic).unwrap();
        assert!(
            matches!(outcome, SearchOutcome::NoSolution { .. }),
            "{heuristic}: {outcome:?}"
        );
        assert_eq!(outcome.stats().nodes_expanded, 12);
        assert_eq!(outcome.path(), None);
    }
}

#[test]
fn swapped_three_by_three_expands_every_reachable_state() {
    let start = Grid::from_rows(&[[2, 1, 3], [4, 5, 6], [7, 8, 0]]).unwrap();
    let goal = Grid::solved(3).unwrap();
    let outcome = solve(&start, &goal, Heuristic::ManhattanDistance).unwrap();

    assert_eq!(outcome.kind(), "no_solution");
    let stats = outcome.stats();
    assert_eq!(stats.nodes_expanded, 181_440);
    assert!(stats.cost_improvements > 0);
    assert_eq!(stats.stale_discarded, 0);
}

#[test]
fn parity_predicts_two_by_two_outcomes() {
    let goal = Grid::solved(2).unwrap();
    for seed in 0..24 {
        let start = random_permutation(2, seed);
        let outcome = solve(&start, &goal, Heuristic::MisplacedTiles).unwrap();
        assert_eq!(
            outcome.is_success(),
            is_reachable(&start, &goal),
            "seed={seed} start={start}"
        );
    }
}

#[test]
fn expansion_cap_reports_budget_exhausted_instead() {
    let start = Grid::from_rows(&[[2, 1, 3], [4, 5, 6], [7, 8, 0]]).unwrap();
    let goal = Grid::solved(3).unwrap();
    let policy = SearchPolicy {
        heuristic: Heuristic::ManhattanDistance,
        max_expansions: Some(1_000),
    };
    let outcome = search(&start, &goal, &policy).unwrap();
    assert!(matches!(outcome, SearchOutcome::BudgetExhausted { .. }));
    assert_eq!(outcome.stats().nodes_expanded, 1_000);
}
