//! In-process determinism: repeated and parallel solves are identical.

use lock_tests::scramble::random_walk;
use tessel_harness::config::SolverConfig;
use tessel_harness::puzzles::Puzzle;
use tessel_harness::runner::{run_batch, run_solve, SolveRequest};
use tessel_kernel::board::grid::Grid;
use tessel_search::heuristic::Heuristic;
use tessel_search::search::solve;

#[test]
fn repeated_solves_are_identical() {
    let start = Puzzle::DefaultStart.grid().unwrap();
    let goal = Grid::solved(3).unwrap();
    for heuristic in Heuristic::ALL {
        let first = solve(&start, &goal, heuristic).unwrap();
        for _ in 0..3 {
            assert_eq!(solve(&start, &goal, heuristic).unwrap(), first);
        }
    }
}

#[test]
fn report_digest_is_stable_across_runs() {
    let request = SolveRequest::new(Puzzle::DefaultStart.grid().unwrap());
    let config = SolverConfig::new();
    let a = run_solve(&request, &config).unwrap();
    let b = run_solve(&request, &config).unwrap();
    assert_eq!(a.to_json_bytes().unwrap(), b.to_json_bytes().unwrap());
    assert_eq!(a.digest().unwrap(), b.digest().unwrap());
}

#[test]
fn digests_distinguish_heuristics() {
    let request = SolveRequest::new(Puzzle::DefaultStart.grid().unwrap());
    let digests: Vec<String> = Heuristic::ALL
        .into_iter()
        .map(|h| {
            run_solve(&request, &SolverConfig::with_heuristic(h))
                .unwrap()
                .digest()
                .unwrap()
                .to_string()
        })
        .collect();
    assert_ne!(digests[0], digests[1]);
    assert_ne!(digests[1], digests[2]);
}

#[test]
fn parallel_batch_equals_sequential_runs() {
    let goal = Grid::solved(3).unwrap();
    let requests: Vec<SolveRequest> = (0..16)
        .map(|seed| SolveRequest::new(random_walk(&goal, 30, seed)))
        .collect();
    let config = SolverConfig::new();

    let batched = run_batch(&requests, &config);
    assert_eq!(batched.len(), requests.len());
    for (request, report) in requests.iter().zip(batched) {
        let report = report.unwrap();
        let sequential = run_solve(request, &config).unwrap();
        assert_eq!(report.start, request.start);
        assert_eq!(report.outcome, sequential.outcome);
        assert_eq!(report.digest().unwrap(), sequential.digest().unwrap());
    }
}
