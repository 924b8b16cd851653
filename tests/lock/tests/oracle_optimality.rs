//! Every heuristic reports the true shortest depth.
//!
//! The oracle is an exhaustive BFS from the goal; instances are seeded
//! random walks, so the set is fixed across runs.

use lock_tests::oracle::DistanceOracle;
use lock_tests::scramble::random_walk;
use tessel_kernel::board::grid::Grid;
use tessel_search::heuristic::Heuristic;
use tessel_search::search::solve;

#[test]
fn three_by_three_depths_match_oracle() {
    let goal = Grid::solved(3).unwrap();
    let oracle = DistanceOracle::build(&goal);
    assert_eq!(oracle.reachable(), 181_440);

    for seed in 0..12 {
        let start = random_walk(&goal, 20 + 5 * seed as usize, seed);
        let expected = oracle.distance(&start).unwrap();
        for heuristic in Heuristic::ALL {
            let outcome = solve(&start, &goal, heuristic).unwrap();
            assert_eq!(
                outcome.depth(),
                Some(expected),
                "seed={seed} heuristic={heuristic} start={start}"
            );
        }
    }
}

#[test]
fn two_by_two_depths_match_oracle_for_every_reachable_state() {
    let goal = Grid::solved(2).unwrap();
    let oracle = DistanceOracle::build(&goal);
    assert_eq!(oracle.reachable(), 12);

    for seed in 0..30 {
        let start = random_walk(&goal, 7, seed);
        let expected = oracle.distance(&start).unwrap();
        for heuristic in Heuristic::ALL {
            assert_eq!(
                solve(&start, &goal, heuristic).unwrap().depth(),
                Some(expected),
                "seed={seed} heuristic={heuristic}"
            );
        }
    }
}

#[test]
fn non_standard_goal_matches_oracle() {
    let goal = Grid::from_rows(&[[1, 2, 3], [8, 0, 4], [7, 6, 5]]).unwrap();
    let oracle = DistanceOracle::build(&goal);

    for seed in 100..106 {
        let start = random_walk(&goal, 40, seed);
        let expected = oracle.distance(&start).unwrap();
        let outcome = solve(&start, &goal, Heuristic::ManhattanDistance).unwrap();
        assert_eq!(outcome.depth(), Some(expected), "seed={seed}");
    }
}

#[test]
fn four_by_four_short_scrambles_are_optimal() {
    // Too large to enumerate; a depth-d walk bounds the optimum by d, and
    // uniform cost is exact, so the informed heuristics must agree with it.
    let goal = Grid::solved(4).unwrap();
    for seed in 0..4 {
        let start = random_walk(&goal, 12, seed);
        let exact = solve(&start, &goal, Heuristic::UniformCost)
            .unwrap()
            .depth()
            .unwrap();
        assert!(exact <= 12);
        for heuristic in [Heuristic::MisplacedTiles, Heuristic::ManhattanDistance] {
            assert_eq!(
                solve(&start, &goal, heuristic).unwrap().depth(),
                Some(exact),
                "seed={seed} heuristic={heuristic}"
            );
        }
    }
}
