//! Search entry points and the best-first expansion loop.

use tessel_kernel::board::grid::Grid;
use tessel_kernel::board::state::BoardState;
use tracing::{debug, info, trace};

use crate::contract::SearchSpace;
use crate::error::SearchError;
use crate::frontier::{EmptyFrontier, Frontier};
use crate::heuristic::Heuristic;
use crate::node::NodeArena;
use crate::outcome::{SearchOutcome, SearchRun, SearchStats, Termination};
use crate::policy::SearchPolicy;
use crate::space::PuzzleSpace;
use crate::table::{Reconcile, VisitedTable};

/// Find a minimum-cost move sequence from `start` to `goal`.
///
/// Each call owns its frontier and visited table; nothing is shared across
/// calls, so the result is a pure function of the arguments.
///
/// # Errors
///
/// Returns [`SearchError::DimensionMismatch`] if the grids differ in size.
pub fn solve(start: &Grid, goal: &Grid, heuristic: Heuristic) -> Result<SearchOutcome, SearchError> {
    search(start, goal, &SearchPolicy::with_heuristic(heuristic))
}

/// [`solve`] with a full policy (heuristic plus optional expansion cap).
///
/// # Errors
///
/// Returns [`SearchError::DimensionMismatch`] if the grids differ in size and
/// [`SearchError::InvalidPolicy`] if the policy fails validation.
pub fn search(
    start: &Grid,
    goal: &Grid,
    policy: &SearchPolicy,
) -> Result<SearchOutcome, SearchError> {
    policy.validate()?;
    if start.dimension() != goal.dimension() {
        return Err(SearchError::DimensionMismatch {
            start: start.dimension(),
            goal: goal.dimension(),
        });
    }

    info!(
        event = "solve_start",
        heuristic = %policy.heuristic,
        dimension = start.dimension(),
        start = %start,
        goal = %goal,
    );

    let space = PuzzleSpace::new(BoardState::from_grid(goal), policy.heuristic);
    let run = best_first(&space, BoardState::from_grid(start), policy.max_expansions);

    let outcome = match (run.goal_path(), run.depth()) {
        (Some(states), Some(depth)) => SearchOutcome::Success {
            path: states.iter().map(BoardState::to_grid).collect(),
            depth,
            stats: run.stats,
        },
        _ => match run.termination {
            Termination::ExpansionBudgetExceeded => {
                SearchOutcome::BudgetExhausted { stats: run.stats }
            }
            _ => SearchOutcome::NoSolution { stats: run.stats },
        },
    };

    info!(
        event = "solve_end",
        outcome = outcome.kind(),
        depth = outcome.depth(),
        nodes_expanded = outcome.stats().nodes_expanded,
        max_frontier_size = outcome.stats().max_frontier_size,
        cost_improvements = outcome.stats().cost_improvements,
    );

    Ok(outcome)
}

/// Run best-first graph search over `space` from `start`.
///
/// Extracts the minimum-`f` node, goal-tests it, and reconciles each
/// successor against the visited table:
///
/// - unseen → new node, inserted open
/// - open with recorded cost ≤ `g'` → skipped
/// - open with recorded cost > `g'` → replacement node, decrease-key
/// - closed → skipped (never reopened)
///
/// Terminates on goal, on frontier exhaustion, or when `max_expansions`
/// nodes have been expanded while frontier work remains.
pub fn best_first<W: SearchSpace>(
    space: &W,
    start: W::State,
    max_expansions: Option<u64>,
) -> SearchRun<W::State> {
    let mut arena = NodeArena::new();
    let mut frontier = Frontier::new();
    let mut table = VisitedTable::new();
    let mut stats = SearchStats::default();

    let root_key = space.key(&start);
    let root_h = space.estimate(&start);
    let root = arena.push(None, start, 0, root_h);
    frontier.insert(root, arena.get(root).frontier_key());
    table.record_open(root_key, 0, root);

    let termination = loop {
        // An empty frontier has already decided the run; the cap only cuts
        // off remaining work.
        if !frontier.is_empty() && max_expansions.is_some_and(|cap| stats.nodes_expanded >= cap)
        {
            break Termination::ExpansionBudgetExceeded;
        }

        let current = match frontier.extract_min() {
            Ok(id) => id,
            Err(EmptyFrontier) => break Termination::FrontierExhausted,
        };
        let node = arena.get(current);
        let (g, state) = (node.g, node.state.clone());

        if !table.close(&space.key(&state)) {
            stats.stale_discarded += 1;
            continue;
        }
        stats.nodes_expanded += 1;
        debug!(
            event = "expand",
            expansion = stats.nodes_expanded,
            g,
            h = node.h,
            f = node.f(),
        );

        if space.is_goal(&state) {
            break Termination::GoalReached(current);
        }

        let child_g = g + 1;
        for child in space.successors(&state) {
            stats.nodes_generated += 1;
            let key = space.key(&child);
            match table.reconcile(&key, child_g) {
                Reconcile::New => {
                    let h = space.estimate(&child);
                    let id = arena.push(Some(current), child, child_g, h);
                    frontier.insert(id, arena.get(id).frontier_key());
                    table.record_open(key, child_g, id);
                }
                Reconcile::Improves { stale } => {
                    debug_assert!(frontier.contains(stale), "open entry must be live");
                    let h = space.estimate(&child);
                    let id = arena.push(Some(current), child, child_g, h);
                    trace!(
                        event = "decrease_key",
                        old_g = arena.get(stale).g,
                        new_g = child_g,
                    );
                    frontier.decrease_key(stale, id, arena.get(id).frontier_key());
                    table.record_open(key, child_g, id);
                    stats.cost_improvements += 1;
                }
                Reconcile::NoImprovement | Reconcile::Closed => {
                    stats.duplicates_skipped += 1;
                }
            }
        }
    };

    stats.max_frontier_size = frontier.high_water() as u64;

    SearchRun {
        termination,
        stats,
        arena,
    }
}
