//! Strategy integration tests on real puzzle instances.

use grid_search::core::{Pos, SearchNode};
use grid_search::rules::RuleSet;
use grid_search::games::npuzzle::{solved_board, NPuzzleRules};
use grid_search::search::{bfs, bidirectional, dfs, ids, run, Strategy};

/// Scramble a solved puzzle by sliding the blank along `path`, where each
/// step names the square the blank swaps into. Every step is a legal slide,
/// so the result is solvable in at most `path.len()` moves.
fn scrambled(size: usize, path: &[Pos]) -> grid_search::core::Board {
    let mut board = solved_board(size).unwrap();
    let mut blank = Pos::new(size - 1, size - 1);
    for &step in path {
        board = board.with_swap(blank, step);
        blank = step;
    }
    board
}

// =============================================================================
// Solved-Root Scenarios
// =============================================================================

#[test]
fn test_solved_root_reports_cost_zero_everywhere() {
    let board = solved_board(3).unwrap();

    assert!(NPuzzleRules.goal(&board));

    let root = SearchNode::root(board.clone(), &NPuzzleRules);
    assert_eq!(root.distance(), 0);

    assert_eq!(bfs(&NPuzzleRules, root.clone()).cost, Some(0));
    assert_eq!(dfs(&NPuzzleRules, root.clone()).cost, Some(0));
    assert_eq!(ids(&NPuzzleRules, root).cost, Some(0));
}

#[test]
fn test_one_slide_away_costs_one() {
    // Swap the blank with its neighbor: exactly one legal slide from goal.
    let board = scrambled(3, &[Pos::new(2, 1)]);

    let root = SearchNode::root(board, &NPuzzleRules);
    let outcome = bfs(&NPuzzleRules, root);

    assert_eq!(outcome.cost, Some(1));
    assert!(NPuzzleRules.goal(outcome.solution.as_ref().unwrap()));
}

// =============================================================================
// Cost-Ordering Properties
// =============================================================================

#[test]
fn test_ids_matches_bfs_minimal_cost() {
    let paths: Vec<Vec<Pos>> = vec![
        vec![Pos::new(2, 1)],
        vec![Pos::new(2, 1), Pos::new(1, 1)],
        vec![Pos::new(2, 1), Pos::new(1, 1), Pos::new(1, 0)],
    ];

    for path in paths {
        let board = scrambled(3, &path);

        let bfs_cost = bfs(&NPuzzleRules, SearchNode::root(board.clone(), &NPuzzleRules)).cost;
        let ids_cost = ids(&NPuzzleRules, SearchNode::root(board, &NPuzzleRules)).cost;

        assert!(bfs_cost.is_some());
        assert_eq!(bfs_cost, ids_cost, "path length {}", path.len());
    }
}

#[test]
fn test_dfs_cost_never_beats_bfs() {
    // 2x2 puzzle: 12-state component keeps DFS's wandering bounded.
    let board = scrambled(2, &[Pos::new(1, 0), Pos::new(0, 0)]);

    let bfs_cost = bfs(&NPuzzleRules, SearchNode::root(board.clone(), &NPuzzleRules))
        .cost
        .unwrap();
    let dfs_cost = dfs(&NPuzzleRules, SearchNode::root(board, &NPuzzleRules))
        .cost
        .unwrap();

    assert!(bfs_cost <= dfs_cost);
}

#[test]
fn test_exhaustive_search_on_full_component() {
    // From any state of the 2x2 component, all strategies find the goal.
    let board = scrambled(
        2,
        &[Pos::new(1, 0), Pos::new(0, 0), Pos::new(0, 1), Pos::new(1, 1), Pos::new(1, 0)],
    );

    for strategy in [
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
        Strategy::IterativeDeepening,
    ] {
        let root = SearchNode::root(board.clone(), &NPuzzleRules);
        let outcome = run(strategy, &NPuzzleRules, root, None).unwrap();
        assert!(outcome.found(), "{strategy} should solve the 2x2 instance");
    }
}

// =============================================================================
// Bidirectional Meeting
// =============================================================================

#[test]
fn test_bidirectional_meets_within_bfs_cost() {
    let board = scrambled(3, &[Pos::new(2, 1), Pos::new(1, 1), Pos::new(0, 1)]);

    let k = bfs(&NPuzzleRules, SearchNode::root(board.clone(), &NPuzzleRules))
        .cost
        .unwrap();

    let initial = SearchNode::root(board, &NPuzzleRules);
    let goal = SearchNode::root(solved_board(3).unwrap(), &NPuzzleRules);
    let outcome = bidirectional(&NPuzzleRules, initial, goal);

    assert!(outcome.found());
    let meeting = outcome.meeting.unwrap();
    assert!(
        meeting.combined_depth() <= k,
        "met at combined depth {} but BFS solves in {k}",
        meeting.combined_depth()
    );
    // The headline cost is one side's depth, not the combined path length.
    assert!(outcome.cost.unwrap() <= k);
}

#[test]
fn test_bidirectional_via_dispatcher() {
    let board = scrambled(3, &[Pos::new(2, 1)]);

    let initial = SearchNode::root(board, &NPuzzleRules);
    let goal = SearchNode::root(solved_board(3).unwrap(), &NPuzzleRules);

    let outcome = run(Strategy::Bidirectional, &NPuzzleRules, initial, Some(goal)).unwrap();
    assert!(outcome.found());
}
