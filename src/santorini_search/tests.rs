//! Search tests on the fixed benchmark positions.
//!
//! Node counts below are exact: move generation order is fixed, so both the
//! minimax tree and the set of alpha-beta cutoffs are fully determined by the
//! position and depth.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;
use crate::board::{Board, GameState, Player, Position, WorkerSet, GRID_SIZE};
use crate::fixtures::{self, BENCHMARK_POSITIONS};
use crate::searcher::{Algorithm, Score, SearchOutcome, SCORE_INFINITY};

/// (depth, score, minimax generated/evaluated, alpha-beta generated/evaluated/pruned)
type Expected = (u8, Score, (usize, usize), (usize, usize, usize));

const OPENING: [Expected; 4] = [
    (1, 0, (17, 16), (17, 16, 0)),
    (2, 0, (273, 256), (48, 31, 15)),
    (3, 0, (4225, 3952), (310, 262, 30)),
    (4, 0, (59059, 54834), (778, 468, 276)),
];

const EARLY: [Expected; 4] = [
    (1, 6, (17, 16), (17, 16, 0)),
    (2, 4, (273, 256), (115, 98, 11)),
    (3, 4, (4225, 3952), (910, 823, 40)),
    (4, 2, (59059, 54834), (3015, 2105, 770)),
];

const MID: [Expected; 4] = [
    (1, 2, (17, 16), (17, 16, 0)),
    (2, 1, (193, 176), (72, 55, 13)),
    (3, 2, (2811, 2618), (589, 513, 40)),
    (4, 1, (29705, 26894), (1450, 998, 384)),
];

const LATE: [Expected; 4] = [
    (1, 3, (17, 16), (17, 16, 0)),
    (2, 3, (193, 176), (81, 64, 12)),
    (3, 3, (2811, 2618), (701, 590, 82)),
    (4, 1, (29705, 26894), (4948, 3868, 893)),
];

fn full_window(state: &GameState, depth: u8) -> SearchOutcome {
    alpha_beta(state, depth, -SCORE_INFINITY, SCORE_INFINITY, true).unwrap()
}

fn assert_expected(name: &str, state: &GameState, table: &[Expected]) {
    for &(depth, score, (mm_generated, mm_evaluated), (ab_generated, ab_evaluated, ab_pruned)) in
        table
    {
        let mm = minimax(state, depth, true).unwrap();
        assert_eq!(mm.score, score, "{} minimax score at depth {}", name, depth);
        assert_eq!(
            (mm.metrics.nodes_generated(), mm.metrics.nodes_evaluated()),
            (mm_generated, mm_evaluated),
            "{} minimax nodes at depth {}",
            name,
            depth
        );
        assert_eq!(mm.metrics.nodes_pruned(), 0);

        let ab = full_window(state, depth);
        assert_eq!(ab.score, score, "{} alpha-beta score at depth {}", name, depth);
        assert_eq!(
            (
                ab.metrics.nodes_generated(),
                ab.metrics.nodes_evaluated(),
                ab.metrics.nodes_pruned()
            ),
            (ab_generated, ab_evaluated, ab_pruned),
            "{} alpha-beta nodes at depth {}",
            name,
            depth
        );
    }
}

#[test]
fn test_opening_counts() {
    assert_expected("Opening", &fixtures::opening_position(), &OPENING);
}

#[test]
fn test_early_game_counts() {
    assert_expected("Early", &fixtures::early_game_position(), &EARLY);
}

#[test]
fn test_mid_game_counts() {
    assert_expected("Mid", &fixtures::mid_game_position(), &MID);
}

#[test]
fn test_late_game_counts() {
    assert_expected("Late", &fixtures::late_game_position(), &LATE);
}

#[test]
fn test_opening_depth_one_scenario() {
    let state = fixtures::opening_position();
    let outcome = minimax(&state, 1, true).unwrap();
    assert_eq!(outcome.score, 0);
    assert_eq!(outcome.metrics.nodes_generated(), 17);
    assert_eq!(outcome.metrics.nodes_evaluated(), 16);
}

#[test]
fn test_alpha_beta_matches_minimax_on_every_fixture() {
    for position in BENCHMARK_POSITIONS {
        let state = position.state();
        for depth in 1..=4 {
            let mm = minimax(&state, depth, true).unwrap();
            let ab = full_window(&state, depth);
            assert_eq!(mm.score, ab.score, "{} at depth {}", position.name, depth);
            assert!(
                ab.metrics.nodes_generated() <= mm.metrics.nodes_generated(),
                "{} at depth {}",
                position.name,
                depth
            );
        }
    }
}

#[test]
fn test_pruning_starts_at_depth_two() {
    for position in BENCHMARK_POSITIONS {
        let state = position.state();
        assert_eq!(full_window(&state, 1).metrics.nodes_pruned(), 0);
        let depth_two = full_window(&state, 2);
        assert!(depth_two.metrics.nodes_pruned() > 0, "{}", position.name);
        assert!(
            depth_two.metrics.nodes_generated()
                < minimax(&state, 2, true).unwrap().metrics.nodes_generated()
        );
    }
}

#[test]
fn test_depth_zero_is_a_single_leaf() {
    let state = fixtures::early_game_position();
    let mm = minimax(&state, 0, true).unwrap();
    let ab = full_window(&state, 0);
    assert_eq!(mm, ab);
    assert_eq!(mm.score, 5);
    assert_eq!(mm.metrics.nodes_generated(), 1);
    assert_eq!(mm.metrics.nodes_evaluated(), 1);
}

#[test]
fn test_repeated_searches_are_identical() {
    let state = fixtures::late_game_position();
    let first_mm = minimax(&state, 3, true).unwrap();
    let first_ab = full_window(&state, 3);
    for _ in 0..3 {
        assert_eq!(minimax(&state, 3, true).unwrap(), first_mm);
        assert_eq!(full_window(&state, 3), first_ab);
    }
}

#[test]
fn test_search_root_uses_full_window_for_x() {
    let state = fixtures::mid_game_position();
    assert_eq!(
        search_root(Algorithm::Minimax, &state, 3).unwrap(),
        minimax(&state, 3, true).unwrap()
    );
    assert_eq!(
        search_root(Algorithm::AlphaBeta, &state, 3).unwrap(),
        full_window(&state, 3)
    );
}

#[test]
fn test_search_root_minimizes_for_o() {
    let x_to_move = fixtures::early_game_position();
    let o_to_move = GameState::new(
        *x_to_move.board(),
        x_to_move.workers().clone(),
        Player::O,
    )
    .unwrap();
    let outcome = search_root(Algorithm::Minimax, &o_to_move, 2).unwrap();
    assert_eq!(outcome, minimax(&o_to_move, 2, false).unwrap());
}

#[test]
fn test_side_without_workers_scores_worst_case() {
    let state = GameState::new(
        Board::flat(),
        WorkerSet::new(vec![], vec![Position::new(2, 2)]),
        Player::X,
    )
    .unwrap();
    let mm = minimax(&state, 2, true).unwrap();
    let ab = full_window(&state, 2);
    assert_eq!(mm.score, -SCORE_INFINITY);
    assert_eq!(ab.score, -SCORE_INFINITY);
    assert_eq!(mm.metrics.nodes_generated(), 1);
    assert_eq!(mm.metrics.nodes_evaluated(), 0);
}

fn random_position(rng: &mut StdRng) -> GameState {
    let mut heights = [[0u8; GRID_SIZE]; GRID_SIZE];
    for row in heights.iter_mut() {
        for cell in row.iter_mut() {
            *cell = rng.gen_range(0..4);
        }
    }

    let mut cells: Vec<Position> = Vec::new();
    while cells.len() < 4 {
        let candidate = Position::new(
            rng.gen_range(0..GRID_SIZE as u8),
            rng.gen_range(0..GRID_SIZE as u8),
        );
        if !cells.contains(&candidate) {
            cells.push(candidate);
        }
    }

    GameState::new(
        Board::new(heights),
        WorkerSet::new(cells[..2].to_vec(), cells[2..].to_vec()),
        Player::X,
    )
    .unwrap()
}

#[test]
fn test_alpha_beta_matches_minimax_on_random_positions() {
    let mut rng = StdRng::seed_from_u64(0x5a_70_41);
    for _ in 0..25 {
        let state = random_position(&mut rng);
        for depth in 1..=3 {
            for &maximizing in &[true, false] {
                let mm = minimax(&state, depth, maximizing).unwrap();
                let ab = alpha_beta(
                    &state,
                    depth,
                    -SCORE_INFINITY,
                    SCORE_INFINITY,
                    maximizing,
                )
                .unwrap();
                assert_eq!(mm.score, ab.score, "depth {} for\n{}", depth, state);
                assert!(ab.metrics.nodes_generated() <= mm.metrics.nodes_generated());
                assert!(ab.metrics.nodes_evaluated() <= mm.metrics.nodes_evaluated());
            }
        }
    }
}
