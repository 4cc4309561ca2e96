//! Whole-traversal properties checked over a range of generated mazes.
//!
//! These tests verify that:
//! - A traversal is fully reproducible
//! - Every reachable cell is visited and every item collected
//! - Explored edges are recorded symmetrically at both ends
//! - The walk terminates back at the start

use maze_explorer::simulation::agent::{Explorer, StepOutcome};
use maze_explorer::simulation::direction::Direction;
use maze_explorer::simulation::environment::{Content, Grid, Position};
use maze_explorer::simulation::generator::generate_maze;

const ROWS: usize = 11;
const COLS: usize = 21;
const ITEMS: usize = 6;
const SEEDS: std::ops::Range<u64> = 0..20;

fn maze(seed: u64) -> Grid {
    generate_maze(ROWS, COLS, ITEMS, seed).unwrap()
}

/// Upper bound on steps: every (cell, exit) pair is walked forward at most
/// once and every forward move is undone at most once.
fn step_limit(grid: &Grid) -> u64 {
    let open = (grid.rows() * grid.cols() - grid.count(Content::Wall)) as u64;
    open * 4 * 2 + 1
}

/// Run a full traversal and return the sequence of positions after each step
fn run_traversal(grid: Grid) -> (Explorer, Vec<Position>) {
    let limit = step_limit(&grid);
    let mut explorer = Explorer::new(grid).unwrap();
    let mut trace = Vec::new();
    for _ in 0..limit {
        if explorer.step() == StepOutcome::Finished {
            return (explorer, trace);
        }
        trace.push(explorer.position());
    }
    panic!("traversal did not finish within {limit} steps");
}

#[test]
fn test_traversal_is_deterministic() {
    for seed in SEEDS {
        let (first, first_trace) = run_traversal(maze(seed));
        let (second, second_trace) = run_traversal(maze(seed));
        assert_eq!(first_trace, second_trace, "seed {seed}");
        assert_eq!(first.item_count(), second.item_count(), "seed {seed}");
    }
}

#[test]
fn test_every_open_cell_is_visited() {
    for seed in SEEDS {
        let grid = maze(seed);
        let open: Vec<Position> = grid
            .positions()
            .filter(|pos| !grid.get(*pos).is_wall())
            .collect();
        let (explorer, _) = run_traversal(grid);

        assert_eq!(explorer.diary().len(), open.len(), "seed {seed}");
        for pos in open {
            assert!(explorer.diary().contains(pos), "seed {seed}: {pos} never visited");
        }
    }
}

#[test]
fn test_every_item_is_collected() {
    for seed in SEEDS {
        let (explorer, _) = run_traversal(maze(seed));
        assert_eq!(explorer.item_count(), ITEMS, "seed {seed}");
        assert_eq!(explorer.grid().count(Content::Item), 0, "seed {seed}");
    }
}

#[test]
fn test_explored_edges_are_symmetric() {
    for seed in SEEDS {
        let (explorer, _) = run_traversal(maze(seed));
        let grid = explorer.grid();
        for (pos, record) in explorer.diary().iter() {
            assert_eq!(record.explored(), record.possible(), "seed {seed}: {pos}");
            for dir in record.explored().iter() {
                let other = grid.neighbor(pos, dir).unwrap();
                let other_record = explorer.diary().get(other).unwrap();
                assert!(
                    other_record.explored().contains(dir.opposite()),
                    "seed {seed}: {pos} -> {dir} not mirrored at {other}"
                );
            }
        }
        assert!(explorer.diary().is_complete());
    }
}

#[test]
fn test_traversal_ends_at_start_with_empty_history() {
    for seed in SEEDS {
        let (explorer, _) = run_traversal(maze(seed));
        assert!(explorer.is_done());
        assert_eq!(explorer.position(), explorer.start());
        assert!(explorer.history().is_empty());
    }
}

#[test]
fn test_history_always_leads_to_current_position() {
    for seed in SEEDS.take(5) {
        let mut explorer = Explorer::new(maze(seed)).unwrap();
        loop {
            let before = explorer.history().len();
            let items_before = explorer.item_count();
            let outcome = explorer.step();
            assert_eq!(
                explorer.history().replay(explorer.start()),
                Some(explorer.position()),
                "seed {seed}"
            );
            if explorer.item_count() > items_before {
                // Collection inspects the history without consuming it
                assert_eq!(explorer.history().len(), before + 1, "seed {seed}");
                let path: Vec<_> = explorer.history().trace_back(explorer.position()).collect();
                assert_eq!(path.last(), Some(&explorer.start()));
                for cell in path {
                    assert_eq!(explorer.grid().get(cell), Content::Trail);
                }
                explorer.clear_trail();
            }
            if outcome == StepOutcome::Finished {
                break;
            }
        }
    }
}

#[test]
fn test_first_move_follows_priority() {
    for seed in SEEDS {
        let mut explorer = Explorer::new(maze(seed)).unwrap();
        let start = explorer.start();
        let expected = Direction::PRIORITY
            .into_iter()
            .find(|dir| {
                let next = explorer.grid().neighbor(start, *dir).unwrap();
                !explorer.grid().get(next).is_wall()
            })
            .unwrap();
        explorer.step();
        assert_eq!(
            explorer.grid().neighbor(start, expected),
            Some(explorer.position()),
            "seed {seed}"
        );
    }
}
