//! Seeded random maze generation.
//!
//! Carves a perfect maze with an iterative recursive-backtracker over the
//! odd coordinates, knocks out a few extra walls so the explorer meets
//! loops, then scatters items. The same seed always yields the same maze.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::MazeError;
use crate::simulation::direction::Direction;
use crate::simulation::environment::{Content, Grid, Position};
use crate::simulation::params::{LOOP_PERCENT, MIN_MAZE_SIDE};

/// Generates a walled maze with the explorer at `(1, 1)`.
///
/// Even dimensions are rounded down to the next odd number so every carved
/// cell sits on odd coordinates.
///
/// # Errors
///
/// Returns [`MazeError::InvalidSize`] if either side, after rounding down to
/// odd, is smaller than [`MIN_MAZE_SIDE`] or there are not enough open cells for `items`.
pub fn generate_maze(
    rows: usize,
    cols: usize,
    items: usize,
    seed: u64,
) -> Result<Grid, MazeError> {
    let height = if rows % 2 == 0 { rows.saturating_sub(1) } else { rows };
    let width = if cols % 2 == 0 { cols.saturating_sub(1) } else { cols };
    if height < MIN_MAZE_SIDE || width < MIN_MAZE_SIDE {
        return Err(MazeError::InvalidSize {
            rows,
            cols,
            reason: format!(
                "both sides must be at least {MIN_MAZE_SIDE} once rounded down to odd"
            ),
        });
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = Grid::new(height, width, Content::Wall);
    let start = Position::new(1, 1);

    carve(&mut grid, start, &mut rng);
    add_loops(&mut grid, &mut rng);

    let mut open: Vec<Position> = grid.find(Content::Empty).filter(|p| *p != start).collect();
    if items > open.len() {
        return Err(MazeError::InvalidSize {
            rows,
            cols,
            reason: format!("only {} open cells for {items} items", open.len()),
        });
    }
    open.shuffle(&mut rng);
    for pos in open.into_iter().take(items) {
        grid.set(pos, Content::Item);
    }
    grid.set(start, Content::Agent);

    debug!(rows = height, cols = width, items, seed, "maze generated");
    Ok(grid)
}

fn carve(grid: &mut Grid, origin: Position, rng: &mut StdRng) {
    grid.set(origin, Content::Empty);
    let mut stack = vec![origin];

    while let Some(current) = stack.pop() {
        let options: Vec<(Position, Position)> = Direction::PRIORITY
            .into_iter()
            .filter_map(|dir| {
                let between = grid.neighbor(current, dir)?;
                let next = grid.neighbor(between, dir)?;
                (!grid.is_border(next) && grid.get(next).is_wall()).then_some((between, next))
            })
            .collect();
        if options.is_empty() {
            continue;
        }
        let (between, next) = options[rng.random_range(0..options.len())];
        grid.set(between, Content::Empty);
        grid.set(next, Content::Empty);
        stack.push(current);
        stack.push(next);
    }
}

fn add_loops(grid: &mut Grid, rng: &mut StdRng) {
    let candidates: Vec<Position> = grid
        .positions()
        .filter(|pos| !grid.is_border(*pos) && grid.get(*pos).is_wall())
        .filter(|pos| (pos.row % 2 == 1) != (pos.col % 2 == 1))
        .collect();
    for pos in candidates {
        if rng.random_range(0..100) < LOOP_PERCENT {
            grid.set(pos, Content::Empty);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_maze() {
        let a = generate_maze(11, 21, 3, 42).unwrap();
        let b = generate_maze(11, 21, 3, 42).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_even_sides_round_down() {
        let grid = generate_maze(10, 12, 0, 1).unwrap();
        assert_eq!(grid.rows(), 9);
        assert_eq!(grid.cols(), 11);
    }

    #[test]
    fn test_every_odd_cell_is_carved() {
        let grid = generate_maze(9, 9, 0, 7).unwrap();
        for row in (1..grid.rows()).step_by(2) {
            for col in (1..grid.cols()).step_by(2) {
                assert!(!grid.get(Position::new(row, col)).is_wall());
            }
        }
    }

    #[test]
    fn test_rejects_tiny_or_overfull_mazes() {
        assert!(matches!(
            generate_maze(2, 9, 0, 0),
            Err(MazeError::InvalidSize { .. })
        ));
        assert!(matches!(
            generate_maze(3, 3, 0, 0),
            Err(MazeError::InvalidSize { .. })
        ));
        assert!(matches!(
            generate_maze(4, 4, 0, 0),
            Err(MazeError::InvalidSize { rows: 4, cols: 4, .. })
        ));
        let rounded = generate_maze(6, 9, 0, 0).unwrap();
        assert_eq!((rounded.rows(), rounded.cols()), (5, 9));
        assert!(matches!(
            generate_maze(5, 5, 8, 0),
            Err(MazeError::InvalidSize { .. })
        ));
        let smallest = generate_maze(5, 5, 0, 0).unwrap();
        assert_eq!((smallest.rows(), smallest.cols()), (5, 5));
        assert!(smallest.count(Content::Empty) >= 3);
    }
}
