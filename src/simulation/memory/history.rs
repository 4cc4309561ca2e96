//! Undo stack of forward moves.

use crate::simulation::direction::Direction;
use crate::simulation::environment::Position;

/// LIFO record of forward steps that have not been backtracked yet.
///
/// Replaying the stack from the start position lands on the explorer's
/// current position; the stack is empty exactly when the explorer is home.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveHistory {
    steps: Vec<Direction>,
}

impl MoveHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, dir: Direction) {
        self.steps.push(dir);
    }

    pub fn pop(&mut self) -> Option<Direction> {
        self.steps.pop()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Walks the history backwards from `from`, yielding each predecessor
    /// position down to the start.
    ///
    /// Read-only: the stack itself is left untouched. Stops early if a step
    /// would leave the non-negative quadrant, which cannot happen when `from`
    /// is the real endpoint of the history.
    pub fn trace_back(&self, from: Position) -> impl Iterator<Item = Position> + '_ {
        self.steps.iter().rev().scan(from, |current, dir| {
            let previous = dir.opposite().step_from(*current)?;
            *current = previous;
            Some(previous)
        })
    }

    /// Replays the history forward from `start` and returns where it ends.
    #[must_use]
    pub fn replay(&self, start: Position) -> Option<Position> {
        self.steps
            .iter()
            .try_fold(start, |pos, dir| dir.step_from(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_is_lifo() {
        let mut history = MoveHistory::new();
        assert!(history.is_empty());
        history.push(Direction::East);
        history.push(Direction::South);
        assert_eq!(history.len(), 2);
        assert_eq!(history.pop(), Some(Direction::South));
        assert_eq!(history.pop(), Some(Direction::East));
        assert_eq!(history.pop(), None);
    }

    #[test]
    fn test_trace_back_yields_path_to_start() {
        let mut history = MoveHistory::new();
        history.push(Direction::East);
        history.push(Direction::East);
        history.push(Direction::South);
        let end = Position::new(2, 3);

        let path: Vec<_> = history.trace_back(end).collect();

        assert_eq!(
            path,
            vec![Position::new(1, 3), Position::new(1, 2), Position::new(1, 1)]
        );
        assert_eq!(history.len(), 3);
        assert_eq!(history.replay(Position::new(1, 1)), Some(end));
    }

    #[test]
    fn test_replay_inverts_trace_back() {
        let mut history = MoveHistory::new();
        for dir in [Direction::South, Direction::East, Direction::North] {
            history.push(dir);
        }
        let start = Position::new(3, 3);
        let end = history.replay(start).unwrap();
        assert_eq!(end, Position::new(3, 4));
        assert_eq!(history.trace_back(end).last(), Some(start));
    }
}
