//! Visitation diary: what the explorer remembers about each cell.
//!
//! Every visited position gets a [`VisitRecord`] holding the exits that are
//! not blocked by a wall and the exits already walked. An edge counts as
//! walked from both of its endpoints once it has been crossed in either
//! direction.

use std::collections::HashMap;

use crate::simulation::direction::{Direction, DirectionSet};
use crate::simulation::environment::Position;

/// Exits known for a single visited cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisitRecord {
    /// Directions not blocked by a wall, fixed at first visit
    possible: DirectionSet,
    /// Directions already walked, only ever grows
    explored: DirectionSet,
}

impl VisitRecord {
    /// Creates a record with nothing explored yet.
    #[must_use]
    pub const fn new(possible: DirectionSet) -> Self {
        Self {
            possible,
            explored: DirectionSet::EMPTY,
        }
    }

    #[must_use]
    pub const fn possible(&self) -> DirectionSet {
        self.possible
    }

    #[must_use]
    pub const fn explored(&self) -> DirectionSet {
        self.explored
    }

    /// Possible exits that have not been walked yet.
    #[must_use]
    pub const fn unexplored(&self) -> DirectionSet {
        self.possible.difference(self.explored)
    }

    /// Returns `true` once every possible exit has been walked.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.unexplored().is_empty()
    }

    /// Marks `dir` as walked. Returns `true` if it was newly marked.
    pub fn mark_explored(&mut self, dir: Direction) -> bool {
        debug_assert!(
            self.possible.contains(dir),
            "marking {dir} explored but it is blocked (possible: {:?})",
            self.possible
        );
        self.explored.insert(dir)
    }
}

/// Position-keyed collection of [`VisitRecord`]s covering exactly the cells
/// visited so far.
#[derive(Clone, Debug, Default)]
pub struct Diary {
    records: HashMap<Position, VisitRecord>,
}

impl Diary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a first visit to `pos`.
    ///
    /// `possible` is only evaluated when `pos` has no entry yet. Returns
    /// `true` if a new entry was created.
    pub fn visit_first_time<F>(&mut self, pos: Position, possible: F) -> bool
    where
        F: FnOnce() -> DirectionSet,
    {
        if self.records.contains_key(&pos) {
            return false;
        }
        self.records.insert(pos, VisitRecord::new(possible()));
        true
    }

    /// Marks the edge crossed by moving `dir` from `from` into `to` as spent
    /// at both ends.
    ///
    /// Each end is marked independently so that arriving at an already
    /// visited cell through a new edge is recorded correctly.
    pub fn record_edge_traversal(&mut self, from: Position, to: Position, dir: Direction) {
        if let Some(record) = self.records.get_mut(&from) {
            record.mark_explored(dir);
        }
        if let Some(record) = self.records.get_mut(&to) {
            record.mark_explored(dir.opposite());
        }
    }

    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&VisitRecord> {
        self.records.get(&pos)
    }

    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.records.contains_key(&pos)
    }

    /// Number of distinct cells visited.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates visited positions with their records, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &VisitRecord)> {
        self.records.iter().map(|(pos, record)| (*pos, record))
    }

    /// Returns `true` if every visited cell has walked all of its exits.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.records.values().all(VisitRecord::is_exhausted)
    }
}
