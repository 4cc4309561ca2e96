//! Compass directions and compact direction sets.
//!
//! The declaration order of [`Direction`] is the exploration priority:
//! North, then East, then West, then South.

use std::fmt;

use crate::simulation::environment::Position;

/// One of the four orthogonal moves available to the explorer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    /// Row - 1
    North,
    /// Col + 1
    East,
    /// Col - 1
    West,
    /// Row + 1
    South,
}

impl Direction {
    /// All directions in priority order.
    pub const PRIORITY: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::West,
        Direction::South,
    ];

    /// Returns the direction that undoes this one.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// Returns the position one step away from `pos` in this direction.
    ///
    /// Returns `None` when the step would leave the non-negative quadrant.
    /// The upper bounds are the grid's concern.
    #[must_use]
    pub fn step_from(self, pos: Position) -> Option<Position> {
        let Position { row, col } = pos;
        match self {
            Self::North => row.checked_sub(1).map(|row| Position::new(row, col)),
            Self::South => row.checked_add(1).map(|row| Position::new(row, col)),
            Self::East => col.checked_add(1).map(|col| Position::new(row, col)),
            Self::West => col.checked_sub(1).map(|col| Position::new(row, col)),
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Self::North => 0b0001,
            Self::East => 0b0010,
            Self::West => 0b0100,
            Self::South => 0b1000,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "North",
            Self::East => "East",
            Self::West => "West",
            Self::South => "South",
        };
        f.write_str(name)
    }
}

/// A set of directions stored as a 4-bit mask.
///
/// Iteration always yields members in priority order.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DirectionSet(u8);

impl DirectionSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Adds a direction. Returns `true` if it was not already present.
    pub fn insert(&mut self, dir: Direction) -> bool {
        let added = !self.contains(dir);
        self.0 |= dir.bit();
        added
    }

    #[must_use]
    pub const fn contains(self, dir: Direction) -> bool {
        self.0 & dir.bit() != 0
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if every member of `self` is also in `other`.
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Members of `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns the highest-priority member, if any.
    #[must_use]
    pub fn first(self) -> Option<Direction> {
        self.iter().next()
    }

    /// Iterates members in priority order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::PRIORITY
            .into_iter()
            .filter(move |dir| self.contains(*dir))
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = Self::new();
        for dir in iter {
            set.insert(dir);
        }
        set
    }
}

impl fmt::Debug for DirectionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
