//! The maze the explorer walks through.
//!
//! A [`Grid`] is a fixed-size rectangle of [`Content`] tags addressed by
//! [`Position`]. Its shape never changes after construction; cell contents
//! are rewritten in place as the explorer moves.

use std::fmt;

use crate::simulation::direction::Direction;

/// A `(row, col)` address inside a grid. Row 0 is the top line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// What occupies a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Content {
    /// Impassable
    Wall,
    /// Open path
    #[default]
    Empty,
    /// Collectable treasure
    Item,
    /// The explorer itself
    Agent,
    /// Start-to-item path, shown for one frame after a collection
    Trail,
}

impl Content {
    /// Returns the glyph used by maze files and the text display.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Wall => 'W',
            Self::Empty => '.',
            Self::Item => 'T',
            Self::Agent => 'M',
            Self::Trail => 'X',
        }
    }

    /// Parses a display glyph.
    #[must_use]
    pub const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            'W' => Some(Self::Wall),
            '.' => Some(Self::Empty),
            'T' => Some(Self::Item),
            'M' => Some(Self::Agent),
            'X' => Some(Self::Trail),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_wall(self) -> bool {
        matches!(self, Self::Wall)
    }
}

/// Fixed-size rectangular maze, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Content>,
}

impl Grid {
    /// Creates a `rows` x `cols` grid with every cell set to `fill`.
    #[must_use]
    pub fn new(rows: usize, cols: usize, fill: Content) -> Self {
        Self {
            rows,
            cols,
            cells: vec![fill; rows * cols],
        }
    }

    /// Builds a grid from equally long rows.
    ///
    /// Returns `None` if the rows are ragged.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<Content>>) -> Option<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != cols) {
            return None;
        }
        let height = rows.len();
        Some(Self {
            rows: height,
            cols,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `true` if `pos` lies inside the grid.
    #[must_use]
    pub const fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Returns `true` if `pos` is on the outermost ring of cells.
    #[must_use]
    pub const fn is_border(&self, pos: Position) -> bool {
        pos.row == 0 || pos.col == 0 || pos.row + 1 == self.rows || pos.col + 1 == self.cols
    }

    fn index(&self, pos: Position) -> usize {
        assert!(
            self.contains(pos),
            "position {pos} is outside the {}x{} grid",
            self.rows,
            self.cols
        );
        pos.row * self.cols + pos.col
    }

    /// Returns the content at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    #[must_use]
    pub fn get(&self, pos: Position) -> Content {
        self.cells[self.index(pos)]
    }

    /// Returns the content at `pos`, or `None` outside the grid.
    #[must_use]
    pub fn try_get(&self, pos: Position) -> Option<Content> {
        self.contains(pos)
            .then(|| self.cells[pos.row * self.cols + pos.col])
    }

    /// Overwrites the content at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    pub fn set(&mut self, pos: Position, content: Content) {
        let idx = self.index(pos);
        self.cells[idx] = content;
    }

    /// Returns the in-bounds neighbor of `pos` in `dir`.
    #[must_use]
    pub fn neighbor(&self, pos: Position, dir: Direction) -> Option<Position> {
        dir.step_from(pos).filter(|next| self.contains(*next))
    }

    /// Returns one row of cells.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Content] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Iterates all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Position::new(row, col)))
    }

    /// Iterates the positions holding `content`, in row-major order.
    pub fn find(&self, content: Content) -> impl Iterator<Item = Position> + '_ {
        self.positions().filter(move |pos| self.get(*pos) == content)
    }

    #[must_use]
    pub fn count(&self, content: Content) -> usize {
        self.cells.iter().filter(|c| **c == content).count()
    }

    /// Reverts every trail marker to an open path. Returns how many were cleared.
    pub fn clear_trail(&mut self) -> usize {
        let mut cleared = 0;
        for cell in &mut self.cells {
            if *cell == Content::Trail {
                *cell = Content::Empty;
                cleared += 1;
            }
        }
        cleared
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            let line: String = self.row(row).iter().map(|c| c.glyph()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
