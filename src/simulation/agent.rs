use tracing::{debug, info};

use crate::error::MazeError;
use crate::simulation::direction::{Direction, DirectionSet};
use crate::simulation::environment::{Content, Grid, Position};
use crate::simulation::memory::{Diary, MoveHistory};

/// What the explorer intends to do from its current cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Walk an unexplored exit
    Move(Direction),
    /// Every exit here is spent; undo the last forward move
    Backtrack,
    /// Every exit is spent and the explorer is back at the start
    Finished,
}

/// Result of a single [`Explorer::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Progressed,
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    Exploring,
    Done,
}

/// Depth-first maze explorer.
///
/// The explorer owns the maze and walks it one cell per [`step`](Self::step):
/// it takes the first unexplored exit in North, East, West, South order,
/// backtracks when the current cell is exhausted and stops once it is home
/// with nothing left to explore. Items are collected on entry, and the path
/// from the start to the item is marked with [`Content::Trail`] until the
/// display clears it.
#[derive(Clone, Debug)]
pub struct Explorer {
    grid: Grid,
    start: Position,
    pos: Position,
    items: usize,
    steps: u64,
    history: MoveHistory,
    diary: Diary,
    state: EngineState,
    last_decision: Option<Decision>,
}

impl Explorer {
    /// Places an explorer on the maze's single start cell.
    ///
    /// # Errors
    ///
    /// Fails if the grid has no start cell, more than one, or an open cell on
    /// its border (the walk would otherwise be able to leave the grid).
    pub fn new(grid: Grid) -> Result<Self, MazeError> {
        let start = locate_start(&grid)?;
        check_border(&grid)?;

        let mut explorer = Self {
            grid,
            start,
            pos: start,
            items: 0,
            steps: 0,
            history: MoveHistory::new(),
            diary: Diary::new(),
            state: EngineState::Exploring,
            last_decision: None,
        };
        explorer.visit_first_time(start);
        debug!(%start, "explorer placed");
        Ok(explorer)
    }

    #[must_use]
    pub const fn position(&self) -> Position {
        self.pos
    }

    #[must_use]
    pub const fn start(&self) -> Position {
        self.start
    }

    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.items
    }

    /// Forward moves plus backtracks performed so far.
    #[must_use]
    pub const fn steps(&self) -> u64 {
        self.steps
    }

    #[must_use]
    pub const fn state(&self) -> EngineState {
        self.state
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.state == EngineState::Done
    }

    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub const fn diary(&self) -> &Diary {
        &self.diary
    }

    #[must_use]
    pub const fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// The decision taken by the most recent step, if any.
    #[must_use]
    pub const fn last_decision(&self) -> Option<Decision> {
        self.last_decision
    }

    /// Reverts trail markers left by item collection. Returns how many cells changed.
    pub fn clear_trail(&mut self) -> usize {
        self.grid.clear_trail()
    }

    /// Chooses the next action from the current cell.
    ///
    /// Deterministic: the first unexplored exit in priority order wins, then
    /// backtracking, then completion.
    #[must_use]
    pub fn decide(&self) -> Decision {
        let next = self
            .diary
            .get(self.pos)
            .and_then(|record| record.unexplored().first());
        match next {
            Some(dir) => Decision::Move(dir),
            None if !self.history.is_empty() => Decision::Backtrack,
            None => Decision::Finished,
        }
    }

    /// Performs one traversal action.
    ///
    /// Once [`StepOutcome::Finished`] has been returned, further calls keep
    /// returning it and change nothing.
    pub fn step(&mut self) -> StepOutcome {
        if self.is_done() {
            return StepOutcome::Finished;
        }

        let decision = self.decide();
        self.last_decision = Some(decision);
        debug!(position = %self.pos, ?decision, "step");

        match decision {
            Decision::Finished => {
                self.state = EngineState::Done;
                info!(
                    items = self.items,
                    steps = self.steps,
                    visited = self.diary.len(),
                    "exploration complete"
                );
                StepOutcome::Finished
            }
            Decision::Backtrack => {
                self.backtrack();
                StepOutcome::Progressed
            }
            Decision::Move(dir) => {
                self.advance(dir);
                StepOutcome::Progressed
            }
        }
    }

    /// Steps until the maze is exhausted and returns the final item count.
    pub fn run_to_completion(&mut self) -> usize {
        while self.step() == StepOutcome::Progressed {}
        self.items
    }

    fn advance(&mut self, dir: Direction) {
        let from = self.pos;
        let to = self.neighbor(from, dir);
        self.history.push(dir);
        self.relocate(to);
        self.visit_first_time(to);
        self.diary.record_edge_traversal(from, to, dir);
        self.steps += 1;
    }

    fn backtrack(&mut self) {
        let Some(dir) = self.history.pop() else {
            return;
        };
        let to = self.neighbor(self.pos, dir.opposite());
        debug!(from = %self.pos, %to, "backtrack");
        self.relocate(to);
        self.steps += 1;
    }

    /// Moves the agent marker, collecting an item at the destination before
    /// the marker overwrites it.
    fn relocate(&mut self, to: Position) {
        self.grid.set(self.pos, Content::Empty);
        self.pos = to;
        if self.grid.get(to) == Content::Item {
            self.collect_item();
        }
        self.grid.set(to, Content::Agent);
    }

    fn collect_item(&mut self) {
        self.items += 1;
        let here = self.pos;
        let mut marked = 0usize;
        for cell in self.history.trace_back(here) {
            if cell != here {
                self.grid.set(cell, Content::Trail);
                marked += 1;
            }
        }
        info!(position = %here, items = self.items, trail = marked, "item collected");
    }

    fn visit_first_time(&mut self, pos: Position) {
        if self.diary.contains(pos) {
            return;
        }
        let possible = self.possible_directions(pos);
        self.diary.visit_first_time(pos, || possible);
    }

    fn possible_directions(&self, pos: Position) -> DirectionSet {
        Direction::PRIORITY
            .into_iter()
            .filter(|dir| !self.grid.get(self.neighbor(pos, *dir)).is_wall())
            .collect()
    }

    /// # Panics
    ///
    /// Panics if the step leaves the grid. `new` rejects grids with an open
    /// border, so this only fires on a broken invariant.
    fn neighbor(&self, pos: Position, dir: Direction) -> Position {
        match self.grid.neighbor(pos, dir) {
            Some(next) => next,
            None => panic!("moving {dir} from {pos} leaves the maze"),
        }
    }
}

fn locate_start(grid: &Grid) -> Result<Position, MazeError> {
    let mut starts = grid.find(Content::Agent);
    let first = starts.next().ok_or(MazeError::MissingStart)?;
    if let Some(other) = starts.next() {
        return Err(MazeError::DuplicateStart {
            first_row: first.row,
            first_col: first.col,
            row: other.row,
            col: other.col,
        });
    }
    Ok(first)
}

fn check_border(grid: &Grid) -> Result<(), MazeError> {
    match grid
        .positions()
        .find(|pos| grid.is_border(*pos) && !grid.get(*pos).is_wall())
    {
        Some(pos) => Err(MazeError::OpenBorder {
            row: pos.row,
            col: pos.col,
        }),
        None => Ok(()),
    }
}
