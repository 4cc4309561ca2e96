//! Explorer and display parameters.

/// Default pause between two traversal steps, in milliseconds.
pub const DEFAULT_TICK_MS: u64 = 250;

/// Pause used by the headless driver, matching one frame per second.
pub const HEADLESS_TICK_MS: u64 = 1000;

/// Default generated maze height (forced odd).
pub const DEFAULT_MAZE_ROWS: usize = 15;
/// Default generated maze width (forced odd).
pub const DEFAULT_MAZE_COLS: usize = 31;
/// Default number of items scattered in a generated maze.
pub const DEFAULT_ITEM_COUNT: usize = 5;

/// Smallest maze side the generator will carve (a 2x2 block of rooms plus walls).
pub const MIN_MAZE_SIDE: usize = 5;

/// Chance in percent that the generator knocks out an extra wall to create a loop.
pub const LOOP_PERCENT: u32 = 8;
