use crate::simulation::agent::Explorer;
use crate::simulation::environment::Grid;
use rayon::prelude::*;

/// Renders the maze as one string per row using the file glyphs.
#[must_use]
pub fn compute_field_grid(grid: &Grid) -> Vec<String> {
    if grid.rows() == 0 || grid.cols() == 0 {
        return Vec::new();
    }

    (0..grid.rows())
        .into_par_iter()
        .map(|r| grid.row(r).iter().map(|cell| cell.glyph()).collect::<String>())
        .collect()
}

/// Renders the current frame, then clears any trail so it is shown only once.
pub fn take_frame(explorer: &mut Explorer) -> Vec<String> {
    let lines = compute_field_grid(explorer.grid());
    explorer.clear_trail();
    lines
}
