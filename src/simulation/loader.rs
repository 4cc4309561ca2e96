//! Text maze loader.
//!
//! The format is a `rows cols` header followed by `rows` lines of glyphs:
//! `W` wall, `.` path, `T` item, `M` start. Wall rows may be padded with
//! spaces for alignment; those spaces are dropped.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::MazeError;
use crate::simulation::environment::{Content, Grid};

/// Parses a maze description.
///
/// Lines after the declared rows are ignored. A `X` glyph is accepted and
/// read as an open path.
///
/// # Errors
///
/// Returns an error for a missing or malformed header, too few rows, a row
/// of the wrong width, or an unknown glyph.
pub fn parse_maze(text: &str) -> Result<Grid, MazeError> {
    let mut lines = text.lines();
    let header = lines.next().ok_or(MazeError::Empty)?;
    let (rows, cols) = parse_dimensions(header)?;

    let mut grid_rows = Vec::with_capacity(rows);
    for (row, line) in lines.take(rows).enumerate() {
        let cleaned = clean_line(line);
        let width = cleaned.chars().count();
        if width != cols {
            return Err(MazeError::RowWidth {
                row,
                expected: cols,
                found: width,
            });
        }
        let cells = cleaned
            .chars()
            .enumerate()
            .map(|(col, glyph)| match Content::from_glyph(glyph) {
                Some(Content::Trail) => Ok(Content::Empty),
                Some(content) => Ok(content),
                None => Err(MazeError::UnknownGlyph { glyph, row, col }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        grid_rows.push(cells);
    }

    if grid_rows.len() < rows {
        return Err(MazeError::MissingRows {
            expected: rows,
            found: grid_rows.len(),
        });
    }

    debug!(rows, cols, "maze parsed");
    Grid::from_rows(grid_rows).ok_or_else(|| MazeError::InvalidDimensions(header.to_string()))
}

/// Reads and parses a maze file.
///
/// # Errors
///
/// Returns [`MazeError::Io`] if the file cannot be read, or any error from
/// [`parse_maze`].
pub fn load_maze(path: impl AsRef<Path>) -> Result<Grid, MazeError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| MazeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_maze(&text)
}

fn parse_dimensions(header: &str) -> Result<(usize, usize), MazeError> {
    let invalid = || MazeError::InvalidDimensions(header.trim().to_string());
    let mut parts = header.split_whitespace();
    let rows = parts
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .ok_or_else(invalid)?;
    let cols = parts
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .ok_or_else(invalid)?;
    if rows == 0 || cols == 0 || parts.next().is_some() {
        return Err(invalid());
    }
    Ok((rows, cols))
}

fn clean_line(line: &str) -> String {
    let trimmed = line.trim();
    if trimmed.contains('W') {
        trimmed.chars().filter(|c| *c != ' ').collect()
    } else {
        trimmed.to_string()
    }
}
