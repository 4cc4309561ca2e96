use std::io::Write;

use maze_explorer::simulation::environment::{Content, Position};
use maze_explorer::simulation::loader::{load_maze, parse_maze};
use maze_explorer::MazeError;

#[test]
fn test_parse_simple_maze() {
    let grid = parse_maze("3 5\nWWWWW\nWM.TW\nWWWWW\n").unwrap();
    assert_eq!(grid.rows(), 3);
    assert_eq!(grid.cols(), 5);
    assert_eq!(grid.get(Position::new(1, 1)), Content::Agent);
    assert_eq!(grid.get(Position::new(1, 2)), Content::Empty);
    assert_eq!(grid.get(Position::new(1, 3)), Content::Item);
    assert_eq!(grid.count(Content::Wall), 12);
}

#[test]
fn test_spaced_wall_rows_and_crlf() {
    let text = "3 5\r\nW W W W W\r\nWM.TW\r\n W W W W W \r\n";
    let grid = parse_maze(text).unwrap();
    assert_eq!(grid.to_string(), "WWWWW\nWM.TW\nWWWWW\n");
}

#[test]
fn test_trailing_lines_are_ignored() {
    let grid = parse_maze("3 3\nWWW\nWMW\nWWW\nthis is a note\n").unwrap();
    assert_eq!(grid.rows(), 3);
}

#[test]
fn test_trail_glyph_reads_as_path() {
    let grid = parse_maze("3 4\nWWWW\nWMXW\nWWWW\n").unwrap();
    assert_eq!(grid.get(Position::new(1, 2)), Content::Empty);
}

#[test]
fn test_empty_input() {
    assert!(matches!(parse_maze(""), Err(MazeError::Empty)));
}

#[test]
fn test_bad_dimension_line() {
    assert!(matches!(
        parse_maze("three 3\nWWW\n"),
        Err(MazeError::InvalidDimensions(_))
    ));
}

#[test]
fn test_missing_rows() {
    assert!(matches!(
        parse_maze("4 3\nWWW\nWMW\nWWW\n"),
        Err(MazeError::MissingRows {
            expected: 4,
            found: 3
        })
    ));
}

#[test]
fn test_wrong_row_width() {
    assert!(matches!(
        parse_maze("3 3\nWWW\nWM.W\nWWW\n"),
        Err(MazeError::RowWidth {
            row: 1,
            expected: 3,
            found: 4
        })
    ));
}

#[test]
fn test_unknown_glyph() {
    assert!(matches!(
        parse_maze("3 3\nWWW\nWM?\nWWW\n"),
        Err(MazeError::UnknownGlyph {
            glyph: '?',
            row: 1,
            col: 2
        })
    ));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "3 4\nWWWW\nWMTW\nWWWW\n").unwrap();
    let grid = load_maze(file.path()).unwrap();
    assert_eq!(grid.count(Content::Item), 1);
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_maze.txt");
    let err = load_maze(&path).unwrap_err();
    assert!(matches!(err, MazeError::Io { .. }));
    assert!(err.to_string().contains("no_such_maze.txt"));
}

#[test]
fn test_bundled_cave_leaves_sealed_items() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/mazes/cave.txt");
    let grid = load_maze(path).unwrap();
    assert_eq!(grid.rows(), 9);
    assert_eq!(grid.cols(), 13);
    assert_eq!(grid.count(Content::Item), 4);

    let mut explorer = maze_explorer::simulation::agent::Explorer::new(grid).unwrap();
    assert_eq!(explorer.run_to_completion(), 2);
    assert_eq!(explorer.grid().count(Content::Item), 2);
}
