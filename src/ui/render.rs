use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::simulation::agent::{Decision, Explorer};

/// Builds the one-line status shown above the maze.
#[must_use]
pub fn hud_line(explorer: &Explorer) -> String {
    let last = match explorer.last_decision() {
        None => "-".to_string(),
        Some(Decision::Move(dir)) => dir.to_string(),
        Some(Decision::Backtrack) => "Backtrack".to_string(),
        Some(Decision::Finished) => "Finished".to_string(),
    };
    let status = if explorer.is_done() {
        format!("Done: collected {} items | q to quit", explorer.item_count())
    } else {
        "Exploring | q to quit".to_string()
    };
    format!(
        "Pos: {} | Items: {} | Steps: {} | Visited: {} | Depth: {} | Last: {last} | {status}",
        explorer.position(),
        explorer.item_count(),
        explorer.steps(),
        explorer.diary().len(),
        explorer.history().len(),
    )
}

fn glyph_style(glyph: char) -> Style {
    match glyph {
        'W' => Style::default().fg(Color::DarkGray),
        'T' => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        'M' => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        'X' => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::White),
    }
}

pub fn draw_ui(f: &mut Frame, grid_lines: Vec<String>, hud_info: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // HUD
            Constraint::Min(0),    // Maze
        ])
        .split(f.area());

    let hud = Paragraph::new(Span::styled(
        hud_info,
        Style::default().add_modifier(Modifier::REVERSED),
    ));
    f.render_widget(hud, chunks[0]);

    let text: Vec<Line> = grid_lines
        .into_iter()
        .map(|row| {
            Line::from(
                row.chars()
                    .map(|glyph| Span::styled(glyph.to_string(), glyph_style(glyph)))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let field = Paragraph::new(text)
        .block(Block::default().borders(Borders::NONE))
        .style(Style::default().bg(Color::Black));

    f.render_widget(field, chunks[1]);
}
