//! Board screen: grid, status, and score.

use brix_tictactoe::{Cell, GameEngine, Mark};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::center_rect;
use crate::app::App;
use crate::theme::Palette;

const CELL_WIDTH: usize = 5;

pub(super) fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let engine = app.session().engine();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Mode and status
            Constraint::Min(3),    // Grid
            Constraint::Length(2), // Score
        ])
        .split(area);

    let header = vec![
        Line::from(Span::styled(
            format!("{} on {}", engine.mode().label(), engine.size().label()),
            Style::default().fg(palette.muted),
        )),
        Line::from(Span::styled(
            app.status_line(),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(
        Paragraph::new(header).alignment(Alignment::Center),
        chunks[0],
    );

    let lines = grid_lines(engine, app.cursor(), palette);
    let side = engine.size().side();
    let width = (side * CELL_WIDTH + side - 1) as u16;
    let height = lines.len() as u16;
    frame.render_widget(
        Paragraph::new(lines),
        center_rect(chunks[1], width, height),
    );

    let score = Paragraph::new(engine.score().to_string())
        .style(Style::default().fg(palette.text))
        .alignment(Alignment::Center);
    frame.render_widget(score, chunks[2]);
}

/// One text line per board row, with rule lines between rows.
fn grid_lines(engine: &GameEngine, cursor: usize, palette: &Palette) -> Vec<Line<'static>> {
    let side = engine.size().side();
    let rule = vec!["─".repeat(CELL_WIDTH); side].join("┼");
    let separator = Style::default().fg(palette.muted);

    let mut lines = Vec::with_capacity(side * 2);
    for (row, cells) in engine.board().rows().enumerate() {
        if row > 0 {
            lines.push(Line::from(Span::styled(rule.clone(), separator)));
        }
        let mut spans = Vec::with_capacity(side * 2);
        for (column, cell) in cells.iter().enumerate() {
            if column > 0 {
                spans.push(Span::styled("│", separator));
            }
            let index = engine.board().index_of(row, column);
            spans.push(cell_span(*cell, index == cursor, engine.is_winning_cell(index), palette));
        }
        lines.push(Line::from(spans));
    }
    lines
}

fn cell_span(cell: Cell, selected: bool, winning: bool, palette: &Palette) -> Span<'static> {
    let (symbol, fg) = match cell {
        Cell::Empty => (" ", palette.muted),
        Cell::Occupied(Mark::X) => ("X", palette.x),
        Cell::Occupied(Mark::O) => ("O", palette.o),
    };
    let text = format!("{:^width$}", symbol, width = CELL_WIDTH);

    let mut style = Style::default().fg(fg).add_modifier(Modifier::BOLD);
    if winning {
        style = style.bg(Color::Green).fg(Color::Black);
    } else if selected {
        style = style.bg(palette.cell).add_modifier(Modifier::REVERSED);
    }
    Span::styled(text, style)
}
