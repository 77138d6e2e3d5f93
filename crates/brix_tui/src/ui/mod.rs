//! Stateless rendering. Every frame is drawn from [`App`] alone.

mod board;
mod dialog;
mod menu;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Paragraph},
};
use tracing::instrument;

use crate::app::{App, Screen};
use crate::theme::Palette;

/// Draws the active screen.
#[instrument(skip_all, fields(screen = ?app.screen()))]
pub fn draw(frame: &mut Frame, app: &App) {
    let palette = app.theme().palette();
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(5),    // Body
            Constraint::Length(1), // Help
        ])
        .split(area);

    draw_title(frame, chunks[0], app, &palette);

    match app.screen() {
        Screen::Start => menu::draw_start(frame, chunks[1], &palette),
        Screen::BoardSize => menu::draw_sizes(frame, chunks[1], app, &palette),
        Screen::ModeSelect => menu::draw_modes(frame, chunks[1], app, &palette),
        Screen::Playing => board::draw(frame, chunks[1], app, &palette),
    }

    let help = Paragraph::new(app.help_line())
        .style(Style::default().fg(palette.muted))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[2]);

    if app.show_result() {
        dialog::draw_result(frame, app, &palette);
    }
}

fn draw_title(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let text = format!("Tic-Tac-Toe   {}", app.theme().toggle_icon());
    let title = Paragraph::new(text)
        .style(
            Style::default()
                .fg(palette.title)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

/// A `width` by `height` rectangle centred in `area`, clipped to fit.
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
