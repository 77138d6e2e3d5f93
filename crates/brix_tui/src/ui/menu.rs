//! Start card and the size and mode menus.

use brix_tictactoe::{BoardSize, Mode};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use strum::IntoEnumIterator;

use super::center_rect;
use crate::app::App;
use crate::theme::Palette;

pub(super) fn draw_start(frame: &mut Frame, area: Rect, palette: &Palette) {
    let text = vec![
        Line::from("X  O  X"),
        Line::from(""),
        Line::from("Press Enter to start"),
    ];
    let card = Paragraph::new(text)
        .style(Style::default().fg(palette.text))
        .alignment(Alignment::Center);
    frame.render_widget(card, center_rect(area, 30, 3));
}

pub(super) fn draw_sizes(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let labels: Vec<String> = BoardSize::all().map(BoardSize::label).collect();
    draw_list(frame, area, "Select Board Size", labels, app.menu_index(), palette);
}

pub(super) fn draw_modes(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let labels: Vec<String> = Mode::iter().map(|mode| mode.label().to_string()).collect();
    let title = format!("Select Mode ({})", app.selected_size().label());
    draw_list(frame, area, &title, labels, app.menu_index(), palette);
}

fn draw_list(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    labels: Vec<String>,
    selected: usize,
    palette: &Palette,
) {
    let height = labels.len() as u16 + 2;
    let items: Vec<ListItem> = labels.into_iter().map(ListItem::new).collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .border_style(Style::default().fg(palette.muted)),
        )
        .style(Style::default().fg(palette.text))
        .highlight_style(
            Style::default()
                .bg(palette.button)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(selected));
    frame.render_stateful_widget(list, center_rect(area, 32, height), &mut state);
}
