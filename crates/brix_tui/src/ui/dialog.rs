//! Result popup drawn over the finished board.

use ratatui::{
    Frame,
    layout::Alignment,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::center_rect;
use crate::app::App;
use crate::theme::Palette;

pub(super) fn draw_result(frame: &mut Frame, app: &App, palette: &Palette) {
    let area = center_rect(frame.area(), 34, 7);

    let text = vec![
        Line::from(""),
        Line::from(app.status_line()).style(Style::default().add_modifier(Modifier::BOLD)),
        Line::from(app.session().engine().score().to_string()),
        Line::from(""),
        Line::from("r: Reset Game   b: Change mode").style(Style::default().fg(palette.muted)),
    ];
    let popup = Paragraph::new(text)
        .style(Style::default().fg(palette.text).bg(palette.modal))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Game Over")
                .border_style(Style::default().fg(palette.title)),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}
