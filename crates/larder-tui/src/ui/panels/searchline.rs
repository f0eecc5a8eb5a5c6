use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{App, Mode};

/// Entry log search line; the cursor block shows only while typing.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(
            " / ",
            Style::default()
                .fg(app.theme.yellow())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(app.search_query(), Style::default().fg(app.theme.fg_bright())),
    ];
    if app.mode == Mode::Search {
        spans.push(Span::styled("█", Style::default().fg(app.theme.frost_ice())));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(app.theme.bg())),
        area,
    );
}
