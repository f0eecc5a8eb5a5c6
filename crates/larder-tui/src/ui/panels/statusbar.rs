use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{App, Mode};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(10), // Mode
            Constraint::Min(10),    // Message
            Constraint::Length(16), // Log count
        ])
        .split(area);

    render_mode_zone(frame, app, chunks[0]);
    render_message_zone(frame, app, chunks[1]);
    render_count_zone(frame, app, chunks[2]);
}

fn render_mode_zone(frame: &mut Frame, app: &App, area: Rect) {
    let (label, bg, fg) = if app.page.dialog_open() {
        (" PICK ", app.theme.green(), app.theme.bg())
    } else {
        match app.mode {
            Mode::Normal => (" NORMAL ", app.theme.frost_dark(), app.theme.fg_white()),
            Mode::Search => (" SEARCH ", app.theme.yellow(), app.theme.bg()),
        }
    };

    let content = Line::from(Span::styled(
        label,
        Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(
        Paragraph::new(content).alignment(Alignment::Center),
        area,
    );
}

fn render_message_zone(frame: &mut Frame, app: &App, area: Rect) {
    let content = Line::from(vec![
        Span::styled(
            " larder ",
            Style::default()
                .fg(app.theme.frost_ice())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("› ", Style::default().fg(app.theme.muted())),
        Span::styled(app.status_message.as_str(), Style::default().fg(app.theme.fg())),
    ]);

    frame.render_widget(
        Paragraph::new(content).style(Style::default().bg(app.theme.bg_secondary())),
        area,
    );
}

fn render_count_zone(frame: &mut Frame, app: &App, area: Rect) {
    let text = format!("{} logged ", app.entries.len());
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            text,
            Style::default().fg(app.theme.muted()),
        )))
        .style(Style::default().bg(app.theme.bg_secondary()))
        .alignment(Alignment::Right),
        area,
    );
}
