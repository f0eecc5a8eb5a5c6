use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::app::App;

const PAGE_KEYS: &[(&str, &str)] = &[
    ("a", "show or hide the add form"),
    ("o / Enter", "pick a consumable"),
    ("s", "log the picked consumable"),
    ("d", "delete the highlighted entry"),
    ("j/k ↑/↓", "move in the log"),
    ("/", "search the log"),
    ("q / Esc", "quit"),
];

const PICKER_KEYS: &[(&str, &str)] = &[
    ("type", "filter options"),
    ("↑/↓ C-p/C-n", "move, wrapping at the ends"),
    ("Enter", "pick focused or only match"),
    ("C-u", "clear the filter"),
    ("Esc", "close without picking"),
];

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let overlay_area = crate::ui::centered_rect(60, 60, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .title(Span::styled(
            " HELP ",
            Style::default()
                .fg(app.theme.frost_ice())
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.frost_blue()))
        .style(Style::default().bg(app.theme.bg()));

    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(1), // Footer
        ])
        .split(inner);

    let heading = Style::default()
        .fg(app.theme.frost_ice())
        .add_modifier(Modifier::BOLD);
    let mut lines = vec![Line::from(Span::styled("PAGE", heading))];
    lines.extend(PAGE_KEYS.iter().map(|&(k, d)| key_line(app, k, d)));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("PICKER", heading)));
    lines.extend(PICKER_KEYS.iter().map(|&(k, d)| key_line(app, k, d)));

    frame.render_widget(Paragraph::new(lines), chunks[0]);
    frame.render_widget(
        Paragraph::new(Span::styled(
            "? to close",
            Style::default().fg(app.theme.muted()),
        ))
        .alignment(Alignment::Center),
        chunks[1],
    );
}

fn key_line(app: &App, key: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<14}"), Style::default().fg(app.theme.yellow())),
        Span::raw(desc),
    ])
}
