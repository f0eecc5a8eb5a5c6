use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use super::centered_rect;
use crate::app::App;
use crate::popup::Popup;

pub(crate) fn render_popup(frame: &mut Frame, app: &App, popup: &Popup, area: Rect) {
    match popup {
        Popup::DeleteConfirm { name, prompt, .. } => {
            let popup_area = centered_rect(50, 25, area);
            frame.render_widget(Clear, popup_area);

            let block = Block::default()
                .title(" Delete ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.danger()))
                .style(Style::default().bg(app.theme.bg()));

            let lines = vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("  {prompt}"),
                    Style::default().fg(app.theme.fg_bright()),
                )),
                Line::from(Span::styled(
                    format!("  {name}"),
                    Style::default()
                        .fg(app.theme.danger())
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "  y: delete  n/Esc: keep",
                    Style::default().fg(app.theme.muted()).add_modifier(Modifier::DIM),
                )),
            ];

            frame.render_widget(
                Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
                popup_area,
            );
        }
    }
}
