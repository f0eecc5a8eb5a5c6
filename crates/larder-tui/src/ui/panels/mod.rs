pub(crate) mod searchline;
pub(crate) mod statusbar;

use larder_core::ConsumableType;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::app::App;

/// Add form on top (when shown), consumption log below.
pub(crate) fn render_body(frame: &mut Frame, app: &App, area: Rect) {
    if app.page.add_form_visible() {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(3)])
            .split(area);
        render_add_form(frame, app, chunks[0]);
        render_entries(frame, app, chunks[1]);
    } else {
        render_entries(frame, app, area);
    }
}

fn render_add_form(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(Span::styled(
            " Add consumption ",
            Style::default()
                .fg(app.theme.frost_ice())
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.frost_blue()));

    let label = Style::default().fg(app.theme.muted());
    let lines = match app.picked() {
        Some(selection) => {
            let kind_color = if selection.ctype == ConsumableType::Recipe {
                app.theme.recipe_color()
            } else {
                app.theme.green()
            };
            vec![
                Line::from(vec![
                    Span::styled("  consumable: ", label),
                    Span::styled(
                        selection.name.clone(),
                        Style::default()
                            .fg(app.theme.fg_bright())
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!("  {}", selection.ctype), Style::default().fg(kind_color)),
                ]),
                Line::from(vec![
                    Span::styled("  link:       ", label),
                    Span::styled(selection.url, Style::default().fg(app.theme.url_color())),
                ]),
                Line::from(Span::styled(
                    "  o: change  s: log it  a: close",
                    Style::default().fg(app.theme.muted()).add_modifier(Modifier::DIM),
                )),
            ]
        }
        None => vec![
            Line::from(vec![
                Span::styled("  consumable: ", label),
                Span::styled("Select...", Style::default().fg(app.theme.muted())),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "  o: pick  a: close",
                Style::default().fg(app.theme.muted()).add_modifier(Modifier::DIM),
            )),
        ],
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_entries(frame: &mut Frame, app: &App, area: Rect) {
    let visible = app.visible_entries();
    let block = Block::default()
        .title(format!(" Log ({}/{}) ", visible.len(), app.entries.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border()));

    if app.entries.is_empty() {
        let hint = Paragraph::new(Line::from(Span::styled(
            "  Nothing logged yet. Press a to add a consumption.",
            Style::default().fg(app.theme.muted()),
        )))
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|&i| {
            let entry = &app.entries[i];
            let marker = if entry.selection.ctype == ConsumableType::Recipe {
                Span::styled("◆ ", Style::default().fg(app.theme.recipe_color()))
            } else {
                Span::raw("  ")
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    entry.logged_at.format(" %H:%M ").to_string(),
                    Style::default().fg(app.theme.muted()),
                ),
                marker,
                Span::styled(entry.selection.name.clone(), Style::default().fg(app.theme.fg())),
                Span::styled(
                    format!("  {}", entry.selection.ctype),
                    Style::default().fg(app.theme.muted()),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(app.theme.selection_bg())
                .fg(app.theme.fg_bright()),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    if !visible.is_empty() {
        state.select(Some(app.selected_entry));
    }
    frame.render_stateful_widget(list, area, &mut state);
}
