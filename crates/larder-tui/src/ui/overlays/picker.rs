use larder_core::OptionRow;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};

use crate::app::App;

/// The consumable selection dialog.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(dialog) = app.page.dialog.as_ref() else {
        return;
    };
    let view = dialog.view();

    let [width, height] = app.config.dialog.overlay_size;
    let overlay_area = crate::ui::centered_rect(width.min(100), height.min(100), area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .title(Span::styled(
            " Select consumable ",
            Style::default()
                .fg(app.theme.green())
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
            Constraint::Length(1), // Search row
            Constraint::Length(1), // Separator
            Constraint::Min(3),    // Options
            Constraint::Length(1), // Help hints
        ])
        .split(inner);

    // 1. Search row
    let count = view.visible_count();
    let search_content = Line::from(vec![
        Span::styled(
            " / ",
            Style::default()
                .fg(app.theme.yellow())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(view.filter, Style::default().fg(app.theme.fg_bright())),
        Span::styled(
            " ",
            Style::default().bg(app.theme.frost_ice()).fg(app.theme.bg()),
        ),
        Span::raw(" ".repeat(
            (chunks[0].width as usize).saturating_sub(view.filter.chars().count() + 16),
        )),
        Span::styled(
            format!("{count} of {}", view.rows.len()),
            Style::default().fg(app.theme.frost_ice()),
        ),
    ]);
    frame.render_widget(Paragraph::new(search_content), chunks[0]);

    // 2. Separator
    frame.render_widget(
        Paragraph::new("─".repeat(chunks[1].width as usize))
            .style(Style::default().fg(app.theme.border())),
        chunks[1],
    );

    // 3. Options
    if count == 0 {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "  No matches",
                Style::default().fg(app.theme.muted()),
            ))),
            chunks[2],
        );
    } else {
        let width = chunks[2].width as usize;
        let items: Vec<ListItem> = view
            .visible_rows()
            .map(|row| option_item(app, row, width))
            .collect();
        let mut state = ListState::default();
        state.select(view.focused_position());
        frame.render_stateful_widget(List::new(items), chunks[2], &mut state);
    }

    // 4. Help hints
    let key = Style::default().fg(app.theme.yellow());
    let text = Style::default().fg(app.theme.muted());
    let hints = Line::from(vec![
        Span::styled(" ↑/↓ ", key),
        Span::styled("move", text),
        Span::styled("  Enter ", key),
        Span::styled("pick", text),
        Span::styled("  Esc ", key),
        Span::styled("close", text),
    ]);
    frame.render_widget(
        Paragraph::new(hints).alignment(Alignment::Center),
        chunks[3],
    );
}

/// One option plus, unless it is the last visible one, its bottom rule.
fn option_item<'a>(app: &App, row: &OptionRow<'a>, width: usize) -> ListItem<'a> {
    let option = row.option;
    let prefix = if row.focused { "▶ " } else { "  " };
    let star = if option.starred { "★ " } else { "  " };

    let mut name_style = Style::default().fg(if row.focused {
        app.theme.fg_bright()
    } else {
        app.theme.fg()
    });
    if row.focused {
        name_style = name_style.add_modifier(Modifier::BOLD);
    }

    let mut spans = vec![
        Span::styled(prefix, Style::default().fg(app.theme.frost_ice())),
        Span::styled(star, Style::default().fg(app.theme.star_color())),
        Span::styled(option.name.as_str(), name_style),
    ];
    if option.is_recipe() {
        spans.push(Span::styled(
            "  recipe",
            Style::default().fg(app.theme.recipe_color()),
        ));
    }

    let row_style = if row.focused {
        Style::default().bg(app.theme.selection_bg())
    } else {
        Style::default()
    };
    let mut lines = vec![Line::from(spans).style(row_style)];
    if !row.last_visible {
        lines.push(Line::from(Span::styled(
            "─".repeat(width),
            Style::default().fg(app.theme.border()),
        )));
    }
    ListItem::new(lines)
}
