pub(crate) mod overlays;
pub(crate) mod panels;
pub(crate) mod popups;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::app::{App, Mode};

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    let size = frame.area();

    // Main vertical layout: body + status bar + search line
    let show_search = app.mode == Mode::Search || !app.search_query().is_empty();
    let main_constraints = if show_search {
        vec![
            Constraint::Min(3),    // body
            Constraint::Length(1), // status bar
            Constraint::Length(1), // search line
        ]
    } else {
        vec![
            Constraint::Min(3),    // body
            Constraint::Length(1), // status bar
        ]
    };

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(main_constraints)
        .split(size);

    panels::render_body(frame, app, main_layout[0]);
    panels::statusbar::render(frame, app, main_layout[1]);

    if show_search {
        panels::searchline::render(frame, app, main_layout[2]);
    }

    if app.help_visible() {
        overlays::help::render(frame, app, size);
    }

    if let Some(ref popup) = app.popup {
        popups::render_popup(frame, app, popup, size);
    }

    // The picker is modal and sits on top of everything
    if app.page.dialog_open() {
        overlays::picker::render(frame, app, size);
    }
}

/// Helper: create a centered rectangle with percentage-based dimensions.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 70, outer);
        assert_eq!(inner.width, 60);
        assert!((34..=36).contains(&inner.height));
        assert_eq!(inner.x, 20);
        assert!(inner.bottom() <= outer.bottom());
    }

    #[test]
    fn test_render_picker_overlay() {
        use chrono::Utc;
        use larder_core::{AppConfig, Catalog, Consumable, HostPage};
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;

        let config = AppConfig::default();
        let catalog = Catalog::new(
            vec![Consumable::food("1", "Milk"), Consumable::recipe("2", "Pancakes")],
            Utc::now(),
        )
        .unwrap();
        let mut app = App::new(config.clone(), HostPage::from_catalog(&catalog, &config.dialog));
        app.toggle_add_form();
        assert!(app.page.dialog_open());

        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("Select consumable"));
        assert!(screen.contains("Pancakes"));
        assert!(screen.contains("2 of 2"));
    }
}
