use super::*;
use crate::models::ConsumableType;

fn option(id: &str, name: &str) -> SelectOption {
    SelectOption::new(id, ConsumableType::Food, name, format!("/foods/{id}"))
}

fn groceries() -> SelectDialog {
    SelectDialog::new(vec![
        option("1", "Milk"),
        option("2", "Eggs"),
        option("3", "Bread"),
        option("4", "Apple Juice"),
        SelectOption::new("5", ConsumableType::Recipe, "Pancakes", "/recipes/5"),
    ])
}

fn open_groceries() -> (SelectDialog, SelectionTarget) {
    let mut dialog = groceries();
    dialog.open();
    (dialog, SelectionTarget::complete())
}

fn visible_names(dialog: &SelectDialog) -> Vec<&str> {
    dialog
        .visible_indices()
        .into_iter()
        .map(|i| dialog.options()[i].name.as_str())
        .collect()
}

fn marked(dialog: &SelectDialog) -> Vec<usize> {
    dialog
        .view()
        .rows
        .iter()
        .filter(|r| r.last_visible)
        .map(|r| r.index)
        .collect()
}

// ── Filter engine ──────────────────────────────────────────

#[test]
fn test_new_dialog_is_closed_and_unfiltered() {
    let dialog = groceries();
    assert!(!dialog.is_open());
    assert_eq!(dialog.visible_indices().len(), 5);
    assert_eq!(dialog.last_visible(), Some(4));
    assert_eq!(dialog.cursor(), None);
}

#[test]
fn test_filter_by_substring_ignoring_case() {
    let (mut dialog, _) = open_groceries();

    dialog.set_filter("MILK");
    assert_eq!(visible_names(&dialog), vec!["Milk"]);

    dialog.set_filter("e");
    assert_eq!(visible_names(&dialog), vec!["Eggs", "Bread", "Apple Juice", "Pancakes"]);

    dialog.set_filter("  juice ");
    assert_eq!(visible_names(&dialog), vec!["Apple Juice"]);
}

#[test]
fn test_empty_filter_shows_everything() {
    let (mut dialog, _) = open_groceries();
    dialog.set_filter("zzz");
    assert!(dialog.visible_indices().is_empty());

    dialog.set_filter("");
    assert_eq!(dialog.visible_indices(), vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_last_visible_marker() {
    let (mut dialog, _) = open_groceries();

    dialog.set_filter("e");
    assert_eq!(marked(&dialog), vec![4]);

    dialog.set_filter("eg");
    assert_eq!(marked(&dialog), vec![1]);

    dialog.set_filter("br");
    assert_eq!(marked(&dialog), vec![2]);

    dialog.set_filter("nothing matches");
    assert!(marked(&dialog).is_empty());
    assert_eq!(dialog.last_visible(), None);
}

#[test]
fn test_filter_is_independent_of_history() {
    let (mut dialog, _) = open_groceries();
    dialog.set_filter("a");
    let direct = dialog.visible_indices();

    dialog.set_filter("xyz");
    dialog.move_focus(Direction::Down);
    dialog.set_filter("a");
    assert_eq!(dialog.visible_indices(), direct);
}

#[test]
fn test_filter_hiding_focused_clears_cursor() {
    let (mut dialog, _) = open_groceries();
    dialog.move_focus(Direction::Down);
    assert_eq!(dialog.cursor(), Some(0));

    dialog.set_filter("bread");
    assert_eq!(dialog.cursor(), None);
    assert!(dialog.focused().is_none());

    dialog.move_focus(Direction::Up);
    assert_eq!(dialog.cursor(), Some(2));
}

#[test]
fn test_filter_keeps_focus_when_still_visible() {
    let (mut dialog, _) = open_groceries();
    dialog.move_focus(Direction::Down);
    dialog.move_focus(Direction::Down);
    assert_eq!(dialog.cursor(), Some(1));

    dialog.set_filter("egg");
    assert_eq!(dialog.cursor(), Some(1));
}

// ── Navigator ──────────────────────────────────────────────

#[test]
fn test_first_move_focuses_first_visible() {
    let (mut dialog, _) = open_groceries();
    dialog.set_filter("a");
    // Visible: Bread(2), Apple Juice(3), Pancakes(4)
    assert!(dialog.move_focus(Direction::Up));
    assert_eq!(dialog.cursor(), Some(2));
}

#[test]
fn test_wraps_over_visible_subset() {
    let (mut dialog, _) = open_groceries();
    dialog.set_filter("a");

    dialog.move_focus(Direction::Down);
    assert_eq!(dialog.cursor(), Some(2));
    dialog.move_focus(Direction::Up);
    assert_eq!(dialog.cursor(), Some(4));
    dialog.move_focus(Direction::Down);
    assert_eq!(dialog.cursor(), Some(2));
    dialog.move_focus(Direction::Down);
    assert_eq!(dialog.cursor(), Some(3));
}

#[test]
fn test_never_focuses_hidden() {
    let (mut dialog, _) = open_groceries();
    dialog.set_filter("e");
    for _ in 0..12 {
        dialog.move_focus(Direction::Down);
        let cursor = dialog.cursor().unwrap();
        assert!(dialog.is_visible(cursor));
    }
    for _ in 0..12 {
        dialog.move_focus(Direction::Up);
        let cursor = dialog.cursor().unwrap();
        assert!(dialog.is_visible(cursor));
    }
}

#[test]
fn test_navigation_with_nothing_visible() {
    let (mut dialog, mut target) = open_groceries();
    dialog.set_filter("xyz");

    let outcome = dialog.handle(DialogEvent::Key(DialogKey::ArrowDown), &mut target);
    assert!(outcome.default_prevented);
    assert!(!outcome.focus_changed);
    assert_eq!(dialog.cursor(), None);
}

#[test]
fn test_arrow_keys_prevent_default_even_without_change() {
    let (mut dialog, mut target) = open_groceries();
    dialog.set_filter("milk");
    dialog.move_focus(Direction::Down);

    let outcome = dialog.handle(DialogEvent::Key(DialogKey::ArrowUp), &mut target);
    assert!(outcome.default_prevented);
    assert!(!outcome.focus_changed);
    assert_eq!(dialog.cursor(), Some(0));
}

#[test]
fn test_pointer_focus_respects_visibility() {
    let (mut dialog, _) = open_groceries();
    dialog.set_filter("milk");
    assert!(!dialog.focus(1));
    assert!(dialog.focus(0));
    assert!(!dialog.focus(99));
}

// ── Commit ─────────────────────────────────────────────────

#[test]
fn test_enter_commits_single_match() {
    let (mut dialog, mut target) = open_groceries();
    dialog.handle(DialogEvent::Input("appl".to_string()), &mut target);

    let outcome = dialog.handle(DialogEvent::Key(DialogKey::Enter), &mut target);
    let committed = outcome.committed.unwrap();
    assert_eq!(committed.id, "4");
    assert!(outcome.closed);
    assert!(!dialog.is_open());

    assert_eq!(target.id_input.as_ref().unwrap().value, "4");
    assert_eq!(target.type_input.as_ref().unwrap().value, "food");
    assert_eq!(target.trigger_label.as_ref().unwrap().value, "Apple Juice");
    assert_eq!(target.open_link.as_ref().unwrap().value, "/foods/4");
}

#[test]
fn test_enter_with_several_or_none_does_nothing() {
    let (mut dialog, mut target) = open_groceries();

    dialog.set_filter("e");
    let outcome = dialog.handle(DialogEvent::Key(DialogKey::Enter), &mut target);
    assert!(outcome.committed.is_none());
    assert!(dialog.is_open());

    dialog.set_filter("qqq");
    assert!(dialog.confirm(&mut target).is_none());
    assert!(dialog.is_open());
    assert_eq!(target, SelectionTarget::complete());
}

#[test]
fn test_milk_scenario() {
    let (mut dialog, mut target) = open_groceries();
    dialog.set_filter("milk");
    assert_eq!(visible_names(&dialog), vec!["Milk"]);

    let selection = dialog.confirm(&mut target).unwrap();
    assert_eq!(selection.id, "1");
    assert_eq!(target.selected_id(), Some("1"));
}

#[test]
fn test_click_commits_regardless_of_visible_count() {
    let (mut dialog, mut target) = open_groceries();
    let outcome = dialog.handle(DialogEvent::Click(4), &mut target);

    let committed = outcome.committed.unwrap();
    assert_eq!(committed.ctype, ConsumableType::Recipe);
    assert_eq!(committed.url, "/recipes/5");
    assert_eq!(target.type_input.as_ref().unwrap().value, "recipe");
    assert!(!dialog.is_open());
}

#[test]
fn test_click_on_hidden_option_is_ignored() {
    let (mut dialog, mut target) = open_groceries();
    dialog.set_filter("milk");
    let outcome = dialog.handle(DialogEvent::Click(2), &mut target);
    assert!(outcome.committed.is_none());
    assert!(dialog.is_open());
}

#[test]
fn test_select_by_id() {
    let (mut dialog, mut target) = open_groceries();
    dialog.set_filter("milk");

    let selection = dialog.select("3", &mut target).unwrap();
    assert_eq!(selection.name, "Bread");
    assert!(!dialog.is_open());

    dialog.open();
    let missing = dialog.select("nope", &mut target);
    assert!(matches!(missing, Err(LarderError::OptionNotFound(id)) if id == "nope"));
    assert!(dialog.is_open());
    assert_eq!(target.selected_id(), Some("3"));
}

#[test]
fn test_commit_with_partial_target() {
    let (mut dialog, _) = open_groceries();
    let mut target = SelectionTarget {
        id_input: Some(Default::default()),
        ..SelectionTarget::default()
    };
    dialog.set_filter("eggs");
    assert!(dialog.confirm(&mut target).is_some());
    assert_eq!(target.selected_id(), Some("2"));
    assert!(target.trigger_label.is_none());
}

// ── Lifecycle ──────────────────────────────────────────────

#[test]
fn test_open_is_idempotent() {
    let (mut dialog, _) = open_groceries();
    dialog.move_focus(Direction::Down);
    dialog.open();
    assert!(dialog.is_open());
    assert_eq!(dialog.cursor(), Some(0));
}

#[test]
fn test_reopen_starts_without_cursor() {
    let (mut dialog, mut target) = open_groceries();
    dialog.set_filter("a");
    dialog.move_focus(Direction::Down);
    dialog.handle(DialogEvent::Close, &mut target);
    assert!(!dialog.is_open());

    dialog.open();
    assert_eq!(dialog.cursor(), None);
    // Filter text survives, as the input element would keep its value.
    assert_eq!(dialog.filter_text(), "a");
    assert_eq!(dialog.visible_indices(), vec![2, 3, 4]);
}

#[test]
fn test_closed_dialog_ignores_events() {
    let mut dialog = groceries();
    let mut target = SelectionTarget::complete();

    let outcome = dialog.handle(DialogEvent::Input("milk".to_string()), &mut target);
    assert_eq!(outcome, EventOutcome::ignored());
    assert_eq!(dialog.filter_text(), "");

    let outcome = dialog.handle(DialogEvent::Click(0), &mut target);
    assert!(outcome.committed.is_none());
    assert_eq!(target.selected_id(), None);
}

#[test]
fn test_other_keys_ignored() {
    let (mut dialog, mut target) = open_groceries();
    let outcome = dialog.handle(DialogEvent::Key(DialogKey::Other), &mut target);
    assert!(!outcome.default_prevented);
    assert!(dialog.is_open());
}

#[test]
fn test_empty_option_set() {
    let mut dialog = SelectDialog::new(Vec::new());
    let mut target = SelectionTarget::complete();
    dialog.open();

    dialog.handle(DialogEvent::Input("milk".to_string()), &mut target);
    dialog.handle(DialogEvent::Key(DialogKey::ArrowDown), &mut target);
    dialog.handle(DialogEvent::Key(DialogKey::ArrowUp), &mut target);
    let outcome = dialog.handle(DialogEvent::Key(DialogKey::Enter), &mut target);

    assert!(outcome.committed.is_none());
    assert!(dialog.is_open());
    assert_eq!(dialog.cursor(), None);
    assert_eq!(dialog.last_visible(), None);
    assert!(dialog.is_empty());

    dialog.handle(DialogEvent::Close, &mut target);
    assert!(!dialog.is_open());
}

#[test]
fn test_dialogs_are_isolated() {
    let mut first = groceries();
    let mut second = groceries();
    first.open();
    second.open();

    first.set_filter("milk");
    first.move_focus(Direction::Down);

    assert_eq!(second.visible_indices().len(), 5);
    assert_eq!(second.cursor(), None);
    assert!(second.is_open());
}

#[test]
fn test_view_reflects_model() {
    let (mut dialog, _) = open_groceries();
    dialog.set_filter("a");
    dialog.move_focus(Direction::Down);
    dialog.move_focus(Direction::Down);

    let view = dialog.view();
    assert!(view.open);
    assert_eq!(view.filter, "a");
    assert_eq!(view.visible_count(), 3);
    assert_eq!(view.focused_position(), Some(1));
    let focused: Vec<usize> = view.rows.iter().filter(|r| r.focused).map(|r| r.index).collect();
    assert_eq!(focused, vec![3]);
}
