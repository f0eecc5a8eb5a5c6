/// Direction of a focus move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Pick the next focused position within the visible sequence.
///
/// `visible` holds option indices in document order; `current` is the
/// focused option index, which may be absent or no longer visible. Returns
/// the option index to focus, or `None` when nothing is visible.
pub fn next_focus(visible: &[usize], current: Option<usize>, direction: Direction) -> Option<usize> {
    let first = *visible.first()?;
    let last = *visible.last()?;

    // A cursor that is not part of the visible sequence counts as no cursor.
    let Some(pos) = current.and_then(|c| visible.iter().position(|&v| v == c)) else {
        return Some(first);
    };

    let target = match direction {
        Direction::Up if pos == 0 => last,
        Direction::Up => visible[pos - 1],
        Direction::Down if pos == visible.len() - 1 => first,
        Direction::Down => visible[pos + 1],
    };
    Some(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_visible_is_noop() {
        assert_eq!(next_focus(&[], None, Direction::Down), None);
        assert_eq!(next_focus(&[], Some(2), Direction::Up), None);
    }

    #[test]
    fn test_no_cursor_focuses_first_in_both_directions() {
        let visible = [1, 3, 4];
        assert_eq!(next_focus(&visible, None, Direction::Down), Some(1));
        assert_eq!(next_focus(&visible, None, Direction::Up), Some(1));
    }

    #[test]
    fn test_hidden_cursor_treated_as_absent() {
        let visible = [1, 3, 4];
        assert_eq!(next_focus(&visible, Some(2), Direction::Up), Some(1));
        assert_eq!(next_focus(&visible, Some(0), Direction::Down), Some(1));
    }

    #[test]
    fn test_steps_skip_hidden() {
        let visible = [1, 3, 4];
        assert_eq!(next_focus(&visible, Some(1), Direction::Down), Some(3));
        assert_eq!(next_focus(&visible, Some(4), Direction::Up), Some(3));
    }

    #[test]
    fn test_wrap_around() {
        let visible = [1, 3, 4];
        assert_eq!(next_focus(&visible, Some(1), Direction::Up), Some(4));
        assert_eq!(next_focus(&visible, Some(4), Direction::Down), Some(1));
    }

    #[test]
    fn test_single_visible_stays_put() {
        assert_eq!(next_focus(&[2], Some(2), Direction::Down), Some(2));
        assert_eq!(next_focus(&[2], Some(2), Direction::Up), Some(2));
    }
}
