//! Horizontal radio group; every option is visible at once.

use crossterm::event::KeyCode;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use super::{FOCUS, INK};
use crate::cycle_index::cycle_index;
use crate::style::StyleOption;
use crate::text_width::display_width;

const MARK_WIDTH: usize = 2;
const OPTION_GAP: usize = 3;

/// Column span `[start, end)` of each option relative to the row's left edge.
fn option_spans(options: &[StyleOption]) -> Vec<(usize, usize)> {
    let mut start = 0usize;
    options
        .iter()
        .map(|option| {
            let end = start + MARK_WIDTH + display_width(option.label);
            let span = (start, end);
            start = end + OPTION_GAP;
            span
        })
        .collect()
}

/// Index of the option under `position`, if the click hit one.
#[must_use]
pub fn radio_option_at(row: Rect, options: &[StyleOption], position: Position) -> Option<usize> {
    if !row.contains(position) {
        return None;
    }
    let column = usize::from(position.x - row.x);
    option_spans(options)
        .iter()
        .position(|(start, end)| (*start..*end).contains(&column))
}

/// Arrow keys move the selection immediately. Returns `true` when consumed.
pub fn handle_radio_key(
    code: KeyCode,
    options: &'static [StyleOption],
    selected: &StyleOption,
    on_change: impl FnOnce(&'static StyleOption),
) -> bool {
    let direction = match code {
        KeyCode::Left | KeyCode::Up => -1,
        KeyCode::Right | KeyCode::Down => 1,
        _ => return false,
    };
    let current = options
        .iter()
        .position(|option| option == selected)
        .unwrap_or(0);
    let next = cycle_index(current, options.len(), direction);
    if let Some(option) = options.get(next) {
        on_change(option);
    }
    true
}

/// Title row plus one row of options.
#[derive(Debug, Clone)]
pub struct RadioGroup<'a> {
    title: &'a str,
    options: &'a [StyleOption],
    selected: &'a StyleOption,
    focused: bool,
}

impl<'a> RadioGroup<'a> {
    #[must_use]
    pub fn new(title: &'a str, options: &'a [StyleOption], selected: &'a StyleOption) -> Self {
        Self {
            title,
            options,
            selected,
            focused: false,
        }
    }

    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for RadioGroup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 2 {
            return;
        }
        let title = Line::styled(
            self.title.to_uppercase(),
            Style::default().fg(INK).add_modifier(Modifier::BOLD),
        );
        buf.set_line(area.x, area.y, &title, area.width);

        let mut spans = Vec::new();
        for (idx, option) in self.options.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::raw(" ".repeat(OPTION_GAP)));
            }
            let checked = option == self.selected;
            let mark = if checked { "◉ " } else { "○ " };
            let mut style = Style::default().fg(INK);
            if checked {
                style = style.add_modifier(Modifier::BOLD);
                if self.focused {
                    style = style.bg(FOCUS);
                }
            }
            spans.push(Span::styled(mark, style));
            spans.push(Span::styled(option.label, style));
        }
        buf.set_line(area.x, area.y + 1, &Line::from(spans), area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::FONT_SIZES;
    use std::cell::Cell;

    #[test]
    fn option_spans_leave_gaps_between_options() {
        assert_eq!(
            option_spans(FONT_SIZES),
            vec![(0, 6), (9, 15), (18, 24)]
        );
    }

    #[test]
    fn click_hits_option_or_gap() {
        let row = Rect::new(4, 10, 30, 1);
        assert_eq!(radio_option_at(row, FONT_SIZES, Position::new(4, 10)), Some(0));
        assert_eq!(radio_option_at(row, FONT_SIZES, Position::new(14, 10)), Some(1));
        assert_eq!(radio_option_at(row, FONT_SIZES, Position::new(11, 10)), None);
        assert_eq!(radio_option_at(row, FONT_SIZES, Position::new(14, 11)), None);
    }

    #[test]
    fn right_arrow_picks_next_and_wraps() {
        let picked = Cell::new(None);
        assert!(handle_radio_key(KeyCode::Right, FONT_SIZES, &FONT_SIZES[2], |option| {
            picked.set(Some(option.value));
        }));
        assert_eq!(picked.get(), Some("18px"));
    }

    #[test]
    fn left_arrow_picks_previous() {
        let picked = Cell::new(None);
        handle_radio_key(KeyCode::Left, FONT_SIZES, &FONT_SIZES[1], |option| {
            picked.set(Some(option.value));
        });
        assert_eq!(picked.get(), Some("18px"));
    }

    #[test]
    fn other_keys_pass_through() {
        assert!(!handle_radio_key(KeyCode::Enter, FONT_SIZES, &FONT_SIZES[0], |_| {
            panic!("enter must not pick")
        }));
    }

    #[test]
    fn render_marks_the_selected_size() {
        let area = Rect::new(0, 0, 30, 2);
        let mut buf = Buffer::empty(area);
        RadioGroup::new("Размер шрифта", FONT_SIZES, &FONT_SIZES[1]).render(area, &mut buf);
        let row: String = (0..area.width)
            .map(|x| buf[(x, 1)].symbol().to_string())
            .collect();
        assert!(row.starts_with("○ 18px   ◉ 24px   ○ 38px"));
    }
}
