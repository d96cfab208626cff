//! Dropdown selector over one option list.

use crossterm::event::KeyCode;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Widget},
};

use super::{FOCUS, HOVER_ROW, INK, MUTED, PANEL_BACKGROUND};
use crate::cycle_index::cycle_index;
use crate::style::vars::{family_modifier, parse_hex_color};
use crate::style::StyleOption;
use crate::text_width::{display_width, truncate_display};

const SWATCH: &str = "● ";

/// UI-local dropdown state. The selection itself lives with the owner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectState {
    expanded: bool,
    highlighted: usize,
}

impl SelectState {
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    #[must_use]
    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Expand with the highlight on the current selection.
    pub fn open(&mut self, options: &[StyleOption], selected: &StyleOption) {
        self.expanded = true;
        self.highlighted = options
            .iter()
            .position(|option| option == selected)
            .unwrap_or(0);
    }

    pub fn collapse(&mut self) {
        self.expanded = false;
    }

    pub fn toggle(&mut self, options: &[StyleOption], selected: &StyleOption) {
        if self.expanded {
            self.collapse();
        } else {
            self.open(options, selected);
        }
    }

    /// Returns `true` when the key was consumed.
    pub fn handle_key(
        &mut self,
        code: KeyCode,
        options: &'static [StyleOption],
        selected: &StyleOption,
        on_change: impl FnOnce(&'static StyleOption),
    ) -> bool {
        if !self.expanded {
            return match code {
                KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down => {
                    self.open(options, selected);
                    true
                }
                _ => false,
            };
        }

        match code {
            KeyCode::Up => {
                self.highlighted = cycle_index(self.highlighted, options.len(), -1);
                true
            }
            KeyCode::Down => {
                self.highlighted = cycle_index(self.highlighted, options.len(), 1);
                true
            }
            KeyCode::Home => {
                self.highlighted = 0;
                true
            }
            KeyCode::End => {
                self.highlighted = options.len().saturating_sub(1);
                true
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.collapse();
                if let Some(option) = options.get(self.highlighted) {
                    on_change(option);
                }
                true
            }
            KeyCode::Esc => {
                self.collapse();
                true
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.collapse();
                false
            }
            _ => true,
        }
    }

    /// Route a click while expanded. Returns `true` when the click landed on
    /// the field or the dropdown; any other click collapses the dropdown.
    pub fn handle_click(
        &mut self,
        position: Position,
        field: Rect,
        dropdown: Rect,
        options: &'static [StyleOption],
        on_change: impl FnOnce(&'static StyleOption),
    ) -> bool {
        if !self.expanded {
            return false;
        }
        if dropdown.contains(position) {
            let first = first_visible(self.highlighted, dropdown.height);
            let row = usize::from(position.y - dropdown.y);
            self.collapse();
            if let Some(option) = options.get(first + row) {
                on_change(option);
            }
            return true;
        }
        self.collapse();
        field.contains(position)
    }
}

/// Where the expanded list goes: below the field, or above it when the
/// space below is too short and there is more room above.
#[must_use]
pub fn dropdown_area(field: Rect, len: usize, bounds: Rect) -> Rect {
    let wanted = u16::try_from(len).unwrap_or(u16::MAX);
    let below_top = field.bottom();
    let below = bounds.bottom().saturating_sub(below_top);
    let above = field.y.saturating_sub(bounds.y);
    if below >= wanted || below >= above {
        Rect::new(field.x, below_top, field.width, wanted.min(below))
    } else {
        let height = wanted.min(above);
        Rect::new(field.x, field.y - height, field.width, height)
    }
}

fn first_visible(highlighted: usize, height: u16) -> usize {
    let height = usize::from(height.max(1));
    highlighted.saturating_sub(height - 1)
}

fn option_style(option: &StyleOption, swatches: bool) -> Style {
    let base = Style::default().fg(INK);
    if swatches {
        return base;
    }
    base.add_modifier(family_modifier(option.value))
}

fn option_spans(option: &StyleOption, swatches: bool, width: usize) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut budget = width;
    if swatches {
        let color = parse_hex_color(option.value).unwrap_or(Color::Reset);
        spans.push(Span::styled(SWATCH, Style::default().fg(color)));
        budget = budget.saturating_sub(display_width(SWATCH));
    }
    spans.push(Span::styled(
        truncate_display(option.label, budget),
        option_style(option, swatches),
    ));
    spans
}

/// Title row plus the collapsed field. Needs two rows.
#[derive(Debug, Clone)]
pub struct Select<'a> {
    title: &'a str,
    selected: &'a StyleOption,
    swatches: bool,
    focused: bool,
    expanded: bool,
}

impl<'a> Select<'a> {
    #[must_use]
    pub fn new(title: &'a str, selected: &'a StyleOption) -> Self {
        Self {
            title,
            selected,
            swatches: false,
            focused: false,
            expanded: false,
        }
    }

    #[must_use]
    pub fn swatches(mut self, swatches: bool) -> Self {
        self.swatches = swatches;
        self
    }

    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    #[must_use]
    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }
}

impl Widget for Select<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 2 || area.width < 4 {
            return;
        }
        let title = Line::styled(
            self.title.to_uppercase(),
            Style::default().fg(INK).add_modifier(Modifier::BOLD),
        );
        buf.set_line(area.x, area.y, &title, area.width);

        let field = Rect::new(area.x, area.y + 1, area.width, 1);
        let field_bg = if self.focused { FOCUS } else { PANEL_BACKGROUND };
        buf.set_style(field, Style::default().bg(field_bg));
        let arrow = if self.expanded { "▴" } else { "▾" };
        let label_width = usize::from(field.width).saturating_sub(4);
        let mut spans = vec![Span::styled("▏", Style::default().fg(MUTED))];
        spans.extend(option_spans(self.selected, self.swatches, label_width));
        buf.set_line(field.x, field.y, &Line::from(spans), field.width);
        buf.set_string(
            field.right().saturating_sub(2),
            field.y,
            arrow,
            Style::default().fg(INK).bg(field_bg),
        );
    }
}

/// Expanded option list drawn on top of whatever lies below the field.
#[derive(Debug, Clone)]
pub struct SelectDropdown<'a> {
    options: &'a [StyleOption],
    selected: &'a StyleOption,
    highlighted: usize,
    swatches: bool,
}

impl<'a> SelectDropdown<'a> {
    #[must_use]
    pub fn new(options: &'a [StyleOption], selected: &'a StyleOption, highlighted: usize) -> Self {
        Self {
            options,
            selected,
            highlighted,
            swatches: false,
        }
    }

    #[must_use]
    pub fn swatches(mut self, swatches: bool) -> Self {
        self.swatches = swatches;
        self
    }
}

impl Widget for SelectDropdown<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        Clear.render(area, buf);
        buf.set_style(area, Style::default().bg(PANEL_BACKGROUND));

        let first = first_visible(self.highlighted, area.height);
        let width = usize::from(area.width).saturating_sub(3);
        for (row, (idx, option)) in self
            .options
            .iter()
            .enumerate()
            .skip(first)
            .take(usize::from(area.height))
            .enumerate()
        {
            let y = area.y + u16::try_from(row).unwrap_or(0);
            let row_area = Rect::new(area.x, y, area.width, 1);
            if idx == self.highlighted {
                buf.set_style(row_area, Style::default().bg(HOVER_ROW));
            }
            let marker = if option == self.selected { "✓" } else { " " };
            let mut spans = vec![
                Span::styled(marker, Style::default().fg(INK)),
                Span::raw(" "),
            ];
            spans.extend(option_spans(option, self.swatches, width));
            buf.set_line(area.x, y, &Line::from(spans), area.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{BACKGROUND_COLORS, FONT_FAMILIES};
    use std::cell::Cell;

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn enter_opens_with_highlight_on_selection() {
        let mut state = SelectState::default();
        let consumed = state.handle_key(
            KeyCode::Enter,
            BACKGROUND_COLORS,
            &BACKGROUND_COLORS[2],
            |_| panic!("opening must not pick"),
        );
        assert!(consumed);
        assert!(state.is_expanded());
        assert_eq!(state.highlighted(), 2);
    }

    #[test]
    fn collapsed_select_ignores_unrelated_keys() {
        let mut state = SelectState::default();
        assert!(!state.handle_key(
            KeyCode::Left,
            FONT_FAMILIES,
            &FONT_FAMILIES[0],
            |_| {}
        ));
        assert!(!state.is_expanded());
    }

    #[test]
    fn arrows_wrap_and_enter_picks_highlighted_option() {
        let mut state = SelectState::default();
        state.open(FONT_FAMILIES, &FONT_FAMILIES[0]);
        state.handle_key(KeyCode::Up, FONT_FAMILIES, &FONT_FAMILIES[0], |_| {});
        assert_eq!(state.highlighted(), FONT_FAMILIES.len() - 1);

        let picked = Cell::new(None);
        state.handle_key(KeyCode::Enter, FONT_FAMILIES, &FONT_FAMILIES[0], |option| {
            picked.set(Some(option.value));
        });
        assert_eq!(picked.get(), Some("Merriweather"));
        assert!(!state.is_expanded());
    }

    #[test]
    fn escape_collapses_without_picking() {
        let mut state = SelectState::default();
        state.open(FONT_FAMILIES, &FONT_FAMILIES[0]);
        state.handle_key(KeyCode::Esc, FONT_FAMILIES, &FONT_FAMILIES[0], |_| {
            panic!("escape must not pick")
        });
        assert!(!state.is_expanded());
    }

    #[test]
    fn tab_collapses_and_passes_through() {
        let mut state = SelectState::default();
        state.open(FONT_FAMILIES, &FONT_FAMILIES[0]);
        assert!(!state.handle_key(KeyCode::Tab, FONT_FAMILIES, &FONT_FAMILIES[0], |_| {}));
        assert!(!state.is_expanded());
    }

    #[test]
    fn dropdown_opens_below_when_there_is_room() {
        let field = Rect::new(2, 3, 20, 1);
        let bounds = Rect::new(0, 0, 40, 30);
        assert_eq!(dropdown_area(field, 9, bounds), Rect::new(2, 4, 20, 9));
    }

    #[test]
    fn dropdown_flips_above_when_below_is_short() {
        let field = Rect::new(2, 25, 20, 1);
        let bounds = Rect::new(0, 0, 40, 30);
        assert_eq!(dropdown_area(field, 9, bounds), Rect::new(2, 16, 20, 9));
    }

    #[test]
    fn click_on_dropdown_row_picks_that_option() {
        let mut state = SelectState::default();
        state.open(BACKGROUND_COLORS, &BACKGROUND_COLORS[0]);
        let field = Rect::new(0, 1, 20, 1);
        let dropdown = dropdown_area(field, BACKGROUND_COLORS.len(), Rect::new(0, 0, 20, 20));
        let picked = Cell::new(None);
        let handled = state.handle_click(
            Position::new(3, dropdown.y + 2),
            field,
            dropdown,
            BACKGROUND_COLORS,
            |option| picked.set(Some(option.label)),
        );
        assert!(handled);
        assert_eq!(picked.get(), Some("Тёмный"));
        assert!(!state.is_expanded());
    }

    #[test]
    fn click_elsewhere_collapses_and_is_not_consumed() {
        let mut state = SelectState::default();
        state.open(BACKGROUND_COLORS, &BACKGROUND_COLORS[0]);
        let field = Rect::new(0, 1, 20, 1);
        let dropdown = dropdown_area(field, BACKGROUND_COLORS.len(), Rect::new(0, 0, 20, 20));
        let handled = state.handle_click(
            Position::new(30, 0),
            field,
            dropdown,
            BACKGROUND_COLORS,
            |_| panic!("outside click must not pick"),
        );
        assert!(!handled);
        assert!(!state.is_expanded());
    }

    #[test]
    fn select_renders_title_and_selected_label() {
        let area = Rect::new(0, 0, 24, 2);
        let mut buf = Buffer::empty(area);
        Select::new("Цвет фона", &BACKGROUND_COLORS[2])
            .swatches(true)
            .render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("ЦВЕТ ФОНА"));
        assert!(text.contains("Тёмный"));
        assert!(text.contains('▾'));
    }

    #[test]
    fn dropdown_marks_selected_option() {
        let area = Rect::new(0, 0, 24, 5);
        let mut buf = Buffer::empty(area);
        SelectDropdown::new(FONT_FAMILIES, &FONT_FAMILIES[1], 1).render(area, &mut buf);
        let text = buffer_text(&buf);
        let ubuntu_row = text
            .lines()
            .find(|line| line.contains("Ubuntu"))
            .expect("ubuntu row");
        assert!(ubuntu_row.starts_with('✓'));
    }
}
