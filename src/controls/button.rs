//! Form buttons and the arrow toggle that opens the panel.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::{FOCUS, INK, PANEL_BACKGROUND};

pub const ARROW_BUTTON_WIDTH: u16 = 5;
pub const ARROW_BUTTON_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// Filled: submits the form.
    Apply,
    /// Outlined: resets the form.
    Clear,
}

#[derive(Debug, Clone)]
pub struct Button<'a> {
    title: &'a str,
    kind: ButtonKind,
    focused: bool,
}

impl<'a> Button<'a> {
    #[must_use]
    pub fn new(title: &'a str, kind: ButtonKind) -> Self {
        Self {
            title,
            kind,
            focused: false,
        }
    }

    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (fg, bg) = match self.kind {
            ButtonKind::Apply => (Color::Rgb(0xff, 0xff, 0xff), INK),
            ButtonKind::Clear => (INK, PANEL_BACKGROUND),
        };
        let border = if self.focused { FOCUS } else { INK };
        let mut label = Style::default().fg(fg).bg(bg);
        if self.focused {
            label = label.add_modifier(Modifier::BOLD);
        }
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border).bg(bg))
            .style(Style::default().bg(bg));
        Paragraph::new(self.title.to_uppercase())
            .alignment(Alignment::Center)
            .style(label)
            .block(block)
            .render(area, buf);
    }
}

/// Toggle shown at the panel's edge: `»` opens, `«` closes.
#[derive(Debug, Clone, Copy)]
pub struct ArrowButton {
    open: bool,
}

impl ArrowButton {
    #[must_use]
    pub fn new(open: bool) -> Self {
        Self { open }
    }
}

impl Widget for ArrowButton {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let glyph = if self.open { "«" } else { "»" };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(INK).bg(FOCUS))
            .style(Style::default().bg(FOCUS));
        Paragraph::new(glyph)
            .alignment(Alignment::Center)
            .style(Style::default().fg(INK).add_modifier(Modifier::BOLD))
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (buf.area.left()..buf.area.right())
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn button_centers_uppercased_title_inside_border() {
        let area = Rect::new(0, 0, 16, 3);
        let mut buf = Buffer::empty(area);
        Button::new("Применить", ButtonKind::Apply).render(area, &mut buf);
        assert!(row(&buf, 1).contains("ПРИМЕНИТЬ"));
        assert!(row(&buf, 0).starts_with('╭'));
        assert_eq!(buf[(1, 1)].bg, INK);
    }

    #[test]
    fn clear_button_is_outlined() {
        let area = Rect::new(0, 0, 16, 3);
        let mut buf = Buffer::empty(area);
        Button::new("Сбросить", ButtonKind::Clear).render(area, &mut buf);
        assert_eq!(buf[(1, 1)].bg, PANEL_BACKGROUND);
        assert!(row(&buf, 1).contains("СБРОСИТЬ"));
    }

    #[test]
    fn arrow_points_toward_the_next_state() {
        let area = Rect::new(0, 0, ARROW_BUTTON_WIDTH, ARROW_BUTTON_HEIGHT);
        let mut closed = Buffer::empty(area);
        ArrowButton::new(false).render(area, &mut closed);
        assert!(row(&closed, 1).contains('»'));

        let mut open = Buffer::empty(area);
        ArrowButton::new(true).render(area, &mut open);
        assert!(row(&open, 1).contains('«'));
    }
}
