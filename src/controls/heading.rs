//! Single-line heading text.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::Widget,
};

use super::INK;

#[derive(Debug, Clone)]
pub struct Heading<'a> {
    text: &'a str,
    uppercase: bool,
}

impl<'a> Heading<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            uppercase: false,
        }
    }

    #[must_use]
    pub fn uppercase(mut self, uppercase: bool) -> Self {
        self.uppercase = uppercase;
        self
    }
}

impl Widget for Heading<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = if self.uppercase {
            self.text.to_uppercase()
        } else {
            self.text.to_string()
        };
        let line = Line::styled(text, Style::default().fg(INK).add_modifier(Modifier::BOLD));
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_uppercases_on_request() {
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        Heading::new("Задайте").uppercase(true).render(area, &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), "З");
        assert_eq!(buf[(1, 0)].symbol(), "А");
        assert!(buf[(0, 0)].modifier.contains(Modifier::BOLD));
    }
}
