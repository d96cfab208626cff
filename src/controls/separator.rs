//! Horizontal rule between control groups.

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use super::MUTED;

#[derive(Debug, Clone, Copy, Default)]
pub struct Separator;

impl Widget for Separator {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let rule = "─".repeat(usize::from(area.width));
        buf.set_string(area.x, area.y, rule, Style::default().fg(MUTED));
    }
}
