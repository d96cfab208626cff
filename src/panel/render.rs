//! Panel rendering so the stored layout and the drawn controls never drift apart.

use ratatui::{
    buffer::Buffer,
    style::Style,
    widgets::{Block, Borders, Clear, Widget},
};

use super::layout::slot_index;
use super::{uses_radio, PanelFocus, SettingsPanel, APPLY_LABEL, PANEL_TITLE, RESET_LABEL};
use crate::controls::{
    dropdown_area, ArrowButton, Button, ButtonKind, Heading, RadioGroup, Select, SelectDropdown,
    Separator, INK, PANEL_BACKGROUND,
};
use crate::style::StyleSlot;

impl SettingsPanel {
    /// Draw the arrow toggle, and the panel body while open.
    pub fn render(&self, buf: &mut Buffer) {
        let area = buf.area;
        let layout = self.layout();
        if self.is_open() {
            let panel = layout.panel.intersection(area);
            Clear.render(panel, buf);
            Block::default()
                .borders(Borders::RIGHT)
                .border_style(Style::default().fg(INK))
                .style(Style::default().bg(PANEL_BACKGROUND))
                .render(panel, buf);

            Heading::new(PANEL_TITLE)
                .uppercase(true)
                .render(layout.heading.intersection(area), buf);
            for slot in StyleSlot::ALL {
                self.render_control(slot, buf);
            }
            Separator.render(layout.separator.intersection(area), buf);
            Button::new(RESET_LABEL, ButtonKind::Clear)
                .focused(self.focus() == PanelFocus::Reset)
                .render(layout.reset.intersection(area), buf);
            Button::new(APPLY_LABEL, ButtonKind::Apply)
                .focused(self.focus() == PanelFocus::Apply)
                .render(layout.apply.intersection(area), buf);

            // Dropdown last so it overlays the controls below it.
            if let Some(slot) = self.expanded_slot() {
                let field = layout.field(slot);
                let state = self.selects[slot_index(slot)];
                SelectDropdown::new(slot.options(), self.draft().get(slot), state.highlighted())
                    .swatches(slot.is_color())
                    .render(
                        dropdown_area(field, slot.options().len(), layout.panel).intersection(area),
                        buf,
                    );
            }
        }

        ArrowButton::new(self.is_open()).render(layout.arrow.intersection(area), buf);
    }

    fn render_control(&self, slot: StyleSlot, buf: &mut Buffer) {
        let area = self.layout().control(slot).intersection(buf.area);
        let focused = self.focus() == PanelFocus::Field(slot);
        let selected = self.draft().get(slot);
        if uses_radio(slot) {
            RadioGroup::new(slot.title(), slot.options(), selected)
                .focused(focused)
                .render(area, buf);
        } else {
            Select::new(slot.title(), selected)
                .swatches(slot.is_color())
                .focused(focused)
                .expanded(self.selects[slot_index(slot)].is_expanded())
                .render(area, buf);
        }
    }
}
