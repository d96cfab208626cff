//! Panel geometry shared by rendering and mouse hit-testing.

use ratatui::layout::{Constraint, Layout, Position, Rect};

use crate::controls::{ARROW_BUTTON_HEIGHT, ARROW_BUTTON_WIDTH};
use crate::style::StyleSlot;

pub const PANEL_WIDTH: u16 = 44;
const PADDING_X: u16 = 3;
const PADDING_Y: u16 = 1;

/// Rows of one slot control: title plus field.
const CONTROL_ROWS: u16 = 2;
const BUTTON_ROWS: u16 = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelLayout {
    pub panel: Rect,
    pub arrow: Rect,
    pub heading: Rect,
    /// Control areas in [`StyleSlot::ALL`] order.
    pub controls: [Rect; 5],
    pub separator: Rect,
    pub reset: Rect,
    pub apply: Rect,
}

impl PanelLayout {
    /// Geometry for a screen. The arrow sits at the screen's top-left while
    /// closed and hugs the panel's right edge while open.
    #[must_use]
    pub fn compute(screen: Rect, open: bool) -> Self {
        let width = PANEL_WIDTH.min(screen.width.saturating_sub(ARROW_BUTTON_WIDTH));
        let panel = Rect::new(screen.x, screen.y, width, screen.height);
        let arrow_x = if open { panel.right() } else { screen.x };
        let arrow = Rect::new(
            arrow_x,
            screen.y,
            ARROW_BUTTON_WIDTH.min(screen.width.saturating_sub(arrow_x - screen.x)),
            ARROW_BUTTON_HEIGHT.min(screen.height),
        );

        let inner = Rect::new(
            panel.x + PADDING_X.min(panel.width / 2),
            panel.y + PADDING_Y.min(panel.height / 2),
            panel.width.saturating_sub(PADDING_X * 2),
            panel.height.saturating_sub(PADDING_Y * 2),
        );
        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(CONTROL_ROWS),
            Constraint::Length(1),
            Constraint::Length(CONTROL_ROWS),
            Constraint::Length(1),
            Constraint::Length(CONTROL_ROWS),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(CONTROL_ROWS),
            Constraint::Length(1),
            Constraint::Length(CONTROL_ROWS),
            Constraint::Fill(1),
            Constraint::Length(BUTTON_ROWS),
        ])
        .split(inner);
        let buttons = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(2),
            Constraint::Fill(1),
        ])
        .split(rows[14]);

        Self {
            panel,
            arrow,
            heading: rows[0],
            controls: [rows[2], rows[4], rows[6], rows[10], rows[12]],
            separator: rows[8],
            reset: buttons[0],
            apply: buttons[2],
        }
    }

    #[must_use]
    pub fn control(&self, slot: StyleSlot) -> Rect {
        self.controls[slot_index(slot)]
    }

    /// The interactive row of a slot control (below its title).
    #[must_use]
    pub fn field(&self, slot: StyleSlot) -> Rect {
        let area = self.control(slot);
        if area.height < CONTROL_ROWS {
            return Rect::new(area.x, area.y, area.width, 0);
        }
        Rect::new(area.x, area.y + 1, area.width, 1)
    }

    /// Outside-click boundary: the panel plus its arrow toggle.
    #[must_use]
    pub fn boundary_contains(&self, position: Position) -> bool {
        self.panel.contains(position) || self.arrow.contains(position)
    }
}

#[must_use]
pub(crate) fn slot_index(slot: StyleSlot) -> usize {
    StyleSlot::ALL
        .iter()
        .position(|candidate| *candidate == slot)
        .unwrap_or(0)
}
