//! Settings side panel: a draft bundle the user edits, promoted to the page on confirm.
//!
//! The panel owns its draft and visibility through [`PanelState`]; the applied
//! bundle belongs to the page and is only written by [`SettingsPanel::confirm`]
//! and [`SettingsPanel::reset`]. While open, the panel holds a document-level
//! pointer subscription used for outside-click dismissal.

mod layout;
mod render;
mod state;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Position, Rect};

use crate::controls::{dropdown_area, handle_radio_key, radio_option_at, SelectState};
use crate::cycle_index::cycle_index;
use crate::pointer::{ListenerId, PointerHub, PointerSubscription, PointerTarget};
use crate::store::AppliedStyle;
use crate::style::{ArticleStyle, StyleOption, StyleSlot, DEFAULT_ARTICLE_STYLE};

pub use layout::{PanelLayout, PANEL_WIDTH};
pub use state::{PanelState, Visibility};

use layout::slot_index;

pub const PANEL_TITLE: &str = "Задайте параметры";
pub const RESET_LABEL: &str = "Сбросить";
pub const APPLY_LABEL: &str = "Применить";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    Field(StyleSlot),
    Reset,
    Apply,
}

const FOCUS_ORDER: [PanelFocus; 7] = [
    PanelFocus::Field(StyleSlot::FontFamily),
    PanelFocus::Field(StyleSlot::FontSize),
    PanelFocus::Field(StyleSlot::FontColor),
    PanelFocus::Field(StyleSlot::BackgroundColor),
    PanelFocus::Field(StyleSlot::ContentWidth),
    PanelFocus::Reset,
    PanelFocus::Apply,
];

/// Control used for a slot: font size is a radio group, the rest are dropdowns.
#[must_use]
pub fn uses_radio(slot: StyleSlot) -> bool {
    slot == StyleSlot::FontSize
}

#[derive(Debug)]
pub struct SettingsPanel {
    state: PanelState,
    hub: PointerHub,
    outside_click: Option<PointerSubscription>,
    focus: usize,
    selects: [SelectState; 5],
    screen: Rect,
    layout: PanelLayout,
}

impl SettingsPanel {
    /// Closed panel whose draft starts from the applied bundle.
    #[must_use]
    pub fn new(applied: &ArticleStyle, hub: PointerHub) -> Self {
        Self {
            state: PanelState::new(*applied),
            hub,
            outside_click: None,
            focus: 0,
            selects: [SelectState::default(); 5],
            screen: Rect::default(),
            layout: PanelLayout::default(),
        }
    }

    #[must_use]
    pub fn state(&self) -> PanelState {
        self.state
    }

    #[must_use]
    pub fn draft(&self) -> &ArticleStyle {
        &self.state.draft
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    #[must_use]
    pub fn focus(&self) -> PanelFocus {
        FOCUS_ORDER[self.focus % FOCUS_ORDER.len()]
    }

    #[must_use]
    pub fn layout(&self) -> &PanelLayout {
        &self.layout
    }

    /// Id of the live outside-click listener, present only while open.
    #[must_use]
    pub fn listener_id(&self) -> Option<ListenerId> {
        self.outside_click.as_ref().map(PointerSubscription::id)
    }

    /// Slot whose dropdown is currently expanded.
    #[must_use]
    pub fn expanded_slot(&self) -> Option<StyleSlot> {
        StyleSlot::ALL
            .into_iter()
            .find(|slot| self.selects[slot_index(*slot)].is_expanded())
    }

    pub fn set_viewport(&mut self, screen: Rect) {
        self.screen = screen;
        self.layout = PanelLayout::compute(screen, self.is_open());
    }

    pub fn toggle_visibility(&mut self) {
        self.transition(self.state.toggled());
    }

    pub fn request_close(&mut self) {
        self.transition(self.state.closed());
    }

    pub fn update_field(&mut self, slot: StyleSlot, option: &'static StyleOption) {
        tracing::debug!(slot = slot.key(), value = option.value, "draft field updated");
        self.transition(self.state.with_field(slot, option));
    }

    /// Promote the whole draft to the applied bundle, then close.
    pub fn confirm(&mut self, store: &mut impl AppliedStyle) {
        tracing::info!("settings confirmed");
        store.replace(self.state.draft);
        self.request_close();
    }

    /// Reset the draft and the applied bundle to defaults; stays open.
    pub fn reset(&mut self, store: &mut impl AppliedStyle) {
        tracing::info!("settings reset to defaults");
        self.transition(self.state.reset());
        store.replace(DEFAULT_ARTICLE_STYLE);
    }

    /// Body of the document-level pointer-down listener.
    pub fn handle_document_pointer_down(&mut self, position: Position) {
        if self.outside_click.is_none() || self.layout.boundary_contains(position) {
            return;
        }
        tracing::debug!(x = position.x, y = position.y, "pointer down outside settings panel");
        self.request_close();
    }

    /// Keyboard input while open. Returns `true` when the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent, store: &mut impl AppliedStyle) -> bool {
        if !self.is_open() {
            return false;
        }
        let focus = self.focus();
        if let PanelFocus::Field(slot) = focus {
            if self.field_handles_key(slot, key.code) {
                return true;
            }
        }

        match key.code {
            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
                self.move_focus(-1);
                true
            }
            KeyCode::Tab => {
                self.move_focus(1);
                true
            }
            KeyCode::BackTab => {
                self.move_focus(-1);
                true
            }
            KeyCode::Esc => {
                self.request_close();
                true
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                match (key.code, focus) {
                    (_, PanelFocus::Reset) => self.reset(store),
                    (_, PanelFocus::Apply) => self.confirm(store),
                    // Only Enter submits from a field; Space there is a no-op.
                    (KeyCode::Enter, PanelFocus::Field(_)) => self.confirm(store),
                    (_, PanelFocus::Field(_)) => {}
                }
                true
            }
            _ => false,
        }
    }

    /// Left-button press. Returns `true` when the press landed on the panel.
    pub fn handle_click(&mut self, position: Position, store: &mut impl AppliedStyle) -> bool {
        if !self.is_open() || !self.layout.panel.contains(position) {
            return false;
        }

        if let Some(slot) = self.expanded_slot() {
            let field = self.layout.field(slot);
            let dropdown = dropdown_area(field, slot.options().len(), self.layout.panel);
            let mut picked = None;
            let handled = self.selects[slot_index(slot)].handle_click(
                position,
                field,
                dropdown,
                slot.options(),
                |option| picked = Some(option),
            );
            if let Some(option) = picked {
                self.update_field(slot, option);
            }
            if handled {
                return true;
            }
        }

        for slot in StyleSlot::ALL {
            let field = self.layout.field(slot);
            if uses_radio(slot) {
                if let Some(idx) = radio_option_at(field, slot.options(), position) {
                    self.set_focus(PanelFocus::Field(slot));
                    self.update_field(slot, &slot.options()[idx]);
                    return true;
                }
            } else if field.contains(position) {
                self.set_focus(PanelFocus::Field(slot));
                let selected = self.state.draft.get(slot);
                self.selects[slot_index(slot)].toggle(slot.options(), selected);
                self.collapse_other_dropdowns(slot);
                return true;
            }
        }

        if self.layout.reset.contains(position) {
            self.set_focus(PanelFocus::Reset);
            self.reset(store);
        } else if self.layout.apply.contains(position) {
            self.set_focus(PanelFocus::Apply);
            self.confirm(store);
        }
        true
    }

    fn field_handles_key(&mut self, slot: StyleSlot, code: KeyCode) -> bool {
        let selected = self.state.draft.get(slot);
        let mut picked = None;
        let handled = if uses_radio(slot) {
            handle_radio_key(code, slot.options(), selected, |option| picked = Some(option))
        } else {
            let handled = self.selects[slot_index(slot)].handle_key(
                code,
                slot.options(),
                selected,
                |option| picked = Some(option),
            );
            self.collapse_other_dropdowns(slot);
            handled
        };
        if let Some(option) = picked {
            self.update_field(slot, option);
        }
        handled
    }

    fn move_focus(&mut self, direction: i32) {
        self.collapse_all_dropdowns();
        self.focus = cycle_index(self.focus, FOCUS_ORDER.len(), direction);
    }

    fn set_focus(&mut self, focus: PanelFocus) {
        if let Some(idx) = FOCUS_ORDER.iter().position(|candidate| *candidate == focus) {
            self.focus = idx;
        }
    }

    fn collapse_other_dropdowns(&mut self, keep: StyleSlot) {
        let keep = slot_index(keep);
        for (idx, select) in self.selects.iter_mut().enumerate() {
            if idx != keep {
                select.collapse();
            }
        }
    }

    fn collapse_all_dropdowns(&mut self) {
        for select in &mut self.selects {
            select.collapse();
        }
    }

    /// Single entry point for state changes: keeps the listener guard and
    /// layout in step with visibility.
    fn transition(&mut self, next: PanelState) {
        let was_open = self.state.is_open();
        self.state = next;
        if was_open == next.is_open() {
            return;
        }

        if next.is_open() {
            self.outside_click = Some(self.hub.subscribe(PointerTarget::SettingsPanel));
            tracing::info!("settings panel opened");
        } else {
            self.outside_click = None;
            self.collapse_all_dropdowns();
            tracing::info!("settings panel closed");
        }
        self.layout = PanelLayout::compute(self.screen, next.is_open());
    }
}
