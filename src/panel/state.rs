//! Pure panel transitions: every operation returns the next state value.

use crate::style::{ArticleStyle, StyleOption, StyleSlot, DEFAULT_ARTICLE_STYLE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Closed,
    Open,
}

/// Visibility plus the panel-local draft bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelState {
    pub visibility: Visibility,
    pub draft: ArticleStyle,
}

impl PanelState {
    /// Closed panel whose draft mirrors the applied bundle.
    #[must_use]
    pub fn new(applied: ArticleStyle) -> Self {
        Self {
            visibility: Visibility::Closed,
            draft: applied,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.visibility == Visibility::Open
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        let visibility = match self.visibility {
            Visibility::Closed => Visibility::Open,
            Visibility::Open => Visibility::Closed,
        };
        Self { visibility, ..self }
    }

    #[must_use]
    pub fn closed(self) -> Self {
        Self {
            visibility: Visibility::Closed,
            ..self
        }
    }

    /// Replace one draft slot. `option` must belong to `slot`'s list.
    #[must_use]
    pub fn with_field(self, slot: StyleSlot, option: &'static StyleOption) -> Self {
        debug_assert!(
            slot.contains(option),
            "option {:?} is not registered for {slot:?}",
            option.value
        );
        if !slot.contains(option) {
            tracing::warn!(
                slot = slot.key(),
                value = option.value,
                "ignoring unregistered option"
            );
            return self;
        }
        Self {
            draft: self.draft.with(slot, option),
            ..self
        }
    }

    /// Draft back to defaults; visibility is kept.
    #[must_use]
    pub fn reset(self) -> Self {
        Self {
            draft: DEFAULT_ARTICLE_STYLE,
            ..self
        }
    }
}
