//! Article presentation options so the panel and the page agree on one schema.
//!
//! Every slot of an [`ArticleStyle`] points at a member of that slot's fixed
//! option list. Nothing outside the registry can be selected.

mod options;
pub mod vars;

use serde::Serialize;

pub use options::{
    BACKGROUND_COLORS, CONTENT_WIDTHS, DEFAULT_ARTICLE_STYLE, FONT_COLORS, FONT_FAMILIES,
    FONT_SIZES,
};

/// One selectable presentation value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StyleOption {
    /// Machine value written into the matching style variable.
    pub value: &'static str,
    /// Display text shown by the controls.
    pub label: &'static str,
    /// Optional rendering hint (class name) used when previewing the option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<&'static str>,
}

impl StyleOption {
    pub(crate) const fn new(value: &'static str, label: &'static str) -> Self {
        Self {
            value,
            label,
            hint: None,
        }
    }

    pub(crate) const fn hinted(value: &'static str, label: &'static str, hint: &'static str) -> Self {
        Self {
            value,
            label,
            hint: Some(hint),
        }
    }
}

/// The five presentation dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleSlot {
    FontFamily,
    FontSize,
    FontColor,
    BackgroundColor,
    ContentWidth,
}

impl StyleSlot {
    /// Slots in panel order.
    pub const ALL: [StyleSlot; 5] = [
        StyleSlot::FontFamily,
        StyleSlot::FontSize,
        StyleSlot::FontColor,
        StyleSlot::BackgroundColor,
        StyleSlot::ContentWidth,
    ];

    #[must_use]
    pub fn options(self) -> &'static [StyleOption] {
        match self {
            StyleSlot::FontFamily => FONT_FAMILIES,
            StyleSlot::FontSize => FONT_SIZES,
            StyleSlot::FontColor => FONT_COLORS,
            StyleSlot::BackgroundColor => BACKGROUND_COLORS,
            StyleSlot::ContentWidth => CONTENT_WIDTHS,
        }
    }

    /// Control title shown above the slot's selector.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            StyleSlot::FontFamily => "Шрифт",
            StyleSlot::FontSize => "Размер шрифта",
            StyleSlot::FontColor => "Цвет шрифта",
            StyleSlot::BackgroundColor => "Цвет фона",
            StyleSlot::ContentWidth => "Ширина контента",
        }
    }

    /// Name of the style variable the page reads for this slot.
    #[must_use]
    pub fn variable(self) -> &'static str {
        match self {
            StyleSlot::FontFamily => "--font-family",
            StyleSlot::FontSize => "--font-size",
            StyleSlot::FontColor => "--font-color",
            StyleSlot::BackgroundColor => "--bg-color",
            StyleSlot::ContentWidth => "--container-width",
        }
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            StyleSlot::FontFamily => "fontFamily",
            StyleSlot::FontSize => "fontSize",
            StyleSlot::FontColor => "fontColor",
            StyleSlot::BackgroundColor => "backgroundColor",
            StyleSlot::ContentWidth => "contentWidth",
        }
    }

    /// Color slots preview their options with a swatch.
    #[must_use]
    pub fn is_color(self) -> bool {
        matches!(self, StyleSlot::FontColor | StyleSlot::BackgroundColor)
    }

    #[must_use]
    pub fn contains(self, option: &StyleOption) -> bool {
        self.options().iter().any(|candidate| candidate == option)
    }

    /// Position of `option` in this slot's list.
    #[must_use]
    pub fn index_of(self, option: &StyleOption) -> Option<usize> {
        self.options().iter().position(|candidate| candidate == option)
    }
}

/// The article's full selection bundle: one option per slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleStyle {
    pub font_family: &'static StyleOption,
    pub font_size: &'static StyleOption,
    pub font_color: &'static StyleOption,
    pub background_color: &'static StyleOption,
    pub content_width: &'static StyleOption,
}

impl ArticleStyle {
    #[must_use]
    pub fn get(&self, slot: StyleSlot) -> &'static StyleOption {
        match slot {
            StyleSlot::FontFamily => self.font_family,
            StyleSlot::FontSize => self.font_size,
            StyleSlot::FontColor => self.font_color,
            StyleSlot::BackgroundColor => self.background_color,
            StyleSlot::ContentWidth => self.content_width,
        }
    }

    /// Copy of this bundle with exactly one slot replaced.
    #[must_use]
    pub fn with(mut self, slot: StyleSlot, option: &'static StyleOption) -> Self {
        match slot {
            StyleSlot::FontFamily => self.font_family = option,
            StyleSlot::FontSize => self.font_size = option,
            StyleSlot::FontColor => self.font_color = option,
            StyleSlot::BackgroundColor => self.background_color = option,
            StyleSlot::ContentWidth => self.content_width = option,
        }
        self
    }

    /// True when every slot holds a member of its own list.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        StyleSlot::ALL
            .iter()
            .all(|slot| slot.contains(self.get(*slot)))
    }
}

impl Default for ArticleStyle {
    fn default() -> Self {
        DEFAULT_ARTICLE_STYLE
    }
}
