//! Style variables so the page renders from named values, not from option structs.
//!
//! The page shell exposes the applied bundle as five variables (one per slot)
//! and the article surface resolves them into terminal styling.

use ratatui::style::{Color, Modifier};
use serde::Serialize;

use super::{ArticleStyle, StyleSlot};

/// Horizontal pixels represented by one terminal column.
pub const PX_PER_COLUMN: u16 = 12;

/// Fallback column count when a width variable does not parse.
const FALLBACK_COLUMNS: u16 = 80;

/// Named style variables derived from an applied bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleVars {
    entries: Vec<(&'static str, &'static str)>,
}

impl StyleVars {
    #[must_use]
    pub fn from_style(style: &ArticleStyle) -> Self {
        let entries = StyleSlot::ALL
            .iter()
            .map(|slot| (slot.variable(), style.get(*slot).value))
            .collect();
        Self { entries }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, value)| *value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    fn slot_value(&self, slot: StyleSlot) -> &'static str {
        self.get(slot.variable()).unwrap_or_default()
    }
}

/// Terminal rendering resolved from [`StyleVars`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleTheme {
    pub foreground: Color,
    pub background: Color,
    pub modifier: Modifier,
    /// Blank rows inserted after every wrapped line.
    pub line_gap: u16,
    /// Widest text column the content may occupy.
    pub max_columns: u16,
}

impl ArticleTheme {
    #[must_use]
    pub fn from_vars(vars: &StyleVars) -> Self {
        Self {
            foreground: color_or_reset(vars.slot_value(StyleSlot::FontColor)),
            background: color_or_reset(vars.slot_value(StyleSlot::BackgroundColor)),
            modifier: family_modifier(vars.slot_value(StyleSlot::FontFamily)),
            line_gap: line_gap_for_size(vars.slot_value(StyleSlot::FontSize)),
            max_columns: columns_for_width(vars.slot_value(StyleSlot::ContentWidth)),
        }
    }

    #[must_use]
    pub fn from_style(style: &ArticleStyle) -> Self {
        Self::from_vars(&StyleVars::from_style(style))
    }
}

/// Parse a `#rrggbb` value.
#[must_use]
pub fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Parse a whole-pixel value such as `24px`.
#[must_use]
pub fn parse_px(value: &str) -> Option<u16> {
    value.trim().strip_suffix("px")?.parse().ok()
}

fn color_or_reset(value: &str) -> Color {
    parse_hex_color(value).unwrap_or_else(|| {
        tracing::warn!(value, "unparsable color variable; using terminal default");
        Color::Reset
    })
}

/// Text modifier standing in for a font family on a character grid.
#[must_use]
pub fn family_modifier(family: &str) -> Modifier {
    match family {
        "Cormorant Garamond" | "Merriweather" => Modifier::ITALIC,
        "Days One" => Modifier::BOLD,
        _ => Modifier::empty(),
    }
}

#[must_use]
pub fn line_gap_for_size(size: &str) -> u16 {
    parse_px(size)
        .map(|px| (px / PX_PER_COLUMN).saturating_sub(1))
        .unwrap_or(0)
}

#[must_use]
pub fn columns_for_width(width: &str) -> u16 {
    parse_px(width)
        .map(|px| (px / PX_PER_COLUMN).max(1))
        .unwrap_or(FALLBACK_COLUMNS)
}
