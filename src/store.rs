//! Applied-style holder so the page has one source of truth for rendering.

use crate::style::{vars::StyleVars, ArticleStyle};

/// Read/replace access to the currently applied bundle.
///
/// Writes are whole-bundle replacements; there is no per-slot merge.
pub trait AppliedStyle {
    fn current(&self) -> &ArticleStyle;
    fn replace(&mut self, style: ArticleStyle);
}

/// Page-owned applied style with a revision counter that drives redraws.
#[derive(Debug, Clone)]
pub struct StyleStore {
    current: ArticleStyle,
    revision: u64,
}

impl StyleStore {
    #[must_use]
    pub fn new(initial: ArticleStyle) -> Self {
        Self {
            current: initial,
            revision: 0,
        }
    }

    /// Incremented on every [`AppliedStyle::replace`], even when the bundle is unchanged.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn style_vars(&self) -> StyleVars {
        StyleVars::from_style(&self.current)
    }
}

impl Default for StyleStore {
    fn default() -> Self {
        Self::new(ArticleStyle::default())
    }
}

impl AppliedStyle for StyleStore {
    fn current(&self) -> &ArticleStyle {
        &self.current
    }

    fn replace(&mut self, style: ArticleStyle) {
        tracing::debug!(
            revision = self.revision + 1,
            font_family = style.font_family.value,
            font_size = style.font_size.value,
            font_color = style.font_color.value,
            background_color = style.background_color.value,
            content_width = style.content_width.value,
            "applied style replaced"
        );
        self.current = style;
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{StyleSlot, DEFAULT_ARTICLE_STYLE, FONT_COLORS};

    #[test]
    fn store_starts_at_default_with_revision_zero() {
        let store = StyleStore::default();
        assert_eq!(*store.current(), DEFAULT_ARTICLE_STYLE);
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn replace_swaps_the_whole_bundle_and_bumps_revision() {
        let mut store = StyleStore::default();
        let next = DEFAULT_ARTICLE_STYLE.with(StyleSlot::FontColor, &FONT_COLORS[3]);
        store.replace(next);
        assert_eq!(*store.current(), next);
        assert_eq!(store.revision(), 1);

        store.replace(next);
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn style_vars_reflect_the_current_bundle() {
        let mut store = StyleStore::default();
        store.replace(DEFAULT_ARTICLE_STYLE.with(StyleSlot::FontColor, &FONT_COLORS[3]));
        assert_eq!(store.style_vars().get("--font-color"), Some("#feafe8"));
    }
}
