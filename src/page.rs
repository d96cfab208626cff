//! Page shell: owns the applied style and the pointer hub, routes terminal
//! events, and renders the article with the applied style variables.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Modifier, Style},
    Frame,
};

use crate::article::{Article, ArticleRow};
use crate::panel::SettingsPanel;
use crate::pointer::{PointerHub, PointerTarget};
use crate::store::{AppliedStyle, StyleStore};
use crate::style::{vars::ArticleTheme, ArticleStyle};

/// Columns kept free on each side of the article.
const SIDE_MARGIN: u16 = 2;
const WHEEL_STEP: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageFlow {
    Continue,
    Quit,
}

#[derive(Debug)]
pub struct Page {
    store: StyleStore,
    hub: PointerHub,
    panel: SettingsPanel,
    article: Article,
    scroll: usize,
    viewport: Rect,
    rendered_revision: Option<u64>,
    dirty: bool,
}

impl Page {
    #[must_use]
    pub fn new(article: Article, initial: ArticleStyle) -> Self {
        let store = StyleStore::new(initial);
        let hub = PointerHub::new();
        let panel = SettingsPanel::new(store.current(), hub.clone());
        Self {
            store,
            hub,
            panel,
            article,
            scroll: 0,
            viewport: Rect::default(),
            rendered_revision: None,
            dirty: true,
        }
    }

    #[must_use]
    pub fn store(&self) -> &StyleStore {
        &self.store
    }

    #[must_use]
    pub fn panel(&self) -> &SettingsPanel {
        &self.panel
    }

    #[must_use]
    pub fn hub(&self) -> &PointerHub {
        &self.hub
    }

    #[must_use]
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn set_viewport(&mut self, area: Rect) {
        if area == self.viewport {
            return;
        }
        self.viewport = area;
        self.panel.set_viewport(area);
        self.scroll = self.scroll.min(self.max_scroll());
        self.dirty = true;
    }

    /// True when the applied style changed or input touched the page since the last render.
    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        self.dirty || self.rendered_revision != Some(self.store.revision())
    }

    pub fn handle_event(&mut self, event: Event) -> PageFlow {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => return self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(width, height) => self.set_viewport(Rect::new(0, 0, width, height)),
            _ => {}
        }
        PageFlow::Continue
    }

    fn handle_key(&mut self, key: KeyEvent) -> PageFlow {
        self.dirty = true;
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return PageFlow::Quit;
        }
        if self.panel.handle_key(key, &mut self.store) {
            return PageFlow::Continue;
        }

        let page_rows = usize::from(self.viewport.height.saturating_sub(2)).max(1);
        match key.code {
            KeyCode::Char('q') => return PageFlow::Quit,
            KeyCode::Char('s') | KeyCode::F(2) => self.panel.toggle_visibility(),
            KeyCode::Up => self.scroll_by(-1),
            KeyCode::Down => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-(page_rows as isize)),
            KeyCode::PageDown => self.scroll_by(page_rows as isize),
            KeyCode::Home => self.scroll = 0,
            KeyCode::End => self.scroll = self.max_scroll(),
            _ => self.dirty = false,
        }
        PageFlow::Continue
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let position = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.pointer_down(position),
            MouseEventKind::ScrollUp => self.scroll_by(-(WHEEL_STEP as isize)),
            MouseEventKind::ScrollDown => self.scroll_by(WHEEL_STEP as isize),
            _ => return,
        }
        self.dirty = true;
    }

    /// Document listeners see the press first, then the element under it.
    fn pointer_down(&mut self, position: Position) {
        for listener in self.hub.listeners() {
            match listener.target {
                PointerTarget::SettingsPanel => self.panel.handle_document_pointer_down(position),
            }
        }
        if self.panel.layout().arrow.contains(position) {
            self.panel.toggle_visibility();
        } else {
            self.panel.handle_click(position, &mut self.store);
        }
    }

    fn scroll_by(&mut self, delta: isize) {
        self.scroll = self
            .scroll
            .saturating_add_signed(delta)
            .min(self.max_scroll());
    }

    fn theme(&self) -> ArticleTheme {
        ArticleTheme::from_vars(&self.store.style_vars())
    }

    fn article_column(&self, area: Rect, theme: ArticleTheme) -> Rect {
        let width = theme
            .max_columns
            .min(area.width.saturating_sub(SIDE_MARGIN * 2))
            .max(1)
            .min(area.width);
        Rect::new(
            area.x + (area.width - width) / 2,
            area.y + 1u16.min(area.height),
            width,
            area.height.saturating_sub(2),
        )
    }

    fn article_rows(&self, column: Rect, theme: ArticleTheme) -> Vec<ArticleRow> {
        self.article
            .rows(usize::from(column.width.max(1)), theme.line_gap)
    }

    fn max_scroll(&self) -> usize {
        let theme = self.theme();
        let column = self.article_column(self.viewport, theme);
        self.article_rows(column, theme)
            .len()
            .saturating_sub(usize::from(column.height))
    }

    pub fn draw(&mut self, frame: &mut Frame<'_>) {
        let area = frame.area();
        self.render(area, frame.buffer_mut());
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer) {
        self.set_viewport(area);
        let theme = self.theme();
        let base = Style::default().fg(theme.foreground).bg(theme.background);
        buf.set_style(area, base);

        let column = self.article_column(area, theme);
        let rows = self.article_rows(column, theme);
        self.scroll = self
            .scroll
            .min(rows.len().saturating_sub(usize::from(column.height)));
        let width = usize::from(column.width);
        for (offset, row) in rows
            .iter()
            .skip(self.scroll)
            .take(usize::from(column.height))
            .enumerate()
        {
            let y = column.y + offset as u16;
            match row {
                ArticleRow::Title(text) => {
                    let style = base.add_modifier(theme.modifier | Modifier::BOLD);
                    buf.set_stringn(column.x, y, text, width, style);
                }
                ArticleRow::Text(text) => {
                    buf.set_stringn(column.x, y, text, width, base.add_modifier(theme.modifier));
                }
                ArticleRow::Blank => {}
            }
        }

        self.panel.render(buf);
        self.rendered_revision = Some(self.store.revision());
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{BACKGROUND_COLORS, DEFAULT_ARTICLE_STYLE};
    use crossterm::event::KeyEventState;
    use ratatui::{backend::TestBackend, style::Color, Terminal};

    const SCREEN: Rect = Rect::new(0, 0, 120, 40);

    fn page() -> Page {
        let mut page = Page::new(Article::builtin(), DEFAULT_ARTICLE_STYLE);
        page.set_viewport(SCREEN);
        page
    }

    fn press(page: &mut Page, code: KeyCode) -> PageFlow {
        page.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn click(page: &mut Page, column: u16, row: u16) {
        page.handle_event(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }));
    }

    fn draw(page: &mut Page) -> Buffer {
        let mut terminal =
            Terminal::new(TestBackend::new(SCREEN.width, SCREEN.height)).expect("test terminal");
        terminal.draw(|frame| page.draw(frame)).expect("draw");
        terminal.backend().buffer().clone()
    }

    #[test]
    fn quit_keys_end_the_loop() {
        let mut page = page();
        assert_eq!(press(&mut page, KeyCode::Char('q')), PageFlow::Quit);
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(page.handle_event(ctrl_c), PageFlow::Quit);
    }

    #[test]
    fn toggle_keys_open_and_close_the_panel() {
        let mut page = page();
        press(&mut page, KeyCode::Char('s'));
        assert!(page.panel().is_open());
        assert_eq!(page.hub().listener_count(), 1);
        press(&mut page, KeyCode::F(2));
        assert!(!page.panel().is_open());
        assert_eq!(page.hub().listener_count(), 0);
    }

    #[test]
    fn key_releases_are_ignored() {
        let mut page = page();
        let release = KeyEvent {
            code: KeyCode::Char('s'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        page.handle_event(Event::Key(release));
        assert!(!page.panel().is_open());
    }

    #[test]
    fn arrow_click_toggles_without_outside_close_interference() {
        let mut page = page();
        click(&mut page, 1, 1);
        assert!(page.panel().is_open());

        let arrow = page.panel().layout().arrow;
        click(&mut page, arrow.x + 1, arrow.y + 1);
        assert!(!page.panel().is_open());
        assert_eq!(page.hub().listener_count(), 0);
    }

    #[test]
    fn outside_click_routes_through_the_hub() {
        let mut page = page();
        press(&mut page, KeyCode::Char('s'));
        click(&mut page, 100, 30);
        assert!(!page.panel().is_open());
        assert_eq!(page.hub().listener_count(), 0);
        assert_eq!(page.store().revision(), 0);
    }

    #[test]
    fn keyboard_confirm_repaints_the_page_background() {
        let mut page = page();
        assert_eq!(draw(&mut page)[(100, 30)].bg, Color::Rgb(0xff, 0xff, 0xff));

        press(&mut page, KeyCode::Char('s'));
        for _ in 0..3 {
            press(&mut page, KeyCode::Tab);
        }
        press(&mut page, KeyCode::Enter);
        press(&mut page, KeyCode::Down);
        press(&mut page, KeyCode::Down);
        press(&mut page, KeyCode::Enter);
        assert_eq!(page.store().revision(), 0, "draft edits stay local");
        for _ in 0..3 {
            press(&mut page, KeyCode::Tab);
        }
        press(&mut page, KeyCode::Enter);

        assert!(!page.panel().is_open());
        assert_eq!(page.store().current().background_color, &BACKGROUND_COLORS[2]);
        assert!(page.needs_redraw());
        let buffer = draw(&mut page);
        assert_eq!(buffer[(100, 30)].bg, Color::Rgb(0x37, 0x3f, 0x47));
        assert!(!page.needs_redraw());
    }

    #[test]
    fn panel_is_drawn_only_while_open() {
        let mut page = page();
        let closed = draw(&mut page);
        let closed_row: String = (3..20).map(|x| closed[(x, 1)].symbol()).collect();
        assert_ne!(closed_row, "ЗАДАЙТЕ ПАРАМЕТРЫ");

        press(&mut page, KeyCode::Char('s'));
        let open = draw(&mut page);
        let title: String = (3..20).map(|x| open[(x, 1)].symbol()).collect();
        assert_eq!(title, "ЗАДАЙТЕ ПАРАМЕТРЫ");
    }

    #[test]
    fn scrolling_is_clamped_to_the_article() {
        let mut page = page();
        press(&mut page, KeyCode::Up);
        assert_eq!(page.scroll(), 0);
        press(&mut page, KeyCode::End);
        let bottom = page.scroll();
        press(&mut page, KeyCode::PageDown);
        assert_eq!(page.scroll(), bottom);
        press(&mut page, KeyCode::Home);
        assert_eq!(page.scroll(), 0);
    }

    #[test]
    fn resize_moves_the_panel_layout() {
        let mut page = page();
        press(&mut page, KeyCode::Char('s'));
        page.handle_event(Event::Resize(60, 20));
        assert_eq!(page.panel().layout().panel.height, 20);
    }
}
