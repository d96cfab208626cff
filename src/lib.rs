//! Terminal article reader with a collapsible presentation settings panel.
//!
//! The page shell ([`page::Page`]) owns the applied style bundle and a
//! document-scope pointer hub; the [`panel::SettingsPanel`] edits a private
//! draft and promotes it to the page only on confirm or reset.

pub mod article;
pub mod config;
pub mod controls;
mod cycle_index;
pub mod page;
pub mod panel;
pub mod pointer;
pub mod store;
pub mod style;
pub mod telemetry;
pub mod terminal_restore;
pub mod text_width;
pub mod ui;

pub use article::Article;
pub use config::AppConfig;
pub use page::{Page, PageFlow};
pub use store::{AppliedStyle, StyleStore};
pub use style::{ArticleStyle, StyleOption, StyleSlot, DEFAULT_ARTICLE_STYLE};
