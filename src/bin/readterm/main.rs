//! `readterm` entrypoint.

mod cli_utils;

use anyhow::Result;
use clap::Parser;
use readterm::telemetry::init_tracing;
use readterm::ui::run_reader;
use readterm::{AppConfig, Article, Page, DEFAULT_ARTICLE_STYLE};

use crate::cli_utils::format_option_listing;

fn main() -> Result<()> {
    let config = AppConfig::parse();

    if config.list_options {
        print!("{}", format_option_listing(config.json)?);
        return Ok(());
    }

    if let Some(path) = init_tracing(&config)? {
        tracing::info!(path = %path.display(), level = ?config.log_level, "trace log opened");
    }
    let article = match &config.article {
        Some(path) => Article::load(path)?,
        None => Article::builtin(),
    };

    let mut page = Page::new(article, DEFAULT_ARTICLE_STYLE);
    run_reader(&mut page, &config)
}
