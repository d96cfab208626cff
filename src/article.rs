//! Article content shown by the page: a title and plain paragraphs.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

use crate::text_width::wrap_text;

const BUILTIN_TITLE: &str = "Портрет Западной Швейцарии";

const BUILTIN_PARAGRAPHS: &[&str] = &[
    "Бывают такие места, о которых узнаёшь не из путеводителей, а из разговоров попутчиков. \
     Западная Швейцария как раз из них: озёра, виноградники на крутых склонах и маленькие города, \
     где утро начинается со звона колоколов и запаха свежего хлеба.",
    "Дорога вдоль Женевского озера тянется через террасы Лаво. Виноградники спускаются к самой воде, \
     каменные стенки держат склоны уже не первое столетие, а между ними петляют тропинки, \
     по которым можно идти целый день и ни разу не повторить вид.",
    "Лозанна стоит на холмах, поэтому любая прогулка здесь превращается в подъём. Зато с верхних улиц \
     видно и собор, и крыши старого города, и противоположный, французский берег, \
     который в ясную погоду кажется совсем близким.",
    "Дальше к северу начинаются предгорья Юры. Здесь меньше туристов и больше тишины: \
     пастбища, часовые мастерские в деревнях и сыроварни, где рассказывают, \
     почему настоящий грюйер нельзя торопить.",
    "Вечером всё снова возвращается к воде. Солнце садится за горы на том берегу, \
     озеро темнеет, и становится понятно, почему сюда приезжают не за достопримечательностями, \
     а за этим медленным ощущением времени.",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub paragraphs: Vec<String>,
}

/// One rendered row of the article column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleRow {
    Title(String),
    Text(String),
    Blank,
}

impl Article {
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            title: BUILTIN_TITLE.to_string(),
            paragraphs: BUILTIN_PARAGRAPHS
                .iter()
                .map(|paragraph| paragraph.split_whitespace().collect::<Vec<_>>().join(" "))
                .collect(),
        }
    }

    /// First non-empty line is the title; blank lines separate paragraphs.
    ///
    /// # Errors
    ///
    /// Returns an error when the text contains no title line.
    pub fn from_text(text: &str) -> Result<Self> {
        let mut lines = text.lines().skip_while(|line| line.trim().is_empty());
        let Some(title) = lines.next() else {
            bail!("article text is empty");
        };

        let mut paragraphs = Vec::new();
        let mut current: Vec<&str> = Vec::new();
        for line in lines {
            let line = line.trim();
            if line.is_empty() {
                if !current.is_empty() {
                    paragraphs.push(current.join(" "));
                    current.clear();
                }
            } else {
                current.push(line);
            }
        }
        if !current.is_empty() {
            paragraphs.push(current.join(" "));
        }

        Ok(Self {
            title: title.trim().to_string(),
            paragraphs,
        })
    }

    /// # Errors
    ///
    /// Returns an error if the file cannot be read or holds no title line.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read article {}", path.display()))?;
        let article = Self::from_text(&text)
            .with_context(|| format!("failed to parse article {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            paragraphs = article.paragraphs.len(),
            "article loaded"
        );
        Ok(article)
    }

    /// Lay the article out for a column `width` wide, inserting `line_gap`
    /// blank rows after every wrapped line and one between paragraphs.
    #[must_use]
    pub fn rows(&self, width: usize, line_gap: u16) -> Vec<ArticleRow> {
        let gap = usize::from(line_gap);
        let mut rows = Vec::new();
        for line in wrap_text(&self.title.to_uppercase(), width) {
            rows.push(ArticleRow::Title(line));
            rows.extend(std::iter::repeat(ArticleRow::Blank).take(gap));
        }
        for paragraph in &self.paragraphs {
            rows.push(ArticleRow::Blank);
            for line in wrap_text(paragraph, width) {
                rows.push(ArticleRow::Text(line));
                rows.extend(std::iter::repeat(ArticleRow::Blank).take(gap));
            }
        }
        rows
    }
}

impl Default for Article {
    fn default() -> Self {
        Self::builtin()
    }
}
