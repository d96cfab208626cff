//! Fixed option lists and the default bundle.

use super::{ArticleStyle, StyleOption};

pub const FONT_FAMILIES: &[StyleOption] = &[
    StyleOption::hinted("Open Sans", "Open Sans", "open-sans"),
    StyleOption::hinted("Ubuntu", "Ubuntu", "ubuntu"),
    StyleOption::hinted(
        "Cormorant Garamond",
        "Cormorant Garamond",
        "cormorant-garamond",
    ),
    StyleOption::hinted("Days One", "Days One", "days-one"),
    StyleOption::hinted("Merriweather", "Merriweather", "merriweather"),
];

pub const FONT_SIZES: &[StyleOption] = &[
    StyleOption::hinted("18px", "18px", "font-size-18"),
    StyleOption::hinted("24px", "24px", "font-size-24"),
    StyleOption::hinted("38px", "38px", "font-size-38"),
];

pub const FONT_COLORS: &[StyleOption] = &[
    StyleOption::new("#000000", "Чёрный"),
    StyleOption::new("#ffffff", "Белый"),
    StyleOption::new("#c4c4c4", "Серый"),
    StyleOption::new("#feafe8", "Розовый"),
    StyleOption::new("#fd24af", "Ярко-розовый"),
    StyleOption::new("#ffc802", "Жёлтый"),
    StyleOption::new("#80d994", "Зелёный"),
    StyleOption::new("#6fc1fd", "Голубой"),
    StyleOption::new("#5f00ff", "Фиолетовый"),
];

pub const BACKGROUND_COLORS: &[StyleOption] = &[
    StyleOption::new("#ffffff", "Белый"),
    StyleOption::new("#000000", "Чёрный"),
    StyleOption::new("#373f47", "Тёмный"),
    StyleOption::new("#c4c4c4", "Серый"),
    StyleOption::new("#feafe8", "Розовый"),
    StyleOption::new("#ffc802", "Жёлтый"),
    StyleOption::new("#80d994", "Зелёный"),
    StyleOption::new("#6fc1fd", "Голубой"),
    StyleOption::new("#5f00ff", "Фиолетовый"),
];

pub const CONTENT_WIDTHS: &[StyleOption] = &[
    StyleOption::new("1394px", "Широкий"),
    StyleOption::new("948px", "Узкий"),
];

pub const DEFAULT_ARTICLE_STYLE: ArticleStyle = ArticleStyle {
    font_family: &FONT_FAMILIES[0],
    font_size: &FONT_SIZES[0],
    font_color: &FONT_COLORS[0],
    background_color: &BACKGROUND_COLORS[0],
    content_width: &CONTENT_WIDTHS[0],
};
