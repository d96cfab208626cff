//! Leaf presentational controls for the settings panel.
//!
//! Controls are controlled: the owner passes the selected option in and
//! receives picks through a synchronous callback. They keep no copy of the
//! selection themselves.

mod button;
mod heading;
mod radio_group;
mod select;
mod separator;

use ratatui::style::Color;

pub use button::{ArrowButton, Button, ButtonKind, ARROW_BUTTON_HEIGHT, ARROW_BUTTON_WIDTH};
pub use heading::Heading;
pub use radio_group::{handle_radio_key, radio_option_at, RadioGroup};
pub use select::{dropdown_area, Select, SelectDropdown, SelectState};
pub use separator::Separator;

/// Panel chrome colors; the article style never recolors the panel itself.
pub const PANEL_BACKGROUND: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const INK: Color = Color::Rgb(0x00, 0x00, 0x00);
pub const MUTED: Color = Color::Rgb(0x8a, 0x8a, 0x8a);
pub const FOCUS: Color = Color::Rgb(0xff, 0xc8, 0x02);
pub const HOVER_ROW: Color = Color::Rgb(0xfe, 0xaf, 0xe8);
