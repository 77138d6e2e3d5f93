//! Light and dark colour themes.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use strum::EnumString;
use tracing::instrument;

/// Colour theme for the whole interface.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Theme {
    /// Pale background, dark text.
    Light,
    /// Dark background, light text.
    #[default]
    Dark,
}

/// Concrete colours for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background.
    pub background: Color,
    /// Title text.
    pub title: Color,
    /// Body and status text.
    pub text: Color,
    /// Highlighted menu entry background.
    pub button: Color,
    /// Dialog background.
    pub modal: Color,
    /// Empty cell background.
    pub cell: Color,
    /// Colour of X marks.
    pub x: Color,
    /// Colour of O marks.
    pub o: Color,
    /// Hint and border text.
    pub muted: Color,
}

const X_BLUE: Color = Color::Rgb(0x43, 0x55, 0x85);
const O_ORANGE: Color = Color::Rgb(0xF3, 0x9C, 0x12);

impl Theme {
    /// Switches between light and dark.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Glyph for the toggle hint: the theme you would switch to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "☾",
            Theme::Dark => "☀",
        }
    }

    /// Colours for this theme.
    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                background: Color::Rgb(0x33, 0x33, 0x33),
                title: Color::Rgb(0xFF, 0xFF, 0xFF),
                text: Color::Rgb(0xFF, 0xFF, 0xFF),
                button: Color::Rgb(0x55, 0x55, 0x55),
                modal: Color::Rgb(0x22, 0x22, 0x22),
                cell: Color::Rgb(0xE0, 0xE0, 0xE0),
                x: X_BLUE,
                o: O_ORANGE,
                muted: Color::Gray,
            },
            Theme::Light => Palette {
                background: Color::Rgb(0xF7, 0xF7, 0xF7),
                title: Color::Rgb(0x36, 0x30, 0x62),
                text: Color::Rgb(0x33, 0x33, 0x33),
                button: X_BLUE,
                modal: Color::Rgb(0xFF, 0xFF, 0xFF),
                cell: Color::Rgb(0xE5, 0xC3, 0xA6),
                x: X_BLUE,
                o: O_ORANGE,
                muted: Color::DarkGray,
            },
        }
    }
}
