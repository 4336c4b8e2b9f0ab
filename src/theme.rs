//! Light and dark color schemes

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Colors the UI draws with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub text: Color,
    pub background: Color,
    pub accent: Color,
    pub muted: Color,
    pub error: Color,
    pub success: Color,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Self::Light => Palette {
                text: Color::Black,
                background: Color::White,
                accent: Color::Rgb(0, 161, 156),
                muted: Color::DarkGray,
                error: Color::Red,
                success: Color::Green,
            },
            Self::Dark => Palette {
                text: Color::White,
                background: Color::Black,
                accent: Color::Cyan,
                muted: Color::Gray,
                error: Color::LightRed,
                success: Color::LightGreen,
            },
        }
    }
}
