use image::Rgb;
use serde::{Deserialize, Serialize};

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Background/foreground pairing used to paint a fixture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Rgb<u8>,
    pub foreground: Rgb<u8>,
}

impl Theme {
    pub const fn new(background: Rgb<u8>, foreground: Rgb<u8>) -> Self {
        Self { background, foreground }
    }

    pub fn inverted(&self) -> Self {
        Self {
            background: self.foreground,
            foreground: self.background,
        }
    }
}

/// The two built-in themes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ThemeVariant {
    /// White background, black stroke
    #[serde(rename = "light")]
    Light,
    /// Black background, white stroke
    #[serde(rename = "dark")]
    Dark,
}

impl ThemeVariant {
    pub const ALL: [ThemeVariant; 2] = [ThemeVariant::Light, ThemeVariant::Dark];

    pub fn theme(&self) -> Theme {
        match self {
            ThemeVariant::Light => Theme::new(WHITE, BLACK),
            ThemeVariant::Dark => Theme::new(BLACK, WHITE),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThemeVariant::Light => "light",
            ThemeVariant::Dark => "dark",
        }
    }
}

impl std::fmt::Display for ThemeVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
