// Copyright (c) 2026 rezky_nightky

use crossterm::style::Color;

use crate::runtime::ColorMode;

/// Colors for glasses by how full they are. `None` means plain output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FillPalette {
    pub empty: Option<Color>,
    pub partial: Option<Color>,
    pub full: Option<Color>,
}

impl FillPalette {
    /// Slate for empty glasses, amber for partial ones, pale gold when full.
    pub fn new(mode: ColorMode) -> Self {
        let [empty, partial, full] = match mode {
            ColorMode::Mono => return Self::plain(),
            ColorMode::Color16 => [Color::DarkGrey, Color::DarkYellow, Color::Yellow],
            ColorMode::Color256 => [
                Color::AnsiValue(242),
                Color::AnsiValue(222),
                Color::AnsiValue(223),
            ],
            ColorMode::TrueColor => [
                Color::Rgb {
                    r: 110,
                    g: 110,
                    b: 120,
                },
                Color::Rgb {
                    r: 235,
                    g: 200,
                    b: 90,
                },
                Color::Rgb {
                    r: 250,
                    g: 225,
                    b: 130,
                },
            ],
        };
        Self {
            empty: Some(empty),
            partial: Some(partial),
            full: Some(full),
        }
    }

    fn plain() -> Self {
        Self {
            empty: None,
            partial: None,
            full: None,
        }
    }

    pub fn for_ratio(&self, ratio: f64) -> Option<Color> {
        if ratio <= 0.0 {
            self.empty
        } else if ratio >= 1.0 {
            self.full
        } else {
            self.partial
        }
    }
}
