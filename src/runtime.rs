// Copyright (c) 2025 rezk_nightky

use std::env;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorMode {
    Mono,
    Color16,
    Color256,
    TrueColor,
}

impl ColorMode {
    pub fn from_depth(depth: u16) -> Result<Self, String> {
        match depth {
            0 => Ok(Self::Mono),
            16 => Ok(Self::Color16),
            8 | 256 => Ok(Self::Color256),
            24 | 32 => Ok(Self::TrueColor),
            _ => Err(format!(
                "invalid --colormode: {} (allowed: 0,16,8/256,24/32)",
                depth
            )),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::TrueColor => "24-bit truecolor",
            Self::Color256 => "8-bit (256-color)",
            Self::Color16 => "16-color",
            Self::Mono => "mono",
        }
    }
}

fn color_mode_from_env(colorterm: &str, term: &str) -> ColorMode {
    let colorterm = colorterm.to_ascii_lowercase();
    if colorterm.contains("truecolor") || colorterm.contains("24bit") {
        return ColorMode::TrueColor;
    }

    let term = term.to_ascii_lowercase();
    if term == "dumb" {
        return ColorMode::Mono;
    }
    if term.contains("256color") {
        return ColorMode::Color256;
    }

    ColorMode::Color16
}

pub fn detect_color_mode_auto() -> ColorMode {
    color_mode_from_env(
        &env::var("COLORTERM").unwrap_or_default(),
        &env::var("TERM").unwrap_or_default(),
    )
}
