// Copyright (c) 2026 rezky_nightky

use std::io::IsTerminal;

use clap::Parser;

pub const DEFAULT_GLASS_CAPACITY: u32 = 250;

fn color_allowed_by_env() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    !matches!(std::env::var("CLICOLOR").ok().as_deref(), Some("0"))
}

pub fn color_enabled_stdout() -> bool {
    color_allowed_by_env() && std::io::stdout().is_terminal()
}

/// Accepts whole milliliters or glass counts above zero.
pub fn positive_int(s: &str) -> Result<u32, String> {
    let v: i64 = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid integer: {}", s))?;
    if v <= 0 {
        return Err("Value has to be greater than 0".to_string());
    }
    u32::try_from(v).map_err(|_| format!("value too large: {}", v))
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChoice {
    #[value(name = "auto")]
    Auto,
    #[value(name = "always")]
    Always,
    #[value(name = "never")]
    Never,
}

impl ColorChoice {
    pub fn enabled(self) -> bool {
        match self {
            Self::Auto => color_enabled_stdout(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "champagne-tower",
    version,
    long_version = concat!(
        env!("CARGO_PKG_VERSION"),
        " (",
        env!("CHAMPAGNE_TOWER_BUILD"),
        ", ",
        env!("CHAMPAGNE_TOWER_GIT_SHA"),
        ")"
    ),
    about = "Pour into a champagne tower and see where it ends up"
)]
pub struct Args {
    #[arg(
        short = 'g',
        long = "num-bottom-glasses",
        value_parser = positive_int,
        allow_negative_numbers = true,
        help_heading = "TOWER",
        help = "Number of glasses on the bottom"
    )]
    pub num_bottom_glasses: u32,

    #[arg(
        short = 'c',
        long = "glass-capacity",
        default_value_t = DEFAULT_GLASS_CAPACITY,
        value_parser = positive_int,
        allow_negative_numbers = true,
        help_heading = "TOWER",
        help = "Milliliter capacity of each glass"
    )]
    pub glass_capacity: u32,

    #[arg(
        short = 'p',
        long = "pour",
        value_parser = positive_int,
        allow_negative_numbers = true,
        help_heading = "TOWER",
        help = "Milliliter to pour"
    )]
    pub pour: u32,

    #[arg(
        long = "color",
        default_value_t = ColorChoice::Auto,
        value_enum,
        help_heading = "APPEARANCE",
        help = "Tint glasses by fill level (auto honors NO_COLOR and non-terminal stdout)"
    )]
    pub color: ColorChoice,

    #[arg(
        long = "colormode",
        help_heading = "APPEARANCE",
        help = "Force color mode (allowed: 0,16,8/256,24/32). Default: detected from COLORTERM/TERM"
    )]
    pub colormode: Option<u16>,
}
