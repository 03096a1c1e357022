// Copyright (c) 2026 rezky_nightky

mod config;
mod error;
mod glass;
mod palette;
mod render;
mod report;
mod runtime;
mod terminal;
mod tower;

use clap::Parser;
use log::{debug, info};

use crate::config::Args;
use crate::palette::FillPalette;
use crate::report::Bartender;
use crate::runtime::{detect_color_mode_auto, ColorMode};

fn resolve_palette(args: &Args) -> Option<FillPalette> {
    if !args.color.enabled() {
        return None;
    }

    let mode = match args.colormode {
        Some(depth) => match ColorMode::from_depth(depth) {
            Ok(m) => m,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        },
        None => detect_color_mode_auto(),
    };
    debug!("color output: {}", mode.label());
    Some(FillPalette::new(mode))
}

fn main() -> std::io::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let palette = resolve_palette(&args);

    let mut bartender =
        match Bartender::new(args.num_bottom_glasses as usize, args.glass_capacity.into()) {
            Ok(b) => b,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        };

    let report = match bartender.place_order(args.pour) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    let tower = bartender.tower();
    info!(
        "order of {} ml served: {} ml poured, {} ml in glasses, {} ml on the table",
        report.order,
        tower.poured(),
        tower.total_filled(),
        tower.spillage()
    );

    terminal::print_report(&report, palette)
}
