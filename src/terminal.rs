// Copyright (c) 2026 rezky_nightky

use std::io::{stdout, Result, Write};

use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};

use crate::palette::FillPalette;
use crate::report::Report;

fn queue_colored<W: Write>(out: &mut W, text: &str, fg: Option<Color>) -> Result<()> {
    match fg {
        Some(fg) => {
            out.queue(SetForegroundColor(fg))?;
            out.queue(Print(text))?;
            out.queue(SetForegroundColor(Color::Reset))?;
        }
        None => {
            out.queue(Print(text))?;
        }
    }
    Ok(())
}

/// Writes the report, tinting every glass by how full it is. Without a
/// palette the output is byte-for-byte the report's `Display` text.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &Report,
    palette: Option<FillPalette>,
) -> Result<()> {
    let Some(palette) = palette else {
        write!(out, "{}", report)?;
        return out.flush();
    };

    let layout = &report.layout;
    out.queue(Print(report.header()))?;
    for row in &layout.rows {
        let pad = " ".repeat(row.margin);

        out.queue(Print(&pad))?;
        for cell in &row.cells {
            let fg = palette.for_ratio(cell.fill_ratio);
            queue_colored(out, &layout.glass_box(&cell.label), fg)?;
        }
        out.queue(Print("\n"))?;

        out.queue(Print(&pad))?;
        for cell in &row.cells {
            let fg = palette.for_ratio(cell.fill_ratio);
            queue_colored(out, &layout.rim(), fg)?;
        }
        out.queue(Print("\n"))?;
    }
    out.queue(Print(report.footer()))?;
    out.queue(ResetColor)?;
    out.flush()
}

pub fn print_report(report: &Report, palette: Option<FillPalette>) -> Result<()> {
    let mut out = stdout().lock();
    write_report(&mut out, report, palette)?;
    writeln!(out)?;
    out.flush()
}
