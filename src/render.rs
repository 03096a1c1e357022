// Copyright (c) 2026 rezky_nightky

use std::fmt;

use crate::glass::Glass;
use crate::tower::Tower;

/// A glass as it will be drawn: its formatted fill and how full it is.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub label: String,
    pub fill_ratio: f64,
}

impl Cell {
    fn from_glass(glass: &Glass) -> Self {
        Self {
            label: glass.label(),
            fill_ratio: glass.fill_ratio(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    pub margin: usize,
    pub cells: Vec<Cell>,
}

/// Resolved geometry of a drawn tower. Every box shares `width`, the longest
/// label anywhere in the tower, so columns line up across levels.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub width: usize,
    pub rows: Vec<Row>,
}

impl Layout {
    /// `| <label> |` with the label centered in `width`; an odd leftover
    /// space goes to the left.
    pub fn glass_box(&self, label: &str) -> String {
        let total = self.width.saturating_sub(label.chars().count());
        let right = total / 2;
        let left = total - right;
        format!("| {}{}{} |", " ".repeat(left), label, " ".repeat(right))
    }

    /// Dashes strictly between the pipes of one box, blanks under the pipes.
    pub fn rim(&self) -> String {
        format!(" {} ", "-".repeat(self.width + 2))
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            let pad = " ".repeat(row.margin);

            f.write_str(&pad)?;
            for cell in &row.cells {
                f.write_str(&self.glass_box(&cell.label))?;
            }
            f.write_str("\n")?;

            f.write_str(&pad)?;
            for _ in &row.cells {
                f.write_str(&self.rim())?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

pub fn layout(tower: &Tower) -> Layout {
    let rows: Vec<Vec<Cell>> = tower
        .rows()
        .iter()
        .map(|row| row.iter().map(Cell::from_glass).collect())
        .collect();

    let width = rows
        .iter()
        .flatten()
        .map(|c| c.label.chars().count())
        .max()
        .unwrap_or(0);

    let bottom = tower.levels();
    let rows = rows
        .into_iter()
        .map(|cells| Row {
            // half a box (plus its share of the gap) per missing glass
            margin: (bottom - cells.len()) * (width + 4) / 2,
            cells,
        })
        .collect();

    Layout { width, rows }
}

pub fn render(tower: &Tower) -> String {
    layout(tower).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    // rim lines carry a trailing blank under the last pipe
    const FOUR_LEVELS_THOUSAND_ML: &str = concat!(
        "             |  250  |\n",
        "              ------- \n",
        "         |  250  ||  250  |\n",
        "          -------  ------- \n",
        "    |  62.5 || 125.0 ||  62.5 |\n",
        "     -------  -------  ------- \n",
        "|   0   ||   0   ||   0   ||   0   |\n",
        " -------  -------  -------  ------- \n",
    );

    #[test]
    fn renders_four_levels_thousand_ml_exactly() {
        let mut tower = Tower::build(4, 250.0).unwrap();
        tower.pour(1000.0).unwrap();
        assert_eq!(render(&tower), FOUR_LEVELS_THOUSAND_ML);
    }

    #[test]
    fn width_is_shared_across_all_levels() {
        let mut tower = Tower::build(4, 250.0).unwrap();
        tower.pour(1000.0).unwrap();
        let l = layout(&tower);

        assert_eq!(l.width, 5);
        assert_eq!(
            l.rows.iter().map(|r| r.margin).collect::<Vec<_>>(),
            vec![13, 9, 4, 0]
        );
        assert_eq!(l.rows[2].cells[1].label, "125.0");
        assert_eq!(l.rows[2].cells[0].fill_ratio, 0.25);
    }

    #[test]
    fn odd_padding_puts_extra_space_on_the_left() {
        let l = Layout {
            width: 5,
            rows: Vec::new(),
        };
        assert_eq!(l.glass_box("62.5"), "|  62.5 |");
        assert_eq!(l.glass_box("0"), "|   0   |");
        assert_eq!(l.glass_box("125.0"), "| 125.0 |");
        assert_eq!(l.glass_box("12"), "|   12  |");
    }

    #[test]
    fn rim_dashes_only_between_pipes() {
        let l = Layout {
            width: 3,
            rows: Vec::new(),
        };
        let b = l.glass_box("1");
        let rim = l.rim();
        assert_eq!(b.len(), rim.len());
        for (bc, rc) in b.chars().zip(rim.chars()) {
            if bc == '|' {
                assert_eq!(rc, ' ');
            } else {
                assert_eq!(rc, '-');
            }
        }
    }

    #[test]
    fn single_glass_has_no_margin() {
        let mut tower = Tower::build(1, 250.0).unwrap();
        tower.pour(100.0).unwrap();
        assert_eq!(render(&tower), "| 100 |\n ----- \n");
    }

    #[test]
    fn every_level_produces_two_lines() {
        let mut tower = Tower::build(6, 80.0).unwrap();
        tower.pour(777.0).unwrap();
        let out = render(&tower);
        assert_eq!(out.lines().count(), 12);
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn rendering_does_not_touch_the_tower() {
        let mut tower = Tower::build(3, 100.0).unwrap();
        tower.pour(250.0).unwrap();
        let before = tower.total_filled();
        let _ = render(&tower);
        assert_eq!(tower.total_filled(), before);
    }
}
