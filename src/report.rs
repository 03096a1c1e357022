// Copyright (c) 2026 rezky_nightky

use std::fmt;

use crate::error::TowerError;
use crate::render::{layout, Layout};
use crate::tower::Tower;

/// Runs orders against a single tower.
#[derive(Debug)]
pub struct Bartender {
    tower: Tower,
}

impl Bartender {
    pub fn new(levels: usize, capacity: f64) -> Result<Self, TowerError> {
        Ok(Self {
            tower: Tower::build(levels, capacity)?,
        })
    }

    pub fn tower(&self) -> &Tower {
        &self.tower
    }

    pub fn place_order(&mut self, milliliters: u32) -> Result<Report, TowerError> {
        self.tower.pour(f64::from(milliliters))?;
        Ok(Report {
            order: milliliters,
            total_glasses: self.tower.total_glasses(),
            layout: layout(&self.tower),
            spillage: self.tower.spillage_label(),
        })
    }
}

/// What the bartender hands back after an order: the drawn tower and the
/// mess on the table.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub order: u32,
    pub total_glasses: usize,
    pub layout: Layout,
    pub spillage: String,
}

impl Report {
    pub fn header(&self) -> String {
        format!(
            "\nOrder was: {}\nFountain total glasses: {}\n\n",
            self.order, self.total_glasses
        )
    }

    pub fn footer(&self) -> String {
        format!("\n{} milliliter were poured on the table\n", self.spillage)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.header(), self.layout, self.footer())
    }
}
