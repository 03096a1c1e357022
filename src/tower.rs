// Copyright (c) 2026 rezky_nightky

use log::{debug, info, trace};

use crate::error::TowerError;
use crate::glass::{notate_ml, Glass};

/// Triangular stack of glasses. Level `i` holds `i + 1` glasses and glass
/// `(i, p)` overflows into `(i + 1, p)` and `(i + 1, p + 1)`.
#[derive(Clone, Debug)]
pub struct Tower {
    rows: Vec<Vec<Glass>>,
    spillage: f64,
    spillage_split: bool,
    poured: f64,
}

impl Tower {
    pub fn build(levels: usize, capacity: f64) -> Result<Self, TowerError> {
        if levels == 0 || !capacity.is_finite() || capacity <= 0.0 {
            return Err(TowerError::InvalidConfiguration { levels, capacity });
        }

        let rows: Vec<Vec<Glass>> = (0..levels)
            .map(|level| vec![Glass::empty(capacity); level + 1])
            .collect();

        info!(
            "stacked {} glasses of {} ml over {} levels",
            levels * (levels + 1) / 2,
            capacity,
            levels
        );

        Ok(Self {
            rows,
            spillage: 0.0,
            spillage_split: false,
            poured: 0.0,
        })
    }

    pub fn levels(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<Glass>] {
        &self.rows
    }

    #[cfg(test)]
    pub fn level(&self, level: usize) -> Option<&[Glass]> {
        self.rows.get(level).map(Vec::as_slice)
    }

    #[cfg(test)]
    pub fn glass(&self, level: usize, position: usize) -> Option<&Glass> {
        self.rows.get(level)?.get(position)
    }

    pub fn total_glasses(&self) -> usize {
        let n = self.levels();
        n * (n + 1) / 2
    }

    /// Liquid that ran past the bottom level onto the table.
    pub fn spillage(&self) -> f64 {
        self.spillage
    }

    /// Spillage is reported as accumulated, without display rounding.
    pub fn spillage_label(&self) -> String {
        notate_ml(self.spillage, self.spillage_split)
    }

    pub fn total_filled(&self) -> f64 {
        self.rows.iter().flatten().map(Glass::filled).sum()
    }

    pub fn poured(&self) -> f64 {
        self.poured
    }

    /// Pours `amount` into the top glass and resolves every overflow, one
    /// level at a time, before returning.
    ///
    /// A level is fully settled before the next one is visited, since a glass
    /// can be fed by two glasses above it.
    pub fn pour(&mut self, amount: f64) -> Result<(), TowerError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(TowerError::InvalidPourAmount(amount));
        }

        self.rows[0][0].pour_in(amount);
        self.poured += amount;

        let last = self.rows.len() - 1;
        for level in 0..self.rows.len() {
            for position in 0..=level {
                let Some((overflow, split)) = self.rows[level][position].settle() else {
                    continue;
                };
                trace!(
                    "glass ({}, {}) overflowed by {} ml",
                    level,
                    position,
                    overflow
                );

                if level < last {
                    let half = overflow / 2.0;
                    let below = &mut self.rows[level + 1];
                    below[position].receive_share(half);
                    below[position + 1].receive_share(half);
                } else {
                    self.spillage += overflow;
                    self.spillage_split |= split;
                }
            }
        }

        debug!(
            "poured {} ml (total {} ml), {} ml on the table",
            amount, self.poured, self.spillage
        );
        Ok(())
    }
}
