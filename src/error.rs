// Copyright (c) 2026 rezky_nightky

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TowerError {
    #[error("invalid tower: {levels} levels of {capacity} ml glasses (both must be greater than 0)")]
    InvalidConfiguration { levels: usize, capacity: f64 },

    #[error("invalid pour: {0} ml (must be greater than 0)")]
    InvalidPourAmount(f64),
}
