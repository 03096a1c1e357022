// Copyright (c) 2026 rezky_nightky

/// Rounds to two decimals and writes the shortest form of the result.
///
/// `split` selects real notation (`125.0`, always with a decimal part) over
/// whole notation (`125`). Amounts that passed through a halved overflow share
/// are written in real notation.
pub fn format_ml(value: f64, split: bool) -> String {
    let rounded = format!("{:.2}", value).parse::<f64>().unwrap_or(value);
    notate_ml(rounded, split)
}

/// Same notation choice as [`format_ml`], without rounding.
pub fn notate_ml(value: f64, split: bool) -> String {
    if split {
        format!("{:?}", value)
    } else {
        format!("{}", value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glass {
    capacity: f64,
    filled: f64,
    split_fed: bool,
}

impl Glass {
    pub fn empty(capacity: f64) -> Self {
        Self {
            capacity,
            filled: 0.0,
            split_fed: false,
        }
    }

    #[cfg(test)]
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn filled(&self) -> f64 {
        self.filled
    }

    #[cfg(test)]
    pub fn is_split_fed(&self) -> bool {
        self.split_fed
    }

    pub fn fill_ratio(&self) -> f64 {
        self.filled / self.capacity
    }

    /// Liquid poured straight in, as on the top glass.
    pub(crate) fn pour_in(&mut self, amount: f64) {
        self.filled += amount;
    }

    /// Half of an overflowing neighbour above.
    pub(crate) fn receive_share(&mut self, share: f64) {
        self.filled += share;
        self.split_fed = true;
    }

    /// Clamps to capacity and hands back the excess, if any.
    ///
    /// The second value tells whether the excess carried split-fed liquid.
    pub(crate) fn settle(&mut self) -> Option<(f64, bool)> {
        let overflow = self.filled - self.capacity;
        if overflow <= 0.0 {
            return None;
        }
        let split = self.split_fed;
        self.filled = self.capacity;
        self.split_fed = false;
        Some((overflow, split))
    }

    pub fn label(&self) -> String {
        format_ml(self.filled, self.split_fed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(250.0, false, "250")]
    #[case(0.0, false, "0")]
    #[case(62.5, true, "62.5")]
    #[case(125.0, true, "125.0")]
    #[case(100.0 / 3.0, true, "33.33")]
    #[case(2.0 / 3.0, true, "0.67")]
    #[case(100.5, false, "100.5")]
    fn format_ml_matches_display_notation(
        #[case] value: f64,
        #[case] split: bool,
        #[case] expected: &str,
    ) {
        assert_eq!(format_ml(value, split), expected);
    }

    #[test]
    fn notate_ml_keeps_every_digit() {
        assert_eq!(notate_ml(0.375, true), "0.375");
        assert_eq!(notate_ml(750.0, false), "750");
        assert_eq!(notate_ml(400.0, true), "400.0");
    }

    #[test]
    fn settle_below_capacity_keeps_content() {
        let mut g = Glass::empty(250.0);
        g.pour_in(100.0);
        assert_eq!(g.settle(), None);
        assert_eq!(g.filled(), 100.0);
        assert_eq!(g.label(), "100");
    }

    #[test]
    fn settle_at_capacity_does_not_overflow() {
        let mut g = Glass::empty(250.0);
        g.pour_in(250.0);
        assert_eq!(g.settle(), None);
        assert_eq!(g.filled(), 250.0);
    }

    #[test]
    fn settle_clamps_and_returns_excess() {
        let mut g = Glass::empty(250.0);
        g.receive_share(375.0);
        assert!(g.is_split_fed());
        assert_eq!(g.settle(), Some((125.0, true)));
        assert_eq!(g.filled(), 250.0);
        assert!(!g.is_split_fed());
        assert_eq!(g.label(), "250");
    }

    #[test]
    fn fill_ratio_is_relative_to_capacity() {
        let mut g = Glass::empty(200.0);
        g.receive_share(50.0);
        assert_eq!(g.fill_ratio(), 0.25);
    }
}
