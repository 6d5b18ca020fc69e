use serde::{Deserialize, Serialize};
use std::fmt;

/// The three trader classifications a COT report breaks positioning into.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Default, Debug, Serialize, Deserialize, strum_macros::EnumIter,
)]
pub enum TraderClass {
    #[default]
    LargeSpec,
    SmallSpec,
    Commercial,
}

impl fmt::Display for TraderClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TraderClass::LargeSpec => write!(f, "Large Speculators"),
            TraderClass::SmallSpec => write!(f, "Small Speculators"),
            TraderClass::Commercial => write!(f, "Commercials"),
        }
    }
}

/// Long/short holdings per trader class at a single report date.
///
/// Upstream normalizes missing category counts to 0.0, so these are plain
/// numbers rather than options.
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Positions {
    pub large_spec_long: f64,
    pub large_spec_short: f64,
    pub small_spec_long: f64,
    pub small_spec_short: f64,
    pub comms_long: f64,
    pub comms_short: f64,
}

impl Positions {
    pub fn long(&self, class: TraderClass) -> f64 {
        match class {
            TraderClass::LargeSpec => self.large_spec_long,
            TraderClass::SmallSpec => self.small_spec_long,
            TraderClass::Commercial => self.comms_long,
        }
    }

    pub fn short(&self, class: TraderClass) -> f64 {
        match class {
            TraderClass::LargeSpec => self.large_spec_short,
            TraderClass::SmallSpec => self.small_spec_short,
            TraderClass::Commercial => self.comms_short,
        }
    }

    /// Net position (long minus short) for one trader class.
    pub fn net(&self, class: TraderClass) -> f64 {
        self.long(class) - self.short(class)
    }

    /// Field-wise accumulation. Plain addition, so summing a set of
    /// `Positions` gives the same result in any order.
    pub fn accumulate(&mut self, other: &Positions) {
        self.large_spec_long += other.large_spec_long;
        self.large_spec_short += other.large_spec_short;
        self.small_spec_long += other.small_spec_long;
        self.small_spec_short += other.small_spec_short;
        self.comms_long += other.comms_long;
        self.comms_short += other.comms_short;
    }
}

/// One report date of one market's series.
///
/// `date` is an ISO `YYYY-MM-DD` string; within a market dates are unique
/// and lexicographic order equals chronological order (upstream contract).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSeriesPoint {
    pub date: String,
    pub positions: Positions,
    /// Missing price stays missing; it is never substituted with 0.
    pub price: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn accumulate_adds_every_trader_class() {
        let mut total = Positions::default();
        let sample = Positions {
            large_spec_long: 10.0,
            large_spec_short: 4.0,
            small_spec_long: 2.0,
            small_spec_short: 1.0,
            comms_long: 5.0,
            comms_short: 9.0,
        };

        total.accumulate(&sample);
        total.accumulate(&sample);

        for class in TraderClass::iter() {
            assert_eq!(total.long(class), 2.0 * sample.long(class));
            assert_eq!(total.short(class), 2.0 * sample.short(class));
            assert_eq!(total.net(class), 2.0 * sample.net(class));
        }
    }
}
