//! Dual-axis scale planning.
//!
//! The price line and the net-position bars share one date axis but must not
//! visually collide: the net axis gets extra headroom above its data and the
//! price axis is depressed below zero, so the two occupy separate vertical
//! bands of the same plot. The headroom multiplier and depression divisor
//! are presentation tuning knobs (`config::CHART`), nothing more.

use crate::analysis::align::AlignedRecord;
use crate::config::CHART;
use crate::domain::TraderClass;

/// Rounded bounds and tick step for one logical vertical axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl AxisConfig {
    pub const ZERO: AxisConfig = AxisConfig {
        min: 0.0,
        max: 0.0,
        step: 0.0,
    };

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// The two independent vertical axes of the combined chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartAxes {
    pub price: AxisConfig,
    pub net: AxisConfig,
}

/// "Nice" tick step one order of magnitude below `max_value`, scaled by 5:
/// 0.1, 0.5, 5, 50, 500, ...
pub fn dynamic_step(max_value: f64) -> f64 {
    if max_value <= 1.0 {
        return 0.1;
    }
    let exponent = max_value.log10().floor();
    5.0 * 10f64.powf(exponent - 1.0)
}

/// Round `value` up to the next multiple of `interval`.
pub fn round_up_to_interval(value: f64, interval: f64) -> f64 {
    (value / interval).ceil() * interval
}

/// Plan both axes from the aligned records, comparing the net positions of
/// `class_a` and `class_b` (the chart plots those two as bars).
///
/// Pure and total: empty input yields zero-width axes rather than feeding
/// infinities through the rounding formulas.
pub fn plan_axes(records: &[AlignedRecord], class_a: TraderClass, class_b: TraderClass) -> ChartAxes {
    if records.is_empty() {
        return ChartAxes {
            price: AxisConfig::ZERO,
            net: AxisConfig::ZERO,
        };
    }

    let max_positive_net = records
        .iter()
        .map(|r| r.sums.net(class_a).max(r.sums.net(class_b)))
        .fold(f64::NEG_INFINITY, f64::max);
    let max_negative_net = -records
        .iter()
        .map(|r| r.sums.net(class_a).min(r.sums.net(class_b)))
        .fold(f64::INFINITY, f64::min);

    // A market with no price at a date counts as 0 here, so an all-null
    // record set degrades to the minimal 0.1 step instead of NaN bounds.
    let max_price = records
        .iter()
        .flat_map(|r| r.prices_by_market.values())
        .map(|p| p.unwrap_or(0.0))
        .fold(0.0_f64, f64::max);

    let price_step = dynamic_step(max_price);
    let net_step = dynamic_step(max_positive_net + max_negative_net);

    let rounded_max_price = round_up_to_interval(max_price, price_step);
    let rounded_max_negative = round_up_to_interval(max_negative_net, net_step);

    ChartAxes {
        price: AxisConfig {
            min: -rounded_max_price / CHART.price_depression_divisor,
            max: rounded_max_price,
            step: price_step,
        },
        net: AxisConfig {
            min: -rounded_max_negative,
            max: round_up_to_interval(max_positive_net * CHART.net_headroom_multiplier, net_step)
                + rounded_max_negative,
            step: net_step,
        },
    }
}
