//! Chart presentation tuning

/// Knobs controlling how the two vertical axes are separated inside the
/// shared plot. Presentation parameters only; nothing downstream derives
/// meaning from them.
pub struct ChartTuning {
    // Extra headroom reserved above the highest net-position bar so the
    // price lines have their own vertical band
    pub net_headroom_multiplier: f64,
    // The price axis extends this fraction of its max below zero, pushing
    // the price band up and away from the bars
    pub price_depression_divisor: f64,
    // Width of one net-position bar, in days of x-axis space
    pub net_bar_width_days: f64,
}

pub const CHART: ChartTuning = ChartTuning {
    net_headroom_multiplier: 4.5,
    price_depression_divisor: 2.0,
    net_bar_width_days: 2.5,
};
