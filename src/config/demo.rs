//! Built-in demo data configuration

/// One market of the built-in catalog: name, asset class, and the base
/// levels the synthetic series oscillates around.
pub struct DemoMarket {
    pub name: &'static str,
    pub asset_class: &'static str,
    pub base_price: f64,
    pub base_position: f64,
}

pub struct DemoConfig {
    /// Weekly reports of synthetic history per market.
    pub weeks_of_history: usize,
    pub markets: &'static [DemoMarket],
}

const fn market(
    name: &'static str,
    asset_class: &'static str,
    base_price: f64,
    base_position: f64,
) -> DemoMarket {
    DemoMarket {
        name,
        asset_class,
        base_price,
        base_position,
    }
}

pub const DEMO: DemoConfig = DemoConfig {
    weeks_of_history: 156, // three years of weekly reports
    markets: &[
        market("Gold", "Metals", 1980.0, 180_000.0),
        market("Silver", "Metals", 24.0, 45_000.0),
        market("Copper", "Metals", 3.8, 30_000.0),
        market("Crude Oil", "Energy", 78.0, 320_000.0),
        market("Natural Gas", "Energy", 2.6, 110_000.0),
        market("Euro FX", "Currencies", 1.08, 150_000.0),
        market("Japanese Yen", "Currencies", 0.0067, 90_000.0),
    ],
};
