//! Built-in synthetic data source.
//!
//! Produces a deterministic bundle (catalog, weekly per-market series, alert
//! feed) with no network access: smooth positioning cycles plus a little
//! keyed noise, so charts look plausible and the alert generator has real
//! extremes to find.

use std::collections::HashMap;
use std::f64::consts::TAU;
use std::hash::{DefaultHasher, Hash, Hasher};

use anyhow::Result;
use async_trait::async_trait;
use chrono::{Duration, Utc};

use crate::analysis::alert_gen::generate_market_alerts;
use crate::config::DEMO;
use crate::config::demo::DemoMarket;
use crate::data::{CreateDashboardData, DashboardBundle};
use crate::domain::{Market, MarketSeriesPoint, Positions, RawAlert};

pub struct DemoVersion;

#[async_trait]
impl CreateDashboardData for DemoVersion {
    fn signature(&self) -> &'static str {
        "Synthetic Demo"
    }

    async fn create_dashboard_data(&self) -> Result<DashboardBundle> {
        Ok(build_demo_bundle())
    }
}

pub fn build_demo_bundle() -> DashboardBundle {
    let catalog: Vec<Market> = DEMO
        .markets
        .iter()
        .map(|m| Market {
            name: m.name.to_string(),
            asset_class: m.asset_class.to_string(),
        })
        .collect();

    let mut series_by_market = HashMap::new();
    let mut alerts = Vec::new();

    for spec in DEMO.markets {
        let series = build_market_series(spec);

        let stamp = series
            .last()
            .map(|p| format!("{}T00:00:00", p.date))
            .unwrap_or_default();
        alerts.extend(generate_market_alerts(spec.name, &series, &stamp));

        series_by_market.insert(spec.name.to_string(), series);
    }

    // A feed item with an explicit market field, and one no classifier can
    // place; both paths show up in the alerts panel.
    alerts.push(RawAlert {
        timestamp: format!("{}T00:00:00", Utc::now().date_naive()),
        alert_type: "rapid_change".to_string(),
        message: "Positioning swung sharply against last week's report".to_string(),
        market: Some("Gold".to_string()),
        value: None,
    });
    alerts.push(RawAlert {
        timestamp: format!("{}T00:00:00", Utc::now().date_naive()),
        alert_type: "ingest".to_string(),
        message: "Weekly COT ingest completed".to_string(),
        market: None,
        value: None,
    });

    DashboardBundle {
        catalog,
        series_by_market,
        alerts,
    }
}

fn build_market_series(spec: &DemoMarket) -> Vec<MarketSeriesPoint> {
    let weeks = DEMO.weeks_of_history;
    let seed = name_seed(spec.name);
    let phase_offset = (seed % 628) as f64 / 100.0;
    let today = Utc::now().date_naive();

    (0..weeks)
        .map(|i| {
            let date = today - Duration::weeks((weeks - 1 - i) as i64);
            let phase = i as f64 / 52.0 * TAU + phase_offset;
            let swing = phase.sin();
            let b = spec.base_position;

            let positions = Positions {
                large_spec_long: b * (0.55 + 0.20 * swing + 0.05 * noise(seed, i, 1)),
                large_spec_short: b * (0.45 - 0.20 * swing + 0.05 * noise(seed, i, 2)),
                // Commercials hedge roughly opposite the speculators
                comms_long: b * (0.48 - 0.18 * swing + 0.05 * noise(seed, i, 3)),
                comms_short: b * (0.52 + 0.18 * swing + 0.05 * noise(seed, i, 4)),
                small_spec_long: b * (0.12 + 0.03 * noise(seed, i, 5)),
                small_spec_short: b * (0.12 + 0.03 * noise(seed, i, 6)),
            };

            // A sparse scattering of missing prices keeps the null-price
            // path honest all the way to the chart.
            let price = if (i + seed as usize) % 23 == 0 {
                None
            } else {
                let drift = 0.25 * (phase * 0.7).sin() + 0.04 * (noise(seed, i, 7) - 0.5);
                Some(spec.base_price * (1.0 + drift))
            };

            MarketSeriesPoint {
                date: date.format("%Y-%m-%d").to_string(),
                positions,
                price,
            }
        })
        .collect()
}

fn name_seed(name: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    name.hash(&mut hasher);
    hasher.finish()
}

/// Deterministic value in [0, 1) keyed on (seed, index, stream).
fn noise(seed: u64, i: usize, stream: u64) -> f64 {
    let mut x = seed
        .wrapping_add(i as u64 + 1)
        .wrapping_mul(0x9E37_79B9_7F4A_7C15)
        .wrapping_add(stream.wrapping_mul(0xBF58_476D_1CE4_E5B9));
    x ^= x >> 31;
    x = x.wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^= x >> 29;
    (x >> 11) as f64 / (1u64 << 53) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundle_has_a_series_per_catalog_market() {
        let bundle = build_demo_bundle();
        assert_eq!(bundle.catalog.len(), DEMO.markets.len());
        for market in &bundle.catalog {
            let series = &bundle.series_by_market[&market.name];
            assert_eq!(series.len(), DEMO.weeks_of_history);
        }
    }

    #[test]
    fn series_dates_are_unique_and_ascending() {
        let bundle = build_demo_bundle();
        for series in bundle.series_by_market.values() {
            for pair in series.windows(2) {
                assert!(pair[0].date < pair[1].date);
            }
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let a = build_market_series(&DEMO.markets[0]);
        let b = build_market_series(&DEMO.markets[0]);
        assert_eq!(a, b);
    }

    #[test]
    fn positions_stay_positive() {
        let bundle = build_demo_bundle();
        for series in bundle.series_by_market.values() {
            for point in series {
                assert!(point.positions.large_spec_long >= 0.0);
                assert!(point.positions.large_spec_short >= 0.0);
                assert!(point.positions.comms_long >= 0.0);
                assert!(point.positions.comms_short >= 0.0);
            }
        }
    }
}
