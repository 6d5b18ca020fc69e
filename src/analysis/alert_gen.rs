//! Alert derivation from COT positioning history.
//!
//! Looks at a market's large-speculator net position against its recent
//! history and emits free-text alerts for positioning extremes and rapid
//! week-over-week swings. Message text leads with the market name followed
//! by "large speculators", which is the pattern the classifier keys on.

use statrs::statistics::{Data, OrderStatistics};

use crate::domain::{MarketSeriesPoint, RawAlert, TraderClass};

/// How many trailing reports the percentile history covers.
pub const HISTORY_WINDOW: usize = 200;

/// Below this much history the percentiles are too noisy to alert on.
pub const MIN_HISTORY_POINTS: usize = 100;

/// A week-over-week net change above this fraction of the mean absolute
/// historical net counts as a rapid repositioning.
const RAPID_CHANGE_FRACTION: f64 = 0.10;

/// Derive alerts for one market from its date-ascending series. Returns an
/// empty vector when the history is too short. `timestamp` is stamped onto
/// every emitted alert.
pub fn generate_market_alerts(
    market: &str,
    series: &[MarketSeriesPoint],
    timestamp: &str,
) -> Vec<RawAlert> {
    let start = series.len().saturating_sub(HISTORY_WINDOW);
    let nets: Vec<f64> = series[start..]
        .iter()
        .map(|p| p.positions.net(TraderClass::LargeSpec))
        .collect();

    if nets.len() < MIN_HISTORY_POINTS {
        return Vec::new();
    }

    let current = *nets.last().unwrap_or(&0.0);
    let mut alerts = Vec::new();
    let make = |alert_type: &str, message: String, value: f64| RawAlert {
        timestamp: timestamp.to_string(),
        alert_type: alert_type.to_string(),
        message,
        market: None,
        value: Some(value),
    };

    let mut history = Data::new(nets.clone());

    let net_long_90th = history.percentile(90);
    if current > net_long_90th {
        alerts.push(make(
            "max_net_long",
            format!(
                "{} large speculators are at maximum net long (current: {:.0}, 90th percentile: {:.0})",
                market, current, net_long_90th
            ),
            current,
        ));
    }

    let net_short_10th = history.percentile(10);
    if current < net_short_10th {
        alerts.push(make(
            "extreme_short",
            format!(
                "{} large speculators are at extreme net short (current: {:.0}, 10th percentile: {:.0})",
                market, current, net_short_10th
            ),
            current,
        ));
    }

    if nets.len() > 1 {
        let previous = nets[nets.len() - 2];
        let change = current - previous;
        let mean_abs_net = nets.iter().map(|n| n.abs()).sum::<f64>() / nets.len() as f64;
        if change.abs() > RAPID_CHANGE_FRACTION * mean_abs_net {
            alerts.push(make(
                "rapid_change",
                format!(
                    "{} large speculators have rapidly changed positioning (change: {:+.0})",
                    market, change
                ),
                change,
            ));
        }
    }

    alerts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::classify;
    use crate::domain::Positions;

    fn series_with_nets(nets: &[f64]) -> Vec<MarketSeriesPoint> {
        nets.iter()
            .enumerate()
            .map(|(i, net)| MarketSeriesPoint {
                date: format!("2024-{:02}-{:02}", 1 + i / 28, 1 + i % 28),
                positions: Positions {
                    large_spec_long: net.max(0.0),
                    large_spec_short: (-net).max(0.0),
                    ..Positions::default()
                },
                price: None,
            })
            .collect()
    }

    #[test]
    fn too_little_history_emits_nothing() {
        let series = series_with_nets(&vec![100.0; MIN_HISTORY_POINTS - 1]);
        assert!(generate_market_alerts("Gold", &series, "t").is_empty());
    }

    #[test]
    fn extreme_net_long_triggers_alert() {
        // Flat history with a final spike far above the 90th percentile.
        let mut nets = vec![100.0; 120];
        nets.push(10_000.0);
        let series = series_with_nets(&nets);

        let alerts = generate_market_alerts("Gold", &series, "2025-09-01T00:00:00");
        assert!(alerts.iter().any(|a| a.alert_type == "max_net_long"));
        // The spike is also a rapid change relative to flat history.
        assert!(alerts.iter().any(|a| a.alert_type == "rapid_change"));
    }

    #[test]
    fn extreme_net_short_triggers_alert() {
        let mut nets = vec![100.0; 120];
        nets.push(-10_000.0);
        let series = series_with_nets(&nets);

        let alerts = generate_market_alerts("Silver", &series, "2025-09-01T00:00:00");
        assert!(alerts.iter().any(|a| a.alert_type == "extreme_short"));
    }

    #[test]
    fn quiet_market_emits_nothing() {
        let series = series_with_nets(&vec![100.0; 150]);
        assert!(generate_market_alerts("Gold", &series, "t").is_empty());
    }

    #[test]
    fn generated_messages_classify_back_to_the_market() {
        let mut nets = vec![100.0; 120];
        nets.push(10_000.0);
        let series = series_with_nets(&nets);

        for alert in generate_market_alerts("Crude Oil", &series, "t") {
            let classified = classify(alert);
            assert_eq!(classified.resolved_market.as_deref(), Some("Crude Oil"));
        }
    }
}
