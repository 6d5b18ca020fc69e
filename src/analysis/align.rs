//! Time-series alignment: merge per-market point series onto the shared
//! date axis the chart draws against.
//!
//! Markets report on their own schedules, so the aligned axis is the sorted
//! union of every selected market's dates. A market with no point at a given
//! date contributes 0 to every summed category and an explicit `None` price,
//! never a silent omission.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::domain::{MarketSeriesPoint, Positions};

/// One row of the aligned chart model: category sums across all selected
/// markets at `date`, plus each market's price (missing price is `None`).
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedRecord {
    pub date: String,
    pub sums: Positions,
    pub prices_by_market: BTreeMap<String, Option<f64>>,
}

/// Merge the selected markets' series onto the union date axis.
///
/// Total function: an empty selection yields an empty sequence, and a
/// selected market with no loaded series simply contributes null prices at
/// every union date. The selection is reduced to a sorted set internally,
/// so permuting or duplicating `selected` never changes the output.
pub fn align_series(
    series_by_market: &HashMap<String, Vec<MarketSeriesPoint>>,
    selected: &[String],
) -> Vec<AlignedRecord> {
    let markets: BTreeSet<&str> = selected.iter().map(String::as_str).collect();

    let mut dates: BTreeSet<&str> = BTreeSet::new();
    for market in &markets {
        if let Some(series) = series_by_market.get(*market) {
            dates.extend(series.iter().map(|point| point.date.as_str()));
        }
    }

    dates
        .into_iter()
        .map(|date| {
            let mut sums = Positions::default();
            let mut prices_by_market = BTreeMap::new();

            for market in &markets {
                // Exact-date lookup; absence is valid, not an error.
                let point = series_by_market
                    .get(*market)
                    .and_then(|series| series.iter().find(|p| p.date == date));

                let price = match point {
                    Some(point) => {
                        sums.accumulate(&point.positions);
                        point.price
                    }
                    None => None,
                };
                prices_by_market.insert(market.to_string(), price);
            }

            AlignedRecord {
                date: date.to_string(),
                sums,
                prices_by_market,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(date: &str, large_spec_long: f64, price: Option<f64>) -> MarketSeriesPoint {
        MarketSeriesPoint {
            date: date.to_string(),
            positions: Positions {
                large_spec_long,
                ..Positions::default()
            },
            price,
        }
    }

    fn series_map(entries: &[(&str, Vec<MarketSeriesPoint>)]) -> HashMap<String, Vec<MarketSeriesPoint>> {
        entries
            .iter()
            .map(|(name, series)| (name.to_string(), series.clone()))
            .collect()
    }

    fn selection(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn empty_selection_yields_empty_sequence() {
        let data = series_map(&[("Gold", vec![point("2025-09-01", 10.0, Some(1980.0))])]);
        assert!(align_series(&data, &[]).is_empty());
    }

    #[test]
    fn union_contains_every_selected_markets_dates() {
        let data = series_map(&[
            ("Gold", vec![point("2025-09-01", 1.0, None), point("2025-09-08", 2.0, None)]),
            ("Silver", vec![point("2025-09-08", 3.0, None), point("2025-09-15", 4.0, None)]),
        ]);

        let aligned = align_series(&data, &selection(&["Gold", "Silver"]));
        let dates: Vec<&str> = aligned.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, vec!["2025-09-01", "2025-09-08", "2025-09-15"]);
    }

    #[test]
    fn missing_market_zero_fills_sums_and_nulls_price() {
        // Scenario: Gold has a point on 2025-09-01, Silver does not.
        let data = series_map(&[
            ("Gold", vec![point("2025-09-01", 10.0, Some(1980.0))]),
            ("Silver", vec![point("2025-09-08", 5.0, Some(24.0))]),
        ]);

        let aligned = align_series(&data, &selection(&["Gold", "Silver"]));
        let record = &aligned[0];
        assert_eq!(record.date, "2025-09-01");
        assert_eq!(record.sums.large_spec_long, 10.0);
        assert_eq!(record.prices_by_market["Gold"], Some(1980.0));
        assert_eq!(record.prices_by_market["Silver"], None);
    }

    #[test]
    fn output_is_independent_of_selection_order() {
        let data = series_map(&[
            ("Gold", vec![point("2025-09-01", 10.0, Some(1980.0))]),
            ("Silver", vec![point("2025-09-01", 5.0, Some(24.0))]),
            ("Copper", vec![point("2025-09-08", 7.0, None)]),
        ]);

        let forward = align_series(&data, &selection(&["Gold", "Silver", "Copper"]));
        let reversed = align_series(&data, &selection(&["Copper", "Silver", "Gold"]));
        assert_eq!(forward, reversed);
    }

    #[test]
    fn market_without_loaded_series_contributes_only_null_prices() {
        let data = series_map(&[("Gold", vec![point("2025-09-01", 10.0, Some(1980.0))])]);

        let aligned = align_series(&data, &selection(&["Gold", "Platinum"]));
        assert_eq!(aligned.len(), 1);
        assert_eq!(aligned[0].prices_by_market["Platinum"], None);
        assert_eq!(aligned[0].sums.large_spec_long, 10.0);
    }
}
