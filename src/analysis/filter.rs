//! Multi-dimension alert filtering.
//!
//! Three independent dimensions (asset class, market, alert type), each
//! either unrestricted or an explicit set of allowed values. An explicit
//! set covering the entire *current* universe collapses to unrestricted at
//! evaluation time; the universes can change as metadata loads, so this is
//! re-checked on every filter pass rather than baked into the state.

use std::collections::{BTreeSet, HashMap};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::domain::{ClassifiedAlert, Market};

/// Selection state of one filter dimension.
///
/// `Unrestricted` is a sentinel distinct from "every value explicitly
/// selected": the UI stores what the user actually picked, and the collapse
/// happens against whatever the universe is at evaluation time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterState {
    #[default]
    Unrestricted,
    Only(BTreeSet<String>),
}

impl FilterState {
    pub fn only<I: IntoIterator<Item = String>>(values: I) -> Self {
        FilterState::Only(values.into_iter().collect())
    }

    /// True when this state imposes no restriction under `universe` sizing:
    /// either the sentinel, or an explicit set as large as the universe.
    fn is_effectively_unrestricted(&self, universe: &[String]) -> bool {
        match self {
            FilterState::Unrestricted => true,
            FilterState::Only(values) => !universe.is_empty() && values.len() == universe.len(),
        }
    }

    fn allows(&self, value: &str) -> bool {
        match self {
            FilterState::Unrestricted => true,
            FilterState::Only(values) => values.contains(value),
        }
    }
}

/// The three filter dimensions of the alerts panel.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AlertFilters {
    pub asset_class: FilterState,
    pub market: FilterState,
    pub alert_type: FilterState,
}

/// Distinct values available per dimension, for UI population and for the
/// select-all collapse.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterUniverses {
    pub asset_classes: Vec<String>,
    pub markets: Vec<String>,
    pub alert_types: Vec<String>,
}

/// Derive the current universes from the market catalog and the alert set,
/// preserving catalog/feed order.
pub fn derive_universes(catalog: &[Market], alerts: &[ClassifiedAlert]) -> FilterUniverses {
    FilterUniverses {
        asset_classes: catalog
            .iter()
            .map(|m| m.asset_class.clone())
            .unique()
            .collect(),
        markets: catalog.iter().map(|m| m.name.clone()).collect(),
        alert_types: alerts
            .iter()
            .map(|a| a.alert.alert_type.clone())
            .filter(|t| !t.is_empty())
            .unique()
            .collect(),
    }
}

/// Resolve the visible subset of `alerts` under `filters`.
///
/// An alert with no resolved market (or a market absent from the catalog)
/// passes only when the market and asset-class dimensions are unrestricted.
pub fn filter_alerts<'a>(
    alerts: &'a [ClassifiedAlert],
    filters: &AlertFilters,
    catalog: &[Market],
    universes: &FilterUniverses,
) -> Vec<&'a ClassifiedAlert> {
    let asset_restricted = !filters
        .asset_class
        .is_effectively_unrestricted(&universes.asset_classes);
    let market_restricted = !filters.market.is_effectively_unrestricted(&universes.markets);
    let type_restricted = !filters
        .alert_type
        .is_effectively_unrestricted(&universes.alert_types);

    let asset_class_of: HashMap<&str, &str> = catalog
        .iter()
        .map(|m| (m.name.as_str(), m.asset_class.as_str()))
        .collect();

    alerts
        .iter()
        .filter(|alert| {
            let resolved = alert.resolved_market.as_deref();

            let asset_match = !asset_restricted
                || resolved
                    .and_then(|market| asset_class_of.get(market))
                    .is_some_and(|class| filters.asset_class.allows(class));

            let market_match = !market_restricted
                || resolved.is_some_and(|market| filters.market.allows(market));

            let type_match = !type_restricted || filters.alert_type.allows(&alert.alert.alert_type);

            asset_match && market_match && type_match
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::classify;
    use crate::domain::RawAlert;

    fn catalog() -> Vec<Market> {
        [("Gold", "Metals"), ("Silver", "Metals"), ("Crude Oil", "Energy")]
            .iter()
            .map(|(name, class)| Market {
                name: name.to_string(),
                asset_class: class.to_string(),
            })
            .collect()
    }

    fn alert(message: &str, alert_type: &str, market: Option<&str>) -> ClassifiedAlert {
        classify(RawAlert {
            timestamp: "2025-09-01T00:00:00".to_string(),
            alert_type: alert_type.to_string(),
            message: message.to_string(),
            market: market.map(str::to_string),
            value: None,
        })
    }

    fn feed() -> Vec<ClassifiedAlert> {
        vec![
            alert("Gold large speculators at maximum net long", "max_net_long", None),
            alert("Crude Oil large speculators at extreme net short", "extreme_short", None),
            alert("no pattern here", "rapid_change", None),
        ]
    }

    #[test]
    fn unrestricted_filters_pass_everything() {
        let alerts = feed();
        let catalog = catalog();
        let universes = derive_universes(&catalog, &alerts);

        let visible = filter_alerts(&alerts, &AlertFilters::default(), &catalog, &universes);
        assert_eq!(visible.len(), 3);
    }

    #[test]
    fn full_explicit_set_matches_unrestricted() {
        let alerts = feed();
        let catalog = catalog();
        let universes = derive_universes(&catalog, &alerts);

        let filters = AlertFilters {
            asset_class: FilterState::only(universes.asset_classes.iter().cloned()),
            market: FilterState::only(universes.markets.iter().cloned()),
            alert_type: FilterState::only(universes.alert_types.iter().cloned()),
        };

        let explicit = filter_alerts(&alerts, &filters, &catalog, &universes);
        let sentinel = filter_alerts(&alerts, &AlertFilters::default(), &catalog, &universes);
        assert_eq!(explicit, sentinel);
    }

    #[test]
    fn restricted_asset_class_excludes_other_classes_and_unresolved() {
        // Scenario: Silver alert vs an Energy-only asset-class filter.
        let alerts = vec![
            alert("Silver large speculators have reduced net long position", "reversal", None),
            alert("Crude Oil large speculators at extreme net short", "extreme_short", None),
            alert("no pattern here", "rapid_change", None),
        ];
        let catalog = catalog();
        let universes = derive_universes(&catalog, &alerts);

        let filters = AlertFilters {
            asset_class: FilterState::only(["Energy".to_string()]),
            ..AlertFilters::default()
        };

        let visible = filter_alerts(&alerts, &filters, &catalog, &universes);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].resolved_market.as_deref(), Some("Crude Oil"));
    }

    #[test]
    fn restricted_market_filter_needs_resolved_member() {
        let alerts = feed();
        let catalog = catalog();
        let universes = derive_universes(&catalog, &alerts);

        let filters = AlertFilters {
            market: FilterState::only(["Gold".to_string()]),
            ..AlertFilters::default()
        };

        let visible = filter_alerts(&alerts, &filters, &catalog, &universes);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].resolved_market.as_deref(), Some("Gold"));
    }

    #[test]
    fn select_all_does_not_survive_universe_growth() {
        // Under a {Metals, Energy} universe, selecting both collapses to
        // unrestricted. Once Currencies appears the same explicit set must
        // behave as a real restriction again.
        let mut alerts = vec![
            alert("Gold large speculators at maximum net long", "max_net_long", None),
            alert("Crude Oil large speculators at extreme net short", "extreme_short", None),
        ];
        let mut catalog = catalog();

        let filters = AlertFilters {
            asset_class: FilterState::only(["Metals".to_string(), "Energy".to_string()]),
            ..AlertFilters::default()
        };

        let universes = derive_universes(&catalog, &alerts);
        assert_eq!(
            filter_alerts(&alerts, &filters, &catalog, &universes).len(),
            2
        );

        catalog.push(Market {
            name: "Euro FX".to_string(),
            asset_class: "Currencies".to_string(),
        });
        alerts.push(alert("Euro FX large speculators at maximum net long", "max_net_long", None));

        let universes = derive_universes(&catalog, &alerts);
        let visible = filter_alerts(&alerts, &filters, &catalog, &universes);
        assert_eq!(visible.len(), 2);
        assert!(visible
            .iter()
            .all(|a| a.resolved_market.as_deref() != Some("Euro FX")));
    }
}
