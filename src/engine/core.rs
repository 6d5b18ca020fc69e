use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};

use crate::analysis::{
    AlertFilters, AlignedRecord, ChartAxes, FilterUniverses, align_series, classify,
    derive_universes, filter_alerts, plan_axes,
};
use crate::data::{DashboardBundle, FetchMarketSeries};
use crate::domain::{ClassifiedAlert, Market, MarketSeriesPoint, TraderClass, group_by_asset_class};

use super::messages::{FetchRequest, FetchResult};
use super::worker;

/// The dashboard's state holder and recompute driver.
///
/// All derived output (chart model, visible alerts, filter universes) is
/// recomputed on demand from the inputs held here; there is no hidden
/// derived state to fall out of sync.
pub struct DashboardEngine {
    /// Static reference data, loaded once
    pub catalog: Vec<Market>,

    /// The classified alert feed, immutable after load
    alerts: Vec<ClassifiedAlert>,

    /// Current alert filter state, owned here so the UI and the filter pass
    /// always see the same values
    pub filters: AlertFilters,

    /// Per-market series cache. Keys are merged independently as fetches
    /// complete; a completed fetch never clobbers other markets.
    series_by_market: HashMap<String, Vec<MarketSeriesPoint>>,

    /// Markets currently shown on the chart, in toggle order
    selected: Vec<String>,

    /// Fetches dispatched but not yet completed
    in_flight: HashSet<String>,

    /// Markets whose last fetch failed, with the error. Kept out of the
    /// dispatch loop until explicitly retried.
    failed: HashMap<String, String>,

    /// Worker communication
    job_tx: Sender<FetchRequest>,
    result_rx: Receiver<FetchResult>,
}

impl DashboardEngine {
    /// Initialize the engine and spawn the fetch worker. The initial
    /// selection is the first market of each asset class.
    pub fn new(bundle: DashboardBundle, source: Arc<dyn FetchMarketSeries>) -> Self {
        let (job_tx, job_rx) = channel::<FetchRequest>();
        let (result_tx, result_rx) = channel::<FetchResult>();

        worker::spawn_worker_thread(source, job_rx, result_tx);

        let selected = group_by_asset_class(&bundle.catalog)
            .into_iter()
            .map(|(_, members)| members[0].name.clone())
            .collect();

        let alerts = bundle.alerts.into_iter().map(classify).collect();

        Self {
            catalog: bundle.catalog,
            alerts,
            filters: AlertFilters::default(),
            series_by_market: HashMap::new(),
            selected,
            in_flight: HashSet::new(),
            failed: HashMap::new(),
            job_tx,
            result_rx,
        }
    }

    /// THE GAME LOOP.
    /// Drains completed fetches, dispatches missing ones, and returns TRUE
    /// while fetches are outstanding so the UI keeps repainting.
    pub fn update(&mut self) -> bool {
        while let Ok(result) = self.result_rx.try_recv() {
            self.handle_fetch_result(result);
        }

        self.dispatch_missing_fetches();

        !self.in_flight.is_empty()
    }

    // --- SELECTION ---

    pub fn toggle_market(&mut self, name: &str) {
        if let Some(pos) = self.selected.iter().position(|m| m == name) {
            // The chart always shows at least one market
            if self.selected.len() > 1 {
                self.selected.remove(pos);
            }
        } else {
            self.selected.push(name.to_string());
        }
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.iter().any(|m| m == name)
    }

    pub fn selected_markets(&self) -> &[String] {
        &self.selected
    }

    pub fn markets_by_asset_class(&self) -> Vec<(String, Vec<Market>)> {
        group_by_asset_class(&self.catalog)
    }

    // --- PURE RECOMPUTE ACCESSORS ---

    /// Aligned records plus planned axes for the current selection.
    pub fn chart_model(&self) -> (Vec<AlignedRecord>, ChartAxes) {
        let records = align_series(&self.series_by_market, &self.selected);
        let axes = plan_axes(&records, TraderClass::LargeSpec, TraderClass::Commercial);
        (records, axes)
    }

    pub fn filter_universes(&self) -> FilterUniverses {
        derive_universes(&self.catalog, &self.alerts)
    }

    pub fn visible_alerts(&self) -> Vec<&ClassifiedAlert> {
        let universes = self.filter_universes();
        filter_alerts(&self.alerts, &self.filters, &self.catalog, &universes)
    }

    // --- TELEMETRY ---

    pub fn status_msg(&self) -> Option<String> {
        if self.in_flight.is_empty() {
            None
        } else {
            Some(format!("Loading {} market(s)", self.in_flight.len()))
        }
    }

    pub fn fetch_error(&self, market: &str) -> Option<&str> {
        self.failed.get(market).map(String::as_str)
    }

    pub fn retry_market(&mut self, market: &str) {
        self.failed.remove(market);
    }

    // --- INTERNAL LOGIC ---

    fn handle_fetch_result(&mut self, result: FetchResult) {
        self.in_flight.remove(&result.market);

        match result.result {
            Ok(series) => {
                // Last-write-per-key merge. The result is kept even if the
                // market was deselected mid-flight: this map is a cache, and
                // alignment only reads currently selected keys.
                log::info!("Merged series for {} ({} points)", result.market, series.len());
                self.failed.remove(&result.market);
                self.series_by_market.insert(result.market, series);
            }
            Err(e) => {
                log::error!("Fetch failed for {}: {}", result.market, e);
                self.failed.insert(result.market, e);
            }
        }
    }

    fn dispatch_missing_fetches(&mut self) {
        for market in self.selected.clone() {
            if self.series_by_market.contains_key(&market)
                || self.in_flight.contains(&market)
                || self.failed.contains_key(&market)
            {
                continue;
            }

            self.in_flight.insert(market.clone());
            // If the worker is gone we are shutting down; ignore the error.
            let _ = self.job_tx.send(FetchRequest { market });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::BundleSeriesSource;
    use crate::domain::{Positions, RawAlert};
    use std::time::{Duration, Instant};

    fn test_bundle() -> DashboardBundle {
        let point = |date: &str, price: f64| MarketSeriesPoint {
            date: date.to_string(),
            positions: Positions {
                large_spec_long: 10.0,
                ..Positions::default()
            },
            price: Some(price),
        };

        let catalog = vec![
            Market {
                name: "Gold".to_string(),
                asset_class: "Metals".to_string(),
            },
            Market {
                name: "Crude Oil".to_string(),
                asset_class: "Energy".to_string(),
            },
        ];

        let series_by_market = [
            ("Gold".to_string(), vec![point("2025-09-01", 1980.0)]),
            ("Crude Oil".to_string(), vec![point("2025-09-01", 78.0)]),
        ]
        .into_iter()
        .collect();

        DashboardBundle {
            catalog,
            series_by_market,
            alerts: vec![RawAlert {
                timestamp: "2025-09-01T00:00:00".to_string(),
                alert_type: "max_net_long".to_string(),
                message: "Gold large speculators are at maximum net long".to_string(),
                market: None,
                value: None,
            }],
        }
    }

    fn engine_for(bundle: DashboardBundle) -> DashboardEngine {
        let source = Arc::new(BundleSeriesSource::new(&bundle));
        DashboardEngine::new(bundle, source)
    }

    fn pump_until_idle(engine: &mut DashboardEngine) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while engine.update() {
            assert!(Instant::now() < deadline, "engine never went idle");
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn initial_selection_is_first_market_per_asset_class() {
        let engine = engine_for(test_bundle());
        assert_eq!(engine.selected_markets(), &["Gold", "Crude Oil"]);
    }

    #[test]
    fn fetches_complete_and_feed_the_chart_model() {
        let mut engine = engine_for(test_bundle());
        pump_until_idle(&mut engine);

        let (records, axes) = engine.chart_model();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].sums.large_spec_long, 20.0);
        assert_eq!(records[0].prices_by_market["Gold"], Some(1980.0));
        assert!(axes.price.max >= 1980.0);
    }

    #[test]
    fn completed_fetch_for_deselected_market_is_kept_but_not_rendered() {
        let mut engine = engine_for(test_bundle());
        pump_until_idle(&mut engine);

        engine.toggle_market("Crude Oil");
        let (records, _) = engine.chart_model();
        assert!(!records[0].prices_by_market.contains_key("Crude Oil"));

        // Cached data makes re-selection instant: no new fetch needed.
        engine.toggle_market("Crude Oil");
        assert!(!engine.update());
        let (records, _) = engine.chart_model();
        assert_eq!(records[0].prices_by_market["Crude Oil"], Some(78.0));
    }

    #[test]
    fn failed_fetch_is_isolated_and_degrades_gracefully() {
        let mut bundle = test_bundle();
        bundle.series_by_market.remove("Crude Oil");

        let mut engine = engine_for(bundle);
        pump_until_idle(&mut engine);

        assert!(engine.fetch_error("Crude Oil").is_some());
        let (records, _) = engine.chart_model();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].prices_by_market["Crude Oil"], None);
    }

    #[test]
    fn last_selected_market_cannot_be_deselected() {
        let mut engine = engine_for(test_bundle());
        engine.toggle_market("Gold");
        engine.toggle_market("Crude Oil");
        assert_eq!(engine.selected_markets().len(), 1);
    }

    #[test]
    fn alert_feed_is_classified_on_load() {
        let engine = engine_for(test_bundle());
        let visible = engine.visible_alerts();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].resolved_market.as_deref(), Some("Gold"));
    }
}
