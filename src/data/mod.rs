// Data providers: the external collaborators that feed the pipeline.
pub mod cache_file;
pub mod demo;
pub mod json_file;
pub mod pre_main_async;

use std::collections::HashMap;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Market, MarketSeriesPoint, RawAlert};

// Re-export commonly used items
pub use cache_file::{BundleCacheFile, write_bundle_async};
pub use demo::DemoVersion;
pub use pre_main_async::fetch_dashboard_data;

/// Everything the dashboard needs for one session: the market catalog, each
/// market's normalized point series, and the raw alert feed.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct DashboardBundle {
    pub catalog: Vec<Market>,
    pub series_by_market: HashMap<String, Vec<MarketSeriesPoint>>,
    pub alerts: Vec<RawAlert>,
}

/// Per-market series source the fetch worker pulls from. One fetch per
/// selected market; any fetch can fail in isolation.
pub trait FetchMarketSeries: Send + Sync {
    fn fetch_series(&self, market: &str) -> Result<Vec<MarketSeriesPoint>>;
}

/// Source backed by an already-loaded bundle. Stands in for a remote COT
/// endpoint; the worker plumbing is identical either way.
pub struct BundleSeriesSource {
    series_by_market: HashMap<String, Vec<MarketSeriesPoint>>,
}

impl BundleSeriesSource {
    pub fn new(bundle: &DashboardBundle) -> Self {
        Self {
            series_by_market: bundle.series_by_market.clone(),
        }
    }
}

impl FetchMarketSeries for BundleSeriesSource {
    fn fetch_series(&self, market: &str) -> Result<Vec<MarketSeriesPoint>> {
        self.series_by_market
            .get(market)
            .cloned()
            .ok_or_else(|| anyhow!("No series data available for market {}", market))
    }
}

#[async_trait]
pub trait CreateDashboardData {
    // Either produce a full bundle OR return an anyhow::error
    async fn create_dashboard_data(&self) -> Result<DashboardBundle>;

    /// A unique identifier for this implementation (so that afterwards we know which one we used).
    fn signature(&self) -> &'static str;
}

pub async fn get_dashboard_data_async(
    implementations: &[Box<dyn CreateDashboardData>],
) -> Result<(DashboardBundle, &'static str)> {
    for imp in implementations {
        match imp.create_dashboard_data().await {
            Ok(bundle) => {
                let signature = imp.signature();
                return Ok((bundle, signature));
            }
            Err(e) => {
                log::info!("Error with an async implementation: {}", e);
                // Continue to the next implementation
            }
        }
    }
    Err(anyhow!("All async implementations failed to create data"))
}
