// Async code to run in main before egui starts up

use crate::Cli;
use crate::data::cache_file::CacheVersion;
use crate::data::demo::DemoVersion;
use crate::data::json_file::JsonVersion;
use crate::data::{CreateDashboardData, DashboardBundle, get_dashboard_data_async};

// The async function to load the bundle before the GUI starts at all
// (so can't rely on gui app state)
pub async fn fetch_dashboard_data(args: &Cli) -> (DashboardBundle, &'static str) {
    // Bundle loading logic: an explicit JSON export wins, then the disk
    // cache unless the user asked for fresh demo data; the demo generator
    // is always the last resort.
    let mut providers: Vec<Box<dyn CreateDashboardData>> = Vec::new();
    if let Some(path) = &args.bundle_json {
        providers.push(Box::new(JsonVersion { path: path.clone() }));
    }
    if args.prefer_demo {
        providers.push(Box::new(DemoVersion));
        providers.push(Box::new(CacheVersion));
    } else {
        providers.push(Box::new(CacheVersion));
        providers.push(Box::new(DemoVersion));
    }

    let (bundle, signature) = get_dashboard_data_async(&providers)
        .await
        .expect("failed to retrieve dashboard data so exiting main function!");

    log::info!(
        "Successfully retrieved dashboard data using: {} ({} markets, {} alerts).",
        signature,
        bundle.catalog.len(),
        bundle.alerts.len()
    );
    (bundle, signature)
}
