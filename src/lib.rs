#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::type_complexity)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod ui;

use std::sync::Arc;

// Re-export commonly used types
pub use analysis::{AlignedRecord, AxisConfig, ChartAxes};
pub use data::{BundleSeriesSource, DashboardBundle, fetch_dashboard_data, write_bundle_async};
pub use domain::{ClassifiedAlert, Market, MarketSeriesPoint, RawAlert, TraderClass};
pub use engine::DashboardEngine;
pub use ui::CotScopeApp;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Regenerate demo data instead of reading the local bundle cache
    #[arg(long, default_value_t = false)]
    pub prefer_demo: bool,

    /// Load the dashboard bundle from a JSON export instead
    #[arg(long)]
    pub bundle_json: Option<std::path::PathBuf>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext, bundle: DashboardBundle) -> Box<dyn eframe::App> {
    // The loaded bundle doubles as the fetch source; a remote COT endpoint
    // would slot in behind the same trait.
    let source = Arc::new(BundleSeriesSource::new(&bundle));

    let engine = DashboardEngine::new(bundle, source);

    let app = ui::CotScopeApp::new(cc, engine);
    Box::new(app)
}
