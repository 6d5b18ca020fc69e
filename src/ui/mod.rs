// UI layer: eframe app, chart view, alerts panel, styling
pub mod alerts_panel;
pub mod app;
pub mod chart_view;
pub mod config;
pub mod utils;

// Re-export commonly used types
pub use app::CotScopeApp;
