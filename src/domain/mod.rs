// Core value types shared by the analysis pipeline, the engine and the UI
pub mod alert;
pub mod market;
pub mod series;

// Re-export commonly used types
pub use alert::{ClassifiedAlert, RawAlert};
pub use market::{Market, group_by_asset_class};
pub use series::{MarketSeriesPoint, Positions, TraderClass};
