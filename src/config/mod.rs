//! Configuration module for the cot-scope application.

pub mod chart;
pub mod demo;
pub mod persistence;

// Re-export commonly used items
pub use chart::CHART;
pub use demo::DEMO;
pub use persistence::PERSISTENCE;
