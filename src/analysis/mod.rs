// The data-shaping pipeline: pure, synchronous, total functions. The engine
// calls these on every recompute; nothing in here blocks or performs I/O.
pub mod alert_gen;
pub mod align;
pub mod classify;
pub mod filter;
pub mod scale;

// Re-export commonly used items
pub use align::{AlignedRecord, align_series};
pub use classify::classify;
pub use filter::{AlertFilters, FilterState, FilterUniverses, derive_universes, filter_alerts};
pub use scale::{AxisConfig, ChartAxes, plan_axes};
