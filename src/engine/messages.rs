use crate::domain::MarketSeriesPoint;

/// A request to fetch one market's point series.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub market: String,
}

/// The outcome of one fetch, delivered whenever it completes. Completions
/// arrive in any order; the engine merges them per market key.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub market: String,
    pub result: Result<Vec<MarketSeriesPoint>, String>,
}
