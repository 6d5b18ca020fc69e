use serde::{Deserialize, Serialize};

/// An alert record as delivered by the feed. `market` is optional; when it
/// is absent the classifier tries to recover the market from the message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAlert {
    pub timestamp: String,
    pub alert_type: String,
    pub message: String,
    pub market: Option<String>,
    pub value: Option<f64>,
}

/// A raw alert plus its resolved canonical market name. Produced once by
/// the classifier and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedAlert {
    pub alert: RawAlert,
    /// `None` is a valid terminal state: the alert stays visible under
    /// unrestricted filters but never matches a market/asset-class filter.
    pub resolved_market: Option<String>,
}
