use serde::{Deserialize, Serialize};

/// Static reference data for one futures market, loaded once per session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Market {
    pub name: String,
    pub asset_class: String,
}

/// Group markets by asset class, preserving the catalog's first-seen order
/// of both classes and markets within a class.
pub fn group_by_asset_class(markets: &[Market]) -> Vec<(String, Vec<Market>)> {
    let mut groups: Vec<(String, Vec<Market>)> = Vec::new();
    for market in markets {
        match groups.iter_mut().find(|(class, _)| class == &market.asset_class) {
            Some((_, members)) => members.push(market.clone()),
            None => groups.push((market.asset_class.clone(), vec![market.clone()])),
        }
    }
    groups
}
