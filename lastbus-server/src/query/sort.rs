//! Departure ordering.

use serde::{Deserialize, Serialize};

/// Which departures to list first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Dataset order: earliest departure first.
    #[default]
    Early,
    /// Reverse dataset order: latest departure first.
    Late,
}

/// Order a schedule list for display.
///
/// Datasets are already in departure order, and a bare clock reading cannot
/// be ranked without knowing where the service day starts, so this never
/// compares times: `Early` keeps the given order and `Late` reverses it.
pub fn sort_by_departure<T: Clone>(records: &[T], order: SortOrder) -> Vec<T> {
    match order {
        SortOrder::Early => records.to_vec(),
        SortOrder::Late => records.iter().rev().cloned().collect(),
    }
}
