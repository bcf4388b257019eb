// ── Selector option derivation ──
//
// Distinct states and cities for populating the selectors. Both are pure
// queries over the full result set and keep first-seen order.

use std::sync::Arc;

use indexmap::IndexSet;

use crate::model::Brewery;

/// Every distinct `state` across the result set, in first-seen order.
pub fn distinct_states(results: &[Arc<Brewery>]) -> Vec<String> {
    results
        .iter()
        .map(|b| b.state.as_str())
        .collect::<IndexSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// Every distinct `city` among records whose `state == state`, in
/// first-seen order. Empty when `state` is empty.
pub fn distinct_cities(results: &[Arc<Brewery>], state: &str) -> Vec<String> {
    if state.is_empty() {
        return Vec::new();
    }

    results
        .iter()
        .filter(|b| b.state == state)
        .map(|b| b.city.as_str())
        .collect::<IndexSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}
