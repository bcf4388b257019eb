// ── Filter engine ──
//
// Pure narrowing of a result set by the three filter scalars. Each stage
// keeps the relative order of survivors, so output order is fetch order.

use std::sync::Arc;

use serde::Serialize;

use crate::model::Brewery;

/// The three user-controlled filter scalars. Empty means "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterSelection {
    /// Exact, case-sensitive match against `Brewery::state`.
    pub state: String,
    /// Exact match against `Brewery::city`.
    pub city: String,
    /// Case-insensitive substring match against `Brewery::name`.
    pub search: String,
}

impl FilterSelection {
    pub fn new(
        state: impl Into<String>,
        city: impl Into<String>,
        search: impl Into<String>,
    ) -> Self {
        Self {
            state: state.into(),
            city: city.into(),
            search: search.into(),
        }
    }

    /// `true` when no scalar narrows the list.
    pub fn is_empty(&self) -> bool {
        self.state.is_empty() && self.city.is_empty() && self.search.is_empty()
    }
}

/// Apply `selection` to `results`, returning the survivors in input order.
///
/// Stages run state → city → search. All predicates are conjunctive, so the
/// order only matters for reading. The input is never modified.
pub fn filter(results: &[Arc<Brewery>], selection: &FilterSelection) -> Vec<Arc<Brewery>> {
    let needle = selection.search.to_lowercase();

    results
        .iter()
        .filter(|b| selection.state.is_empty() || b.state == selection.state)
        .filter(|b| selection.city.is_empty() || b.city == selection.city)
        .filter(|b| needle.is_empty() || b.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// [`filter`] taking the three scalars directly.
pub fn filter_by(
    results: &[Arc<Brewery>],
    state: &str,
    city: &str,
    search: &str,
) -> Vec<Arc<Brewery>> {
    filter(results, &FilterSelection::new(state, city, search))
}
