// ── Finder view state ──
//
// The explicit state struct behind the brewery finder: result set, total
// count, load status, and filter selection. Every mutation goes through
// `Finder::apply`, which is also where the city invariant is enforced.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::filter::{self, FilterSelection};
use crate::model::Brewery;
use crate::options;

/// Lifecycle of the single directory fetch.
///
/// Drives banner rendering only. A `Failed` status can coexist with a result
/// set from an earlier successful fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

impl LoadStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The failure message, if the last fetch failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::Loading => f.write_str("loading"),
            Self::Loaded => f.write_str("loaded"),
            Self::Failed(message) => write!(f, "failed: {message}"),
        }
    }
}

/// Every state transition the finder accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum FinderEvent {
    // ── Fetch lifecycle ───────────────────────────────────────────
    FetchStarted,
    FetchSucceeded(Vec<Brewery>),
    FetchFailed(String),

    // ── Filter inputs ─────────────────────────────────────────────
    /// Select a state (`""` = all). Always clears the city.
    SelectState(String),
    /// Select a city (`""` = all) within the selected state.
    SelectCity(String),
    /// Replace the search text.
    SetSearch(String),
}

/// Explicit, owned view state for the brewery finder.
#[derive(Debug, Clone, Default)]
pub struct Finder {
    results: Arc<Vec<Arc<Brewery>>>,
    total: usize,
    status: LoadStatus,
    selection: FilterSelection,
}

impl Finder {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// The full, unfiltered result set (cheap `Arc` clone).
    pub fn results(&self) -> Arc<Vec<Arc<Brewery>>> {
        Arc::clone(&self.results)
    }

    /// Length of the result set from the last successful fetch.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// The result set narrowed by the current selection.
    pub fn filtered(&self) -> Vec<Arc<Brewery>> {
        filter::filter(&self.results, &self.selection)
    }

    /// Distinct states for the state selector.
    pub fn states(&self) -> Vec<String> {
        options::distinct_states(&self.results)
    }

    /// Distinct cities of the selected state for the city selector.
    pub fn cities(&self) -> Vec<String> {
        options::distinct_cities(&self.results, &self.selection.state)
    }

    // ── Mutation ─────────────────────────────────────────────────────

    /// Apply one event. This is the only way to change finder state.
    ///
    /// Returns `true` if anything changed.
    pub fn apply(&mut self, event: FinderEvent) -> bool {
        match event {
            FinderEvent::FetchStarted => {
                self.status = LoadStatus::Loading;
                true
            }
            FinderEvent::FetchSucceeded(breweries) => {
                debug!(count = breweries.len(), "result set replaced");
                self.total = breweries.len();
                self.results = Arc::new(breweries.into_iter().map(Arc::new).collect());
                self.status = LoadStatus::Loaded;
                self.drop_stale_selection();
                true
            }
            FinderEvent::FetchFailed(message) => {
                warn!(%message, "fetch failed; keeping previous result set");
                self.status = LoadStatus::Failed(message);
                true
            }
            FinderEvent::SelectState(state) => {
                if state == self.selection.state && self.selection.city.is_empty() {
                    return false;
                }
                debug!(%state, "state selected");
                self.selection.state = state;
                self.selection.city.clear();
                true
            }
            FinderEvent::SelectCity(city) => {
                if city == self.selection.city {
                    return false;
                }
                if !city.is_empty() && !self.cities().contains(&city) {
                    debug!(
                        %city,
                        state = %self.selection.state,
                        "city rejected: not in the selected state"
                    );
                    return false;
                }
                debug!(%city, "city selected");
                self.selection.city = city;
                true
            }
            FinderEvent::SetSearch(search) => {
                if search == self.selection.search {
                    return false;
                }
                self.selection.search = search;
                true
            }
        }
    }

    /// After a result set swap, clear a state or city that no longer exists.
    fn drop_stale_selection(&mut self) {
        if !self.selection.state.is_empty()
            && !self.results.iter().any(|b| b.state == self.selection.state)
        {
            self.selection.state.clear();
            self.selection.city.clear();
        } else if !self.selection.city.is_empty() && !self.cities().contains(&self.selection.city)
        {
            self.selection.city.clear();
        }
    }
}
