//! Domain layer between `brewfind-api` and the front ends (CLI / TUI).
//!
//! - **Domain model** ([`model`]) -- [`Brewery`] records converted from the
//!   wire model, with [`BreweryType`] parsed from the directory's type text.
//!
//! - **Filter engine** ([`filter`]) -- a pure, order-preserving narrowing of
//!   the result set by state, city, and case-insensitive name search.
//!
//! - **Option derivation** ([`options`]) -- distinct states and the distinct
//!   cities of one state, in first-seen order, for populating selectors.
//!
//! - **[`Finder`]** -- the explicit view state (result set, total count,
//!   [`LoadStatus`], [`FilterSelection`]) mutated only through
//!   [`Finder::apply`] with a [`FinderEvent`].
//!
//! - **[`BrewerySource`]** -- the fetch seam. [`fetch::load`] performs the
//!   single read and turns its outcome into a [`FinderEvent`].

pub mod convert;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod finder;
pub mod model;
pub mod options;

// ── Primary re-exports ──────────────────────────────────────────────
pub use error::CoreError;
pub use fetch::BrewerySource;
pub use filter::{FilterSelection, filter, filter_by};
pub use finder::{Finder, FinderEvent, LoadStatus};
pub use model::{Brewery, BreweryType};
pub use options::{distinct_cities, distinct_states};
