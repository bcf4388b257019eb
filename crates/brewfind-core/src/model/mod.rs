// ── Domain model ──

mod brewery;

pub use brewery::{Brewery, BreweryType};
