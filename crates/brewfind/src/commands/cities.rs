//! `brewfind cities --state S`: distinct cities of one state.

use std::sync::Arc;

use serde::Serialize;
use tabled::Tabled;

use brewfind_core::{Brewery, FinderEvent, filter_by};

use crate::cli::{CitiesArgs, GlobalOpts};
use crate::error::CliError;
use crate::output;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CityEntry {
    pub city: String,
    pub breweries: usize,
}

#[derive(Tabled)]
struct CityRow {
    #[tabled(rename = "City")]
    city: String,
    #[tabled(rename = "Breweries")]
    breweries: usize,
}

/// Pair each city of `state` with how many breweries it has there.
pub fn entries(results: &[Arc<Brewery>], state: &str, cities: Vec<String>) -> Vec<CityEntry> {
    cities
        .into_iter()
        .map(|city| CityEntry {
            breweries: filter_by(results, state, &city, "").len(),
            city,
        })
        .collect()
}

pub async fn handle(args: CitiesArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let mut finder = super::load_finder(global).await?;
    finder.apply(FinderEvent::SelectState(args.state.clone()));
    let list = entries(&finder.results(), &args.state, finder.cities());

    let out = output::render_list(
        &global.output,
        &list,
        |e| CityRow {
            city: e.city.clone(),
            breweries: e.breweries,
        },
        |e| e.city.clone(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
