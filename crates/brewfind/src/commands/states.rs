//! `brewfind states`: distinct states, first-seen order.

use std::sync::Arc;

use serde::Serialize;
use tabled::Tabled;

use brewfind_core::{Brewery, filter_by};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct StateEntry {
    pub state: String,
    pub breweries: usize,
}

#[derive(Tabled)]
struct StateRow {
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Breweries")]
    breweries: usize,
}

/// Pair each state with how many breweries it has.
pub fn entries(results: &[Arc<Brewery>], states: Vec<String>) -> Vec<StateEntry> {
    states
        .into_iter()
        .map(|state| StateEntry {
            breweries: filter_by(results, &state, "", "").len(),
            state,
        })
        .collect()
}

pub async fn handle(global: &GlobalOpts) -> Result<(), CliError> {
    let finder = super::load_finder(global).await?;
    let list = entries(&finder.results(), finder.states());

    let out = output::render_list(
        &global.output,
        &list,
        |e| StateRow {
            state: e.state.clone(),
            breweries: e.breweries,
        },
        |e| e.state.clone(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
