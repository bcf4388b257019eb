//! `brewfind list`: the filtered brewery list.

use tabled::Tabled;

use brewfind_core::{Brewery, Finder, FinderEvent};

use crate::cli::{GlobalOpts, ListArgs};
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct BreweryRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "City")]
    city: String,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Type")]
    brewery_type: String,
}

impl From<&Brewery> for BreweryRow {
    fn from(b: &Brewery) -> Self {
        Self {
            name: b.name.clone(),
            city: b.city.clone(),
            state: b.state.clone(),
            brewery_type: b.brewery_type.to_string(),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(args: ListArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let mut finder = super::load_finder(global).await?;
    select(&mut finder, args)?;

    let breweries = finder.filtered();
    let out = output::render_list(
        &global.output,
        &breweries,
        |b| BreweryRow::from(b.as_ref()),
        |b| b.id.clone(),
    )?;
    output::print_output(&out, global.quiet);
    output::print_summary(
        &global.output,
        &global.color,
        global.quiet,
        "breweries",
        breweries.len(),
        finder.total(),
    );
    Ok(())
}

/// Push the flag values through the finder so the city rule applies here too.
fn select(finder: &mut Finder, args: ListArgs) -> Result<(), CliError> {
    if let Some(state) = args.state {
        finder.apply(FinderEvent::SelectState(state));
    }
    if let Some(city) = args.city.filter(|c| !c.is_empty()) {
        if !finder.cities().contains(&city) {
            let state = finder.selection().state.clone();
            return Err(CliError::NotFound {
                resource_type: "city".into(),
                identifier: city,
                list_command: format!("cities --state {state:?}"),
            });
        }
        finder.apply(FinderEvent::SelectCity(city));
    }
    if let Some(search) = args.search {
        finder.apply(FinderEvent::SetSearch(search));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use brewfind_core::BreweryType;

    fn finder() -> Finder {
        let mut finder = Finder::new();
        finder.apply(FinderEvent::FetchSucceeded(vec![
            Brewery::new("1", "Hoppy Place", "Austin", "Texas", BreweryType::Micro),
            Brewery::new("2", "Malt House", "Dallas", "Texas", BreweryType::Brewpub),
            Brewery::new("3", "Hop Yard", "Denver", "Colorado", BreweryType::Micro),
        ]));
        finder
    }

    fn args(state: Option<&str>, city: Option<&str>, search: Option<&str>) -> ListArgs {
        ListArgs {
            state: state.map(str::to_owned),
            city: city.map(str::to_owned),
            search: search.map(str::to_owned),
        }
    }

    fn ids(finder: &Finder) -> Vec<String> {
        finder.filtered().iter().map(|b| b.id.clone()).collect()
    }

    #[test]
    fn state_and_search_combine() {
        let mut f = finder();
        select(&mut f, args(Some("Texas"), None, Some("hop"))).unwrap();
        assert_eq!(ids(&f), ["1"]);
    }

    #[test]
    fn city_in_state_is_accepted() {
        let mut f = finder();
        select(&mut f, args(Some("Texas"), Some("Dallas"), None)).unwrap();
        assert_eq!(ids(&f), ["2"]);
    }

    #[test]
    fn city_outside_state_is_not_found() {
        let mut f = finder();
        let err = select(&mut f, args(Some("Colorado"), Some("Austin"), None)).unwrap_err();
        assert!(matches!(err, CliError::NotFound { ref identifier, .. } if identifier == "Austin"));
    }

    #[test]
    fn row_shows_four_fields() {
        let b = Brewery::new("1", "Hoppy Place", "Austin", "Texas", BreweryType::Micro);
        let row = BreweryRow::from(&b);
        assert_eq!(
            [row.name, row.city, row.state, row.brewery_type],
            ["Hoppy Place", "Austin", "Texas", "micro"]
        );
    }
}
