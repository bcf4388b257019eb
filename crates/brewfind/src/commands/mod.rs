//! Command dispatch: bridges CLI args -> finder queries -> output formatting.

pub mod cities;
pub mod config_cmd;
pub mod list;
pub mod states;

use tracing::debug;

use brewfind_core::{BrewerySource, Finder, FinderEvent, fetch};

use crate::cli::{Command, GlobalOpts};
use crate::config;
use crate::error::CliError;

/// Dispatch a directory-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::List(args) => list::handle(args, global).await,
        Command::States => states::handle(global).await,
        Command::Cities(args) => cities::handle(args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}

/// Perform the one directory read for this invocation and load the result
/// set into a [`Finder`].
pub async fn load_finder(global: &GlobalOpts) -> Result<Finder, CliError> {
    let cfg = config::resolve(global)?;
    let client = fetch::client_for(&cfg.endpoint, &cfg.transport())?;

    debug!(endpoint = %cfg.endpoint, "fetching brewery directory");
    let mut finder = Finder::new();
    finder.apply(FinderEvent::FetchStarted);
    let breweries = client.fetch_breweries().await?;
    finder.apply(FinderEvent::FetchSucceeded(breweries));
    Ok(finder)
}
