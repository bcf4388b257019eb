//! Data bridge: runs the single directory fetch and reports back as actions.
//!
//! Spawned once by [`App::run`](crate::app::App::run) after the terminal is
//! up. It never touches screen state; the outcome travels through the action
//! channel like every other state change.

use tokio::sync::mpsc;
use tracing::debug;

use brewfind_core::{BrewerySource, FinderEvent, fetch};

use crate::action::Action;

/// Fetch the directory from `source`, sending `FetchStarted` first and then
/// the success or failure event.
pub async fn spawn_data_bridge<S: BrewerySource>(source: S, action_tx: mpsc::UnboundedSender<Action>) {
    if action_tx
        .send(Action::Finder(FinderEvent::FetchStarted))
        .is_err()
    {
        return;
    }

    let outcome = fetch::load(&source).await;

    if action_tx.send(Action::Finder(outcome)).is_err() {
        debug!("action channel closed before the fetch completed");
    }
    debug!("data bridge finished");
}
