// ── Fetch seam ──
//
// `BrewerySource` is what the front ends fetch from. The production
// implementation is `BreweryClient`; tests plug in canned sources.

use std::future::Future;

use tracing::{debug, info, warn};
use url::Url;

use brewfind_api::{BreweryClient, TransportConfig};

use crate::error::CoreError;
use crate::finder::FinderEvent;
use crate::model::Brewery;

/// Anything that can produce the full brewery result set in one read.
pub trait BrewerySource: Send + Sync {
    fn fetch_breweries(&self) -> impl Future<Output = Result<Vec<Brewery>, CoreError>> + Send;
}

impl BrewerySource for BreweryClient {
    async fn fetch_breweries(&self) -> Result<Vec<Brewery>, CoreError> {
        let records = self.list_breweries().await.inspect_err(|e| {
            debug!(network = e.is_network(), status = ?e.status(), "directory read failed");
        })?;
        Ok(records.into_iter().map(Brewery::from).collect())
    }
}

/// Build a [`BreweryClient`] for `endpoint`.
pub fn client_for(endpoint: &str, transport: &TransportConfig) -> Result<BreweryClient, CoreError> {
    let url = Url::parse(endpoint).map_err(|e| CoreError::Config {
        message: format!("invalid endpoint URL '{endpoint}': {e}"),
    })?;
    Ok(BreweryClient::new(url, transport)?)
}

/// Perform the single directory read and map its outcome to a
/// [`FinderEvent`] for [`Finder::apply`](crate::Finder::apply).
pub async fn load<S: BrewerySource>(source: &S) -> FinderEvent {
    debug!("fetching brewery directory");
    match source.fetch_breweries().await {
        Ok(breweries) => {
            info!(count = breweries.len(), "brewery directory loaded");
            FinderEvent::FetchSucceeded(breweries)
        }
        Err(e) => {
            warn!(error = %e, "brewery directory fetch failed");
            FinderEvent::FetchFailed(e.message().to_owned())
        }
    }
}
