// Directory HTTP client
//
// Wraps `reqwest::Client` with the single read the finder needs: a GET on
// the directory endpoint, status checking, and body decoding into
// `BreweryRecord`s in response order.

use tracing::{debug, trace};
use url::Url;

use crate::error::Error;
use crate::models::BreweryRecord;
use crate::transport::TransportConfig;

/// Public Open Brewery DB listing endpoint. Queried with no parameters.
pub const DEFAULT_ENDPOINT: &str = "https://api.openbrewerydb.org/v1/breweries";

/// Raw HTTP client for the brewery directory.
#[derive(Debug, Clone)]
pub struct BreweryClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl BreweryClient {
    /// Create a client for `endpoint` from a `TransportConfig`.
    pub fn new(endpoint: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self { http, endpoint })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, endpoint: Url) -> Self {
        Self { http, endpoint }
    }

    /// The endpoint this client reads from.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch the full directory listing.
    ///
    /// Any failure -- connection, non-2xx status, or an undecodable body --
    /// is returned as an [`Error`]; there is no retry.
    pub async fn list_breweries(&self) -> Result<Vec<BreweryRecord>, Error> {
        debug!("GET {}", self.endpoint);

        let resp = self
            .http
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Status {
                status: status.as_u16(),
                body: preview(&body).to_owned(),
            });
        }

        let body = resp.text().await.map_err(Error::Transport)?;
        trace!(bytes = body.len(), "directory body received");

        let records: Vec<BreweryRecord> =
            serde_json::from_str(&body).map_err(|e| Error::Deserialization {
                message: format!("{e} (body preview: {:?})", preview(&body)),
                body: body.clone(),
            })?;

        debug!(count = records.len(), "directory decoded");
        Ok(records)
    }
}

/// First 200 bytes of a body, cut on a char boundary.
fn preview(body: &str) -> &str {
    let mut end = body.len().min(200);
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}
