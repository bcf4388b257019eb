// ── API-to-domain type conversions ──
//
// Bridges raw `brewfind_api` records into the canonical `Brewery` type:
// parses the type text, folds the two street fields into one, and drops
// empty optional strings.

use brewfind_api::BreweryRecord;

use crate::model::{Brewery, BreweryType};

/// Treat `""` and whitespace-only values as absent.
fn non_empty(raw: Option<String>) -> Option<String> {
    raw.filter(|s| !s.trim().is_empty())
}

impl From<BreweryRecord> for Brewery {
    fn from(r: BreweryRecord) -> Self {
        Brewery {
            brewery_type: BreweryType::from(r.brewery_type.as_str()),
            id: r.id,
            name: r.name,
            city: r.city,
            state: r.state,
            street: non_empty(r.street).or_else(|| non_empty(r.address_1)),
            postal_code: non_empty(r.postal_code),
            country: non_empty(r.country),
            phone: non_empty(r.phone),
            website_url: non_empty(r.website_url),
            longitude: r.longitude,
            latitude: r.latitude,
        }
    }
}
