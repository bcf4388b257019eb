// Directory response types
//
// The endpoint returns a bare JSON array of brewery objects. The five fields
// the finder filters and displays are required; the rest of the address and
// contact block is optional because the directory leaves many of them null.

use serde::{Deserialize, Deserializer, Serialize};

/// One brewery object as returned by the directory endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreweryRecord {
    pub id: String,
    pub name: String,
    pub brewery_type: String,
    pub city: String,
    pub state: String,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub address_1: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
    /// Served as a number by newer deployments, as a string by older ones.
    #[serde(default, deserialize_with = "coordinate")]
    pub longitude: Option<f64>,
    #[serde(default, deserialize_with = "coordinate")]
    pub latitude: Option<f64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Coordinate {
    Number(f64),
    Text(String),
}

fn coordinate<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        match Option::<Coordinate>::deserialize(deserializer)? {
            Some(Coordinate::Number(n)) => Some(n),
            Some(Coordinate::Text(s)) => s.trim().parse().ok(),
            None => None,
        },
    )
}
