// ── Brewery domain types ──

use std::fmt;

use serde::{Serialize, Serializer};

/// Brewery category as published by the directory.
///
/// Unknown values are kept verbatim in [`BreweryType::Other`] so a new
/// category never fails a fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BreweryType {
    Micro,
    Nano,
    Regional,
    Brewpub,
    Large,
    Planning,
    Bar,
    Contract,
    Proprietor,
    Closed,
    Taproom,
    Location,
    Other(String),
}

impl BreweryType {
    /// The directory's lower-case text for this type.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Micro => "micro",
            Self::Nano => "nano",
            Self::Regional => "regional",
            Self::Brewpub => "brewpub",
            Self::Large => "large",
            Self::Planning => "planning",
            Self::Bar => "bar",
            Self::Contract => "contract",
            Self::Proprietor => "proprietor",
            Self::Closed => "closed",
            Self::Taproom => "taproom",
            Self::Location => "location",
            Self::Other(raw) => raw,
        }
    }
}

impl From<&str> for BreweryType {
    fn from(raw: &str) -> Self {
        match raw {
            "micro" => Self::Micro,
            "nano" => Self::Nano,
            "regional" => Self::Regional,
            "brewpub" => Self::Brewpub,
            "large" => Self::Large,
            "planning" => Self::Planning,
            "bar" => Self::Bar,
            "contract" => Self::Contract,
            "proprietor" => Self::Proprietor,
            "closed" => Self::Closed,
            "taproom" => Self::Taproom,
            "location" => Self::Location,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl fmt::Display for BreweryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for BreweryType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One entry of the brewery directory. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Brewery {
    pub id: String,
    pub name: String,
    pub city: String,
    pub state: String,
    pub brewery_type: BreweryType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
}

impl Brewery {
    /// A record with only the five fields the finder filters and lists.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        brewery_type: BreweryType,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            city: city.into(),
            state: state.into(),
            brewery_type,
            street: None,
            postal_code: None,
            country: None,
            phone: None,
            website_url: None,
            longitude: None,
            latitude: None,
        }
    }
}
