pub mod resolver;
pub mod tables;

use serde::{Deserialize, Serialize};

pub use resolver::{
    country_language, country_name, countries_for_region, find_province, is_known_country,
    province_name, provinces_for_country, resolve_jurisdictions, MAX_JURISDICTIONS,
};

/// Geographic grouping of jurisdictions offered as a filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Africa,
    Europe,
    Americas,
    Asia,
    MiddleEast,
    Oceania,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::Africa,
        Region::Europe,
        Region::Americas,
        Region::Asia,
        Region::MiddleEast,
        Region::Oceania,
    ];

    /// Query-string value of the region
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Africa => "africa",
            Region::Europe => "europe",
            Region::Americas => "americas",
            Region::Asia => "asia",
            Region::MiddleEast => "middle_east",
            Region::Oceania => "oceania",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Region::Africa => "Africa",
            Region::Europe => "Europe",
            Region::Americas => "Americas",
            Region::Asia => "Asia",
            Region::MiddleEast => "Middle East",
            Region::Oceania => "Oceania",
        }
    }

    /// Parse a query-string value (case-insensitive)
    pub fn from_param(value: &str) -> Option<Self> {
        let value = value.trim().to_lowercase();
        Region::ALL.into_iter().find(|r| r.as_str() == value)
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A country that can be used as a fetch jurisdiction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    /// ISO 3166-1 alpha-2, lowercase
    pub code: &'static str,
    pub name: &'static str,
    /// ISO 639-1 language used for search-mode queries
    pub language: &'static str,
}

/// A sub-national division, used only as a post-fetch filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Province {
    /// ISO 3166-2 code, uppercase (e.g. `ZA-GP`)
    pub code: &'static str,
    pub name: &'static str,
    pub country: &'static str,
}
