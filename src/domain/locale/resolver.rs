use super::tables::{COUNTRY_INDEX, PROVINCES, PROVINCE_INDEX, REGION_COUNTRIES};
use super::{Province, Region};

/// Upper bound on concurrent upstream calls per request
pub const MAX_JURISDICTIONS: usize = 10;

const DEFAULT_LANGUAGE: &str = "en";

/// Resolve the jurisdictions to fetch for a request.
///
/// A country wins over a region; with neither, the result is empty, meaning
/// "fetch once without a jurisdiction". The list is duplicate-free and is
/// silently capped at [`MAX_JURISDICTIONS`].
pub fn resolve_jurisdictions(country: Option<&str>, region: Option<Region>) -> Vec<String> {
    let candidates: Vec<&str> = match (country, region) {
        (Some(country), _) => vec![country],
        (None, Some(region)) => countries_for_region(region).to_vec(),
        (None, None) => Vec::new(),
    };

    let mut jurisdictions: Vec<String> = Vec::with_capacity(candidates.len());
    for code in candidates {
        let code = code.to_lowercase();
        if !jurisdictions.contains(&code) {
            jurisdictions.push(code);
        }
    }

    if jurisdictions.len() > MAX_JURISDICTIONS {
        tracing::debug!(
            requested = jurisdictions.len(),
            max = MAX_JURISDICTIONS,
            "Truncating jurisdiction list"
        );
        jurisdictions.truncate(MAX_JURISDICTIONS);
    }

    jurisdictions
}

pub fn countries_for_region(region: Region) -> &'static [&'static str] {
    REGION_COUNTRIES
        .iter()
        .find(|(r, _)| *r == region)
        .map(|(_, members)| *members)
        .unwrap_or(&[])
}

pub fn is_known_country(code: &str) -> bool {
    COUNTRY_INDEX.contains_key(code.to_lowercase().as_str())
}

/// Display name for a country code, falling back to the uppercased code
pub fn country_name(code: &str) -> String {
    COUNTRY_INDEX
        .get(code.to_lowercase().as_str())
        .map(|c| c.name.to_string())
        .unwrap_or_else(|| code.to_uppercase())
}

pub fn country_language(code: &str) -> &'static str {
    COUNTRY_INDEX
        .get(code.to_lowercase().as_str())
        .map(|c| c.language)
        .unwrap_or(DEFAULT_LANGUAGE)
}

pub fn provinces_for_country(country: &str) -> Vec<&'static Province> {
    let country = country.to_lowercase();
    PROVINCES.iter().filter(|p| p.country == country).collect()
}

/// Look up a province by code, optionally restricted to one country
pub fn find_province(code: &str, country: Option<&str>) -> Option<&'static Province> {
    let province = PROVINCE_INDEX.get(code.trim().to_uppercase().as_str())?;
    match country {
        Some(country) if !province.country.eq_ignore_ascii_case(country) => None,
        _ => Some(*province),
    }
}

pub fn province_name(code: &str) -> Option<&'static str> {
    find_province(code, None).map(|p| p.name)
}
