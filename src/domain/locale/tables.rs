use super::{Country, Province, Region};
use std::collections::HashMap;
use std::sync::LazyLock;

pub(crate) static REGION_COUNTRIES: &[(Region, &[&str])] = &[
    (Region::Africa, &["za", "ng", "ke", "eg", "gh"]),
    (Region::Europe, &["gb", "fr", "de", "it", "es"]),
    (Region::Americas, &["us", "ca", "br", "mx", "ar"]),
    (Region::Asia, &["in", "jp", "kr", "sg", "id"]),
    // Egypt is listed under both Africa and the Middle East
    (Region::MiddleEast, &["sa", "ae", "il", "qa", "eg"]),
    (Region::Oceania, &["au", "nz", "fj", "pg", "sb"]),
];

pub(crate) static COUNTRIES: &[Country] = &[
    Country { code: "za", name: "South Africa", language: "en" },
    Country { code: "ng", name: "Nigeria", language: "en" },
    Country { code: "ke", name: "Kenya", language: "en" },
    Country { code: "eg", name: "Egypt", language: "ar" },
    Country { code: "gh", name: "Ghana", language: "en" },
    Country { code: "gb", name: "United Kingdom", language: "en" },
    Country { code: "fr", name: "France", language: "fr" },
    Country { code: "de", name: "Germany", language: "de" },
    Country { code: "it", name: "Italy", language: "it" },
    Country { code: "es", name: "Spain", language: "es" },
    Country { code: "us", name: "United States", language: "en" },
    Country { code: "ca", name: "Canada", language: "en" },
    Country { code: "br", name: "Brazil", language: "pt" },
    Country { code: "mx", name: "Mexico", language: "es" },
    Country { code: "ar", name: "Argentina", language: "es" },
    Country { code: "in", name: "India", language: "en" },
    Country { code: "jp", name: "Japan", language: "ja" },
    Country { code: "kr", name: "South Korea", language: "ko" },
    Country { code: "sg", name: "Singapore", language: "en" },
    Country { code: "id", name: "Indonesia", language: "id" },
    Country { code: "sa", name: "Saudi Arabia", language: "ar" },
    Country { code: "ae", name: "United Arab Emirates", language: "ar" },
    Country { code: "il", name: "Israel", language: "he" },
    Country { code: "qa", name: "Qatar", language: "ar" },
    Country { code: "au", name: "Australia", language: "en" },
    Country { code: "nz", name: "New Zealand", language: "en" },
    Country { code: "fj", name: "Fiji", language: "en" },
    Country { code: "pg", name: "Papua New Guinea", language: "en" },
    Country { code: "sb", name: "Solomon Islands", language: "en" },
];

pub(crate) static PROVINCES: &[Province] = &[
    // South Africa
    Province { code: "ZA-EC", name: "Eastern Cape", country: "za" },
    Province { code: "ZA-FS", name: "Free State", country: "za" },
    Province { code: "ZA-GP", name: "Gauteng", country: "za" },
    Province { code: "ZA-KZN", name: "KwaZulu-Natal", country: "za" },
    Province { code: "ZA-LP", name: "Limpopo", country: "za" },
    Province { code: "ZA-MP", name: "Mpumalanga", country: "za" },
    Province { code: "ZA-NC", name: "Northern Cape", country: "za" },
    Province { code: "ZA-NW", name: "North West", country: "za" },
    Province { code: "ZA-WC", name: "Western Cape", country: "za" },
    // Canada
    Province { code: "CA-AB", name: "Alberta", country: "ca" },
    Province { code: "CA-BC", name: "British Columbia", country: "ca" },
    Province { code: "CA-MB", name: "Manitoba", country: "ca" },
    Province { code: "CA-NB", name: "New Brunswick", country: "ca" },
    Province { code: "CA-NL", name: "Newfoundland and Labrador", country: "ca" },
    Province { code: "CA-NS", name: "Nova Scotia", country: "ca" },
    Province { code: "CA-NT", name: "Northwest Territories", country: "ca" },
    Province { code: "CA-NU", name: "Nunavut", country: "ca" },
    Province { code: "CA-ON", name: "Ontario", country: "ca" },
    Province { code: "CA-PE", name: "Prince Edward Island", country: "ca" },
    Province { code: "CA-QC", name: "Quebec", country: "ca" },
    Province { code: "CA-SK", name: "Saskatchewan", country: "ca" },
    Province { code: "CA-YT", name: "Yukon", country: "ca" },
    // Australia
    Province { code: "AU-ACT", name: "Australian Capital Territory", country: "au" },
    Province { code: "AU-NSW", name: "New South Wales", country: "au" },
    Province { code: "AU-NT", name: "Northern Territory", country: "au" },
    Province { code: "AU-QLD", name: "Queensland", country: "au" },
    Province { code: "AU-SA", name: "South Australia", country: "au" },
    Province { code: "AU-TAS", name: "Tasmania", country: "au" },
    Province { code: "AU-VIC", name: "Victoria", country: "au" },
    Province { code: "AU-WA", name: "Western Australia", country: "au" },
];

pub(crate) static COUNTRY_INDEX: LazyLock<HashMap<&'static str, &'static Country>> =
    LazyLock::new(|| COUNTRIES.iter().map(|c| (c.code, c)).collect());

pub(crate) static PROVINCE_INDEX: LazyLock<HashMap<&'static str, &'static Province>> =
    LazyLock::new(|| PROVINCES.iter().map(|p| (p.code, p)).collect());
