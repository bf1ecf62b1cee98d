use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::locale::{self, Region};

// Response DTOs
#[derive(Debug, Serialize, Deserialize)]
pub struct ProvinceResponse {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CountryResponse {
    pub code: String,
    pub name: String,
    pub provinces: Vec<ProvinceResponse>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegionResponse {
    pub id: String,
    pub name: String,
    pub countries: Vec<CountryResponse>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LocalesResponse {
    pub regions: Vec<RegionResponse>,
}

/// GET /api/locales - Regions, countries and provinces accepted as filters
pub async fn get_locales() -> Json<LocalesResponse> {
    Json(build_locales())
}

fn build_locales() -> LocalesResponse {
    let regions = Region::ALL
        .into_iter()
        .map(|region| RegionResponse {
            id: region.as_str().to_string(),
            name: region.display_name().to_string(),
            countries: locale::countries_for_region(region)
                .iter()
                .map(|code| CountryResponse {
                    code: code.to_string(),
                    name: locale::country_name(code),
                    provinces: locale::provinces_for_country(code)
                        .into_iter()
                        .map(|province| ProvinceResponse {
                            code: province.code.to_string(),
                            name: province.name.to_string(),
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect();

    LocalesResponse { regions }
}
