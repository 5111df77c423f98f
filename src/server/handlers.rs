use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

use crate::geography::{
    region_options, scope_options, CountryOption, GeographicScope, GeographySelection, RegionCode,
    SelectOption, StudyGeography,
};

use super::state::AppState;

// ─── Error response ──────────────────────────────────────────────

#[derive(Serialize)]
struct ApiErrorBody {
    error: String,
    code: u16,
}

#[derive(Debug)]
pub struct ApiError(StatusCode, String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            error: self.1,
            code: self.0.as_u16(),
        };
        (self.0, Json(body)).into_response()
    }
}

fn api_error(status: StatusCode, msg: impl Into<String>) -> ApiError {
    ApiError(status, msg.into())
}

// ─── GET /api/health ─────────────────────────────────────────────

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub countries: usize,
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        countries: state.gazetteer.country_count(),
    })
}

// ─── Catalogs ────────────────────────────────────────────────────

pub async fn regions() -> Json<Vec<SelectOption>> {
    Json(region_options())
}

pub async fn scopes() -> Json<Vec<SelectOption>> {
    Json(scope_options())
}

#[derive(Deserialize)]
pub struct CountriesQuery {
    pub region: Option<String>,
}

pub async fn countries(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CountriesQuery>,
) -> Result<Json<Vec<CountryOption>>, ApiError> {
    let region = match params.region.as_deref() {
        Some(r) => Some(
            r.parse::<RegionCode>()
                .map_err(|e| api_error(StatusCode::BAD_REQUEST, e.to_string()))?,
        ),
        None => None,
    };
    Ok(Json(state.gazetteer.country_options(region)))
}

#[derive(Deserialize)]
pub struct SubnationalQuery {
    pub country: Option<String>,
}

pub async fn subnational(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SubnationalQuery>,
) -> Result<Json<Vec<SelectOption>>, ApiError> {
    let country = params.country.as_deref().unwrap_or("").trim();
    if country.is_empty() {
        return Err(api_error(StatusCode::BAD_REQUEST, "Missing 'country' parameter"));
    }
    Ok(Json(state.gazetteer.subnational_options(country)))
}

// ─── GET /api/resolve/regions ────────────────────────────────────

#[derive(Deserialize)]
pub struct ResolveRegionsQuery {
    pub countries: Option<String>,
}

#[derive(Serialize)]
pub struct ResolveRegionsResponse {
    pub regions: Vec<RegionCode>,
}

pub async fn resolve_regions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ResolveRegionsQuery>,
) -> Json<ResolveRegionsResponse> {
    let start = Instant::now();
    let countries = split_codes(params.countries.as_deref());
    let regions = state.gazetteer.regions_for_countries(&countries);

    tracing::info!(
        input = countries.len(),
        resolved = regions.len(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "GET /api/resolve/regions"
    );

    Json(ResolveRegionsResponse { regions })
}

// ─── GET /api/resolve/countries ──────────────────────────────────

#[derive(Deserialize)]
pub struct ResolveCountriesQuery {
    pub codes: Option<String>,
}

#[derive(Serialize)]
pub struct ResolveCountriesResponse {
    pub countries: Vec<String>,
}

pub async fn resolve_countries(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ResolveCountriesQuery>,
) -> Json<ResolveCountriesResponse> {
    let start = Instant::now();
    let codes = split_codes(params.codes.as_deref());
    let countries = state.gazetteer.countries_for_subnational(&codes);

    tracing::info!(
        input = codes.len(),
        resolved = countries.len(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "GET /api/resolve/countries"
    );

    Json(ResolveCountriesResponse { countries })
}

// ─── POST /api/geography ─────────────────────────────────────────

#[derive(Deserialize)]
pub struct GeographyRequest {
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(flatten)]
    pub selection: GeographySelection,
}

pub async fn derive_geography(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GeographyRequest>, JsonRejection>,
) -> Result<Json<StudyGeography>, ApiError> {
    let Json(req) = payload.map_err(|rejection| api_error(StatusCode::BAD_REQUEST, rejection.body_text()))?;

    let scope = req.scope.as_deref().unwrap_or("").trim();
    if scope.is_empty() {
        return Err(api_error(StatusCode::BAD_REQUEST, "Missing 'scope' field"));
    }
    let scope = scope
        .parse::<GeographicScope>()
        .map_err(|e| api_error(StatusCode::BAD_REQUEST, e.to_string()))?;

    let geography = StudyGeography::derive_with(state.gazetteer, scope, &req.selection);
    tracing::info!(
        %scope,
        regions = geography.regions.len(),
        countries = geography.countries.len(),
        subnational = geography.subnational.len(),
        "POST /api/geography"
    );
    Ok(Json(geography))
}

// ─── Helpers ─────────────────────────────────────────────────────

/// Split a comma-separated query value into codes, skipping blanks.
fn split_codes(raw: Option<&str>) -> Vec<&str> {
    raw.unwrap_or("")
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_codes() {
        assert_eq!(split_codes(Some("KE, UG,,BR ")), vec!["KE", "UG", "BR"]);
        assert!(split_codes(Some("")).is_empty());
        assert!(split_codes(None).is_empty());
    }
}
