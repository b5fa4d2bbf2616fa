use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::infrastructure::AppState;
use crate::modules::integrations::overpass::RadiusTable;
use crate::modules::transport;

/// Bus-stop search radius applied when the client does not send one.
pub const DEFAULT_RADIUS_METERS: u32 = 300;

#[derive(Debug, Deserialize)]
pub struct NearbyParams {
    lat: Option<String>,
    lon: Option<String>,
    radius: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/transport/nearby",
    params(
        ("lat" = f64, Query, description = "Latitude of the query point"),
        ("lon" = f64, Query, description = "Longitude of the query point"),
        ("radius" = Option<u32>, Query, description = "Bus-stop search radius in meters, default 300")
    ),
    responses(
        (status = 200, description = "Transport accessibility report"),
        (status = 400, description = "lat or lon missing or not numeric"),
        (status = 502, description = "Overpass API returned an error")
    )
)]
pub async fn nearby_transport(
    State(state): State<AppState>,
    Query(params): Query<NearbyParams>,
) -> impl IntoResponse {
    // Only finiteness is checked; out-of-range values like lat=200 pass
    // through unchanged.
    let lat = parse_coordinate(params.lat.as_deref());
    let lon = parse_coordinate(params.lon.as_deref());
    let (Some(lat), Some(lon)) = (lat, lon) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "lat and lon query params are required" })),
        )
            .into_response();
    };

    let radius = params
        .radius
        .as_deref()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(DEFAULT_RADIUS_METERS);

    let radii = RadiusTable::for_user_radius(radius);
    let elements = match state.overpass.fetch_nearby_pois(lat, lon, &radii).await {
        Ok(elements) => elements,
        Err(e) => {
            tracing::warn!("Overpass lookup for ({}, {}) failed: {}", lat, lon, e);
            return (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response();
        }
    };

    let report = transport::build_report(lat, lon, radius, elements);
    (StatusCode::OK, Json(report)).into_response()
}

fn parse_coordinate(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}
