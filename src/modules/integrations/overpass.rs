//! Overpass API adapter.
//!
//! Issues a single composite query for every transport POI category around a
//! point, each category with its own search radius, and parses the raw
//! element list. The endpoint is injected so tests can point the client at a
//! mock server.

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://overpass-api.de/api/interpreter";

/// Server-side query budget, seconds ([timeout:N] in the query).
const UPSTREAM_TIMEOUT_SECS: u32 = 25;
/// Client-side request timeout; slightly longer than the upstream budget.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
/// Maximum elements requested per query (out center N).
const MAX_ELEMENTS: u32 = 200;

pub type Tags = HashMap<String, String>;

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OsmElement {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub tags: Tags,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub center: Option<LatLon>,
}

impl OsmElement {
    /// Ways carry a computed `center`; nodes carry `lat`/`lon` directly.
    /// Elements with neither are unusable and get dropped by the caller.
    pub fn position(&self) -> Option<LatLon> {
        if let Some(center) = self.center {
            return Some(center);
        }
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(LatLon { lat, lon }),
            _ => None,
        }
    }
}

/// Per-category search radii in meters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadiusTable {
    pub bus: u32,
    pub rail: u32,
    pub airport: u32,
    pub highway: u32,
    pub ferry: u32,
}

impl RadiusTable {
    /// Radii for a user-requested bus-stop radius. The bus radius never
    /// drops below 1000 m so the full-kilometer scoring tiers stay covered.
    pub fn for_user_radius(user_radius: u32) -> Self {
        Self {
            bus: user_radius.max(1000),
            rail: 10_000,
            airport: 40_000,
            highway: 500,
            ferry: 2_000,
        }
    }
}

#[derive(Debug)]
pub enum OverpassError {
    /// Upstream replied with a non-success HTTP status.
    Status(u16),
    /// The request failed before a response arrived, or the body was not JSON.
    Http(String),
}

impl fmt::Display for OverpassError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverpassError::Status(code) => write!(f, "Overpass error: {}", code),
            OverpassError::Http(msg) => write!(f, "Overpass request failed: {}", msg),
        }
    }
}

impl std::error::Error for OverpassError {}

#[derive(Clone)]
pub struct OverpassClient {
    http: reqwest::Client,
    endpoint: String,
}

impl OverpassClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Fetch every transport POI around `(lat, lon)` in one Overpass call.
    ///
    /// A successful response without a usable `elements` array means
    /// "nothing found", not a failure.
    pub async fn fetch_nearby_pois(
        &self,
        lat: f64,
        lon: f64,
        radii: &RadiusTable,
    ) -> Result<Vec<OsmElement>, OverpassError> {
        let query = build_query(lat, lon, radii);

        let res = self
            .http
            .post(&self.endpoint)
            .timeout(REQUEST_TIMEOUT)
            .form(&[("data", query.as_str())])
            .send()
            .await
            .map_err(|e| OverpassError::Http(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            return Err(OverpassError::Status(status.as_u16()));
        }

        let body: Value = res
            .json()
            .await
            .map_err(|e| OverpassError::Http(e.to_string()))?;
        Ok(parse_elements(&body))
    }
}

fn build_query(lat: f64, lon: f64, radii: &RadiusTable) -> String {
    format!(
        r#"[out:json][timeout:{timeout}];
(
  node(around:{airport},{lat},{lon})[aeroway~"^(aerodrome|airport)$"];
  node(around:{rail},{lat},{lon})[railway~"^(station|halt|stop)$"];
  node(around:{rail},{lat},{lon})[railway~"^(tram_stop|subway_entrance)$"];
  node(around:{bus},{lat},{lon})[highway=bus_stop];
  way(around:{highway},{lat},{lon})[highway~"^(motorway|trunk|primary)$"];
  node(around:{ferry},{lat},{lon})[amenity=ferry_terminal];
);
out center {max};"#,
        timeout = UPSTREAM_TIMEOUT_SECS,
        airport = radii.airport,
        rail = radii.rail,
        bus = radii.bus,
        highway = radii.highway,
        ferry = radii.ferry,
        lat = lat,
        lon = lon,
        max = MAX_ELEMENTS,
    )
}

/// Pull the element list out of a raw Overpass response body. Missing or
/// malformed `elements` yields an empty list; individual elements that fail
/// to deserialize are dropped.
fn parse_elements(body: &Value) -> Vec<OsmElement> {
    body.get("elements")
        .and_then(Value::as_array)
        .map(|elements| {
            elements
                .iter()
                .filter_map(|el| serde_json::from_value(el.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn radius_table_enforces_bus_floor() {
        assert_eq!(RadiusTable::for_user_radius(300).bus, 1000);
        assert_eq!(RadiusTable::for_user_radius(2500).bus, 2500);
        assert_eq!(RadiusTable::for_user_radius(0).bus, 1000);
    }

    #[test]
    fn query_embeds_per_category_radii() {
        let radii = RadiusTable::for_user_radius(300);
        let query = build_query(13.34, 74.74, &radii);

        assert!(query.contains("[out:json][timeout:25];"));
        assert!(query.contains("node(around:40000,13.34,74.74)[aeroway~\"^(aerodrome|airport)$\"];"));
        assert!(query.contains("node(around:10000,13.34,74.74)[railway~\"^(station|halt|stop)$\"];"));
        assert!(query.contains("node(around:1000,13.34,74.74)[highway=bus_stop];"));
        assert!(query.contains("way(around:500,13.34,74.74)[highway~\"^(motorway|trunk|primary)$\"];"));
        assert!(query.contains("node(around:2000,13.34,74.74)[amenity=ferry_terminal];"));
        assert!(query.contains("out center 200;"));
    }

    #[test]
    fn missing_elements_key_parses_as_empty() {
        assert!(parse_elements(&json!({})).is_empty());
        assert!(parse_elements(&json!({ "elements": "bogus" })).is_empty());
    }

    #[test]
    fn parses_nodes_and_way_centers() {
        let body = json!({
            "elements": [
                { "id": 1, "type": "node", "lat": 13.0, "lon": 74.0,
                  "tags": { "highway": "bus_stop" } },
                { "id": 2, "type": "way",
                  "center": { "lat": 13.1, "lon": 74.1 },
                  "tags": { "highway": "trunk" } },
                { "id": 3, "type": "node" }
            ]
        });
        let elements = parse_elements(&body);
        assert_eq!(elements.len(), 3);

        let node = elements[0].position().unwrap();
        assert_eq!((node.lat, node.lon), (13.0, 74.0));

        let way = elements[1].position().unwrap();
        assert_eq!((way.lat, way.lon), (13.1, 74.1));

        // No center and no lat/lon: the element is kept but has no position.
        assert!(elements[2].position().is_none());
        assert!(elements[2].tags.is_empty());
    }
}
