//! Transport accessibility reporting.
//!
//! Pure assembly of the response payload from raw Overpass elements:
//! classification, distance computation, category bucketing, scoring, and
//! sorting. No I/O happens here, which keeps the whole pipeline unit
//! testable without a server.

pub mod classify;
pub mod score;

use serde::Serialize;

use crate::modules::integrations::overpass::{OsmElement, Tags};
use crate::utils::geo;
use classify::{classify, Category};
use score::ScoreBreakdown;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyPoi {
    pub id: i64,
    pub name: String,
    pub distance_meters: u32,
    pub tags: Tags,
    pub lat: f64,
    pub lon: f64,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResults {
    pub airports: Vec<NearbyPoi>,
    pub railway_stations: Vec<NearbyPoi>,
    pub metro_tram: Vec<NearbyPoi>,
    pub bus_stops: Vec<NearbyPoi>,
    pub major_highways: Vec<NearbyPoi>,
    pub rail_lines: Vec<NearbyPoi>,
    pub ferry_terminals: Vec<NearbyPoi>,
    pub other: Vec<NearbyPoi>,
}

impl CategoryResults {
    fn bucket_mut(&mut self, category: Category) -> &mut Vec<NearbyPoi> {
        match category {
            Category::Airports => &mut self.airports,
            Category::RailwayStations => &mut self.railway_stations,
            Category::MetroTram => &mut self.metro_tram,
            Category::BusStops => &mut self.bus_stops,
            Category::MajorHighways => &mut self.major_highways,
            Category::RailLines => &mut self.rail_lines,
            Category::FerryTerminals => &mut self.ferry_terminals,
            Category::Other => &mut self.other,
        }
    }

    fn sort_by_distance(&mut self) {
        // sort_by_key is stable, so ties keep arrival order.
        for bucket in [
            &mut self.airports,
            &mut self.railway_stations,
            &mut self.metro_tram,
            &mut self.bus_stops,
            &mut self.major_highways,
            &mut self.rail_lines,
            &mut self.ferry_terminals,
            &mut self.other,
        ] {
            bucket.sort_by_key(|poi| poi.distance_meters);
        }
    }
}

/// Category counts exposed in the payload. Rail lines and the catch-all
/// bucket are returned in `results` but not counted here.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCounts {
    pub airports: usize,
    pub railway_stations: usize,
    pub metro_tram: usize,
    pub bus_stops: usize,
    pub major_highways: usize,
    pub ferry_terminals: usize,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Center {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportReport {
    pub center: Center,
    pub radius: u32,
    pub score: f64,
    pub counts: CategoryCounts,
    pub score_breakdown: ScoreBreakdown,
    pub results: CategoryResults,
}

/// Build the full accessibility report for a query point from raw Overpass
/// elements. Elements without a usable position are dropped.
pub fn build_report(lat: f64, lon: f64, radius: u32, elements: Vec<OsmElement>) -> TransportReport {
    let mut results = CategoryResults::default();

    for element in elements {
        let Some(position) = element.position() else {
            continue;
        };
        let distance = geo::haversine_distance_meters(lat, lon, position.lat, position.lon);
        let name = element
            .tags
            .get("name")
            .or_else(|| element.tags.get("ref"))
            .cloned()
            .unwrap_or_else(|| "Unnamed".to_string());
        let category = classify(&element.tags);

        results.bucket_mut(category).push(NearbyPoi {
            id: element.id,
            name,
            distance_meters: distance.round() as u32,
            tags: element.tags,
            lat: position.lat,
            lon: position.lon,
            kind: element.kind,
        });
    }

    let mut breakdown = ScoreBreakdown::default();
    for poi in &results.bus_stops {
        breakdown.bus_stops += score::bus_stop_points(poi.distance_meters);
    }
    // Railway stations and metro/tram stops share the rail band.
    for poi in results.railway_stations.iter().chain(&results.metro_tram) {
        breakdown.railway += score::railway_points(poi.distance_meters);
    }
    for poi in &results.airports {
        breakdown.airports += score::airport_points(poi.distance_meters);
    }
    for poi in &results.major_highways {
        breakdown.highways += score::highway_points(poi.distance_meters);
    }

    results.sort_by_distance();

    let counts = CategoryCounts {
        airports: results.airports.len(),
        railway_stations: results.railway_stations.len(),
        metro_tram: results.metro_tram.len(),
        bus_stops: results.bus_stops.len(),
        major_highways: results.major_highways.len(),
        ferry_terminals: results.ferry_terminals.len(),
    };

    TransportReport {
        center: Center { lat, lon },
        radius,
        score: breakdown.score(),
        counts,
        score_breakdown: breakdown,
        results,
    }
}
