//! Tag-based POI classification.
//!
//! Classification is an ordered decision list evaluated first-match-wins, so
//! the tie-break policy is a data structure rather than conditional order: an
//! element tagged both `railway=station` and `highway=bus_stop` is a railway
//! station, never a bus stop.

use serde::Serialize;

use crate::modules::integrations::overpass::Tags;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Airports,
    RailwayStations,
    MetroTram,
    BusStops,
    MajorHighways,
    RailLines,
    FerryTerminals,
    Other,
}

fn is_airport(tags: &Tags) -> bool {
    matches!(
        tags.get("aeroway").map(String::as_str),
        Some("aerodrome" | "airport")
    )
}

fn is_railway_station(tags: &Tags) -> bool {
    matches!(
        tags.get("railway").map(String::as_str),
        Some("station" | "halt" | "stop")
    )
}

fn is_metro_tram(tags: &Tags) -> bool {
    matches!(
        tags.get("railway").map(String::as_str),
        Some("tram_stop" | "subway_entrance")
    )
}

fn is_bus_stop(tags: &Tags) -> bool {
    tags.get("highway").map(String::as_str) == Some("bus_stop")
}

fn is_ferry_terminal(tags: &Tags) -> bool {
    tags.get("amenity").map(String::as_str) == Some("ferry_terminal")
}

fn is_major_highway(tags: &Tags) -> bool {
    matches!(
        tags.get("highway").map(String::as_str),
        Some("motorway" | "trunk" | "primary")
    )
}

fn is_rail_line(tags: &Tags) -> bool {
    matches!(
        tags.get("railway").map(String::as_str),
        Some("rail" | "tram" | "subway")
    )
}

/// Ordered classification rules. Order matters.
static RULES: &[(fn(&Tags) -> bool, Category)] = &[
    (is_airport, Category::Airports),
    (is_railway_station, Category::RailwayStations),
    (is_metro_tram, Category::MetroTram),
    (is_bus_stop, Category::BusStops),
    (is_ferry_terminal, Category::FerryTerminals),
    (is_major_highway, Category::MajorHighways),
    (is_rail_line, Category::RailLines),
];

pub fn classify(tags: &Tags) -> Category {
    RULES
        .iter()
        .find(|(matches_tags, _)| matches_tags(tags))
        .map_or(Category::Other, |&(_, category)| category)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(pairs: &[(&str, &str)]) -> Tags {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn classifies_each_category() {
        assert_eq!(classify(&tags(&[("aeroway", "aerodrome")])), Category::Airports);
        assert_eq!(classify(&tags(&[("railway", "halt")])), Category::RailwayStations);
        assert_eq!(classify(&tags(&[("railway", "tram_stop")])), Category::MetroTram);
        assert_eq!(classify(&tags(&[("highway", "bus_stop")])), Category::BusStops);
        assert_eq!(
            classify(&tags(&[("amenity", "ferry_terminal")])),
            Category::FerryTerminals
        );
        assert_eq!(classify(&tags(&[("highway", "trunk")])), Category::MajorHighways);
        assert_eq!(classify(&tags(&[("railway", "subway")])), Category::RailLines);
        assert_eq!(classify(&tags(&[("shop", "books")])), Category::Other);
        assert_eq!(classify(&Tags::new()), Category::Other);
    }

    #[test]
    fn railway_station_beats_bus_stop() {
        let both = tags(&[("railway", "station"), ("highway", "bus_stop")]);
        assert_eq!(classify(&both), Category::RailwayStations);
    }

    #[test]
    fn airport_beats_everything() {
        let t = tags(&[("aeroway", "airport"), ("railway", "station"), ("highway", "bus_stop")]);
        assert_eq!(classify(&t), Category::Airports);
    }

    #[test]
    fn residential_highway_is_other() {
        assert_eq!(classify(&tags(&[("highway", "residential")])), Category::Other);
    }
}
