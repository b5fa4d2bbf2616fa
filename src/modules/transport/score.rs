//! Distance-tiered scoring.
//!
//! Each POI falls into exactly one non-overlapping distance tier for its
//! category; tiers are not cumulative. Category totals are unbounded, only
//! the composite score is capped.

use serde::Serialize;

/// Display cap on the composite score.
pub const MAX_SCORE: f64 = 10.0;

/// Uncapped per-category point totals. Diagnostic: individual values (and
/// their sum) may exceed the capped composite score.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub bus_stops: f64,
    pub railway: f64,
    pub airports: f64,
    pub highways: f64,
}

impl ScoreBreakdown {
    pub fn raw_total(&self) -> f64 {
        self.bus_stops + self.railway + self.airports + self.highways
    }

    /// Composite score: raw total rounded to one decimal, capped at
    /// [`MAX_SCORE`].
    pub fn score(&self) -> f64 {
        let rounded = (self.raw_total() * 10.0).round() / 10.0;
        rounded.min(MAX_SCORE)
    }
}

/// Bus stops boost quickly, up to 1 km.
pub fn bus_stop_points(distance_meters: u32) -> f64 {
    match distance_meters {
        0..=300 => 2.0,
        301..=600 => 1.5,
        601..=1000 => 1.0,
        _ => 0.0,
    }
}

/// Rail (stations plus metro/tram) contributes in the 2-10 km band.
/// Closer rail deliberately scores nothing.
pub fn railway_points(distance_meters: u32) -> f64 {
    match distance_meters {
        2_000..=5_000 => 2.0,
        5_001..=10_000 => 1.0,
        _ => 0.0,
    }
}

/// Airports add long-distance connectivity in the 20-40 km band.
pub fn airport_points(distance_meters: u32) -> f64 {
    match distance_meters {
        20_000..=30_000 => 2.0,
        30_001..=40_000 => 1.0,
        _ => 0.0,
    }
}

/// Major highways help accessibility between 100 m and 500 m.
pub fn highway_points(distance_meters: u32) -> f64 {
    match distance_meters {
        100..=300 => 1.5,
        301..=500 => 1.0,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bus_stop_tiers_are_exclusive() {
        assert_eq!(bus_stop_points(0), 2.0);
        assert_eq!(bus_stop_points(300), 2.0);
        assert_eq!(bus_stop_points(301), 1.5);
        assert_eq!(bus_stop_points(600), 1.5);
        assert_eq!(bus_stop_points(601), 1.0);
        assert_eq!(bus_stop_points(1000), 1.0);
        assert_eq!(bus_stop_points(1001), 0.0);
    }

    #[test]
    fn very_close_rail_scores_nothing() {
        assert_eq!(railway_points(0), 0.0);
        assert_eq!(railway_points(1999), 0.0);
        assert_eq!(railway_points(2000), 2.0);
        assert_eq!(railway_points(5000), 2.0);
        assert_eq!(railway_points(5001), 1.0);
        assert_eq!(railway_points(10_000), 1.0);
        assert_eq!(railway_points(10_001), 0.0);
    }

    #[test]
    fn airport_tiers() {
        assert_eq!(airport_points(19_999), 0.0);
        assert_eq!(airport_points(20_000), 2.0);
        assert_eq!(airport_points(30_000), 2.0);
        assert_eq!(airport_points(30_001), 1.0);
        assert_eq!(airport_points(40_000), 1.0);
        assert_eq!(airport_points(40_001), 0.0);
    }

    #[test]
    fn highway_tiers() {
        assert_eq!(highway_points(99), 0.0);
        assert_eq!(highway_points(100), 1.5);
        assert_eq!(highway_points(300), 1.5);
        assert_eq!(highway_points(301), 1.0);
        assert_eq!(highway_points(500), 1.0);
        assert_eq!(highway_points(501), 0.0);
    }

    #[test]
    fn score_caps_at_ten_but_breakdown_stays_raw() {
        // Seven bus stops within 300 m: raw 14.0.
        let breakdown = ScoreBreakdown {
            bus_stops: 14.0,
            ..Default::default()
        };
        assert_eq!(breakdown.raw_total(), 14.0);
        assert_eq!(breakdown.score(), 10.0);
        assert_eq!(breakdown.bus_stops, 14.0);
    }

    #[test]
    fn score_rounds_to_one_decimal() {
        let breakdown = ScoreBreakdown {
            bus_stops: 2.0,
            railway: 1.0,
            airports: 0.0,
            highways: 1.5,
        };
        assert_eq!(breakdown.score(), 4.5);
    }
}
