use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteSegment {
    pub distance_meters: f64,
    pub is_major_road: bool,
}

/// Distance totals for the primary leg of a route.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub total_distance_meters: f64,
    pub major_road_distance_meters: f64,
}

impl RouteSummary {
    /// `leg_distance_meters` is the provider's own leg total and is used as-is
    /// rather than re-summing the segments.
    pub fn new(leg_distance_meters: f64, segments: &[RouteSegment]) -> Self {
        let major_road_distance_meters = segments
            .iter()
            .filter(|segment| segment.is_major_road)
            .map(|segment| segment.distance_meters)
            .sum();

        Self {
            total_distance_meters: leg_distance_meters,
            major_road_distance_meters,
        }
    }

    /// Zero when the leg has no length.
    pub fn major_road_fraction(&self) -> f64 {
        if self.total_distance_meters > 0.0 {
            self.major_road_distance_meters / self.total_distance_meters
        } else {
            0.0
        }
    }
}
