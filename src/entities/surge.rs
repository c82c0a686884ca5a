use crate::entities::RouteSummary;

/// Inputs to the surge multiplier, gathered once per quote.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurgeContext {
    pub major_road_fraction: f64,
    pub available_driver_count: usize,
    pub hour_of_day: u32,
}

impl SurgeContext {
    pub fn new(route: &RouteSummary, available_driver_count: usize, hour_of_day: u32) -> Self {
        Self {
            major_road_fraction: route.major_road_fraction(),
            available_driver_count,
            hour_of_day,
        }
    }
}
