use serde::{Deserialize, Serialize};

use crate::entities::{DriverCandidate, RouteSummary};
use crate::error::{pricing_error, Error};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub effective_rate_per_km: f64,
    pub total_cost: f64,
}

impl Quote {
    /// Fails when the price is not a finite, non-negative number, which valid
    /// inputs can still produce by overflowing.
    pub fn new(
        driver: &DriverCandidate,
        route: &RouteSummary,
        multiplier: f64,
    ) -> Result<Self, Error> {
        let effective_rate_per_km = multiplier * driver.rate;
        let total_cost = (route.total_distance_meters / 1000.0) * effective_rate_per_km;

        for (field, value) in [
            ("effective_rate_per_km", effective_rate_per_km),
            ("total_cost", total_cost),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(pricing_error(format!("{} is {}", field, value)));
            }
        }

        Ok(Self {
            effective_rate_per_km,
            total_cost,
        })
    }
}
