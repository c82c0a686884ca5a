use crate::entities::SurgeContext;

const ROAD_FRACTION_THRESHOLD: f64 = 0.5;
const SCARCE_DRIVER_COUNT: usize = 5;
const PEAK_START_HOUR: u32 = 6;
const PEAK_END_HOUR: u32 = 22;

/// Doubles the base rate once for each rule that fires, giving one of 1, 2, 4
/// or 8. `hour_of_day` comes from the wall clock at quote time, so callers
/// own the only non-determinism here.
pub fn compute_multiplier(ctx: &SurgeContext) -> f64 {
    let mut multiplier = 1.0;

    if ctx.major_road_fraction > ROAD_FRACTION_THRESHOLD {
        multiplier *= 2.0;
    }

    if ctx.available_driver_count < SCARCE_DRIVER_COUNT {
        multiplier *= 2.0;
    }

    if ctx.hour_of_day > PEAK_END_HOUR || ctx.hour_of_day < PEAK_START_HOUR {
        multiplier *= 2.0;
    }

    multiplier
}
