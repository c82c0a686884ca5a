use crate::entities::{Journey, RouteSegment, RouteSummary};
use crate::error::{no_route_found_error, Error};
use crate::external::directions::{Directions, Leg};
use crate::external::DirectionsProvider;

/// Decides whether a step's instruction text describes a major arterial road.
pub trait RoadClassifier {
    fn is_major_road(&self, instruction: &str) -> bool;
}

/// Matches a road designation such as `A64`: the designation letter followed
/// by at least one ASCII digit, anywhere in the instruction.
#[derive(Clone, Copy, Debug)]
pub struct DesignationClassifier {
    pub letter: char,
}

impl Default for DesignationClassifier {
    fn default() -> Self {
        Self { letter: 'A' }
    }
}

impl RoadClassifier for DesignationClassifier {
    fn is_major_road(&self, instruction: &str) -> bool {
        let mut chars = instruction.chars().peekable();

        while let Some(c) = chars.next() {
            if c == self.letter && chars.peek().map_or(false, |next| next.is_ascii_digit()) {
                return true;
            }
        }

        false
    }
}

/// The primary leg: first leg of the first route.
pub fn select_primary_leg(directions: &Directions) -> Option<&Leg> {
    directions.routes.first()?.legs.first()
}

pub fn summarize_leg<C>(leg: &Leg, classifier: &C) -> RouteSummary
where
    C: RoadClassifier + ?Sized,
{
    let segments: Vec<RouteSegment> = leg
        .steps
        .iter()
        .map(|step| RouteSegment {
            distance_meters: step.distance.value,
            is_major_road: classifier.is_major_road(&step.html_instructions),
        })
        .collect();

    RouteSummary::new(leg.distance.value, &segments)
}

#[tracing::instrument(skip(provider, classifier))]
pub async fn analyze_route<P, C>(
    provider: &P,
    classifier: &C,
    journey: &Journey,
) -> Result<RouteSummary, Error>
where
    P: DirectionsProvider + ?Sized,
    C: RoadClassifier + ?Sized,
{
    let directions = provider.fetch_directions(journey).await?;

    let leg = select_primary_leg(&directions).ok_or_else(|| {
        tracing::info!("directions contained no route");
        no_route_found_error()
    })?;

    Ok(summarize_leg(leg, classifier))
}
