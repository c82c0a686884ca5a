mod clock;
mod driver_search;
mod quote_api;
mod route_analysis;
mod surge;

use std::sync::Arc;

pub use clock::{Clock, FixedClock, LocalClock};
pub use driver_search::{find_best_driver, select_best_driver, BestDriver};
pub use route_analysis::{
    analyze_route, select_primary_leg, summarize_leg, DesignationClassifier, RoadClassifier,
};
pub use surge::compute_multiplier;

use crate::{
    api::API,
    config::Config,
    error::Error,
    external::{DirectionsClient, DirectionsProvider, DriverDirectory, DriversClient},
};

pub type DynDirectory = Arc<dyn DriverDirectory + Send + Sync>;
pub type DynDirections = Arc<dyn DirectionsProvider + Send + Sync>;

/// Produces quotes. Holds no mutable state, so one instance serves every
/// request concurrently.
pub struct Engine {
    directory: DynDirectory,
    directions: DynDirections,
    classifier: Box<dyn RoadClassifier + Send + Sync>,
    clock: Box<dyn Clock + Send + Sync>,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub fn new(config: &Config) -> Result<Self, Error> {
        let directory = DriversClient::new(
            config.drivers_url.clone(),
            config.drivers_api_key.clone(),
            config.request_timeout,
        )?;

        let directions = DirectionsClient::new(
            config.directions_url.clone(),
            config.directions_api_key.clone(),
            config.request_timeout,
        )?;

        Ok(Self::from_parts(Arc::new(directory), Arc::new(directions)))
    }

    pub fn from_parts(directory: DynDirectory, directions: DynDirections) -> Self {
        Self {
            directory,
            directions,
            classifier: Box::new(DesignationClassifier::default()),
            clock: Box::new(LocalClock),
        }
    }

    pub fn with_clock<C: Clock + Send + Sync + 'static>(mut self, clock: C) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_classifier<C>(mut self, classifier: C) -> Self
    where
        C: RoadClassifier + Send + Sync + 'static,
    {
        self.classifier = Box::new(classifier);
        self
    }
}

impl API for Engine {}
