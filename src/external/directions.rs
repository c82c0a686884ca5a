use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::DirectionsProvider;
use crate::entities::Journey;
use crate::error::{routing_decode_failed_error, routing_unavailable_error, Error};

/// Directions payload as relayed by the directions proxy. Only the fields the
/// route analysis reads are modelled.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Directions {
    #[serde(default)]
    pub routes: Vec<DirectionsRoute>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DirectionsRoute {
    #[serde(default)]
    pub legs: Vec<Leg>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Leg {
    pub distance: Distance,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Step {
    pub distance: Distance,
    #[serde(default)]
    pub html_instructions: String,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Distance {
    pub value: f64,
}

impl Distance {
    fn is_valid(&self) -> bool {
        self.value.is_finite() && self.value >= 0.0
    }
}

impl Directions {
    fn has_valid_distances(&self) -> bool {
        self.routes
            .iter()
            .flat_map(|route| route.legs.iter())
            .all(|leg| {
                leg.distance.is_valid() && leg.steps.iter().all(|step| step.distance.is_valid())
            })
    }
}

/// Fetches directions for a journey from the directions proxy.
#[derive(Clone, Debug)]
pub struct DirectionsClient {
    client: Client,
    url: String,
    api_key: String,
}

impl DirectionsClient {
    pub fn new(url: String, api_key: String, timeout: Duration) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(routing_unavailable_error)?;

        Ok(Self {
            client,
            url,
            api_key,
        })
    }
}

#[async_trait]
impl DirectionsProvider for DirectionsClient {
    #[tracing::instrument(skip(self), fields(url = %self.url))]
    async fn fetch_directions(&self, journey: &Journey) -> Result<Directions, Error> {
        // the proxy reads the journey from the body of a GET
        let res = self
            .client
            .get(&self.url)
            .header("x-api-key", &self.api_key)
            .json(journey)
            .send()
            .await
            .map_err(|err| {
                tracing::warn!(timeout = err.is_timeout(), "directions request failed: {}", err);
                routing_unavailable_error(err)
            })?;

        let status = res.status();

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "directions service returned an error status");
            return Err(routing_unavailable_error(status));
        }

        let directions: Directions = res.json().await.map_err(|err| {
            tracing::warn!("directions response decoding failed: {}", err);
            routing_decode_failed_error(err)
        })?;

        if !directions.has_valid_distances() {
            return Err(routing_decode_failed_error("negative or non-finite distance"));
        }

        Ok(directions)
    }
}
