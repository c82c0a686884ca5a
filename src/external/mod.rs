pub mod directions;
pub mod drivers;

use async_trait::async_trait;
use std::collections::BTreeMap;

use crate::entities::{DriverCandidate, Journey};
use crate::error::Error;

pub use directions::{Directions, DirectionsClient};
pub use drivers::DriversClient;

/// Roster snapshot keyed by driver name. Ordered so that iteration, and hence
/// tie-breaking between equal rates, is by name.
pub type Roster = BTreeMap<String, DriverCandidate>;

#[async_trait]
pub trait DriverDirectory {
    async fn fetch_roster(&self) -> Result<Roster, Error>;
}

#[async_trait]
pub trait DirectionsProvider {
    async fn fetch_directions(&self, journey: &Journey) -> Result<Directions, Error>;
}
