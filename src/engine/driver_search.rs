use crate::entities::DriverCandidate;
use crate::error::Error;
use crate::external::{DriverDirectory, Roster};

/// The cheapest driver in a roster snapshot and the snapshot's size.
#[derive(Clone, Debug, PartialEq)]
pub struct BestDriver {
    pub driver: DriverCandidate,
    pub available_count: usize,
}

/// Picks the strictly lowest rate. Ties keep the first candidate in roster
/// order, which is by name. `None` for an empty roster.
pub fn select_best_driver(roster: &Roster) -> Option<BestDriver> {
    let mut best: Option<&DriverCandidate> = None;

    for candidate in roster.values() {
        match best {
            Some(current) if candidate.rate >= current.rate => {}
            _ => best = Some(candidate),
        }
    }

    best.map(|driver| BestDriver {
        driver: driver.clone(),
        available_count: roster.len(),
    })
}

#[tracing::instrument(skip(directory))]
pub async fn find_best_driver<D>(directory: &D) -> Result<Option<BestDriver>, Error>
where
    D: DriverDirectory + ?Sized,
{
    let roster = directory.fetch_roster().await?;

    Ok(select_best_driver(&roster))
}
