use serde::{Deserialize, Serialize};

use crate::error::{malformed_request_error, Error};

/// A start/end pair of free-text place names.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Journey {
    #[serde(alias = "Start")]
    pub start: String,
    #[serde(alias = "End")]
    pub end: String,
}

impl Journey {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Result<Self, Error> {
        let journey = Self {
            start: start.into(),
            end: end.into(),
        };
        journey.validate()?;

        Ok(journey)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.start.trim().is_empty() {
            return Err(malformed_request_error("journey start is blank"));
        }

        if self.end.trim().is_empty() {
            return Err(malformed_request_error("journey end is blank"));
        }

        Ok(())
    }
}
