use serde::{Deserialize, Serialize};

/// One entry of the driver roster. Drivers are identified by name only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DriverCandidate {
    #[serde(rename = "Name", alias = "name")]
    pub name: String,
    #[serde(rename = "Rate", alias = "rate")]
    pub rate: f64,
}

impl DriverCandidate {
    pub fn new(name: impl Into<String>, rate: f64) -> Self {
        Self {
            name: name.into(),
            rate,
        }
    }

    pub fn has_valid_rate(&self) -> bool {
        self.rate.is_finite() && self.rate >= 0.0
    }
}
