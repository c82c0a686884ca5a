use std::env;
use std::time::Duration;

use crate::error::{config_error, Error};

const DEFAULT_PORT: u16 = 5421;
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5000;

/// Service endpoints and credentials, built once at startup and handed to
/// each client at construction.
#[derive(Clone, Debug)]
pub struct Config {
    pub drivers_url: String,
    pub drivers_api_key: String,
    pub directions_url: String,
    pub directions_api_key: String,
    pub port: u16,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name).ok_or_else(|| config_error(format!("{} missing", name)))
        };

        let port = match lookup("PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| config_error(format!("invalid PORT {:?}", value)))?,
            None => DEFAULT_PORT,
        };

        let timeout_ms = match lookup("REQUESTTIMEOUTMS") {
            Some(value) => value
                .parse()
                .map_err(|_| config_error(format!("invalid REQUESTTIMEOUTMS {:?}", value)))?,
            None => DEFAULT_REQUEST_TIMEOUT_MS,
        };

        Ok(Self {
            drivers_url: required("DRIVERSURL")?,
            drivers_api_key: required("DRIVERSAPIKEY")?,
            directions_url: required("DIRECTIONSURL")?,
            directions_api_key: required("DIRECTIONSAPIKEY")?,
            port,
            request_timeout: Duration::from_millis(timeout_ms),
        })
    }
}
