use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::{DriverDirectory, Roster};
use crate::error::{directory_unavailable_error, Error};

/// Reads the current roster from the drivers service.
#[derive(Clone, Debug)]
pub struct DriversClient {
    client: Client,
    url: String,
    api_key: String,
}

impl DriversClient {
    pub fn new(url: String, api_key: String, timeout: Duration) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(directory_unavailable_error)?;

        Ok(Self {
            client,
            url,
            api_key,
        })
    }
}

#[async_trait]
impl DriverDirectory for DriversClient {
    #[tracing::instrument(skip(self), fields(url = %self.url))]
    async fn fetch_roster(&self) -> Result<Roster, Error> {
        let res = self
            .client
            .get(&self.url)
            .header("x-api-key", &self.api_key)
            .send()
            .await
            .map_err(|err| {
                tracing::warn!(timeout = err.is_timeout(), "drivers request failed: {}", err);
                directory_unavailable_error(err)
            })?;

        let status = res.status();

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "drivers service returned an error status");
            return Err(directory_unavailable_error(status));
        }

        let roster: Roster = res.json().await.map_err(|err| {
            tracing::warn!("drivers response decoding failed: {}", err);
            directory_unavailable_error(err)
        })?;

        if let Some(driver) = roster.values().find(|driver| !driver.has_valid_rate()) {
            tracing::warn!(
                driver = %driver.name,
                rate = driver.rate,
                "roster contains an invalid rate"
            );
            return Err(directory_unavailable_error(format!(
                "invalid rate for {}",
                driver.name
            )));
        }

        Ok(roster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> DriversClient {
        DriversClient::new(
            format!("{}/esr_drivers", server.uri()),
            "drivers-key".into(),
            Duration::from_millis(500),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn decodes_roster_sent_with_service_key() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/esr_drivers"))
            .and(header("x-api-key", "drivers-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Bob": {"Id": "u-2", "Name": "Bob", "Rate": 7.0},
                "Ann": {"Id": "u-1", "Name": "Ann", "Rate": 10.0},
            })))
            .expect(1)
            .mount(&server)
            .await;

        let roster = client_for(&server).fetch_roster().await.unwrap();

        assert_eq!(roster.len(), 2);
        assert_eq!(roster["Bob"].rate, 7.0);
        assert_eq!(roster.keys().next().map(String::as_str), Some("Ann"));
    }

    #[tokio::test]
    async fn empty_roster_is_not_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let roster = client_for(&server).fetch_roster().await.unwrap();

        assert!(roster.is_empty());
    }

    #[tokio::test]
    async fn rejected_key_is_directory_unavailable() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(400))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_roster().await.unwrap_err();

        assert!(err.is_directory_unavailable_error());
    }

    #[tokio::test]
    async fn malformed_body_is_directory_unavailable() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_roster().await.unwrap_err();

        assert!(err.is_directory_unavailable_error());
    }

    #[tokio::test]
    async fn negative_rate_is_rejected() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Eve": {"Name": "Eve", "Rate": -1.0},
            })))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_roster().await.unwrap_err();

        assert!(err.is_directory_unavailable_error());
    }

    #[tokio::test]
    async fn slow_directory_times_out() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({}))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_roster().await.unwrap_err();

        assert!(err.is_directory_unavailable_error());
    }

    #[tokio::test]
    async fn unreachable_directory_is_unavailable() {
        let client = DriversClient::new(
            "http://127.0.0.1:9/esr_drivers".into(),
            "drivers-key".into(),
            Duration::from_millis(500),
        )
        .unwrap();

        let err = client.fetch_roster().await.unwrap_err();

        assert!(err.is_directory_unavailable_error());
    }
}
