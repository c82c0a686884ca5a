use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::entities::{Journey, Quote};
use crate::error::{malformed_request_error, Error};
use crate::server::DynAPI;

pub const NO_DRIVERS_MESSAGE: &str = "No drivers available at this time.";

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuoteResponse {
    Quote(Quote),
    NoDriver { message: String },
}

impl From<Option<Quote>> for QuoteResponse {
    fn from(quote: Option<Quote>) -> Self {
        match quote {
            Some(quote) => QuoteResponse::Quote(quote),
            None => QuoteResponse::NoDriver {
                message: NO_DRIVERS_MESSAGE.into(),
            },
        }
    }
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    params: Result<Json<Journey>, JsonRejection>,
) -> Result<Json<QuoteResponse>, Error> {
    let Json(journey) =
        params.map_err(|rejection| malformed_request_error(rejection.to_string()))?;

    quote_journey(api, journey).await
}

/// Older riders clients send the journey as a bare body with no content type.
pub async fn create_legacy(
    Extension(api): Extension<DynAPI>,
    body: Bytes,
) -> Result<Json<QuoteResponse>, Error> {
    let journey: Journey = serde_json::from_slice(&body)
        .map_err(|err| malformed_request_error(err.to_string()))?;

    quote_journey(api, journey).await
}

async fn quote_journey(api: DynAPI, journey: Journey) -> Result<Json<QuoteResponse>, Error> {
    journey.validate()?;

    let quote = api.create_quote(journey).await?;

    Ok(QuoteResponse::from(quote).into())
}
