use async_trait::async_trait;

use crate::entities::{Journey, Quote};
use crate::error::Error;

#[async_trait]
pub trait QuoteAPI {
    /// `Ok(None)` when no driver is available.
    async fn create_quote(&self, journey: Journey) -> Result<Option<Quote>, Error>;
}

pub trait API: QuoteAPI {}
