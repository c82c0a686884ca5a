use super::{analyze_route, compute_multiplier, find_best_driver, BestDriver, Engine};

use async_trait::async_trait;

use crate::{
    api::QuoteAPI,
    entities::{Journey, Quote, SurgeContext},
    error::Error,
};

#[async_trait]
impl QuoteAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_quote(&self, journey: Journey) -> Result<Option<Quote>, Error> {
        let BestDriver {
            driver,
            available_count,
        } = match find_best_driver(self.directory.as_ref()).await? {
            Some(best) => best,
            None => {
                tracing::info!("tried finding best driver, but none available");
                return Ok(None);
            }
        };

        let route =
            analyze_route(self.directions.as_ref(), self.classifier.as_ref(), &journey).await?;

        let ctx = SurgeContext::new(&route, available_count, self.clock.hour());
        let multiplier = compute_multiplier(&ctx);
        let quote = Quote::new(&driver, &route, multiplier).map_err(|err| {
            tracing::warn!(
                driver = %driver.name,
                distance_m = route.total_distance_meters,
                base_rate = driver.rate,
                multiplier,
                "price out of range"
            );
            err
        })?;

        tracing::info!(
            driver = %driver.name,
            distance_m = route.total_distance_meters,
            base_rate = driver.rate,
            multiplier,
            final_rate = quote.effective_rate_per_km,
            cost = quote.total_cost,
            "calculated journey"
        );

        Ok(Some(quote))
    }
}
