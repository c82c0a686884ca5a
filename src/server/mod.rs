mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};

use crate::api::API;
use crate::error::{server_error, Error};
use crate::server::handlers::{health, quotes};

pub use crate::server::handlers::quotes::{QuoteResponse, NO_DRIVERS_MESSAGE};

pub type DynAPI = Arc<dyn API + Send + Sync>;

pub fn router<T: API + Sync + Send + 'static>(api: T) -> Router {
    let api = Arc::new(api) as DynAPI;

    Router::new()
        .route("/quotes", post(quotes::create))
        .route("/esr_riders", get(quotes::create_legacy))
        .route("/health", get(health))
        .layer(Extension(api))
}

pub async fn serve<T: API + Sync + Send + 'static>(api: T, port: u16) -> Result<(), Error> {
    let app = router(api);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!("listening on {}", addr);

    axum::Server::try_bind(&addr)
        .map_err(server_error)?
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(server_error)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }

    tracing::info!("shutting down");
}
