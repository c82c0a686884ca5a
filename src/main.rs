use std::process::ExitCode;

use rider_quotes::config::Config;
use rider_quotes::engine::Engine;
use rider_quotes::error::Error;
use rider_quotes::server::serve;

#[tokio::main]
async fn main() -> ExitCode {
    // RUST_LOG may come from .env, so load it before the subscriber
    let dotenv_loaded = dotenv::dotenv().is_ok();

    tracing_subscriber::fmt::init();

    if !dotenv_loaded {
        tracing::warn!("no .env file found, reading configuration from the environment");
    }

    let result: Result<(), Error> = async {
        let config = Config::from_env()?;
        let engine = Engine::new(&config)?;

        serve(engine, config.port).await
    }
    .await;

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
