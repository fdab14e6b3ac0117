mod error;
mod web;

pub use self::error::{Error, Result};

use axum::Router;
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // load .env if present (cargo leptos prevent to use .cargo/config.toml)
    let _ = dotenv();

    // create a global subscriber
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .without_time() // only on local deployments
        .with_target(false)
        .init();

    // get leptos config
    let (leptos_config, addr) = web::routes_leptos::get_leptos_config().await?;

    // region:        --- Axum router

    let routes_all = Router::new().merge(web::routes_leptos::routes(leptos_config));

    // endregion:     --- Axum router

    // region:        --- Start server

    // Ok to `unwrap` errors here
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    info!("{:<12} - {:?}\n", "LISTENING", listener.local_addr());
    axum::serve(listener, routes_all.into_make_service())
        .await
        .unwrap();

    // endregion:     --- Start server

    Ok(())
}
