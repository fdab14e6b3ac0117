use crate::web::{Error, Result};

use app::App;
use axum::response::Response as AxumResponse;
use axum::Router;
use axum::{
    body::Body,
    extract::State,
    http::{Request, Response, StatusCode, Uri},
    response::IntoResponse,
};
use leptos::leptos_config::ConfFile;
use leptos::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use std::net::SocketAddr;
use tower::ServiceExt;
use tower_http::services::ServeDir;

/// Read the cargo-leptos configuration (env values in DEV, `Cargo.toml`
/// metadata otherwise) and the address the site binds to.
pub async fn get_leptos_config() -> Result<(ConfFile, SocketAddr)> {
    let conf = get_configuration(None).await?;
    let addr = conf.leptos_options.site_addr;

    Ok((conf, addr))
}

pub async fn file_and_error_handler(
    uri: Uri,
    State(options): State<LeptosOptions>,
    req: Request<Body>,
) -> AxumResponse {
    let root = options.site_root.clone();

    match get_static_file(uri, &root).await {
        Ok(res) if res.status() == StatusCode::OK => res.into_response(),
        _ => {
            let handler =
                leptos_axum::render_app_to_stream(options.to_owned(), move || view! { <App/> });
            handler(req).await.into_response()
        }
    }
}

async fn get_static_file(uri: Uri, root: &str) -> Result<Response<Body>> {
    let req = Request::builder().uri(uri).body(Body::empty())?;
    // `ServeDir` implements `tower::Service` so we can call it with `tower::ServiceExt::oneshot`
    // This path is relative to the cargo root
    match ServeDir::new(root).oneshot(req).await {
        Ok(res) => Ok(res.map(Body::new)),
        Err(_) => Err(Error::ServeDir),
    }
}

pub fn routes(config: ConfFile) -> Router {
    let leptos_options = config.leptos_options;
    let routes = generate_route_list(App);

    Router::new()
        .leptos_routes(&leptos_options, routes, App)
        .fallback(file_and_error_handler)
        .with_state(leptos_options)
}
