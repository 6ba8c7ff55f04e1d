mod config;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    // Places credential is non-fatal: the map/photo proxy routes answer with
    // a configuration error until it is set.
    let places = match config::PlacesConfig::from_env() {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!(error = %e, "places credential not configured — map/photo proxying disabled");
            None
        }
    };

    let http = services::maps::upstream_client().expect("failed to build HTTP client");
    let state = state::AppState::new(places, http);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "scoresnap listening");
    axum::serve(listener, app).await.expect("server failed");
}
