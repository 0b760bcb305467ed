mod config;
mod routes;
mod state;
mod upstream;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; real env vars still apply.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");
    let upstream = upstream::CatalogUpstream::new(&config.upstream).expect("upstream client init failed");
    tracing::info!(upstream = %config.upstream.base_url, "forwarding /product to catalog API");

    let state = state::AppState::new(upstream);
    let app = routes::leptos_app(state).expect("leptos app init failed");

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "catalog listening");
    axum::serve(listener, app).await.expect("server failed");
}
