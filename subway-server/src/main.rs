use subway_server::config::ServerConfig;
use subway_server::store::{LineStore, StationStore};
use subway_server::web::{AppState, create_router};

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // RUST_LOG controls verbosity; default to info.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServerConfig::from_env();

    let state = AppState::new(StationStore::new(), LineStore::new());
    let app = create_router(state);

    let addr = config.socket_addr();
    tracing::info!("subway line manager listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listener");
    axum::serve(listener, app).await.expect("server error");
}
