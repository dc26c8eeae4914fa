use axum::{
    routing::{get, post},
    Router,
};
use pointsapi::api::receipts;
use pointsapi::core::prelude::*;
use pointsapi::store::ReceiptStore;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let app_state = AppState::new(ReceiptStore::new());

    let app = Router::new()
        .route("/", get(receipts::sample))
        .route("/receipts/process", post(receipts::process))
        .route("/receipts/{id}/points", get(receipts::points))
        .with_state(app_state);

    // The listening port defaults to 5000, but this can be overridden by
    // the PORT environment variable.
    let port = 5000;
    let port = std::env::var("PORT")
        .map(|s| s.parse::<u16>().unwrap_or(port))
        .unwrap_or(port);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
        .await
        .unwrap();

    tracing::info!("listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.unwrap();
}
