use axum::http::StatusCode;
use std::net::SocketAddr;
use std::time::Duration;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;
use user_service::{CONFIG, new_handler};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter(CONFIG.log_level.as_str()).init();
    info!(port = CONFIG.port, not_found = ?CONFIG.not_found, "starting user service");

    let app = new_handler(CONFIG.not_found)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(CONFIG.request_timeout_secs),
        ))
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::new(CONFIG.host, CONFIG.port);
    info!("Server running at http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
