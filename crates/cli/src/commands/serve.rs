use std::sync::Arc;

use anyhow::Result;
use trash_cleaner_http::{AppState, create_router, start_event_dispatcher};

use super::open_service;

pub(crate) async fn run(port: u16, host: String) -> Result<()> {
    let (service, events) = open_service().await?;
    service.install().await?;

    let state = Arc::new(AppState { cleanup_service: Arc::clone(&service) });
    let dispatcher = start_event_dispatcher(Arc::clone(&state), events);

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

    service.uninstall();
    dispatcher.abort();
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
