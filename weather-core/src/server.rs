//! HTTP wiring for the `GET /weather/{coords}` endpoint.
//!
//! The router is an explicit value built at startup with the upstream
//! provider injected as state; nothing is registered globally.

use std::{net::SocketAddr, sync::Arc};

use anyhow::{Context, Result};
use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::{
    WeatherProvider,
    coords::parse_coordinates,
    error::WeatherError,
    model::WeatherResponse,
    provider::openweather::OpenWeatherProvider,
};

/// Handler state. Read-only and shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn WeatherProvider>,
}

/// Build the gateway router around a provider.
pub fn router(provider: Arc<dyn WeatherProvider>) -> Router {
    Router::new()
        .route("/weather/{coords}", get(current_weather))
        .with_state(AppState { provider })
        .layer(TraceLayer::new_for_http())
}

/// Parse, look up, normalize.
async fn current_weather(
    State(state): State<AppState>,
    Path(coords): Path<String>,
) -> Result<Json<WeatherResponse>, WeatherError> {
    tracing::debug!(coords = %coords, "Received current weather request");

    let coords = parse_coordinates(&coords)?;
    let conditions = state.provider.current(&coords).await?;
    let response = WeatherResponse::from(&conditions);

    tracing::debug!(
        coords = %coords,
        condition = %response.condition,
        temperature = %response.temperature,
        "Resolved current weather"
    );

    Ok(Json(response))
}

/// Start the gateway on `port` against the public OpenWeather API.
pub async fn start_server(port: u16, api_key: String) -> Result<()> {
    start_server_with(port, Arc::new(OpenWeatherProvider::new(api_key))).await
}

/// Start the gateway on `port` with an injected provider.
pub async fn start_server_with(port: u16, provider: Arc<dyn WeatherProvider>) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind listener on {addr}"))?;

    serve(listener, router(provider)).await
}

/// Serve `router` on an already bound listener until Ctrl-C.
pub async fn serve(listener: TcpListener, router: Router) -> Result<()> {
    let addr = listener.local_addr().context("Failed to read listener address")?;
    tracing::info!(address = %addr, "Starting server");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server stopped unexpectedly")?;

    tracing::info!("Server closed");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            // Without a signal handler the server just runs until killed.
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    }
}
