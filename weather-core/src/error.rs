//! Failures of the request pipeline and how they reach the caller.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherError {
    /// Path segment did not split into exactly two comma-separated parts.
    #[error("malformed coordinates")]
    MalformedCoordinates,

    /// Transport-level failure talking to the provider (connect, DNS, timeout, body read).
    #[error("Failed to get from endpoint: {0}")]
    UpstreamUnreachable(#[source] reqwest::Error),

    /// Provider body did not match the expected success or error schema.
    #[error("Failed to JSON decode response: {0}")]
    UpstreamDecode(#[source] serde_json::Error),

    /// Provider answered with a non-200 status and a readable error payload.
    #[error("{message} (code {code})")]
    UpstreamApi { code: String, message: String },
}

impl WeatherError {
    /// Status code the gateway answers with for this failure.
    ///
    /// Every upstream failure collapses to 500; only caller input is a 400.
    pub fn status(&self) -> StatusCode {
        match self {
            WeatherError::MalformedCoordinates => StatusCode::BAD_REQUEST,
            WeatherError::UpstreamUnreachable(_)
            | WeatherError::UpstreamDecode(_)
            | WeatherError::UpstreamApi { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_upstream(&self) -> bool {
        !matches!(self, WeatherError::MalformedCoordinates)
    }
}

impl IntoResponse for WeatherError {
    fn into_response(self) -> Response {
        if self.is_upstream() {
            tracing::error!(error = %self, "Weather lookup failed");
        } else {
            tracing::debug!(error = %self, "Rejected request");
        }

        // `String` bodies are sent as text/plain; charset=utf-8.
        (self.status(), self.to_string()).into_response()
    }
}
