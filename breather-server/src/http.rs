//! Breather HTTP API
//!
//! Axum-based HTTP server backing the stress-relief arcade frontend.
//!
//! Architecture: each endpoint has a thin axum handler that delegates to a pure
//! inner function. The inner functions are directly testable without axum
//! dispatch machinery.
//!
//! Endpoints:
//! - any  /api/quote — rotating pick-me-up quote, keyed by wall-clock second
//! - POST /api/track — best-effort analytics sink; logs the event and discards it

use anyhow::Result;
use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{any, post};
use axum::{middleware, Json, Router};
use breather_core::{quote_at, BreatherConfig, TrackEvent};
use chrono::Utc;
use serde::Serialize;
use tokio::net::TcpListener;
use tokio::sync::broadcast;

use crate::cors;

/// Build the Axum router with all endpoints. The CORS layer wraps every
/// route, so preflights never reach the handlers.
pub fn build_router() -> Router {
    Router::new()
        .route("/api/quote", any(quote_handler))
        .route("/api/track", post(track_handler))
        .layer(middleware::from_fn(cors::allow_all))
}

/// Start the HTTP server on the configured address.
/// Gracefully shuts down when the broadcast shutdown signal fires.
pub async fn start_http_server(
    config: BreatherConfig,
    mut shutdown: broadcast::Receiver<()>,
) -> Result<()> {
    let addr = format!("{}:{}", config.http.host, config.http.port);

    let app = build_router();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Breather HTTP API listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown.recv().await;
            tracing::info!("HTTP server shutting down...");
        })
        .await?;

    Ok(())
}

// ============================================================================
// Response DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub quote: &'static str,
}

// ============================================================================
// Inner (directly testable) business logic functions
// ============================================================================

/// Inner quote selection — pure given the clock second.
pub fn quote_inner(unix_secs: i64) -> QuoteResponse {
    QuoteResponse {
        quote: quote_at(unix_secs),
    }
}

/// Inner track decode — best effort. An undecodable body yields the
/// zero-valued record; the client never sees a decode error.
pub fn track_inner(body: &[u8]) -> TrackEvent {
    serde_json::from_slice(body).unwrap_or_default()
}

// ============================================================================
// Axum handler wrappers (thin — delegate to inner functions)
// ============================================================================

pub async fn quote_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(quote_inner(Utc::now().timestamp())))
}

pub async fn track_handler(body: Bytes) -> StatusCode {
    let record = track_inner(&body);
    tracing::info!("[track] {}", record);
    StatusCode::NO_CONTENT
}

// ============================================================================
// Unit Tests — call inner functions directly
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use breather_core::QUOTES;

    #[test]
    fn test_quote_inner_follows_rotation() {
        for offset in 0..4i64 {
            let secs = 1_700_000_000 + offset;
            let resp = quote_inner(secs);
            assert_eq!(resp.quote, QUOTES[(secs % 4) as usize]);
        }
    }

    #[test]
    fn test_quote_response_shape() {
        let body = serde_json::to_value(quote_inner(0)).unwrap();
        assert_eq!(body, serde_json::json!({ "quote": QUOTES[0] }));
    }

    #[test]
    fn test_track_inner_valid_body() {
        let record =
            track_inner(br#"{"event":"open","scene":"home","ts":1700000000}"#);
        assert_eq!(record.event, "open");
        assert_eq!(record.scene, "home");
        assert_eq!(record.ts, 1700000000);
    }

    #[test]
    fn test_track_inner_partial_body_defaults() {
        let record = track_inner(br#"{"scene":"bubbles"}"#);
        assert_eq!(record.event, "");
        assert_eq!(record.scene, "bubbles");
        assert_eq!(record.ts, 0);
    }

    #[test]
    fn test_track_inner_swallows_garbage() {
        let record = track_inner(b"{\"event\":\"open\",");
        assert_eq!(record.event, "");
        assert_eq!(record.ts, 0);
    }

    #[test]
    fn test_track_inner_empty_body() {
        let record = track_inner(b"");
        assert_eq!(record.to_string(), "event= scene= ts=0");
    }
}
