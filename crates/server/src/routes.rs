//! HTTP routes: `POST /ask` and `GET /health`.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use runtime::{Backend, Message, Orchestrator, ToolHost};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::error::{Error, Result};

#[derive(Debug, Deserialize)]
struct AskRequest {
    #[serde(default)]
    prompt: Option<String>,
    #[serde(default)]
    historial: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct AskResponse {
    response: String,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn bad_request(error: impl Into<String>) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
}

/// Build the application router around a shared orchestrator.
pub fn router<B, T>(orchestrator: Arc<Orchestrator<B, T>>) -> Router
where
    B: Backend + 'static,
    T: ToolHost + 'static,
{
    Router::new()
        .route("/ask", post(ask::<B, T>))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(orchestrator)
}

/// Bind `addr` and serve `app` until Ctrl-C.
pub async fn serve(app: Router, addr: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| Error::Bind { addr, source })?;
    info!(%addr, "HTTP server ready to accept connections");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(Error::Serve)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}

async fn ask<B, T>(
    State(orchestrator): State<Arc<Orchestrator<B, T>>>,
    payload: std::result::Result<Json<AskRequest>, JsonRejection>,
) -> std::result::Result<Json<AskResponse>, ApiError>
where
    B: Backend + 'static,
    T: ToolHost + 'static,
{
    let Json(request) = payload.map_err(|rejection| {
        warn!(%rejection, "Rejecting /ask request with invalid body");
        bad_request(format!("Invalid request, expected JSON: {}", rejection.body_text()))
    })?;

    let prompt = match request.prompt {
        Some(prompt) if !prompt.is_empty() => prompt,
        _ => {
            warn!("Rejecting /ask request without prompt");
            return Err(bad_request("No 'prompt' found in the JSON body"));
        }
    };

    let mut history = request.historial;
    info!(history = history.len(), "Received /ask request");

    let reply = orchestrator.ask(&prompt, &mut history).await;
    info!(tool = reply.tool.as_deref(), "Answered /ask request");

    Ok(Json(AskResponse {
        response: reply.text,
    }))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
