//! HTTP listener transport: one JSON-RPC message per `POST /mcp`.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::client::CodeforcesApi;
use crate::handlers;
use crate::protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
use crate::server::MAX_MESSAGE_BYTES;

#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    #[error("invalid listen address {0}")]
    Address(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Build the router. Requests are stateless: there is no initialization gate.
pub fn router(api: Arc<CodeforcesApi>) -> Router {
    Router::new()
        .route("/mcp", post(handle_rpc))
        .route("/health", get(health))
        .layer(DefaultBodyLimit::max(MAX_MESSAGE_BYTES))
        .with_state(api)
}

/// Bind `host:port` and serve until Ctrl-C.
pub async fn serve(host: &str, port: u16, api: CodeforcesApi) -> Result<(), HttpError> {
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .map_err(|_| HttpError::Address(format!("{host}:{port}")))?;

    tracing::info!(%addr, api = api.base_url(), "serving MCP over HTTP");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(Arc::new(api)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn handle_rpc(State(api): State<Arc<CodeforcesApi>>, body: Bytes) -> Response {
    let req: JsonRpcRequest = match serde_json::from_slice(&body) {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(error = %e, "parse error");
            return Json(JsonRpcResponse::error(None, JsonRpcError::parse_error())).into_response();
        }
    };

    if req.jsonrpc != "2.0" {
        return Json(JsonRpcResponse::error(req.id, JsonRpcError::invalid_request()))
            .into_response();
    }

    match handlers::dispatch(&req, &api).await {
        Some(resp) => Json(resp).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}
