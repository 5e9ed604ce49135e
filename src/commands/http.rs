//! HTTP transport for the storefront. Maps HTTP requests to command dispatch.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `POST /:command`: dispatch a command. Body = JSON input. The session
//!   key travels in the configured session header (default
//!   `x-session-key`) in both directions; a request without one starts a
//!   new session whose key comes back in the response header.
//! - `GET /health`: health check returning `{ "ok": true, "commands": [...] }`.
//!
//! ## Example
//!
//! ```ignore
//! let service = Arc::new(Service::new(catalog, sessions).with_default_commands());
//!
//! // Get the router to compose with other axum routes
//! let app = storefront::commands::router(service.clone());
//!
//! // Or serve directly
//! storefront::commands::serve(service, "0.0.0.0:8000").await?;
//! ```

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tracing::info;

use super::service::Service;
use crate::catalog::Catalog;
use crate::session::SessionStore;

/// Build an axum `Router` that dispatches commands via the given service.
pub fn router<C, S>(service: Arc<Service<C, S>>) -> Router
where
    C: Catalog + 'static,
    S: SessionStore + 'static,
{
    Router::new()
        .route("/health", get(health_handler::<C, S>))
        .route("/:command", post(command_handler::<C, S>))
        .with_state(service)
}

/// Serve the service over HTTP at the given address (e.g. `"0.0.0.0:8000"`).
pub async fn serve<C, S>(service: Arc<Service<C, S>>, addr: &str) -> Result<(), std::io::Error>
where
    C: Catalog + 'static,
    S: SessionStore + 'static,
{
    let app = router(service);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "storefront listening");
    axum::serve(listener, app).await
}

/// `GET /health`: returns `{ "ok": true, "commands": [...] }`.
async fn health_handler<C, S>(State(service): State<Arc<Service<C, S>>>) -> impl IntoResponse
where
    C: Catalog + 'static,
    S: SessionStore + 'static,
{
    let commands: Vec<&str> = service.commands();
    Json(json!({ "ok": true, "commands": commands }))
}

/// `POST /:command`: dispatch a command with JSON body and the session key
/// from the session header.
async fn command_handler<C, S>(
    State(service): State<Arc<Service<C, S>>>,
    Path(command): Path<String>,
    headers: HeaderMap,
    Json(input): Json<Value>,
) -> Response
where
    C: Catalog + 'static,
    S: SessionStore + 'static,
{
    let header = service.config().session_header.as_str();
    let session_key = headers.get(header).and_then(|v| v.to_str().ok());

    match service.dispatch(&command, input, session_key) {
        Ok(dispatched) => {
            let mut response = (StatusCode::OK, Json(dispatched.body)).into_response();
            if let (Ok(name), Ok(value)) = (
                HeaderName::try_from(header),
                HeaderValue::from_str(&dispatched.session_key),
            ) {
                response.headers_mut().insert(name, value);
            }
            response
        }
        Err(e) => {
            let status =
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            let body = json!({ "error": e.to_string() });
            (status, Json(body)).into_response()
        }
    }
}
