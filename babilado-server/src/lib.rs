//! HTTP server wiring for the chat relay
//!
//! Routes inbound calls to the core library and maps its errors onto
//! the wire contract: every failure body is `{"error": <message>}`.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{any, get};
use axum::{Json, Router};
use serde_json::json;
use tracing::{error, info};

use babilado_core::{
    create_provider, validate_chat_request, ChatError, ChatReply, Config, DocumentStore,
    HttpClient, Provider, StoreError,
};

/// Shared state for request handlers.
pub struct AppState {
    pub config: Config,
    pub provider: Box<dyn Provider>,
    pub http: HttpClient,
    pub store: DocumentStore,
}

impl AppState {
    /// Build application state from loaded configuration
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let provider = create_provider(config.provider.kind);
        let http = HttpClient::new()?;
        let store = DocumentStore::new(config.store.clone())?;
        Ok(Self {
            config,
            provider,
            http,
            store,
        })
    }
}

/// Build the application router.
///
/// The chatbot route accepts any method so the validator owns method
/// rejection and its 405 body.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/chatbot", any(chatbot_handler))
        .route("/api/mapdata", get(mapdata_handler))
        .with_state(state)
}

async fn chatbot_handler(
    State(state): State<Arc<AppState>>,
    method: Method,
    body: Bytes,
) -> Result<Json<ChatReply>, ApiError> {
    let request = validate_chat_request(method.as_str(), &body)?;
    let reply = state
        .http
        .send_chat(state.provider.as_ref(), &state.config.provider, &request)
        .await?;
    Ok(Json(reply))
}

async fn mapdata_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let terminals = state.store.list().await?;
    Ok(Json(json!({ "terminals": terminals })))
}

/// Handler-level error, mapped onto the wire contract.
enum ApiError {
    Chat(ChatError),
    Store(StoreError),
}

impl From<ChatError> for ApiError {
    fn from(err: ChatError) -> Self {
        ApiError::Chat(err)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Store(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Chat(ChatError::MethodNotAllowed) => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method not allowed".to_string(),
            ),
            ApiError::Chat(ChatError::MissingMessage) => {
                (StatusCode::BAD_REQUEST, "Message is required".to_string())
            }
            ApiError::Chat(ChatError::Configuration(err)) => {
                error!("Chat request failed on configuration: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            ApiError::Chat(ChatError::Upstream { status, body }) => {
                let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                // Relay the upstream body; fall back to the status text
                // when the upstream sent nothing.
                let message = if body.is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("upstream failure")
                        .to_string()
                } else {
                    body
                };
                (status, message)
            }
            ApiError::Chat(ChatError::Transport(err)) => {
                error!("Chat request failed in transport: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
            ApiError::Store(err) => {
                error!("Terminal listing failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch terminals".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Wait for a shutdown signal (Ctrl+C or SIGTERM).
pub async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        }
        _ = terminate => {
            info!("Received SIGTERM, shutting down");
        }
    }
}
