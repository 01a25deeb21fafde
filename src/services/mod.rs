//! Services module - Coordinatore per tutti i service handler HTTP
//!
//! `message_access` contiene le regole di autorizzazione, `message` gli handler
//! axum che le espongono.

pub mod message;
pub mod message_access;

// Re-exports per facilitare l'import
pub use message::{get_message, mark_message_read, send_message};
pub use message_access::MessageAccess;

use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

/// Root endpoint - health check
pub async fn root(State(_state): State<Arc<AppState>>) -> impl IntoResponse {
    (StatusCode::OK, "Server is running!")
}
