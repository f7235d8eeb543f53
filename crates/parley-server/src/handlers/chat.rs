//! One-shot chat handler.

use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::{debug, error, info};

use crate::dto::{ChatRequest, ChatResponse};
use crate::error::AppError;
use crate::services::chat::{self as chat_service, LOG_PREVIEW_CHARS, NO_MESSAGE};
use crate::ServerState;

/// Forwards the user's message to the completion provider.
///
/// Any body that does not decode to `{"message": <non-empty string>}` is a
/// 400; every provider failure is a 500 carrying the failure text.
pub async fn chat(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            debug!("Rejected chat body: {}", rejection);
            return Err(AppError::BadRequest(NO_MESSAGE.into()));
        }
    };
    let message = chat_service::validate(&req)?;

    let shown = chat_service::preview(message, LOG_PREVIEW_CHARS);
    let ellipsis = if shown.len() < message.len() { "..." } else { "" };
    info!("Chat request: {}{}", shown, ellipsis);

    let response = chat_service::complete(&*state.provider, message)
        .await
        .map_err(|e| {
            error!("Chat error: {}", e);
            AppError::from(e)
        })?;

    Ok(Json(response))
}
