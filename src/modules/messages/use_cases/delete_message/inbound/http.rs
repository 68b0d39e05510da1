use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::messages::use_cases::delete_message::command::DeleteMessage;
use crate::modules::messages::use_cases::delete_message::handler::ApplicationError;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct DeleteMessageResponse {
    pub message: String,
}

#[derive(Serialize)]
pub struct DeleteMessageErrorResponse {
    pub error: String,
}

pub async fn handle(State(state): State<AppState>, Path(index): Path<i64>) -> impl IntoResponse {
    match state.delete_handler.handle(DeleteMessage { index }).await {
        Ok(message) => (StatusCode::OK, Json(DeleteMessageResponse { message })).into_response(),
        Err(e @ ApplicationError::Store(_)) => (
            StatusCode::NOT_FOUND,
            Json(DeleteMessageErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
    }
}
