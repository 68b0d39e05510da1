use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::messages::use_cases::append_message::command::AppendMessage;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AppendMessageBody {
    pub text: String,
}

#[derive(Serialize)]
pub struct AppendMessageResponse {
    pub message: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<AppendMessageBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let message = state
        .append_handler
        .handle(AppendMessage { text: body.text })
        .await;

    (StatusCode::CREATED, Json(AppendMessageResponse { message })).into_response()
}
