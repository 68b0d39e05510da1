use axum::{Json, response::IntoResponse};
use serde::Serialize;

use crate::modules::messages::use_cases::greet::greeting::GREETING;

#[derive(Serialize)]
pub struct GreetingResponse {
    pub message: &'static str,
}

pub async fn handle() -> impl IntoResponse {
    Json(GreetingResponse { message: GREETING })
}
