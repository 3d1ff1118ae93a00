use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct ApiMessage {
    message: &'static str,
}

pub async fn root_greeting() -> &'static str {
    "Hello from Backend (Node.js + MongoDB)"
}

pub async fn api_greeting() -> Json<ApiMessage> {
    Json(ApiMessage {
        message: "Hello from /api route",
    })
}
