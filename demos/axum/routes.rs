use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
};

pub async fn greet() -> impl IntoResponse {
    Html("<h1>Hello</h1><p>Call this endpoint from http://localhost:3000 to see CORS in action.</p>")
}

pub async fn public() -> impl IntoResponse {
    "public data"
}

pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}
