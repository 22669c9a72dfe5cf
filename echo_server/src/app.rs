use anyhow::Result;
use axum::{routing::post, Json, Router};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::{handle, AllowedOrigins, IncomingMessage, OutgoingResponse};

/// Builds the service: `POST /chat` behind request tracing and the CORS policy.
pub fn app(origins: &AllowedOrigins) -> Result<Router> {
    let router = Router::new()
        .route("/chat", post(chat_handler))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(origins.layer()?);

    Ok(router)
}

async fn chat_handler(Json(message): Json<IncomingMessage>) -> Json<OutgoingResponse> {
    Json(handle(message))
}
