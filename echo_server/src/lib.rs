mod app;
pub mod cors;

pub use app::app;
pub use cors::AllowedOrigins;

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    pub text: String,
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct OutgoingResponse {
    pub response: String,
}

/// Echoes the message text back under the bot label, verbatim.
pub fn handle(request: IncomingMessage) -> OutgoingResponse {
    OutgoingResponse {
        response: format!("Bot: You said '{}'", request.text),
    }
}
