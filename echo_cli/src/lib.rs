use std::fmt::Debug;
use std::io::Write;

use anyhow::Result;
use echo_server::{IncomingMessage, OutgoingResponse};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::instrument;

pub struct ChatClient {
    client: reqwest::Client,
    url: String,
}

impl Debug for ChatClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatClient").field("url", &self.url).finish()
    }
}

impl ChatClient {
    /// `address` is either `host:port` (plain http) or a full base URL.
    pub fn new(address: &str) -> Self {
        let base = if address.starts_with("http://") || address.starts_with("https://") {
            address.trim_end_matches('/').to_owned()
        } else {
            format!("http://{}", address)
        };
        Self {
            client: reqwest::Client::new(),
            url: format!("{}/chat", base),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    #[instrument(skip_all)]
    pub async fn send(&self, text: &str) -> Result<OutgoingResponse> {
        let request = IncomingMessage {
            text: text.to_owned(),
        };
        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let response = response.json().await?;
        Ok(response)
    }
}

/// Sends every non-blank input line and writes the bot reply, until EOF.
pub async fn run<R, W>(client: &ChatClient, input: R, mut out: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        match client.send(&line).await {
            Ok(reply) => writeln!(out, "{}", reply.response)?,
            Err(e) => tracing::error!("Error sending message: {:?}", e),
        }
    }
    out.flush()?;
    Ok(())
}
