use std::fmt;

use anyhow::{bail, Context, Result};
use http::{HeaderValue, Uri};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

pub const DEFAULT_ORIGINS: [&str; 2] = [
    "http://localhost:5173",
    "https://echochat-5pjv.vercel.app/chat",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn parse<I, S>(origins: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for raw in origins {
            let raw = raw.as_ref().trim();
            if raw.is_empty() {
                continue;
            }
            let origin = normalize(raw)?;
            if !normalized.contains(&origin) {
                normalized.push(origin);
            }
        }
        Ok(Self(normalized))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn contains(&self, origin: &str) -> bool {
        self.iter().any(|allowed| allowed == origin)
    }

    // `*` is not allowed together with credentials.
    pub fn layer(&self) -> Result<CorsLayer> {
        let origins = self
            .iter()
            .map(HeaderValue::from_str)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_credentials(true)
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request()))
    }
}

impl fmt::Display for AllowedOrigins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

fn normalize(raw: &str) -> Result<String> {
    let raw = raw.trim();
    let uri: Uri = raw
        .parse()
        .with_context(|| format!("invalid origin `{raw}`"))?;

    let (Some(scheme), Some(authority)) = (uri.scheme_str(), uri.authority()) else {
        bail!("origin `{raw}` must have a scheme and a host");
    };
    if authority.as_str().contains('@') {
        bail!("origin `{raw}` must not carry user info");
    }

    let origin = format!(
        "{}://{}",
        scheme.to_ascii_lowercase(),
        authority.as_str().to_ascii_lowercase()
    );
    if !matches!(uri.path(), "" | "/") || uri.query().is_some() {
        tracing::warn!("Dropping path from allowed origin {raw}, using {origin}");
    }
    Ok(origin)
}
