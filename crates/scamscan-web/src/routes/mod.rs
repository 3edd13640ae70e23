//! Route handlers.

pub mod health;
pub mod home;
pub mod predict;
pub mod scam;

use std::convert::Infallible;
use std::net::SocketAddr;

use askama::Template;
use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::{request::Parts, StatusCode},
    response::{Html, IntoResponse, Response},
};

// ============================================================
// TEMPLATES
// ============================================================

/// The single page every route renders.
#[derive(Template, Default)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub client_ip: String,
    pub message: Option<String>,
    pub input_url: Option<String>,
    pub predicted_class: Option<String>,
}

impl IndexTemplate {
    pub fn new(client_ip: ClientIp) -> Self {
        Self {
            client_ip: client_ip.0,
            ..Default::default()
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_input_url(mut self, url: impl Into<String>) -> Self {
        self.input_url = Some(url.into());
        self
    }

    pub fn with_predicted_class(mut self, class: impl Into<String>) -> Self {
        self.predicted_class = Some(class.into());
        self
    }
}

impl IntoResponse for IndexTemplate {
    fn into_response(self) -> Response {
        match self.render() {
            Ok(html) => Html(html).into_response(),
            Err(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(format!("Template error: {}", e)),
            )
                .into_response(),
        }
    }
}

// ============================================================
// EXTRACTORS
// ============================================================

/// Address of the requesting client.
///
/// First `X-Forwarded-For` hop when behind a proxy, else the socket peer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIp(pub String);

impl<S> FromRequestParts<S> for ClientIp
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let forwarded = parts
            .headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty());

        if let Some(ip) = forwarded {
            return Ok(Self(ip.to_string()));
        }

        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string())
            .unwrap_or_else(|| "unknown".to_string());

        Ok(Self(peer))
    }
}
