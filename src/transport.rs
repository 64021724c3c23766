//! The HTTP side of sending a message.
//!
//! [`Message`](crate::Message) only needs something that can POST a JSON body
//! to a URL. [`HttpTransport`] does this with a blocking `reqwest` client;
//! timeouts, proxies and TLS settings belong on that client.

use reqwest::{StatusCode, blocking::Client, header::CONTENT_TYPE};

/// Underlying cause of a failed request, as reported by the transport.
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

pub trait Transport {
    /// POSTs `body` to `url` with `Content-Type: application/json`.
    ///
    /// # Errors
    /// Fails only if the request could not be completed. Whatever status the
    /// server answers with is returned as-is.
    fn post_json(&self, url: &str, body: Vec<u8>) -> Result<StatusCode, TransportError>;
}

#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    http_client: Client,
}

impl HttpTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    #[must_use]
    pub const fn with_client(http_client: Client) -> Self {
        Self { http_client }
    }
}

impl Transport for HttpTransport {
    fn post_json(&self, url: &str, body: Vec<u8>) -> Result<StatusCode, TransportError> {
        let resp = self
            .http_client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()?;
        Ok(resp.status())
    }
}
