use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    embed::Embed,
    json_util::is_false,
    transport::{HttpTransport, Transport},
};

/// The JSON body of an "Execute Webhook" request.
///
/// <https://discord.com/developers/docs/resources/webhook#execute-webhook>
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageData {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub content: String,
    /// Overrides the webhook's default name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub username: String,
    /// Overrides the webhook's default avatar.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub avatar_url: String,
    #[serde(skip_serializing_if = "is_false")]
    pub tts: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<Embed>,
}

/// A message bound to the webhook it will be posted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub webhook_url: String,
    pub data: MessageData,
}

impl Message {
    #[must_use]
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            data: MessageData::default(),
        }
    }

    /// Builds the URL from the webhook ID and token shown in Discord's integration settings.
    #[must_use]
    pub fn from_parts(id: u64, token: &str) -> Self {
        Self::new(format!("https://discord.com/api/webhooks/{id}/{token}"))
    }

    /// Appends an empty embed and returns it for further configuration.
    ///
    /// Embeds are displayed in the order they were added.
    pub fn add_embed(&mut self) -> &mut Embed {
        self.data.embeds.push(Embed::default());
        let last = self.data.embeds.len() - 1;
        &mut self.data.embeds[last]
    }

    /// Encodes the payload exactly as [`Self::send`] would transmit it.
    ///
    /// # Errors
    /// Only if `serde_json` fails to encode the message, which the data model
    /// does not give it a reason to.
    pub fn to_json(&self) -> Result<Vec<u8>, Error> {
        let body = serde_json::to_vec(&self.data)?;
        Ok(body)
    }

    /// Posts the message with a default [`HttpTransport`].
    ///
    /// # Errors
    /// See [`Self::send_with`].
    pub fn send(&self) -> Result<(), Error> {
        self.send_with(&HttpTransport::new())
    }

    /// Posts the message once through the given transport.
    ///
    /// Nothing is retried and the response body is never read. A non-success
    /// status code is logged but not reported as an error.
    ///
    /// # Errors
    /// * [`Error::Serialization`] if the payload cannot be encoded
    /// * [`Error::Send`] if the request could not be completed
    pub fn send_with<T>(&self, transport: &T) -> Result<(), Error>
    where
        T: Transport + ?Sized,
    {
        let body = self.to_json()?;
        log::debug!(
            "Executing webhook on {} with {} embed(s) ({} bytes)",
            webhook_host(&self.webhook_url).as_deref().unwrap_or("<invalid url>"),
            self.data.embeds.len(),
            body.len(),
        );

        let status = transport
            .post_json(&self.webhook_url, body)
            .map_err(Error::Send)?;

        if !status.is_success() {
            log::warn!("Webhook responded with status {status}");
        }
        Ok(())
    }
}

/// Only the host is ever logged; the path carries the webhook token.
fn webhook_host(webhook_url: &str) -> Option<String> {
    let url = Url::parse(webhook_url).ok()?;
    url.host_str().map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use reqwest::StatusCode;
    use serde_json::json;

    use super::*;
    use crate::transport::TransportError;

    struct FailingTransport;

    impl Transport for FailingTransport {
        fn post_json(&self, _url: &str, _body: Vec<u8>) -> Result<StatusCode, TransportError> {
            Err("connection refused".into())
        }
    }

    struct StatusTransport {
        status: StatusCode,
        calls: RefCell<usize>,
    }

    impl Transport for StatusTransport {
        fn post_json(&self, _url: &str, _body: Vec<u8>) -> Result<StatusCode, TransportError> {
            *self.calls.borrow_mut() += 1;
            Ok(self.status)
        }
    }

    #[test]
    fn new_message_is_empty() {
        let msg = Message::new("https://example.test/hook");
        assert_eq!(msg.webhook_url, "https://example.test/hook");
        assert!(msg.data.embeds.is_empty());
        assert_eq!(msg.to_json().unwrap(), b"{}");
    }

    #[test]
    fn from_parts_builds_discord_url() {
        let msg = Message::from_parts(1234, "abc-DEF_9");
        assert_eq!(msg.webhook_url, "https://discord.com/api/webhooks/1234/abc-DEF_9");
    }

    #[test]
    fn top_level_keys() {
        let mut msg = Message::new("https://example.test/hook");
        msg.data.username = String::from("Bot");
        msg.data.avatar_url = String::from("https://example.test/avatar.png");
        msg.data.tts = true;

        let value: serde_json::Value = serde_json::from_slice(&msg.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "username": "Bot",
                "avatar_url": "https://example.test/avatar.png",
                "tts": true,
            })
        );
    }

    #[test]
    fn add_embed_returns_the_appended_embed() {
        let mut msg = Message::new("https://example.test/hook");
        msg.add_embed().title = String::from("first");
        msg.add_embed().title = String::from("second");

        let titles: Vec<&str> = msg.data.embeds.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["first", "second"]);
    }

    #[test]
    fn transport_failure_is_send_error() {
        let msg = Message::new("https://example.test/hook");
        let err = msg.send_with(&FailingTransport).unwrap_err();

        let Error::Send(source) = &err else {
            panic!("expected a send error, got {err:?}");
        };
        assert_eq!(source.to_string(), "connection refused");
        assert_eq!(err.to_string(), "unable to run webhook");
    }

    #[test]
    fn malformed_url_fails_through_default_transport() {
        let msg = Message::new("not a url");
        assert!(matches!(msg.send(), Err(Error::Send(_))));
    }

    #[test]
    fn logged_host_leaves_out_the_token() {
        let msg = Message::from_parts(1234, "secret-token");
        assert_eq!(webhook_host(&msg.webhook_url).as_deref(), Some("discord.com"));
        assert_eq!(webhook_host("not a url"), None);
    }

    #[test]
    fn error_status_is_not_an_error() {
        let transport = StatusTransport {
            status: StatusCode::BAD_REQUEST,
            calls: RefCell::new(0),
        };
        let msg = Message::new("https://example.test/hook");

        assert!(msg.send_with(&transport).is_ok());
        assert_eq!(*transport.calls.borrow(), 1);
    }
}
