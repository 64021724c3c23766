use thiserror::Error;

use crate::transport::TransportError;

/// Failure of [`Message::send`](crate::Message::send).
///
/// Only failures to complete the request are reported. A response with a
/// 4xx or 5xx status still counts as a successful send.
#[derive(Debug, Error)]
pub enum Error {
    /// The message could not be encoded as JSON.
    #[error("unable to encode webhook payload")]
    Serialization(#[from] serde_json::Error),

    /// The request could not be sent (invalid URL, DNS failure, refused connection, ...).
    #[error("unable to run webhook")]
    Send(#[source] TransportError),
}
