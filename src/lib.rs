#![deny(unexpected_cfgs)]
//
#![warn(clippy::cargo)]
#![warn(clippy::nursery)]
//
// https://github.com/rust-lang/rust-clippy/issues/16440
#![allow(clippy::multiple_crate_versions)]

//! Build Discord WebHook messages with embeds and send them in one request.
//!
//! ```no_run
//! let mut message = discordmsg::Message::new("https://discord.com/api/webhooks/1/token");
//! message.data.content = String::from("hello");
//! message
//!     .add_embed()
//!     .set_footer("footer", "https://example.com/icon.png")
//!     .add_field("key", "value", true);
//! message.send()?;
//! # Ok::<(), discordmsg::Error>(())
//! ```

mod error;
mod json_util;
mod message;

pub mod embed;
pub mod transport;

pub use embed::{Color, Embed};
pub use error::Error;
pub use message::{Message, MessageData};
