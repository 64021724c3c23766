mod author;
mod color;
mod field;
mod footer;
mod image;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use author::{EmbedAuthor, EmbedProvider};
pub use color::Color;
pub use field::EmbedField;
pub use footer::EmbedFooter;
pub use image::EmbedImage;

/// A rich content block attached to a [`Message`](crate::Message).
///
/// Every key is left out of the payload while it holds its default value.
/// The sub-objects (footer, image, ...) stay absent until one of the setters
/// is called; calling a setter again replaces the previous value entirely.
///
/// Nothing is validated locally: Discord rejects payloads that exceed its limits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Embed {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Serialized as `type`; Discord only accepts `rich` for webhooks.
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub kind: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Color::is_unset")]
    pub color: Color,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<EmbedImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<EmbedImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<EmbedProvider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<EmbedAuthor>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
}

impl Embed {
    pub fn set_footer(
        &mut self,
        text: impl Into<String>,
        icon_url: impl Into<String>,
    ) -> &mut Self {
        self.footer = Some(EmbedFooter {
            text: text.into(),
            icon_url: icon_url.into(),
            ..EmbedFooter::default()
        });
        self
    }

    pub fn set_image(&mut self, url: impl Into<String>) -> &mut Self {
        self.image = Some(EmbedImage::new(url));
        self
    }

    pub fn set_thumbnail(&mut self, url: impl Into<String>) -> &mut Self {
        self.thumbnail = Some(EmbedImage::new(url));
        self
    }

    pub fn set_provider(
        &mut self,
        name: impl Into<String>,
        url: impl Into<String>,
    ) -> &mut Self {
        self.provider = Some(EmbedProvider {
            name: name.into(),
            url: url.into(),
        });
        self
    }

    pub fn set_author(
        &mut self,
        name: impl Into<String>,
        url: impl Into<String>,
        icon_url: impl Into<String>,
    ) -> &mut Self {
        self.author = Some(EmbedAuthor {
            name: name.into(),
            url: url.into(),
            icon_url: icon_url.into(),
            ..EmbedAuthor::default()
        });
        self
    }

    pub fn set_timestamp(&mut self, timestamp: DateTime<Utc>) -> &mut Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn set_color(&mut self, color: impl Into<Color>) -> &mut Self {
        self.color = color.into();
        self
    }

    /// Appends a field; fields are displayed in the order they were added.
    pub fn add_field(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        inline: bool,
    ) -> &mut Self {
        self.fields.push(EmbedField::new(name, value, inline));
        self
    }
}
