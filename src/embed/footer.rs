use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedFooter {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub icon_url: String,
    /// Only ever filled in by Discord.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub proxy_icon_url: String,
}
