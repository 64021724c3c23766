mod logging;

use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use discordmsg::{Color, Message, transport::HttpTransport};
use reqwest::blocking::Client;

/// Send a message to a Discord WebHook
#[derive(Parser)]
struct Args {
    /// The Discord WebHook URL the message should be sent to
    #[arg(short, long, env = "DISCORD_WEBHOOK_URL")]
    webhook_url: String,

    /// Plain text content of the message
    #[arg(short, long)]
    content: Option<String>,

    /// Overrides the name of the WebHook
    #[arg(short, long)]
    username: Option<String>,

    /// Overrides the avatar of the WebHook
    #[arg(long)]
    avatar_url: Option<String>,

    /// Read the message out loud
    #[arg(long)]
    tts: bool,

    #[command(flatten)]
    embed: EmbedArgs,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// Print the JSON payload instead of sending it
    #[arg(long)]
    dry_run: bool,
}

// Only attached to the message if at least one option is given.
#[derive(clap::Args)]
#[command(next_help_heading = "Embed")]
struct EmbedArgs {
    #[arg(short, long)]
    title: Option<String>,

    #[arg(short, long)]
    description: Option<String>,

    /// Link target of the title
    #[arg(long)]
    url: Option<String>,

    /// Accent color in hex notation, e.g. `#9217ed`
    #[arg(long)]
    color: Option<Color>,

    /// Show the current time in the footer
    #[arg(long)]
    timestamp: bool,

    #[arg(long)]
    footer: Option<String>,

    #[arg(long, requires = "footer")]
    footer_icon: Option<String>,

    #[arg(long)]
    image: Option<String>,

    #[arg(long)]
    thumbnail: Option<String>,

    #[arg(long)]
    author: Option<String>,

    #[arg(long, requires = "author")]
    author_url: Option<String>,

    #[arg(long, requires = "author")]
    author_icon: Option<String>,

    #[arg(long)]
    provider: Option<String>,

    #[arg(long, requires = "provider")]
    provider_url: Option<String>,

    /// A `name=value` pair; may be given multiple times
    #[arg(short, long = "field", value_parser = parse_field)]
    fields: Vec<(String, String)>,

    /// Display fields next to each other
    #[arg(long)]
    inline_fields: bool,
}

impl EmbedArgs {
    fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.url.is_none()
            && self.color.is_none()
            && !self.timestamp
            && self.footer.is_none()
            && self.image.is_none()
            && self.thumbnail.is_none()
            && self.author.is_none()
            && self.provider.is_none()
            && self.fields.is_empty()
    }

    fn apply(self, message: &mut Message) {
        if self.is_empty() {
            return;
        }

        let embed = message.add_embed();
        embed.title = self.title.unwrap_or_default();
        embed.description = self.description.unwrap_or_default();
        embed.url = self.url.unwrap_or_default();
        if let Some(color) = self.color {
            embed.set_color(color);
        }
        if self.timestamp {
            embed.set_timestamp(Utc::now());
        }
        if let Some(text) = self.footer {
            embed.set_footer(text, self.footer_icon.unwrap_or_default());
        }
        if let Some(url) = self.image {
            embed.set_image(url);
        }
        if let Some(url) = self.thumbnail {
            embed.set_thumbnail(url);
        }
        if let Some(name) = self.author {
            let url = self.author_url.unwrap_or_default();
            embed.set_author(name, url, self.author_icon.unwrap_or_default());
        }
        if let Some(name) = self.provider {
            embed.set_provider(name, self.provider_url.unwrap_or_default());
        }
        for (name, value) in self.fields {
            embed.add_field(name, value, self.inline_fields);
        }
    }
}

fn parse_field(arg: &str) -> Result<(String, String), String> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("Expected `name=value`, got {arg:?}"))?;
    Ok((name.to_owned(), value.to_owned()))
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init();

    let mut message = Message::new(args.webhook_url);
    message.data.content = args.content.unwrap_or_default();
    message.data.username = args.username.unwrap_or_default();
    message.data.avatar_url = args.avatar_url.unwrap_or_default();
    message.data.tts = args.tts;
    args.embed.apply(&mut message);

    if args.dry_run {
        let json = message.to_json().context("Could not encode message")?;
        let json = String::from_utf8(json).context("Encoded message is not UTF-8")?;
        println!("{json}");
        return Ok(());
    }

    let http_client = Client::builder()
        .timeout(Duration::from_secs(args.timeout))
        .build()
        .context("Could not create HTTP client")?;
    let transport = HttpTransport::with_client(http_client);

    log::info!("Sending message...");
    message
        .send_with(&transport)
        .context("Could not send message to Discord WebHook")?;
    log::info!("Message sent.");
    Ok(())
}
