//! CLI argument parsing using clap.
//!
//! Turns command-line options into a [`Message`] and a [`WebhookClient`].

use clap::Parser;
use thiserror::Error;

use crate::webhook::{HttpClient, WebhookClient, WebhookError};
use crate::{Color, ColorError, Embed, Message};

/// Environment variable read when `--url` is not given.
pub const DEFAULT_URL_VAR: &str = "DISCORD_WEBHOOK_URL";

/// Post a message to a Discord webhook.
#[derive(Debug, Parser)]
#[command(name = "discord-webhook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Webhook URL (overrides the environment variable)
    #[arg(long)]
    pub url: Option<String>,

    /// Environment variable holding the webhook URL
    #[arg(long = "env", value_name = "NAME", default_value = DEFAULT_URL_VAR)]
    pub url_var: String,

    /// Message text
    #[arg(long, short = 'm', default_value = "")]
    pub content: String,

    /// Display name override
    #[arg(long)]
    pub username: Option<String>,

    /// Avatar URL override
    #[arg(long = "avatar-url")]
    pub avatar_url: Option<String>,

    /// Embed title
    #[arg(long)]
    pub title: Option<String>,

    /// Embed description
    #[arg(long)]
    pub description: Option<String>,

    /// Embed accent color as #RRGGBB
    #[arg(long, value_name = "HEX")]
    pub color: Option<String>,

    /// Ask the endpoint to echo the created message
    #[arg(long)]
    pub wait: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Errors in the CLI's own arguments.
#[derive(Debug, Error)]
pub enum CliError {
    /// `--color` did not parse.
    #[error("Invalid color '{value}': {source}")]
    InvalidColor {
        /// The rejected value
        value: String,
        /// Why it was rejected
        #[source]
        source: ColorError,
    },

    /// Neither content nor an embed was given.
    #[error("Nothing to send: provide --content or an embed option")]
    EmptyMessage,

    /// The webhook URL is missing or malformed.
    #[error(transparent)]
    Webhook(#[from] WebhookError),
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if any embed option was given.
    #[must_use]
    pub const fn has_embed(&self) -> bool {
        self.title.is_some() || self.description.is_some() || self.color.is_some()
    }

    /// Builds the message described by the arguments.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::InvalidColor`] for a bad `--color` and
    /// [`CliError::EmptyMessage`] if there is nothing to post.
    pub fn to_message(&self) -> Result<Message, CliError> {
        let mut message = Message::new(self.content.clone());

        if let Some(username) = &self.username {
            message = message.with_username(username.clone());
        }
        if let Some(avatar_url) = &self.avatar_url {
            message = message.with_avatar_url(avatar_url.clone());
        }

        if self.has_embed() {
            let mut embed = Embed::new();
            if let Some(title) = &self.title {
                embed = embed.with_title(title.clone());
            }
            if let Some(description) = &self.description {
                embed = embed.with_description(description.clone());
            }
            if let Some(value) = &self.color {
                let color = Color::parse(value).map_err(|source| CliError::InvalidColor {
                    value: value.clone(),
                    source,
                })?;
                embed = embed.with_color(color);
            }
            message = message.with_embed(embed);
        }

        if message.is_empty() {
            return Err(CliError::EmptyMessage);
        }

        Ok(message)
    }

    /// Builds the webhook client from `--url` or the named variable.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Webhook`] if the URL is missing or malformed.
    pub fn webhook_client<H: HttpClient>(&self, client: H) -> Result<WebhookClient<H>, CliError> {
        let webhook = match &self.url {
            Some(url) => WebhookClient::new(client, url)?,
            None => WebhookClient::from_env(client, &self.url_var)?,
        };
        Ok(webhook)
    }
}
