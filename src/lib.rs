//! Discord webhook client.
//!
//! Builds webhook payloads, posts them, and classifies the endpoint's
//! response into a posted message, a structured API error, or a local
//! error. Also provides the `#RRGGBB` color codec used by embeds.

pub mod cli;
pub mod color;
pub mod message;
pub mod webhook;

#[cfg(test)]
mod color_tests;

pub use color::{Color, ColorError};
pub use message::{AllowedMentions, Embed, EmbedAuthor, EmbedField, EmbedFooter, Message};
pub use webhook::{ApiError, ErrorKind, WebhookClient, WebhookError};
