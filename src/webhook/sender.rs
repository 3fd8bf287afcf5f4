//! Webhook client: URL validation, sending, and response classification.

use http::StatusCode;
use url::Url;

use crate::Message;

use super::{ApiError, HttpClient, HttpRequest, HttpResponse, ReqwestClient, WebhookError};

/// Query parameter asking the endpoint to echo the created message.
const WAIT_PARAM: &str = "wait";

/// Client for a single webhook URL.
///
/// The URL is validated once at construction and never changes afterwards.
/// The client holds no other state, so it can be shared across tasks when
/// the transport `H` can.
///
/// # Example
///
/// ```no_run
/// use discord_webhook::{Message, WebhookClient};
///
/// # async fn example() -> Result<(), discord_webhook::WebhookError> {
/// let client = WebhookClient::with_reqwest("https://discord.com/api/webhooks/1/token")?;
/// if let Some(posted) = client.send(&Message::new("Hello"), true).await? {
///     println!("posted message {:?}", posted.id);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct WebhookClient<H> {
    client: H,
    url: Url,
}

impl<H> WebhookClient<H> {
    /// Creates a client for the given URL.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::InvalidUrl`] if `url` is not a well-formed
    /// absolute `http` or `https` URL with a host.
    pub fn new(client: H, url: &str) -> Result<Self, WebhookError> {
        let invalid = |reason: String| WebhookError::InvalidUrl {
            url: url.to_string(),
            reason,
        };

        let parsed = Url::parse(url).map_err(|e| invalid(e.to_string()))?;

        // "host:port/path" parses with the host as its scheme
        if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid(format!(
                "unsupported scheme '{}', expected http or https",
                parsed.scheme()
            )));
        }
        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(invalid("missing host".to_string()));
        }

        Ok(Self {
            client,
            url: parsed,
        })
    }

    /// Creates a client from the URL stored in environment variable `var`.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::MissingWebhookUrl`] if the variable is unset
    /// or empty, and [`WebhookError::InvalidUrl`] if its value is malformed.
    pub fn from_env(client: H, var: &str) -> Result<Self, WebhookError> {
        Self::from_lookup(client, var, |name| std::env::var(name).ok())
    }

    /// Like [`from_env`](Self::from_env), with a caller-supplied lookup.
    ///
    /// # Errors
    ///
    /// Same as [`from_env`](Self::from_env).
    pub fn from_lookup<F>(client: H, var: &str, lookup: F) -> Result<Self, WebhookError>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        match lookup(var) {
            Some(url) if !url.is_empty() => Self::new(client, &url),
            _ => Err(WebhookError::MissingWebhookUrl {
                var: var.to_string(),
            }),
        }
    }

    /// Returns the validated webhook URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Builds the POST request for `message`.
    fn build_request(
        &self,
        message: &Message,
        want_response: bool,
    ) -> Result<HttpRequest, WebhookError> {
        let body = serde_json::to_vec(message).map_err(WebhookError::Encode)?;

        Ok(HttpRequest::post(self.url.clone())
            .with_query(WAIT_PARAM, if want_response { "true" } else { "false" })
            .with_json_body(body))
    }
}

impl WebhookClient<ReqwestClient> {
    /// Creates a client using the default [`ReqwestClient`] transport.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::InvalidUrl`] if `url` is malformed.
    pub fn with_reqwest(url: &str) -> Result<Self, WebhookError> {
        Self::new(ReqwestClient::new(), url)
    }
}

impl<H: HttpClient> WebhookClient<H> {
    /// Posts `message` to the webhook.
    ///
    /// `want_response` asks the endpoint to echo the created message. The
    /// outcome is:
    /// - `Ok(Some(message))` for 200 with a body,
    /// - `Ok(None)` for 200 with an empty body, or 204,
    /// - [`WebhookError::BadRequest`] for 400, carrying the [`ApiError`],
    /// - an error of kind [`UnexpectedResponse`](super::ErrorKind::UnexpectedResponse)
    ///   for a transport failure or any other status.
    ///
    /// Nothing is retried.
    ///
    /// # Errors
    ///
    /// See above. Also [`WebhookError::Encode`] if the message cannot be
    /// serialized.
    pub async fn send(
        &self,
        message: &Message,
        want_response: bool,
    ) -> Result<Option<Message>, WebhookError> {
        let request = self.build_request(message, want_response)?;

        tracing::debug!(
            "Posting webhook message ({} embed(s), wait={want_response})",
            message.embeds.len()
        );

        let response = self.client.request(request).await.map_err(|e| {
            tracing::warn!("Webhook request failed: {e}");
            WebhookError::from(e)
        })?;

        classify_response(response).inspect_err(|e| {
            tracing::warn!("Webhook rejected message: {e}");
        })
    }
}

/// Maps a response onto the send outcome.
fn classify_response(response: HttpResponse) -> Result<Option<Message>, WebhookError> {
    let status = response.status;

    match status {
        StatusCode::OK if response.has_empty_body() => {
            tracing::debug!("Webhook accepted message without echo");
            Ok(None)
        }
        StatusCode::OK => {
            let message: Message = decode(&response)?;
            tracing::debug!("Webhook accepted message {:?}", message.id);
            Ok(Some(message))
        }
        StatusCode::NO_CONTENT => {
            tracing::debug!("Webhook accepted message (no content)");
            Ok(None)
        }
        StatusCode::BAD_REQUEST => {
            let api_error: ApiError = decode(&response)?;
            Err(WebhookError::BadRequest(api_error))
        }
        _ => Err(WebhookError::UnexpectedStatus {
            status,
            body: response.body_text().map(ToString::to_string),
        }),
    }
}

fn decode<T: serde::de::DeserializeOwned>(response: &HttpResponse) -> Result<T, WebhookError> {
    serde_json::from_slice(&response.body).map_err(|source| WebhookError::MalformedBody {
        status: response.status,
        source,
    })
}
