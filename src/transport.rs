use std::thread;

use serde::Serialize;

use crate::{embed::Embed, Error};

/// Target used for the logger's own diagnostics.  Records with this target are never posted to the webhook.
pub(crate) const DIAGNOSTIC_TARGET: &str = "webhook_logger";

/// The webhook body.
#[derive(Debug, Serialize)]
pub(crate) struct WebhookPayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<&'a str>,
    pub embeds: [&'a Embed; 1],
}

/// Posts embeds to a single webhook endpoint.  Delivery is best effort: one attempt, and failures only ever show up
/// in the local diagnostics.
///
/// The blocking client is created and dropped on a worker thread for every post, so callers may sit inside an async
/// runtime.
pub(crate) struct Transport {
    url: String,
    username: Option<String>,
    avatar_url: Option<String>,
    echo: bool,
}

impl Transport {
    pub(crate) fn new(url: String) -> Transport {
        Transport {
            url,
            username: None,
            avatar_url: None,
            echo: false,
        }
    }

    pub(crate) fn url(&self) -> &str {
        &self.url
    }

    pub(crate) fn set_username(&mut self, username: String) {
        self.username = Some(username);
    }

    pub(crate) fn set_avatar_url(&mut self, avatar_url: String) {
        self.avatar_url = Some(avatar_url);
    }

    pub(crate) fn set_echo(&mut self) {
        self.echo = true;
    }

    pub(crate) fn payload<'a>(&'a self, embed: &'a Embed) -> WebhookPayload<'a> {
        WebhookPayload {
            username: self.username.as_deref(),
            avatar_url: self.avatar_url.as_deref(),
            embeds: [embed],
        }
    }

    /// Sends the embed and reports the outcome locally.  Never fails from the caller's point of view.
    pub(crate) fn deliver(&self, embed: &Embed) {
        match self.send(embed) {
            Ok(()) => {
                log::debug!(target: DIAGNOSTIC_TARGET, "successfully sent message to {}", self.url);
            }
            Err(x) => {
                log::error!(target: DIAGNOSTIC_TARGET, "error posting to webhook: {x}");
            }
        }
    }

    /// One POST, with a non-2xx answer counted as a failure.
    pub(crate) fn send(&self, embed: &Embed) -> Result<(), Error> {
        let payload = self.payload(embed);
        if self.echo {
            match serde_json::to_string(&payload) {
                Ok(body) => println!("Calling: `{}\n\t{body}`", self.url),
                Err(x) => println!("Calling: `{}` (payload not printable: {x})", self.url),
            }
        }
        thread::scope(|scope| {
            scope
                .spawn(|| -> Result<(), Error> {
                    reqwest::blocking::Client::builder()
                        .build()
                        .map_err(Error::Client)?
                        .post(&self.url)
                        .json(&payload)
                        .send()?
                        .error_for_status()?;
                    Ok(())
                })
                .join()
                .unwrap_or(Err(Error::Worker))
        })
    }
}
