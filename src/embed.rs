//! Message embeds and the options used to build them.
//!
//! An [`Embed`] is the styled block that the chat platform renders.  It is built from a plain text message and an
//! [`EmbedOptions`], where every option that is set overlays the matching embed field.

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::Serialize;

/// The accent colour of an embed, serialized as a 24 bit integer.
///
/// # Example
/// ```
/// # use webhook_logger::Color;
/// assert_eq!(Color::from((0x12, 0x34, 0x56)), Color(0x123456));
/// assert_eq!(Color::from([0xff, 0, 0]), Color::from(0xff0000u32));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Color(value)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Color::from((r, g, b))
    }
}

/// How the embed timestamp is set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Timestamp {
    /// No timestamp on the embed.
    Off,
    /// Stamp the embed with the instant it is built.
    Now,
    /// Use this instant verbatim.
    At(DateTime<Utc>),
}

impl From<bool> for Timestamp {
    fn from(value: bool) -> Self {
        if value {
            Timestamp::Now
        } else {
            Timestamp::Off
        }
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Timestamp {
    fn from(value: DateTime<Tz>) -> Self {
        Timestamp::At(value.with_timezone(&Utc))
    }
}

/// Milliseconds since the unix epoch.  Values chrono cannot represent leave the timestamp off.
impl From<i64> for Timestamp {
    fn from(millis: i64) -> Self {
        match DateTime::from_timestamp_millis(millis) {
            Some(instant) => Timestamp::At(instant),
            None => Timestamp::Off,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline: Option<bool>,
}

impl EmbedField {
    pub fn new<N, V>(name: N, value: V) -> EmbedField
    where
        N: Into<String>,
        V: Into<String>,
    {
        EmbedField {
            name: name.into(),
            value: value.into(),
            inline: None,
        }
    }

    /// Render this field next to its neighbours rather than on its own line.
    #[must_use]
    pub fn inline(mut self) -> EmbedField {
        self.inline = Some(true);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmbedAuthor {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl EmbedAuthor {
    pub fn new<T: Into<String>>(name: T) -> EmbedAuthor {
        EmbedAuthor {
            name: name.into(),
            icon_url: None,
            url: None,
        }
    }

    #[must_use]
    pub fn with_icon_url<T: Into<String>>(mut self, icon_url: T) -> EmbedAuthor {
        self.icon_url = Some(icon_url.into());
        self
    }

    #[must_use]
    pub fn with_url<T: Into<String>>(mut self, url: T) -> EmbedAuthor {
        self.url = Some(url.into());
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmbedFooter {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

impl EmbedFooter {
    pub fn new<T: Into<String>>(text: T) -> EmbedFooter {
        EmbedFooter {
            text: text.into(),
            icon_url: None,
        }
    }

    #[must_use]
    pub fn with_icon_url<T: Into<String>>(mut self, icon_url: T) -> EmbedFooter {
        self.icon_url = Some(icon_url.into());
        self
    }
}

/// An image or thumbnail reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmbedMedia {
    pub url: String,
}

/// The optional parts of an embed.  Anything left as `None` is not touched when the embed is built.
///
/// # Example
/// ```
/// # use webhook_logger::{EmbedField, EmbedOptions};
/// let options = EmbedOptions::new()
///     .title("Pending Tasks")
///     .field(EmbedField::new("Task 1", "This is a task").inline())
///     .timestamp(false);
/// assert_eq!(options.title.as_deref(), Some("Pending Tasks"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EmbedOptions {
    pub fields: Option<Vec<EmbedField>>,
    pub author: Option<EmbedAuthor>,
    pub color: Option<Color>,
    pub description: Option<String>,
    pub footer: Option<EmbedFooter>,
    pub image: Option<String>,
    pub thumbnail: Option<String>,
    pub timestamp: Option<Timestamp>,
    pub title: Option<String>,
    pub url: Option<String>,
}

impl EmbedOptions {
    pub fn new() -> EmbedOptions {
        EmbedOptions::default()
    }

    /// Overlays `overrides` on top of `self`.  Every field set in `overrides` wins, everything else keeps the value
    /// from `self`.
    #[must_use]
    pub fn merge(self, overrides: EmbedOptions) -> EmbedOptions {
        EmbedOptions {
            fields: overrides.fields.or(self.fields),
            author: overrides.author.or(self.author),
            color: overrides.color.or(self.color),
            description: overrides.description.or(self.description),
            footer: overrides.footer.or(self.footer),
            image: overrides.image.or(self.image),
            thumbnail: overrides.thumbnail.or(self.thumbnail),
            timestamp: overrides.timestamp.or(self.timestamp),
            title: overrides.title.or(self.title),
            url: overrides.url.or(self.url),
        }
    }

    /// Replaces the field list.
    #[must_use]
    pub fn fields<I>(mut self, fields: I) -> EmbedOptions
    where
        I: IntoIterator<Item = EmbedField>,
    {
        self.fields = Some(fields.into_iter().collect());
        self
    }

    /// Appends a single field.
    #[must_use]
    pub fn field(mut self, field: EmbedField) -> EmbedOptions {
        self.fields.get_or_insert_with(Vec::new).push(field);
        self
    }

    #[must_use]
    pub fn author(mut self, author: EmbedAuthor) -> EmbedOptions {
        self.author = Some(author);
        self
    }

    #[must_use]
    pub fn color<C: Into<Color>>(mut self, color: C) -> EmbedOptions {
        self.color = Some(color.into());
        self
    }

    /// Replaces the message text as the embed body.
    #[must_use]
    pub fn description<T: Into<String>>(mut self, description: T) -> EmbedOptions {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn footer(mut self, footer: EmbedFooter) -> EmbedOptions {
        self.footer = Some(footer);
        self
    }

    #[must_use]
    pub fn image<T: Into<String>>(mut self, url: T) -> EmbedOptions {
        self.image = Some(url.into());
        self
    }

    #[must_use]
    pub fn thumbnail<T: Into<String>>(mut self, url: T) -> EmbedOptions {
        self.thumbnail = Some(url.into());
        self
    }

    /// Accepts `true`, `false`, a `DateTime` or epoch milliseconds.
    #[must_use]
    pub fn timestamp<T: Into<Timestamp>>(mut self, timestamp: T) -> EmbedOptions {
        self.timestamp = Some(timestamp.into());
        self
    }

    #[must_use]
    pub fn title<T: Into<String>>(mut self, title: T) -> EmbedOptions {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn url<T: Into<String>>(mut self, url: T) -> EmbedOptions {
        self.url = Some(url.into());
        self
    }
}

/// The embed object as it appears in the webhook body.  Unset values are left out of the JSON.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Embed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<EmbedMedia>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<EmbedMedia>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<EmbedAuthor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<EmbedField>>,
}

impl Embed {
    /// Builds the embed for `message`, then overlays every option that is set.  Nothing is validated, URLs and text
    /// are passed on exactly as given.
    pub fn build<T: Into<String>>(message: T, options: EmbedOptions) -> Embed {
        let timestamp = match options.timestamp {
            None | Some(Timestamp::Off) => None,
            Some(Timestamp::Now) => Some(format_timestamp(Utc::now())),
            Some(Timestamp::At(instant)) => Some(format_timestamp(instant)),
        };
        Embed {
            title: options.title,
            description: Some(options.description.unwrap_or_else(|| message.into())),
            url: options.url,
            timestamp,
            color: options.color,
            footer: options.footer,
            image: options.image.map(|url| EmbedMedia { url }),
            thumbnail: options.thumbnail.map(|url| EmbedMedia { url }),
            author: options.author,
            fields: options.fields,
        }
    }
}

fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}
