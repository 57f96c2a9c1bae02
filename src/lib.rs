//! A logger that posts each log event to a chat webhook (e.g. Discord) as a message embed.
//!
//! Every message becomes an embed whose accent colour follows its severity and which is stamped with the time it was
//! logged.  Embeds can be enriched with a title, fields, an author, a footer, images and a link through
//! [`EmbedOptions`].
//!
//! Delivery is best effort.  Each message is posted exactly once and a failed post is reported through the `log`
//! facade under the `webhook_logger` target rather than returned to the caller, so logging can never become a source of
//! errors itself.
//!
//! # Example - Post straight to a webhook
//! ```no_run
//! use webhook_logger::{EmbedField, EmbedOptions, WebhookLogger};
//!
//! let logger = WebhookLogger::new("https://discord.com/api/webhooks/123/abc")?
//!     .with_username("Build Bot");
//! logger.info("Hello World!", EmbedOptions::new());
//! logger.error(
//!     "Deployment failed",
//!     EmbedOptions::new()
//!         .title("Production")
//!         .field(EmbedField::new("Stage", "migrate").inline()),
//! );
//! # Ok::<(), webhook_logger::Error>(())
//! ```
//!
//! # Example - Send all `log` output to Discord
//! ```no_run
//! // URL should start with `https://discord.com/api/webhooks/`
//! if let Ok(logger) = webhook_logger::WebhookLogger::from_env() {
//!     let _ = logger.with_level(log::LevelFilter::Info).init();
//!     log::info!("msg");
//! }
//! ```

use std::{borrow::Cow, env};

use log::kv::{Error as KvError, Key, Value, VisitSource};
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

mod embed;
mod error;
mod severity;
mod transport;

pub use embed::{
    Color, Embed, EmbedAuthor, EmbedField, EmbedFooter, EmbedMedia, EmbedOptions, Timestamp,
};
pub use error::Error;
pub use severity::Severity;

use severity::Palette;
use transport::{Transport, DIAGNOSTIC_TARGET};

/// Targets whose records are never forwarded: our own diagnostics and the HTTP stack used to post.
const INTERNAL_TARGETS: &[&str] = &[
    DIAGNOSTIC_TARGET,
    "reqwest",
    "hyper",
    "hyper_util",
    "h2",
    "rustls",
    "mio",
    "want",
];

/// The `WebhookLogger` posts embeds to a webhook, either through its severity methods ([`info`](Self::info),
/// [`warning`](Self::warning), [`error`](Self::error), [`debug`](Self::debug)) or as a [`Log`] implementation.
///
/// The configuration is fixed once the builder methods have been applied.
///
/// # Example
/// ```
/// # use webhook_logger::{Severity, WebhookLogger};
/// let logger = WebhookLogger::new("https://discord.com/api/webhooks/123/abc")
///     .unwrap()
///     .with_username("Logger")
///     .with_color(Severity::Info, (0, 0, 255));
/// ```
pub struct WebhookLogger {
    /// The default logging level filter
    level: LevelFilter,

    /// Custom level filters per module
    levels: Vec<(Cow<'static, str>, LevelFilter)>,

    /// Accent colour per severity
    palette: Palette,

    transport: Transport,

    formatter: Box<Formatter>,
}

impl WebhookLogger {
    /// Creates a new `WebhookLogger` posting to `url`.  Fails if `url` is empty.
    ///
    /// # Example
    /// ```
    /// # use webhook_logger::{Error, WebhookLogger};
    /// assert!(WebhookLogger::new("https://discord.com/api/webhooks/123/abc").is_ok());
    /// assert!(matches!(WebhookLogger::new(""), Err(Error::MissingUrl)));
    /// ```
    pub fn new<T>(url: T) -> Result<WebhookLogger, Error>
    where
        T: Into<String>,
    {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(Error::MissingUrl);
        }
        Ok(WebhookLogger {
            level: LevelFilter::Trace,
            levels: Vec::new(),
            palette: Palette::default(),
            transport: Transport::new(url),
            formatter: Box::new(Self::record_formatter),
        })
    }

    /// Creates a `WebhookLogger` from `WEBHOOK_URL`, plus `WEBHOOK_USERNAME` and `WEBHOOK_AVATAR_URL` when they are
    /// set.
    pub fn from_env() -> Result<WebhookLogger, Error> {
        Self::from_env_with(|key| env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env), reading the variables through `lookup`.  Blank values count as unset.
    ///
    /// # Example
    /// ```
    /// # use webhook_logger::WebhookLogger;
    /// let logger = WebhookLogger::from_env_with(|key| match key {
    ///     "WEBHOOK_URL" => Some("https://discord.com/api/webhooks/123/abc".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    /// assert_eq!(logger.url(), "https://discord.com/api/webhooks/123/abc");
    /// ```
    pub fn from_env_with<F>(lookup: F) -> Result<WebhookLogger, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let url = var("WEBHOOK_URL").ok_or(Error::MissingEnv("WEBHOOK_URL"))?;
        let mut logger = WebhookLogger::new(url)?;
        if let Some(username) = var("WEBHOOK_USERNAME") {
            logger = logger.with_username(username);
        }
        if let Some(avatar_url) = var("WEBHOOK_AVATAR_URL") {
            logger = logger.with_avatar_url(avatar_url);
        }
        Ok(logger)
    }

    /// The name the webhook posts under.
    #[inline]
    #[must_use]
    pub fn with_username<T: Into<String>>(mut self, username: T) -> WebhookLogger {
        self.transport.set_username(username.into());
        self
    }

    /// The avatar the webhook posts with.
    #[inline]
    #[must_use]
    pub fn with_avatar_url<T: Into<String>>(mut self, avatar_url: T) -> WebhookLogger {
        self.transport.set_avatar_url(avatar_url.into());
        self
    }

    /// Overrides the default accent colour of a severity.
    #[inline]
    #[must_use]
    pub fn with_color<C: Into<Color>>(mut self, severity: Severity, color: C) -> WebhookLogger {
        self.palette.set(severity, color.into());
        self
    }

    /// The maximum log level that would be posted when used as a [`Log`].
    ///
    /// # Example
    /// ```
    /// # use webhook_logger::WebhookLogger;
    /// # use log::LevelFilter;
    /// let _ = WebhookLogger::new("https://discord.com/api/webhooks/123/abc")
    ///     .unwrap()
    ///     .with_level(LevelFilter::Error)
    ///     .init();
    /// ```
    #[inline]
    #[must_use = "You must call init() before logging"]
    pub fn with_level(mut self, level: LevelFilter) -> WebhookLogger {
        self.level = level;
        self
    }

    /// Sets the level for a module and everything below it, overriding [`with_level`](Self::with_level).  The longest
    /// matching module path wins.
    #[inline]
    #[must_use = "You must call init() before logging"]
    pub fn with_level_for<T: Into<Cow<'static, str>>>(
        mut self,
        module: T,
        level: LevelFilter,
    ) -> Self {
        let module = module.into();
        self.levels.retain(|(name, _)| *name != module);
        self.levels.push((module, level));
        self
    }

    /// Sets how a [`Record`] is turned into embed options.  The options are merged over the severity defaults, so a
    /// formatter only needs to set what it wants to change.
    ///
    /// Example usage:
    ///
    /// ```
    /// # use webhook_logger::{EmbedOptions, WebhookLogger};
    /// let _ = WebhookLogger::new("https://discord.com/api/webhooks/123/abc")
    ///     .unwrap()
    ///     .format(|record| EmbedOptions::new().title(record.target().to_string()))
    ///     .init();
    /// ```
    #[inline]
    #[must_use = "You must call init() before logging"]
    pub fn format<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&Record) -> EmbedOptions + Sync + Send + 'static,
    {
        self.formatter = Box::new(formatter);
        self
    }

    /// Writes each payload to console just before posting it, use for debugging.
    #[inline]
    #[must_use]
    pub fn echo(mut self) -> WebhookLogger {
        self.transport.set_echo();
        self
    }

    /// Installs this logger as the global [`log`] logger.
    pub fn init(self) -> Result<(), SetLoggerError> {
        let max_level = self.max_level();
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(max_level);
        Ok(())
    }

    /// The most verbose level any module is configured for.
    pub fn max_level(&self) -> LevelFilter {
        self.levels
            .iter()
            .map(|(_, level)| *level)
            .fold(self.level, Ord::max)
    }

    /// The endpoint this logger posts to.
    pub fn url(&self) -> &str {
        self.transport.url()
    }

    /// The accent colour used for `severity`.
    pub fn color(&self, severity: Severity) -> Color {
        self.palette.get(severity)
    }

    /// The baseline options of a severity: its accent colour and the current time.
    pub fn defaults(&self, severity: Severity) -> EmbedOptions {
        EmbedOptions::new()
            .color(self.color(severity))
            .timestamp(Timestamp::Now)
    }

    /// Builds the embed that [`notify`](Self::notify) would post, without posting it.
    pub fn embed<T: Into<String>>(
        &self,
        severity: Severity,
        message: T,
        options: EmbedOptions,
    ) -> Embed {
        Embed::build(message, self.defaults(severity).merge(options))
    }

    /// Posts `message` with the defaults of `severity`, overlaid by `options`.  Returns once the post has been tried;
    /// failures are only logged.
    pub fn notify<T: Into<String>>(&self, severity: Severity, message: T, options: EmbedOptions) {
        let embed = self.embed(severity, message, options);
        self.transport.deliver(&embed);
    }

    #[inline]
    pub fn info<T: Into<String>>(&self, message: T, options: EmbedOptions) {
        self.notify(Severity::Info, message, options)
    }

    #[inline]
    pub fn warning<T: Into<String>>(&self, message: T, options: EmbedOptions) {
        self.notify(Severity::Warning, message, options)
    }

    #[inline]
    pub fn error<T: Into<String>>(&self, message: T, options: EmbedOptions) {
        self.notify(Severity::Error, message, options)
    }

    #[inline]
    pub fn debug<T: Into<String>>(&self, message: T, options: EmbedOptions) {
        self.notify(Severity::Debug, message, options)
    }

    fn level_for(&self, target: &str) -> LevelFilter {
        self.levels
            .iter()
            .filter(|(name, _)| is_within(target, name))
            .max_by_key(|(name, _)| name.len())
            .map(|(_, level)| *level)
            .unwrap_or(self.level)
    }

    /// Key/value pairs become inline fields and the footer shows where the record came from.
    fn record_formatter(record: &Record) -> EmbedOptions {
        let mut options = EmbedOptions::new();
        let mut visitor = LogVisitor { fields: Vec::new() };
        if record.key_values().visit(&mut visitor).is_ok() && !visitor.fields.is_empty() {
            options = options.fields(visitor.fields);
        }
        if let Some(module_path) = record.module_path() {
            let text = match record.line() {
                Some(line) => format!("{module_path}:{line}"),
                None => module_path.to_string(),
            };
            options = options.footer(EmbedFooter::new(text));
        }
        options
    }
}

impl Log for WebhookLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        let target = metadata.target();
        if INTERNAL_TARGETS.iter().any(|name| is_within(target, name)) {
            return false;
        }
        metadata.level() <= self.level_for(target)
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let options = (self.formatter)(record);
            self.notify(record.level().into(), record.args().to_string(), options);
        }
    }

    // Every post has completed by the time `log` returns.
    fn flush(&self) {}
}

/// `true` if `target` is `module` or one of its submodules.
fn is_within(target: &str, module: &str) -> bool {
    match target.strip_prefix(module) {
        Some(rest) => rest.is_empty() || rest.starts_with("::"),
        None => false,
    }
}

// Visitor for collecting the kv pairs in a log record as embed fields.
struct LogVisitor {
    fields: Vec<EmbedField>,
}

impl<'kvs> VisitSource<'kvs> for LogVisitor {
    fn visit_pair(&mut self, key: Key<'kvs>, value: Value<'kvs>) -> Result<(), KvError> {
        self.fields
            .push(EmbedField::new(key.to_string(), value.to_string()).inline());
        Ok(())
    }
}

/// The type alias for a record formatter.
pub type Formatter = dyn Fn(&Record) -> EmbedOptions + Sync + Send + 'static;
