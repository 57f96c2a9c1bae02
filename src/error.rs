use thiserror::Error;

/// Errors raised by [`WebhookLogger`](crate::WebhookLogger).
///
/// Only construction errors ever reach a caller.  `Request` failures are
/// produced while posting and are reported through the local diagnostics instead.
#[derive(Debug, Error)]
pub enum Error {
    /// The webhook URL was empty.
    #[error("webhook URL is required")]
    MissingUrl,

    /// A required environment variable was not set.
    #[error("environment variable `{0}` is not set")]
    MissingEnv(&'static str),

    /// The HTTP client could not be created.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The thread making the POST panicked.
    #[error("webhook delivery thread panicked")]
    Worker,

    /// The POST failed or the endpoint answered with a non-2xx status.
    #[error("request to webhook failed: {0}")]
    Request(#[from] reqwest::Error),
}
