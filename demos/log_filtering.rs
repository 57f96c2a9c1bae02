use log::{error, info, Level, LevelFilter};
use multi_log::MultiLogger;
use webhook_logger::{Severity, WebhookLogger};

/// Two webhooks, one for everything from INFO up and one that only sees errors.  Both read `WEBHOOK_URL`, so the
/// error shows up twice in the channel.
///
/// ```
/// cargo run --example log_filtering
/// ```
fn main() {
    let (Ok(l1), Ok(l2)) = (WebhookLogger::from_env(), WebhookLogger::from_env()) else {
        eprintln!("WEBHOOK_URL is not set");
        return;
    };
    let l1 = l1.with_level(LevelFilter::Info);
    let l2 = l2
        .with_level(LevelFilter::Error)
        .with_username("Pager")
        .with_color(Severity::Error, (0x80, 0x00, 0x00));
    let _ = MultiLogger::init(vec![Box::new(l1), Box::new(l2)], Level::Trace);

    // Only l1 posts this one because l2 is filtered for error
    info!("only one message at INFO level");
    // but both loggers post this
    error!("two messages at ERROR level");
}
