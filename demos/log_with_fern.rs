use fern::Dispatch;
use log::{info, LevelFilter, Log};
use webhook_logger::{EmbedOptions, WebhookLogger};

/// This is an example that shows how `webhook_logger` can be chained with the [`fern`] logging framework.  Everything
/// goes to stdout, and only warnings and errors are also posted to the webhook in `WEBHOOK_URL`.
///
/// ```
/// cargo run --example log_with_fern
/// ```
fn main() {
    let mut dispatch = Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}|{}|{} {}",
                chrono::Local::now().format("%H:%M:%S %Y-%m-%d"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(LevelFilter::Info)
        .chain(std::io::stdout());

    if let Ok(logger) = WebhookLogger::from_env() {
        let webhook: Box<dyn Log + 'static> = Box::new(
            logger
                .with_level(LevelFilter::Warn)
                .format(|record| EmbedOptions::new().title(record.target().to_string())),
        );
        dispatch = dispatch.chain(webhook);
    }
    let _ = dispatch.apply();

    info!("Hello fern");
    log::warn!("Hello fern and discord");
}
