use log::LevelFilter;
use webhook_logger::WebhookLogger;

/// Example of sending `log` output to a Discord webhook.  To run this example you will need to set up a Discord
/// Webhook and store the URL in an environment variable called `WEBHOOK_URL`.  `WEBHOOK_USERNAME` and
/// `WEBHOOK_AVATAR_URL` are picked up as well when set.
///
/// ```
/// cargo run --example log_to_discord
/// ```
fn main() {
    match WebhookLogger::from_env() {
        Ok(logger) => {
            let _ = logger.with_level(LevelFilter::Info).echo().init();
            log::info!(user = "alice", attempt = 3; "Hello discord");
            log::warn!("Goodmorning, discord");
            log::error!("Goodbye discord");
        }
        Err(x) => eprintln!("{x}"),
    }
}
