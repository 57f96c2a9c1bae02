use webhook_logger::{EmbedAuthor, EmbedField, EmbedFooter, EmbedOptions, WebhookLogger};

/// Posts a fully featured embed straight to the webhook in `WEBHOOK_URL`, without going through `log`.
///
/// ```
/// cargo run --example notify_embed
/// ```
fn main() -> Result<(), webhook_logger::Error> {
    let logger = WebhookLogger::from_env()?.echo();

    logger.info("Hello World!", EmbedOptions::new());
    logger.info(
        "You have two new pending tasks",
        EmbedOptions::new()
            .title("Pending Tasks")
            .fields(vec![
                EmbedField::new("Task 1", "This is a task").inline(),
                EmbedField::new("Task 2", "This is another task").inline(),
            ])
            .author(EmbedAuthor::new("John Doe"))
            .footer(EmbedFooter::new("This is a footer"))
            .timestamp(true),
    );
    logger.debug("No timestamp on this one", EmbedOptions::new().timestamp(false));
    Ok(())
}
