// Main entry point for the ticket monitor

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use anthropic_client::AnthropicClient;
use monitor_core::classify::ClaudeClassifier;
use monitor_core::config::{Config, BODO_GLIMT_URL};
use monitor_core::fetch::HttpFetcher;
use monitor_core::notify::{SmtpNotifier, SmtpOptions};
use monitor_core::TicketMonitor;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,monitor_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Bodø/Glimt ticket monitor");

    // Load configuration; missing credentials are fatal before any check runs
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        url = BODO_GLIMT_URL,
        interval_secs = config.check_interval.as_secs(),
        "Configuration loaded"
    );

    let client = AnthropicClient::new(&config.anthropic_api_key);
    let monitor = TicketMonitor::new(
        Arc::new(HttpFetcher::new(BODO_GLIMT_URL)),
        Arc::new(ClaudeClassifier::new(client)),
        Arc::new(SmtpNotifier::new(SmtpOptions {
            server: config.smtp_server.clone(),
            port: config.smtp_port,
            from: config.from_email.clone(),
            password: config.email_password.clone(),
            to: config.to_email.clone(),
        })),
        config.check_interval,
    );

    // Ctrl-C cancels the scheduler between ticks
    let shutdown = CancellationToken::new();
    {
        let shutdown = shutdown.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Interrupt received");
                shutdown.cancel();
            }
        });
    }

    monitor.run(shutdown).await;

    tracing::info!("Scheduler stopped by user");
    Ok(())
}
