use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

/// The page the monitor watches. Single-site by design.
pub const BODO_GLIMT_URL: &str = "https://www.glimt.no";

/// Application configuration loaded from environment variables.
///
/// Built once at startup; immutable for the process lifetime. Any missing
/// required value is fatal before the first check runs.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub from_email: String,
    pub email_password: String,
    pub to_email: String,
    pub smtp_server: String,
    pub smtp_port: u16,
    pub check_interval: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            anthropic_api_key: env::var("ANTHROPIC_API_KEY")
                .context("ANTHROPIC_API_KEY must be set")?,
            from_email: env::var("FROM_EMAIL")
                .context("FROM_EMAIL must be set")?,
            email_password: env::var("EMAIL_PASSWORD")
                .context("EMAIL_PASSWORD must be set")?,
            to_email: env::var("TO_EMAIL")
                .context("TO_EMAIL must be set")?,
            smtp_server: env::var("SMTP_SERVER")
                .unwrap_or_else(|_| "smtp.gmail.com".to_string()),
            smtp_port: env::var("SMTP_PORT")
                .unwrap_or_else(|_| "587".to_string())
                .parse()
                .context("SMTP_PORT must be a valid port number")?,
            check_interval: parse_check_interval(
                &env::var("CHECK_INTERVAL_SECS").unwrap_or_else(|_| "3600".to_string()),
            )?,
        })
    }
}

/// Parse the check interval, rejecting zero: `tokio::time::interval`
/// panics on a zero period, and a misconfigured interval must fail at
/// startup rather than after the first check.
fn parse_check_interval(raw: &str) -> Result<Duration> {
    let secs: u64 = raw
        .parse()
        .context("CHECK_INTERVAL_SECS must be a number of seconds")?;
    anyhow::ensure!(secs > 0, "CHECK_INTERVAL_SECS must be greater than zero");
    Ok(Duration::from_secs(secs))
}
