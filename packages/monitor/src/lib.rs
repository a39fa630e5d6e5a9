//! Bodø/Glimt ticket monitor
//!
//! Watches the club website for public ticket availability for the
//! Tottenham match. Each tick fetches the page, extracts its text, asks
//! Claude whether tickets are on general sale, and emails the operator
//! according to the notification policy in [`monitor::decide`]:
//! one baseline email at startup, one email per tick while tickets are
//! available, silence otherwise.
//!
//! # Modules
//!
//! - [`config`] - Environment configuration, validated once at startup
//! - [`fetch`] - Page fetching over HTTP
//! - [`extract`] - HTML to plain text
//! - [`classify`] - Claude-backed availability classification
//! - [`notify`] - SMTP email delivery
//! - [`report`] - Notification subject/body rendering
//! - [`monitor`] - The tick loop and decision policy
//! - [`testing`] - Recording mocks for the collaborator seams

pub mod classify;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod monitor;
pub mod notify;
pub mod report;
pub mod testing;

pub use config::Config;
pub use monitor::{decide, CheckResult, TicketMonitor};
