//! Notification rendering.
//!
//! One subject/body pair per outcome. Bodies embed the classifier's
//! rationale verbatim so the operator sees what the model actually said.

use chrono::Local;

use crate::config::BODO_GLIMT_URL;
use crate::notify::Email;

fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// The urgent notification: tickets are on general sale.
pub fn tickets_available(rationale: &str) -> Email {
    Email::new(
        "🎫 BODØ/GLIMT vs TOTTENHAM TICKETS AVAILABLE!",
        format!(
            "Great news! Tickets appear to be available for the Bodø/Glimt vs Tottenham match!\n\
             \n\
             Analysis from Claude:\n\
             {rationale}\n\
             \n\
             Check the website immediately: {BODO_GLIMT_URL}\n\
             \n\
             Time checked: {}",
            timestamp()
        ),
    )
}

/// Startup baseline: monitor alive, no public tickets yet.
pub fn started_no_tickets(rationale: &str) -> Email {
    Email::new(
        "✅ BODØ/GLIMT MONITOR STARTED - NO TICKETS YET",
        format!(
            "The Bodø/Glimt ticket monitor has started successfully!\n\
             \n\
             Current status: No tickets available for ordinary people yet.\n\
             \n\
             Analysis from Claude:\n\
             {rationale}\n\
             \n\
             The monitor will check every hour and notify you when tickets become available.\n\
             \n\
             Time started: {}",
            timestamp()
        ),
    )
}

/// Startup baseline: no Tottenham information on the page.
pub fn started_no_info(rationale: &str) -> Email {
    Email::new(
        "⚠️ BODØ/GLIMT MONITOR STARTED - NO TOTTENHAM INFO",
        format!(
            "The Bodø/Glimt ticket monitor has started successfully!\n\
             \n\
             Current status: No clear information about the Tottenham match found on the website.\n\
             \n\
             Analysis from Claude:\n\
             {rationale}\n\
             \n\
             The monitor will check every hour and notify you when information becomes available.\n\
             \n\
             Time started: {}",
            timestamp()
        ),
    )
}

/// Startup baseline: the model replied with none of the expected markers.
pub fn started_unclear(rationale: &str) -> Email {
    Email::new(
        "⚠️ BODØ/GLIMT MONITOR STARTED - UNCLEAR RESPONSE",
        format!(
            "The Bodø/Glimt ticket monitor has started but received an unclear response from Claude.\n\
             \n\
             Analysis response:\n\
             {rationale}\n\
             \n\
             The monitor will continue checking every hour.\n\
             \n\
             Time started: {}",
            timestamp()
        ),
    )
}

/// Startup baseline: the website could not be fetched.
pub fn started_fetch_error(error: &str) -> Email {
    Email::new(
        "❌ BODØ/GLIMT MONITOR STARTED - ERROR",
        format!(
            "The ticket monitor has started but failed to fetch website content.\n\
             \n\
             Error:\n\
             {error}\n\
             \n\
             The monitor will retry every hour.\n\
             \n\
             Time: {}",
            timestamp()
        ),
    )
}

/// Startup baseline: the classification service could not be reached.
pub fn started_classifier_unreachable(error: &str) -> Email {
    Email::new(
        "❌ BODØ/GLIMT MONITOR STARTED - CLASSIFIER UNREACHABLE",
        format!(
            "The ticket monitor has started but could not reach the classification service.\n\
             \n\
             Error:\n\
             {error}\n\
             \n\
             The monitor will retry every hour.\n\
             \n\
             Time: {}",
            timestamp()
        ),
    )
}
