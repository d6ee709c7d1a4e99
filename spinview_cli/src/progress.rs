//! Loading placeholder shown while viewer data is in flight.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Fallback text for a failed request that carries no server-provided message.
pub const UNAVAILABLE_MESSAGE: &str = "360° view unavailable";

/// Returns a ticking spinner with the given message. Callers clear it with
/// `finish_and_clear` before printing results or a failure message in its
/// place.
pub fn loading_placeholder(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner:.cyan} {msg}").unwrap());
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}
