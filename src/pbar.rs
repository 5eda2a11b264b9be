use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(200);

pub fn get_spin_pb(msg: String, interval: Duration) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner} [{elapsed_precise}] {msg} {bytes}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(msg);
    pb.enable_steady_tick(interval);
    pb
}
