//! Progress display for slow network steps.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// A ticking spinner with `msg`. Clear it with `finish_and_clear`.
pub(crate) fn spinner(msg: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .expect("static pattern")
            .tick_chars("/-\\|"),
    );
    pb.set_message(msg.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// A bar counting `total` steps.
pub(crate) fn step_bar(total: usize) -> ProgressBar {
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::with_template("  [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .expect("static pattern")
            .progress_chars("=> "),
    );
    pb
}
