use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Starts a spinner with the given message.
///
/// The returned handle owns the ticker thread; callers must stop it with
/// `finish_and_clear` once the decorated work is done.
pub fn start(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("[{spinner}] {msg}")
            .unwrap()
            .tick_chars(r"|/-\ "),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
