use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while a target is being checked. Clears itself on drop so
/// an early exit never leaves a stray line behind.
pub struct Spinner {
    progress: ProgressBar,
}

impl Spinner {
    /// Spin with a "Checking <target>..." message until finished.
    pub fn for_target(target: &str) -> Self {
        let progress = ProgressBar::new_spinner();
        progress.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        progress.set_message(format!("Checking {}...", target));
        progress.enable_steady_tick(Duration::from_millis(80));

        Self { progress }
    }

    pub fn finish(&self) {
        self.progress.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.progress.finish_and_clear();
    }
}
