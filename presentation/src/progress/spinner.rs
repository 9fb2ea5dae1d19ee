//! Model-wait spinner

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown while a model call is in flight
///
/// Disabled in quiet mode; `start_if(false, ..)` is a no-op handle so
/// call sites stay branch-free.
pub struct ModelSpinner(Option<ProgressBar>);

impl ModelSpinner {
    pub fn start_if(enabled: bool, message: &str) -> Self {
        if !enabled {
            return Self(None);
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(120));
        Self(Some(pb))
    }

    /// Stop and erase the spinner
    pub fn finish(self) {
        if let Some(pb) = self.0 {
            pb.finish_and_clear();
        }
    }
}
