//! Progress reporting for per-plane work

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar counting processed planes
pub struct PlaneProgress {
    bar: ProgressBar,
}

impl PlaneProgress {
    /// Create a bar for `planes` planes; nothing is drawn for an empty stack
    pub fn new(planes: usize, description: &str) -> Self {
        if planes == 0 {
            return PlaneProgress { bar: ProgressBar::hidden() };
        }

        let bar = ProgressBar::new(planes as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] plane {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        bar.set_style(style);
        bar.set_message(description.to_string());

        PlaneProgress { bar }
    }

    /// Record that plane `index` (1-based) is done
    pub fn plane_done(&self, index: usize) {
        self.bar.set_position(index as u64);
    }

    pub fn finish(&self, summary: &str) {
        self.bar.finish_with_message(summary.to_string());
    }
}
