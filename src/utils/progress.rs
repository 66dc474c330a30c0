//! Build progress reporting; a no-op without the `progress` feature

#[cfg(feature = "progress")]
pub use self::bar::BuildProgress;

#[cfg(not(feature = "progress"))]
pub use self::noop::BuildProgress;

#[cfg(feature = "progress")]
mod bar {
    use indicatif::{ProgressBar, ProgressStyle};

    /// Progress bar over the files of one build, hidden when `silent`
    pub struct BuildProgress {
        bar: Option<ProgressBar>,
    }

    impl BuildProgress {
        pub fn new(total: usize, silent: bool) -> Self {
            if silent {
                return Self { bar: None };
            }

            let bar = ProgressBar::new(total as u64);
            if let Ok(style) = ProgressStyle::default_bar().template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
            ) {
                bar.set_style(style.progress_chars("█▓▒░  "));
            }
            bar.set_message("Indexing files...");
            Self { bar: Some(bar) }
        }

        /// Mark one file as handled, indexed or skipped
        pub fn tick(&self) {
            if let Some(bar) = &self.bar {
                bar.inc(1);
            }
        }

        pub fn finish(self) {
            if let Some(bar) = self.bar {
                bar.finish_and_clear();
            }
        }
    }
}

#[cfg(not(feature = "progress"))]
mod noop {
    pub struct BuildProgress;

    impl BuildProgress {
        pub fn new(_total: usize, _silent: bool) -> Self {
            BuildProgress
        }

        pub fn tick(&self) {}

        pub fn finish(self) {}
    }
}
