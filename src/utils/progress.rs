use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;

use crate::error::Result;

/// Year-by-year console progress. Each year number goes to stdout as the year
/// starts; the bar itself is drawn on stderr only when that is a terminal.
/// A quiet reporter prints nothing at all.
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
}

impl ProgressReporter {
    pub fn for_years(year_count: u64, quiet: bool) -> Self {
        if quiet {
            return Self::silent();
        }
        Self::with_draw_target(year_count, ProgressDrawTarget::stderr())
    }

    pub fn with_draw_target(year_count: u64, target: ProgressDrawTarget) -> Self {
        let pb = ProgressBar::with_draw_target(Some(year_count), target);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{msg}\n{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} years")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        if !pb.is_hidden() {
            pb.enable_steady_tick(Duration::from_millis(100));
        }

        Self {
            progress_bar: Some(pb),
        }
    }

    pub fn silent() -> Self {
        Self { progress_bar: None }
    }

    /// Print the year marker on stdout and show the year on the bar.
    pub fn start_year(&self, year: i32) -> Result<()> {
        self.write_year_marker(year, &mut io::stdout())
    }

    pub fn write_year_marker<W: Write>(&self, year: i32, out: &mut W) -> Result<()> {
        match self.progress_bar {
            Some(ref pb) if pb.is_hidden() => writeln!(out, "{}", year)?,
            Some(ref pb) => {
                // keep the bar from redrawing over the marker
                pb.suspend(|| writeln!(out, "{}", year))?;
                pb.set_message(format!("Processing {}...", year));
            }
            None => {}
        }
        Ok(())
    }

    pub fn finish_year(&self) {
        if let Some(ref pb) = self.progress_bar {
            pb.inc(1);
        }
    }

    pub fn set_message(&self, message: &str) {
        if let Some(ref pb) = self.progress_bar {
            pb.set_message(message.to_string());
        }
    }

    pub fn finish_with_message(&self, message: &str) {
        if let Some(ref pb) = self.progress_bar {
            pb.finish_with_message(message.to_string());
        }
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        if let Some(ref pb) = self.progress_bar {
            if !pb.is_finished() {
                pb.finish();
            }
        }
    }
}
