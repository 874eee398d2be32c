//! Progress indicators built on indicatif.

use std::time::Duration;

use indicatif::{ProgressBar as IndicatifBar, ProgressStyle};

use super::context::UiContext;
use super::render::badge;
use super::theme::{spinner_frames, Badge};

/// A spinner for indeterminate progress. Draws nothing off a TTY.
pub struct Spinner<'a> {
    ctx: &'a UiContext,
    bar: Option<IndicatifBar>,
}

impl<'a> Spinner<'a> {
    pub fn new(ctx: &'a UiContext, message: &str) -> Self {
        let bar = if ctx.allows_animation() {
            let template = if ctx.color {
                "{spinner:.cyan} {msg}..."
            } else {
                "{spinner} {msg}..."
            };
            let pb = IndicatifBar::new_spinner();
            if let Ok(style) = ProgressStyle::default_spinner().template(template) {
                pb.set_style(style.tick_strings(spinner_frames(ctx.unicode)));
            }
            pb.set_message(message.to_string());
            pb.enable_steady_tick(Duration::from_millis(80));
            Some(pb)
        } else {
            None
        };

        Self { ctx, bar }
    }

    /// Clear the spinner and print a success badge.
    pub fn finish(&self, message: &str) {
        self.clear();
        println!("{}", badge(self.ctx, Badge::Ok, message));
    }

    /// Clear the spinner and print an error badge to stderr.
    pub fn finish_err(&self, message: &str) {
        self.clear();
        eprintln!("{}", badge(self.ctx, Badge::Err, message));
    }

    fn clear(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

/// Countdown bar for one timed phase, measured in whole seconds.
pub struct PhaseBar {
    bar: Option<IndicatifBar>,
}

impl PhaseBar {
    /// Start a bar for a phase of `seconds` labelled `message`.
    pub fn new(ctx: &UiContext, seconds: u64, message: &str) -> Self {
        let bar = if ctx.allows_animation() {
            let template = if ctx.color {
                "{msg:<12} [{bar:30.magenta/dim}] {pos}/{len}s"
            } else {
                "{msg:<12} [{bar:30}] {pos}/{len}s"
            };
            let chars = if ctx.unicode {
                "\u{2501}\u{2501}\u{2500}"
            } else {
                "=>-"
            };
            let pb = IndicatifBar::new(seconds);
            if let Ok(style) = ProgressStyle::default_bar().template(template) {
                pb.set_style(style.progress_chars(chars));
            }
            pb.set_message(message.to_string());
            Some(pb)
        } else {
            None
        };

        Self { bar }
    }

    pub fn set(&self, elapsed_secs: u64) {
        if let Some(bar) = &self.bar {
            bar.set_position(elapsed_secs);
        }
    }

    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}
