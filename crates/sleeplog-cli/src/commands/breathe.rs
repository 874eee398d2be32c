use std::thread;
use std::time::{Duration, Instant};

use sleeplog_core::breathing::{BreathingEvent, BreathingExercise, BreathingState, Phase};

use crate::app::AppContext;
use crate::cli::BreatheArgs;
use crate::ui::theme::{styled, styles};
use crate::ui::{badge, header, hint, print, Badge, PhaseBar, UiContext};

const TICK: Duration = Duration::from_millis(100);

pub fn handle_breathe(ctx: &AppContext, args: &BreatheArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(false, None)?;
    let mut exercise = BreathingExercise::new(args.cycles);

    if !ctx.quiet() {
        let context = format!("{} cycles", exercise.target_cycles());
        print(&ui, &header(&ui, "breathe", Some(&context)));
        if ui.mode.is_pretty() {
            print(&ui, &hint(&ui, "Inhale 4s, hold 7s, exhale 8s. Ctrl-C stops."));
            println!();
        }
    }

    let mut bar: Option<PhaseBar> = None;
    let mut pending = exercise.start();
    let mut last = Instant::now();

    loop {
        for event in pending.drain(..) {
            if let BreathingEvent::PhaseStarted(phase) = event {
                if let Some(previous) = bar.take() {
                    previous.finish();
                }
                bar = Some(PhaseBar::new(
                    &ui,
                    phase.duration().as_secs(),
                    &phase_label(&ui, phase),
                ));
            }
            if let Some(line) = describe(&ui, &event, exercise.target_cycles()) {
                if !ctx.quiet() || event == BreathingEvent::Completed {
                    println!("{}", line);
                }
            }
        }

        if exercise.state() == BreathingState::Complete {
            if let Some(previous) = bar.take() {
                previous.finish();
            }
            tracing::info!(cycles = exercise.completed_cycles(), "breathing exercise complete");
            return Ok(());
        }

        thread::sleep(TICK);
        let now = Instant::now();
        pending = exercise.tick(now - last);
        last = now;

        if let Some(current) = &bar {
            let elapsed = exercise.phase().duration().saturating_sub(exercise.remaining());
            current.set(elapsed.as_secs());
        }
    }
}

fn phase_label(ui: &UiContext, phase: Phase) -> String {
    styled(phase.instruction(), styles::phase(), ui.color)
}

/// Line to print for an event. Pretty mode leaves phases to the bar unless
/// it cannot draw one.
fn describe(ui: &UiContext, event: &BreathingEvent, target: u32) -> Option<String> {
    match event {
        BreathingEvent::PhaseStarted(phase) => {
            if ui.allows_animation() {
                None
            } else if ui.mode.is_pretty() {
                Some(format!(
                    "{} ({}s)",
                    phase.instruction(),
                    phase.duration().as_secs()
                ))
            } else {
                Some(format!("phase={}", phase.instruction()))
            }
        }
        BreathingEvent::CycleCompleted(done) => {
            if ui.mode.is_pretty() {
                Some(format!("Cycle {} of {} complete", done, target))
            } else {
                Some(format!("cycle={}/{}", done, target))
            }
        }
        BreathingEvent::Completed => {
            if ui.mode.is_pretty() {
                Some(badge(ui, Badge::Ok, "Exercise complete. Sleep well."))
            } else {
                Some("status=complete".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::OutputMode;

    fn ctx(mode: OutputMode) -> UiContext {
        UiContext {
            is_tty: false,
            color: false,
            unicode: false,
            width: 80,
            mode,
        }
    }

    #[test]
    fn test_describe_plain() {
        let ui = ctx(OutputMode::Plain);
        assert_eq!(
            describe(&ui, &BreathingEvent::PhaseStarted(Phase::Hold), 5).as_deref(),
            Some("phase=Hold")
        );
        assert_eq!(
            describe(&ui, &BreathingEvent::CycleCompleted(2), 5).as_deref(),
            Some("cycle=2/5")
        );
        assert_eq!(
            describe(&ui, &BreathingEvent::Completed, 5).as_deref(),
            Some("status=complete")
        );
    }

    #[test]
    fn test_describe_pretty_without_animation() {
        let ui = ctx(OutputMode::Pretty);
        assert_eq!(
            describe(&ui, &BreathingEvent::PhaseStarted(Phase::Exhale), 5).as_deref(),
            Some("Breathe Out (8s)")
        );
        assert_eq!(
            describe(&ui, &BreathingEvent::Completed, 5).as_deref(),
            Some("[OK] Exercise complete. Sleep well.")
        );
    }

    #[test]
    fn test_describe_hides_phases_behind_bar() {
        let ui = UiContext {
            is_tty: true,
            ..ctx(OutputMode::Pretty)
        };
        assert!(describe(&ui, &BreathingEvent::PhaseStarted(Phase::Inhale), 5).is_none());
    }
}
