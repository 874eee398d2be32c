//! The 4-7-8 breathing exercise as a tick-driven state machine.
//!
//! The machine owns no timer. Callers measure elapsed time however they like
//! and feed it to [`BreathingExercise::tick`], which reports every phase
//! boundary crossed during that interval.

use std::time::Duration;

use serde::Serialize;

pub const DEFAULT_CYCLES: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Inhale,
    Hold,
    Exhale,
}

impl Phase {
    pub fn duration(&self) -> Duration {
        match self {
            Phase::Inhale => Duration::from_secs(4),
            Phase::Hold => Duration::from_secs(7),
            Phase::Exhale => Duration::from_secs(8),
        }
    }

    pub fn instruction(&self) -> &'static str {
        match self {
            Phase::Inhale => "Breathe In",
            Phase::Hold => "Hold",
            Phase::Exhale => "Breathe Out",
        }
    }

    /// The phase that follows within a cycle, `None` after exhaling.
    fn next(&self) -> Option<Phase> {
        match self {
            Phase::Inhale => Some(Phase::Hold),
            Phase::Hold => Some(Phase::Exhale),
            Phase::Exhale => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreathingState {
    Idle,
    Running,
    Paused,
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreathingEvent {
    PhaseStarted(Phase),
    /// Carries the number of cycles finished so far
    CycleCompleted(u32),
    Completed,
}

#[derive(Debug, Clone)]
pub struct BreathingExercise {
    target_cycles: u32,
    state: BreathingState,
    phase: Phase,
    completed_cycles: u32,
    remaining: Duration,
}

impl Default for BreathingExercise {
    fn default() -> Self {
        Self::new(DEFAULT_CYCLES)
    }
}

impl BreathingExercise {
    /// A new exercise of `target_cycles` cycles (at least one).
    pub fn new(target_cycles: u32) -> Self {
        Self {
            target_cycles: target_cycles.max(1),
            state: BreathingState::Idle,
            phase: Phase::Inhale,
            completed_cycles: 0,
            remaining: Phase::Inhale.duration(),
        }
    }

    pub fn state(&self) -> BreathingState {
        self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn completed_cycles(&self) -> u32 {
        self.completed_cycles
    }

    pub fn target_cycles(&self) -> u32 {
        self.target_cycles
    }

    /// Time left in the current phase.
    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Start fresh from idle or complete, or resume a paused exercise with
    /// whatever time was left in its phase.
    pub fn start(&mut self) -> Vec<BreathingEvent> {
        match self.state {
            BreathingState::Running => Vec::new(),
            BreathingState::Paused => {
                self.state = BreathingState::Running;
                Vec::new()
            }
            BreathingState::Idle | BreathingState::Complete => {
                self.phase = Phase::Inhale;
                self.completed_cycles = 0;
                self.remaining = self.phase.duration();
                self.state = BreathingState::Running;
                vec![BreathingEvent::PhaseStarted(self.phase)]
            }
        }
    }

    pub fn pause(&mut self) {
        if self.state == BreathingState::Running {
            self.state = BreathingState::Paused;
        }
    }

    /// Advance the clock by `elapsed`. Does nothing unless running.
    pub fn tick(&mut self, mut elapsed: Duration) -> Vec<BreathingEvent> {
        let mut events = Vec::new();
        if self.state != BreathingState::Running {
            return events;
        }

        while elapsed >= self.remaining {
            elapsed -= self.remaining;

            match self.phase.next() {
                Some(next) => self.phase = next,
                None => {
                    self.completed_cycles += 1;
                    events.push(BreathingEvent::CycleCompleted(self.completed_cycles));
                    if self.completed_cycles >= self.target_cycles {
                        self.state = BreathingState::Complete;
                        self.phase = Phase::Inhale;
                        self.remaining = Duration::ZERO;
                        events.push(BreathingEvent::Completed);
                        return events;
                    }
                    self.phase = Phase::Inhale;
                }
            }

            self.remaining = self.phase.duration();
            events.push(BreathingEvent::PhaseStarted(self.phase));
        }

        self.remaining -= elapsed;
        events
    }
}
