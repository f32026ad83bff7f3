//! Cancellable per-turn countdown
//!
//! The timer does not own a clock. A shell delivers one `tick()` per second and
//! the controller cancels and restarts the countdown whenever the mover
//! changes or the game ends, so a countdown can never expire against a turn it
//! was not started for.

use serde::Serialize;

/// What a tick did to the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TimerEvent {
    /// No countdown is running
    Idle,
    /// Countdown continues with this many seconds left
    Running { remaining: u32 },
    /// Countdown reached zero; the timer is now idle
    Expired,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnTimer {
    duration_secs: u32,
    remaining: Option<u32>,
    generation: u64,
}

impl TurnTimer {
    /// Create an idle timer for turns of `duration_secs` (at least one second).
    pub fn new(duration_secs: u32) -> Self {
        Self {
            duration_secs: duration_secs.max(1),
            remaining: None,
            generation: 0,
        }
    }

    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    /// Seconds left, or `None` when idle
    pub fn remaining(&self) -> Option<u32> {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.remaining.is_some()
    }

    /// Identifies the current countdown; bumped on every start.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Begin a fresh countdown, replacing any running one.
    pub fn start(&mut self) {
        self.generation += 1;
        self.remaining = Some(self.duration_secs);
    }

    pub fn cancel(&mut self) {
        self.remaining = None;
    }

    pub fn restart(&mut self) {
        self.cancel();
        self.start();
    }

    /// Advance the countdown by one second.
    pub fn tick(&mut self) -> TimerEvent {
        match self.remaining {
            None => TimerEvent::Idle,
            Some(left) if left <= 1 => {
                self.remaining = None;
                TimerEvent::Expired
            }
            Some(left) => {
                self.remaining = Some(left - 1);
                TimerEvent::Running {
                    remaining: left - 1,
                }
            }
        }
    }

    /// Like [`TurnTimer::tick`], but ignores ticks scheduled for an older countdown.
    pub fn tick_for(&mut self, generation: u64) -> TimerEvent {
        if generation != self.generation {
            return TimerEvent::Idle;
        }
        self.tick()
    }
}
