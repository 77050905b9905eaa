//! Booster module - the timed score multiplier
//!
//! Every match bumps the multiplier and fills a 360° gauge. Once full, the gauge
//! waits a short wall-clock settle delay and then drains one degree per update.
//! When it runs dry the multiplier drops by one; if it is still above 1 the
//! booster waits a cooldown, refills, and drains again for the next step.
//!
//! ```text
//!  Idle --charge--> Charging --360°--> Armed --settle--> Decaying --0°--> Lapsed
//!   ^                  ^                                                  |
//!   |                  +------------ Cooldown <------ multiplier > 1 -----+
//!   +------------------------------------------------ multiplier == 1 ----+
//! ```
//!
//! `charge()` from any phase restarts the fill from 0° and cancels a pending
//! settle/cooldown deadline, so a stale timer never fires into the new phase.

use tracing::trace;

use crate::timer::Deadline;
use crate::types::{
    BOOSTER_CHARGE_STEP, BOOSTER_COOLDOWN_MS, BOOSTER_DECAY_STEP, BOOSTER_FULL_DEGREES,
    BOOSTER_SETTLE_MS,
};

/// Booster phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoosterPhase {
    /// Multiplier is 1, nothing to do.
    Idle,
    /// Gauge filling.
    Charging,
    /// Gauge full, waiting for the settle deadline.
    Armed,
    /// Gauge draining.
    Decaying,
    /// Gauge empty; resolved within the same update.
    Lapsed,
    /// Waiting before the next multiplier step refills.
    Cooldown,
}

impl BoosterPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoosterPhase::Idle => "idle",
            BoosterPhase::Charging => "charging",
            BoosterPhase::Armed => "armed",
            BoosterPhase::Decaying => "decaying",
            BoosterPhase::Lapsed => "lapsed",
            BoosterPhase::Cooldown => "cooldown",
        }
    }
}

/// Timed multiplier state machine.
#[derive(Debug, Clone)]
pub struct Booster {
    multiplier: u32,
    phase: BoosterPhase,
    degrees: u16,
    deadline: Deadline,
    settle_ms: u64,
    cooldown_ms: u64,
}

impl Booster {
    /// Create an idle booster with the default delays
    pub fn new() -> Self {
        Self::with_delays(BOOSTER_SETTLE_MS, BOOSTER_COOLDOWN_MS)
    }

    /// Create an idle booster with custom settle/cooldown delays
    pub fn with_delays(settle_ms: u64, cooldown_ms: u64) -> Self {
        Self {
            multiplier: 1,
            phase: BoosterPhase::Idle,
            degrees: 0,
            deadline: Deadline::new(),
            settle_ms,
            cooldown_ms,
        }
    }

    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }

    pub fn phase(&self) -> BoosterPhase {
        self.phase
    }

    /// Gauge fill in degrees (0..=360), for display
    pub fn progress_degrees(&self) -> u16 {
        self.degrees
    }

    /// Register a match: bump the multiplier and restart the fill
    pub fn charge(&mut self) {
        self.multiplier = self.multiplier.saturating_add(1);
        self.degrees = 0;
        self.deadline.cancel();
        self.phase = BoosterPhase::Charging;
        trace!(multiplier = self.multiplier, "booster charged");
    }

    /// Back to the initial state (game start / game over)
    pub fn reset(&mut self) {
        self.multiplier = 1;
        self.degrees = 0;
        self.deadline.cancel();
        self.phase = BoosterPhase::Idle;
    }

    /// Advance one frame. `now_ms` is a monotonic wall-clock reading.
    pub fn update(&mut self, now_ms: u64) {
        match self.phase {
            BoosterPhase::Idle => {}
            BoosterPhase::Charging => {
                self.degrees = (self.degrees + BOOSTER_CHARGE_STEP).min(BOOSTER_FULL_DEGREES);
                if self.degrees >= BOOSTER_FULL_DEGREES {
                    self.phase = BoosterPhase::Armed;
                    self.deadline.arm(now_ms, self.settle_ms);
                }
            }
            BoosterPhase::Armed => {
                if self.deadline.fire(now_ms) {
                    self.phase = BoosterPhase::Decaying;
                }
            }
            BoosterPhase::Decaying => {
                self.degrees = self.degrees.saturating_sub(BOOSTER_DECAY_STEP);
                if self.degrees == 0 {
                    self.phase = BoosterPhase::Lapsed;
                    self.lapse(now_ms);
                }
            }
            BoosterPhase::Lapsed => self.lapse(now_ms),
            BoosterPhase::Cooldown => {
                if self.deadline.fire(now_ms) {
                    self.phase = BoosterPhase::Charging;
                }
            }
        }
    }

    fn lapse(&mut self, now_ms: u64) {
        if self.multiplier > 1 {
            self.multiplier -= 1;
            trace!(multiplier = self.multiplier, "booster lapsed");
        }
        if self.multiplier == 1 {
            self.phase = BoosterPhase::Idle;
        } else {
            self.phase = BoosterPhase::Cooldown;
            self.deadline.arm(now_ms, self.cooldown_ms);
        }
    }
}

impl Default for Booster {
    fn default() -> Self {
        Self::new()
    }
}
