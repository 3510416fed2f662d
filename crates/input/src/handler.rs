//! DAS/ARR repeat handler for held movement keys.
//!
//! Works on [`Intent`] values, so it carries no key-code knowledge of its
//! own. Terminals that never emit key-release events are supported through
//! an inactivity timeout that force-releases held state.

use arrayvec::ArrayVec;
use std::time::Instant;

use gridfall_types::{DEFAULT_ARR_MS, DEFAULT_DAS_MS, SOFT_DROP_ARR_MS, SOFT_DROP_DAS_MS};

use crate::map::Intent;

/// Without release events a single tap would otherwise read as held forever.
const KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// One held direction's delay-then-repeat clock.
#[derive(Debug, Clone, Copy, Default)]
struct RepeatClock {
    das_elapsed: u32,
    arr_accumulated: u32,
}

impl RepeatClock {
    fn reset(&mut self) {
        *self = Self::default();
    }

    /// Advance by `elapsed_ms` and return how many repeats fired.
    fn advance(&mut self, elapsed_ms: u32, das: u32, arr: u32) -> u32 {
        let before = self.das_elapsed;
        self.das_elapsed += elapsed_ms;
        if self.das_elapsed < das {
            return 0;
        }
        // Only the portion past the DAS boundary counts toward ARR.
        let excess = if before < das {
            self.das_elapsed - das
        } else {
            elapsed_ms
        };
        self.arr_accumulated += excess;
        let fired = self.arr_accumulated / arr;
        self.arr_accumulated %= arr;
        fired
    }
}

/// Tracks held movement intents and produces auto-repeats.
#[derive(Debug, Clone)]
pub struct InputHandler {
    horizontal: Option<Intent>,
    down_held: bool,
    last_press: Instant,
    horizontal_clock: RepeatClock,
    down_clock: RepeatClock,
    das_delay: u32,
    arr_rate: u32,
    release_timeout_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_config(DEFAULT_DAS_MS, DEFAULT_ARR_MS)
    }

    pub fn with_config(das_delay: u32, arr_rate: u32) -> Self {
        Self {
            horizontal: None,
            down_held: false,
            last_press: Instant::now(),
            horizontal_clock: RepeatClock::default(),
            down_clock: RepeatClock::default(),
            das_delay,
            arr_rate,
            release_timeout_ms: KEY_RELEASE_TIMEOUT_MS,
        }
    }

    /// Register a movement press. Returns the intent to apply immediately,
    /// or `None` for a repeat of an already-held direction.
    pub fn handle_press(&mut self, intent: Intent) -> Option<Intent> {
        match intent {
            Intent::MoveLeft | Intent::MoveRight => {
                self.last_press = Instant::now();
                if self.horizontal == Some(intent) {
                    return None;
                }
                self.horizontal = Some(intent);
                self.horizontal_clock.reset();
                Some(intent)
            }
            Intent::SoftDrop => {
                self.last_press = Instant::now();
                if self.down_held {
                    return None;
                }
                self.down_held = true;
                self.down_clock.reset();
                Some(intent)
            }
            other => Some(other),
        }
    }

    /// Register a movement release; other intents are ignored.
    pub fn handle_release(&mut self, intent: Intent) {
        match intent {
            Intent::MoveLeft | Intent::MoveRight => {
                if self.horizontal == Some(intent) {
                    self.horizontal = None;
                    self.horizontal_clock.reset();
                }
            }
            Intent::SoftDrop => {
                self.down_held = false;
                self.down_clock.reset();
            }
            _ => {}
        }
    }

    /// Advance the repeat clocks by `elapsed_ms` and collect the repeats
    /// due this step, in horizontal-then-vertical order.
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<Intent, 32> {
        let mut repeats = ArrayVec::new();

        if self.last_press.elapsed().as_millis() as u32 > self.release_timeout_ms {
            self.horizontal = None;
            self.horizontal_clock.reset();
            self.down_held = false;
            self.down_clock.reset();
        }

        if let Some(direction) = self.horizontal {
            let fired = self
                .horizontal_clock
                .advance(elapsed_ms, self.das_delay, self.arr_rate);
            for _ in 0..fired {
                let _ = repeats.try_push(direction);
            }
        } else {
            self.horizontal_clock.reset();
        }

        if self.down_held {
            let fired = self
                .down_clock
                .advance(elapsed_ms, SOFT_DROP_DAS_MS, SOFT_DROP_ARR_MS);
            for _ in 0..fired {
                let _ = repeats.try_push(Intent::SoftDrop);
            }
        } else {
            self.down_clock.reset();
        }

        repeats
    }

    /// Drop all held state, e.g. on pause or restart.
    pub fn reset(&mut self) {
        self.horizontal = None;
        self.down_held = false;
        self.last_press = Instant::now();
        self.horizontal_clock.reset();
        self.down_clock.reset();
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
