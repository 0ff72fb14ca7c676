//! Timed animations driven by design tokens.
//!
//! The screen redraws on every poll tick; these types only answer "how far
//! along are we" for a given instant.

use std::time::{Duration, Instant};

use crate::render::Transition;
use crate::tokens::{names, DesignTokens, Easing, TokenError};

/// A single eased run from 0.0 to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    started: Instant,
    duration: Duration,
    easing: Easing,
}

impl Tween {
    /// Starts a run at `started`.
    #[must_use]
    pub const fn new(started: Instant, duration: Duration, easing: Easing) -> Self {
        Self {
            started,
            duration,
            easing,
        }
    }

    /// Starts the tab-switch run described by a render tree transition.
    #[must_use]
    pub fn from_transition(transition: Transition, started: Instant) -> Self {
        Self::new(
            started,
            Duration::from_millis(u64::from(transition.duration_ms)),
            transition.easing,
        )
    }

    /// Eased progress in `[0, 1]` at `now`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        let t = (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0);
        self.easing.sample(t)
    }

    /// Whether the run has reached its end at `now`.
    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }
}

/// Pull-to-refresh indicator. It clears itself once its timing elapses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefreshIndicator {
    tween: Tween,
}

impl RefreshIndicator {
    /// Starts a refresh at `now` using the `refresh` timing token.
    ///
    /// # Errors
    ///
    /// Returns an error if the refresh timing or the standard easing is missing.
    pub fn start(tokens: &DesignTokens, now: Instant) -> Result<Self, TokenError> {
        Ok(Self {
            tween: Tween::new(
                now,
                tokens.duration(names::TIMING_REFRESH)?,
                tokens.easing(names::EASING_STANDARD)?,
            ),
        })
    }

    /// Eased progress at `now`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f64 {
        self.tween.progress(now)
    }

    /// Whether the indicator should be cleared at `now`.
    #[must_use]
    pub fn is_done(&self, now: Instant) -> bool {
        self.tween.is_finished(now)
    }
}

/// Glyphs cycled by the orbit ornament.
pub const ORBIT_GLYPHS: [&str; 4] = ["☉", "☽", "✦", "♄"];

/// Endless ambient loop shown next to the status line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    started: Instant,
    period: Duration,
    easing: Easing,
}

impl Orbit {
    /// Starts the loop at `now` using the `orbitalLong` timing and `orbital` curve.
    ///
    /// # Errors
    ///
    /// Returns an error if either token is missing.
    pub fn start(tokens: &DesignTokens, now: Instant) -> Result<Self, TokenError> {
        Ok(Self {
            started: now,
            period: tokens.duration(names::TIMING_ORBITAL_LONG)?,
            easing: tokens.easing(names::EASING_ORBITAL)?,
        })
    }

    /// Eased position within the current lap, in `[0, 1]`.
    #[must_use]
    pub fn phase(&self, now: Instant) -> f64 {
        if self.period.is_zero() {
            return 0.0;
        }
        let elapsed = now.saturating_duration_since(self.started).as_secs_f64();
        let period = self.period.as_secs_f64();
        self.easing.sample((elapsed % period) / period)
    }

    /// Glyph for the current phase.
    #[must_use]
    pub fn glyph(&self, now: Instant) -> &'static str {
        let index = (self.phase(now) * ORBIT_GLYPHS.len() as f64) as usize;
        ORBIT_GLYPHS[index.min(ORBIT_GLYPHS.len() - 1)]
    }
}
