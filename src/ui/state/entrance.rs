// SPDX-License-Identifier: MPL-2.0
//! Timing math for the one-shot entrance animation.
//!
//! The scene enters by rising a fixed distance while fading from invisible
//! to fully opaque, following an ease-in curve. All functions here are pure
//! so the curve can be tested without a running event loop.

use std::time::Duration;

/// How long the entrance animation runs.
pub const ENTRANCE_DURATION: Duration = Duration::from_secs(5);

/// How far the image rises during the entrance, in logical pixels.
pub const ENTRANCE_RISE: f32 = 120.0;

/// Quadratic ease-in: slow start, accelerating toward the end.
#[must_use]
pub fn ease_in(t: f32) -> f32 {
    t * t
}

/// Entrance animation parameters.
#[derive(Debug, Clone, Copy)]
pub struct Entrance {
    duration: Duration,
    rise: f32,
}

impl Default for Entrance {
    fn default() -> Self {
        Self {
            duration: ENTRANCE_DURATION,
            rise: ENTRANCE_RISE,
        }
    }
}

impl Entrance {
    /// Linear progress through the animation, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self, elapsed: Duration) -> f32 {
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Vertical offset from the resting position at `elapsed`.
    ///
    /// Negative values move upward, matching screen coordinates.
    #[must_use]
    pub fn offset_at(&self, elapsed: Duration) -> f32 {
        -self.rise * ease_in(self.progress(elapsed))
    }

    /// Scene opacity at `elapsed`, ending at exactly 1.0 (fully opaque).
    #[must_use]
    pub fn opacity_at(&self, elapsed: Duration) -> f32 {
        ease_in(self.progress(elapsed))
    }

    /// Whether the animation has run its full duration.
    #[must_use]
    pub fn is_complete(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}
