// SPDX-License-Identifier: MPL-2.0
//! Cooperative animation and deferred-callback primitives.
//!
//! Both run on the UI thread: the application feeds frame timestamps in,
//! tweens advance and due timers fire from inside `update`. Nothing here
//! spawns threads or needs locking.
//!
//! The fade logic in [`toolbar_fade`](super::toolbar_fade) only talks to the
//! [`AnimationScheduler`] and [`TimerService`] traits, so it can be driven by
//! the real [`Tweener`]/[`MainLoopTimers`] pair or by test doubles.

mod timers;
mod tweener;

pub use timers::MainLoopTimers;
pub use tweener::Tweener;

use std::time::{Duration, Instant};

/// Identifies an actor whose animated property is driven by a scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActorId(pub u32);

/// Interpolation curve applied to a tween's progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Decelerates toward the end value.
    #[default]
    EaseOutQuad,
}

impl Easing {
    /// Maps linear progress in `[0, 1]` to eased progress.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOutQuad => t * (2.0 - t),
        }
    }
}

/// What a caller asks for: animate to `to` over `duration`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSpec {
    pub to: f32,
    pub duration: Duration,
    pub easing: Easing,
}

impl TweenSpec {
    #[must_use]
    pub fn ease_out_quad(to: f32, duration: Duration) -> Self {
        Self {
            to,
            duration,
            easing: Easing::EaseOutQuad,
        }
    }
}

/// A running interpolation between two values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub started: Instant,
    pub duration: Duration,
    pub easing: Easing,
}

impl Tween {
    #[must_use]
    pub fn new(from: f32, spec: TweenSpec, started: Instant) -> Self {
        Self {
            from,
            to: spec.to,
            started,
            duration: spec.duration,
            easing: spec.easing,
        }
    }

    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    #[must_use]
    pub fn value_at(&self, now: Instant) -> f32 {
        let eased = self.easing.apply(self.progress(now));
        self.from + (self.to - self.from) * eased
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

/// Starts and cancels property animations on actors.
pub trait AnimationScheduler {
    /// Animates `target` from its current value. A tween already running on
    /// the same target is replaced.
    fn add_tween(&mut self, target: ActorId, spec: TweenSpec, now: Instant);

    /// Stops every tween on `target`, leaving the value where it is.
    fn remove_all_tweens(&mut self, target: ActorId);

    /// Sets the value immediately, without animation.
    fn set_value(&mut self, target: ActorId, value: f32);

    fn value(&self, target: ActorId) -> f32;

    fn is_animating(&self, target: ActorId) -> bool;
}

/// Handle to a scheduled one-shot callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// Schedules one-shot deferred callbacks on the UI loop.
pub trait TimerService {
    fn schedule_once(&mut self, delay: Duration, now: Instant) -> TimerId;

    /// Cancels a pending timer. Returns false if it already fired or was
    /// cancelled before.
    fn cancel(&mut self, id: TimerId) -> bool;
}
